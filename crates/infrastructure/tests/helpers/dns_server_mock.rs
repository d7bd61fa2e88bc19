#![allow(dead_code)]
use hickory_proto::op::{Message, MessageType};
use hickory_proto::rr::rdata::A;
use hickory_proto::rr::{RData, Record};
use std::net::{Ipv4Addr, SocketAddr};
use tokio::net::UdpSocket;
use tokio::sync::oneshot;

#[derive(Debug, Clone, Copy)]
pub enum MockServerMode {
    /// Answer every question with one A record.
    Answer(Ipv4Addr),
    /// Answer, but under a different transaction id.
    WrongId(Ipv4Addr),
    /// Never reply.
    Silent,
}

/// Real UDP DNS server on an ephemeral localhost port.
pub struct MockDnsServer {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub async fn start(mode: MockServerMode) -> Result<Self, std::io::Error> {
        let socket = UdpSocket::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let local_addr = socket.local_addr()?;

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            if let Some(response) = Self::build_mock_response(&buf[..len], mode) {
                                let _ = socket.send_to(&response, peer).await;
                            }
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr: local_addr,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn port(&self) -> u16 {
        self.addr.port()
    }

    fn build_mock_response(query: &[u8], mode: MockServerMode) -> Option<Vec<u8>> {
        let query = Message::from_vec(query).ok()?;

        let (id, address) = match mode {
            MockServerMode::Answer(ip) => (query.id(), ip),
            MockServerMode::WrongId(ip) => (query.id().wrapping_add(1), ip),
            MockServerMode::Silent => return None,
        };

        let mut response = Message::new(id, MessageType::Response, query.op_code());
        response.set_recursion_available(true);
        for question in query.queries() {
            response.add_query(question.clone());
            response.add_answer(Record::from_rdata(
                question.name().clone(),
                60,
                RData::A(A(address)),
            ));
        }

        response.to_vec().ok()
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
