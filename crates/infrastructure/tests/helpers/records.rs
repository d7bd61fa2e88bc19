#![allow(dead_code)]

use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::rdata::{A, CNAME, NS};
use hickory_proto::rr::{DNSClass, Name, RData, Record, RecordType};
use std::net::Ipv4Addr;
use std::str::FromStr;

pub fn name(domain: &str) -> Name {
    Name::from_str(&format!("{}.", domain.trim_end_matches('.'))).unwrap()
}

pub fn a(domain: &str, ip: &str) -> Record {
    let ip: Ipv4Addr = ip.parse().unwrap();
    Record::from_rdata(name(domain), 300, RData::A(A(ip)))
}

pub fn cname(domain: &str, target: &str) -> Record {
    Record::from_rdata(name(domain), 300, RData::CNAME(CNAME(name(target))))
}

pub fn ns(zone: &str, server: &str) -> Record {
    Record::from_rdata(name(zone), 172800, RData::NS(NS(name(server))))
}

pub fn client_query(id: u16, domain: &str) -> Message {
    let mut query = Query::new();
    query.set_name(name(domain));
    query.set_query_type(RecordType::A);
    query.set_query_class(DNSClass::IN);

    let mut message = Message::new(id, MessageType::Query, OpCode::Query);
    message.set_recursion_desired(true);
    message.add_query(query);
    message
}

pub fn answer_ips(message: &Message) -> Vec<String> {
    message
        .answers()
        .iter()
        .filter_map(|record| match record.data() {
            RData::A(a) => Some(a.0.to_string()),
            _ => None,
        })
        .collect()
}

pub fn question_name(message: &Message) -> String {
    message.queries()[0].name().to_utf8()
}
