#![allow(dead_code)]

use hickory_proto::op::{Message, MessageType, OpCode, Query, ResponseCode};
use hickory_proto::rr::rdata::{A, CNAME};
use hickory_proto::rr::{DNSClass, Name, RData, Record, RecordType};
use std::net::Ipv4Addr;
use std::str::FromStr;

pub fn name(domain: &str) -> Name {
    Name::from_str(domain).unwrap()
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

pub fn a_record(domain: &str, ip: &str, ttl: u32) -> Record {
    let ip: Ipv4Addr = ip.parse().unwrap();
    Record::from_rdata(name(domain), ttl, RData::A(A(ip)))
}

pub fn cname_record(domain: &str, target: &str, ttl: u32) -> Record {
    Record::from_rdata(name(domain), ttl, RData::CNAME(CNAME(name(target))))
}

pub fn response(id: u16, domain: &str, answers: Vec<Record>) -> Message {
    let mut message = client_query(id, domain);
    let mut header = *message;
    header.set_message_type(MessageType::Response);
    message.set_header(header);
    message.set_recursion_available(true);
    message.insert_answers(answers);
    message
}

pub fn nxdomain_response(id: u16, domain: &str) -> Message {
    let mut message = response(id, domain, vec![]);
    message.set_response_code(ResponseCode::NXDomain);
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
