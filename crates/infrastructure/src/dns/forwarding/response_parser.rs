use hickory_proto::op::Message;
use hickory_proto::rr::{RData, Record};
use rootwalk_domain::{DomainError, DomainName, RecordType, ResourceRecord};
use std::net::Ipv4Addr;
use tracing::debug;

/// A parsed reply: the full message plus its A/NS/CNAME records per section.
#[derive(Debug, Clone)]
pub struct DnsResponse {
    pub answers: Vec<ResourceRecord>,

    pub authority: Vec<ResourceRecord>,

    pub additional: Vec<ResourceRecord>,

    pub message: Message,
}

impl DnsResponse {
    /// True when the raw answer section is non-empty, whatever the record types.
    pub fn has_answers(&self) -> bool {
        !self.message.answers().is_empty()
    }

    pub fn has_address_for(&self, domain: &DomainName) -> bool {
        self.answers
            .iter()
            .any(|r| r.record_type == RecordType::A && r.is_owned_by(domain))
    }

    pub fn cname_target_for(&self, domain: &DomainName) -> Option<DomainName> {
        self.answers
            .iter()
            .filter(|r| r.record_type == RecordType::CNAME && r.is_owned_by(domain))
            .find_map(ResourceRecord::target)
    }

    /// Addresses of the A records in the additional section.
    pub fn glue_addresses(&self) -> Vec<Ipv4Addr> {
        self.additional
            .iter()
            .filter_map(ResourceRecord::ipv4)
            .collect()
    }

    /// Name server targets of the NS records in the authority section, in reply order.
    pub fn delegated_name_servers(&self) -> Vec<DomainName> {
        self.authority
            .iter()
            .filter(|r| r.record_type == RecordType::NS)
            .filter_map(ResourceRecord::target)
            .collect()
    }
}

pub struct ResponseParser;

impl ResponseParser {
    pub fn parse(response_bytes: &[u8]) -> Result<DnsResponse, DomainError> {
        let message = Message::from_vec(response_bytes)
            .map_err(|e| DomainError::Malformed(format!("Failed to parse DNS response: {}", e)))?;

        Ok(Self::from_message(message))
    }

    pub fn from_message(message: Message) -> DnsResponse {
        let rcode = message.response_code();
        let answers = Self::project(message.answers());
        let authority = Self::project(message.name_servers());
        let additional = Self::project(message.additionals());

        debug!(
            rcode = ?rcode,
            answers = answers.len(),
            authority = authority.len(),
            additional = additional.len(),
            "DNS response parsed"
        );

        DnsResponse {
            answers,
            authority,
            additional,
            message,
        }
    }

    fn project(records: &[Record]) -> Vec<ResourceRecord> {
        records.iter().filter_map(Self::to_resource_record).collect()
    }

    /// Lift an A, NS or CNAME record; other types and unusable names yield `None`.
    pub fn to_resource_record(record: &Record) -> Option<ResourceRecord> {
        let name = DomainName::new(&record.name().to_utf8()).ok()?;
        let ttl = record.ttl();

        match record.data() {
            RData::A(a) => Some(ResourceRecord::a(name, a.0, ttl)),
            RData::NS(ns) => {
                let target = DomainName::new(&ns.0.to_utf8()).ok()?;
                Some(ResourceRecord::new(name, RecordType::NS, target.as_str(), ttl))
            }
            RData::CNAME(cname) => {
                let target = DomainName::new(&cname.0.to_utf8()).ok()?;
                Some(ResourceRecord::new(
                    name,
                    RecordType::CNAME,
                    target.as_str(),
                    ttl,
                ))
            }
            _ => None,
        }
    }

    /// Whether a raw hickory record is owned by `domain`.
    pub fn is_owned_by(record: &Record, domain: &DomainName) -> bool {
        DomainName::new(&record.name().to_utf8())
            .map(|owner| &owner == domain)
            .unwrap_or(false)
    }

    /// IPv4 addresses carried by the A records of the answer section.
    pub fn answer_addresses(message: &Message) -> Vec<Ipv4Addr> {
        message
            .answers()
            .iter()
            .filter_map(|record| match record.data() {
                RData::A(a) => Some(a.0),
                _ => None,
            })
            .collect()
    }
}
