use super::RecordType;
use crate::domain_name::DomainName;
use std::net::Ipv4Addr;
use std::sync::Arc;

/// One A, NS or CNAME record lifted out of a DNS message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    /// Owner name of the record.
    pub name: DomainName,

    pub record_type: RecordType,

    /// Dotted IPv4 address for A, target domain name for NS and CNAME.
    pub value: Arc<str>,

    pub ttl: u32,
}

impl ResourceRecord {
    pub fn new(
        name: DomainName,
        record_type: RecordType,
        value: impl Into<Arc<str>>,
        ttl: u32,
    ) -> Self {
        Self {
            name,
            record_type,
            value: value.into(),
            ttl,
        }
    }

    pub fn a(name: DomainName, address: Ipv4Addr, ttl: u32) -> Self {
        Self::new(name, RecordType::A, address.to_string(), ttl)
    }

    pub fn ipv4(&self) -> Option<Ipv4Addr> {
        match self.record_type {
            RecordType::A => self.value.parse().ok(),
            _ => None,
        }
    }

    pub fn target(&self) -> Option<DomainName> {
        if self.record_type.has_name_target() {
            DomainName::new(&self.value).ok()
        } else {
            None
        }
    }

    pub fn is_owned_by(&self, domain: &DomainName) -> bool {
        &self.name == domain
    }

    pub fn is_expired(&self, elapsed_secs: u32) -> bool {
        elapsed_secs >= self.ttl
    }

    pub fn remaining_ttl(&self, elapsed_secs: u32) -> u32 {
        self.ttl.saturating_sub(elapsed_secs)
    }
}
