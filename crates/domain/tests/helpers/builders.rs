#![allow(dead_code)]
use rootwalk_domain::{DomainName, RecordType, ResourceRecord};

pub struct ResourceRecordBuilder {
    name: String,
    record_type: RecordType,
    value: String,
    ttl: u32,
}

impl ResourceRecordBuilder {
    pub fn new() -> Self {
        Self {
            name: "example.com".to_string(),
            record_type: RecordType::A,
            value: "192.0.2.1".to_string(),
            ttl: 300,
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn a(mut self, address: &str) -> Self {
        self.record_type = RecordType::A;
        self.value = address.to_string();
        self
    }

    pub fn ns(mut self, target: &str) -> Self {
        self.record_type = RecordType::NS;
        self.value = target.to_string();
        self
    }

    pub fn cname(mut self, target: &str) -> Self {
        self.record_type = RecordType::CNAME;
        self.value = target.to_string();
        self
    }

    pub fn ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn build(self) -> ResourceRecord {
        ResourceRecord::new(
            DomainName::new(&self.name).unwrap(),
            self.record_type,
            self.value,
            self.ttl,
        )
    }
}
