//! DNS Message Builder
//!
//! Constructs DNS query messages in wire format using `hickory-proto`.

use super::record_type_map::RecordTypeMapper;
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{DNSClass, Name};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use rootwalk_domain::{DomainError, DomainName, RecordType};
use std::str::FromStr;

/// Builds DNS query messages in wire format
pub struct MessageBuilder;

impl MessageBuilder {
    /// Build a non-recursive A/IN query, as sent to root and delegated servers.
    ///
    /// Returns the random transaction id alongside the bytes so the caller can
    /// match the reply.
    pub fn build_iterative_query(domain: &DomainName) -> Result<(u16, Vec<u8>), DomainError> {
        Self::build_query_with_id(domain, &RecordType::A, false)
    }

    pub fn build_query_with_id(
        domain: &DomainName,
        record_type: &RecordType,
        recursion_desired: bool,
    ) -> Result<(u16, Vec<u8>), DomainError> {
        let name = Name::from_str(&domain.to_fqdn()).map_err(|e| {
            DomainError::InvalidDomainName(format!("Invalid domain '{}': {}", domain, e))
        })?;

        let mut query = Query::new();
        query.set_name(name);
        query.set_query_type(RecordTypeMapper::to_hickory(record_type));
        query.set_query_class(DNSClass::IN);

        let id = fastrand::u16(..);

        let mut message = Message::new(id, MessageType::Query, OpCode::Query);
        message.set_recursion_desired(recursion_desired);
        message.add_query(query);

        let bytes = Self::serialize_message(&message)?;
        Ok((id, bytes))
    }

    /// Re-emit the first question of a client query under a fresh id with RD set.
    pub fn build_forward_query(client_query: &Message) -> Result<(u16, Vec<u8>), DomainError> {
        let question = client_query
            .queries()
            .first()
            .cloned()
            .ok_or_else(|| DomainError::Malformed("query carries no question".to_string()))?;

        let id = fastrand::u16(..);

        let mut message = Message::new(id, MessageType::Query, OpCode::Query);
        message.set_recursion_desired(true);
        message.add_query(question);

        let bytes = Self::serialize_message(&message)?;
        Ok((id, bytes))
    }

    /// Serialize a Message to wire format bytes
    pub fn serialize_message(message: &Message) -> Result<Vec<u8>, DomainError> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);

        message.emit(&mut encoder).map_err(|e| {
            DomainError::Malformed(format!("Failed to serialize DNS message: {}", e))
        })?;

        Ok(buf)
    }
}
