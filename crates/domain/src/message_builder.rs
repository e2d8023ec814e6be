//! DNS query construction.
//!
//! Builds a standard recursive A/IN query: random id, RD set, one question.

use crate::wire::{Header, HeaderCodec, Question, QuestionCodec, HEADER_LEN};
use crate::{DomainError, RecordClass, RecordType};
use tracing::debug;

/// An encoded query plus the pieces it was built from, so the caller can
/// match the response id.
#[derive(Debug, Clone)]
pub struct DnsQueryMessage {
    pub header: Header,
    pub question: Question,
    pub bytes: Vec<u8>,
}

impl DnsQueryMessage {
    pub fn id(&self) -> u16 {
        self.header.id
    }
}

pub struct QueryBuilder;

impl QueryBuilder {
    /// Build an A query for `domain` with a fresh random transaction id.
    pub fn build(domain: &str) -> Result<DnsQueryMessage, DomainError> {
        Self::build_with_id(domain, fastrand::u16(..))
    }

    pub fn build_with_id(domain: &str, id: u16) -> Result<DnsQueryMessage, DomainError> {
        let header = Header::query(id);
        let question = Question::new(domain, RecordType::A, RecordClass::IN);

        let mut bytes = Vec::with_capacity(HEADER_LEN + domain.len() + 6);
        bytes.extend_from_slice(&HeaderCodec::encode(&header)?);
        QuestionCodec::encode_into(&question, &mut bytes)?;

        debug!(id = id, domain = domain, bytes = bytes.len(), "DNS query built");

        Ok(DnsQueryMessage {
            header,
            question,
            bytes,
        })
    }
}
