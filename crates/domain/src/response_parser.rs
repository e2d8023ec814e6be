//! Response decoding.
//!
//! One linear pass over the buffer: header, echoed question(s), then
//! `ancount` answer records. Any failure aborts the pass; a partial answer
//! list is never returned. Authority and additional sections are ignored.

use crate::wire::{Header, HeaderCodec, QuestionCodec, RecordCodec, WireReader, RECORD_MIN_LEN};
use crate::{DomainError, ResourceRecord};
use std::net::Ipv4Addr;
use tracing::{debug, trace};

pub const RCODE_NOERROR: u8 = 0;
pub const RCODE_NXDOMAIN: u8 = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsResponse {
    pub header: Header,

    /// Name from the first echoed question, empty when qdcount is 0.
    pub question_name: String,

    /// Every answer record, A or not, in wire order.
    pub answers: Vec<ResourceRecord>,

    /// IPv4 addresses of the A answers, in wire order.
    pub addresses: Vec<Ipv4Addr>,
}

impl DnsResponse {
    pub fn is_nxdomain(&self) -> bool {
        self.header.rcode == RCODE_NXDOMAIN
    }

    pub fn is_nodata(&self) -> bool {
        self.header.rcode == RCODE_NOERROR && self.addresses.is_empty()
    }

    pub fn truncated(&self) -> bool {
        self.header.tc
    }

    pub fn status(&self) -> &'static str {
        ResponseParser::rcode_to_status(self.header.rcode)
    }

    pub fn address_strings(&self) -> Vec<String> {
        self.addresses.iter().map(Ipv4Addr::to_string).collect()
    }
}

pub struct ResponseParser;

impl ResponseParser {
    /// Parse without checking the transaction id.
    pub fn parse(bytes: &[u8]) -> Result<DnsResponse, DomainError> {
        Self::parse_inner(bytes, None)
    }

    /// Parse, failing with `MismatchedResponse` when the header id differs
    /// from `expected_id`. The id is checked before anything past the header
    /// is read.
    pub fn parse_expecting(bytes: &[u8], expected_id: u16) -> Result<DnsResponse, DomainError> {
        Self::parse_inner(bytes, Some(expected_id))
    }

    fn parse_inner(bytes: &[u8], expected_id: Option<u16>) -> Result<DnsResponse, DomainError> {
        let mut reader = WireReader::new(bytes);

        let header = HeaderCodec::read(&mut reader)?;
        if let Some(expected) = expected_id {
            if header.id != expected {
                return Err(DomainError::MismatchedResponse {
                    expected,
                    actual: header.id,
                });
            }
        }

        let mut question_name = String::new();
        for i in 0..header.qdcount {
            let name = QuestionCodec::skip(&mut reader)?;
            if i == 0 {
                question_name = name;
            }
        }

        let ancount = header.ancount as usize;
        let remaining = reader.remaining();
        if ancount * RECORD_MIN_LEN > remaining {
            return Err(DomainError::Malformed(format!(
                "answer count {} needs at least {} bytes, {} remain",
                ancount,
                ancount * RECORD_MIN_LEN,
                remaining
            )));
        }

        let mut answers = Vec::with_capacity(ancount);
        let mut addresses = Vec::new();
        for _ in 0..ancount {
            let record = RecordCodec::read(&mut reader)?;
            match record.ipv4() {
                Some(addr) => addresses.push(addr),
                None => trace!(
                    rtype = %record.type_label(),
                    class = record.class,
                    "Skipping non-A answer"
                ),
            }
            answers.push(record);
        }

        debug!(
            id = header.id,
            rcode = Self::rcode_to_status(header.rcode),
            answers = answers.len(),
            addresses = addresses.len(),
            truncated = header.tc,
            "DNS response parsed"
        );

        Ok(DnsResponse {
            header,
            question_name,
            answers,
            addresses,
        })
    }

    pub fn rcode_to_status(rcode: u8) -> &'static str {
        match rcode {
            0 => "NOERROR",
            1 => "FORMERR",
            2 => "SERVFAIL",
            3 => "NXDOMAIN",
            4 => "NOTIMP",
            5 => "REFUSED",
            _ => "UNKNOWN",
        }
    }
}
