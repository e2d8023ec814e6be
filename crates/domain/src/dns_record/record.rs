use super::{RecordClass, RecordType};
use std::fmt;
use std::net::Ipv4Addr;

/// Owner name of an answer record as it appeared on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordName {
    /// Raw 2-byte compression pointer. The target is never followed, so the
    /// name is not available as text.
    CompressedNameRef([u8; 2]),
    /// Name written out as labels.
    Labels(String),
}

impl RecordName {
    /// Message offset a compression pointer refers to.
    pub fn pointer_offset(&self) -> Option<u16> {
        match self {
            RecordName::CompressedNameRef(raw) => Some(u16::from_be_bytes(*raw) & 0x3FFF),
            RecordName::Labels(_) => None,
        }
    }
}

impl fmt::Display for RecordName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordName::CompressedNameRef(raw) => {
                write!(f, "<ptr {:#06x}>", u16::from_be_bytes(*raw) & 0x3FFF)
            }
            RecordName::Labels(name) => f.write_str(name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordData {
    A(Ipv4Addr),
    /// Payload of any record we do not interpret.
    Opaque(Vec<u8>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    pub name: RecordName,
    pub rtype: u16,
    pub class: u16,
    pub ttl: u32,
    pub data: RecordData,
}

impl ResourceRecord {
    pub fn record_type(&self) -> Option<RecordType> {
        RecordType::from_u16(self.rtype)
    }

    pub fn record_class(&self) -> Option<RecordClass> {
        RecordClass::from_u16(self.class)
    }

    pub fn ipv4(&self) -> Option<Ipv4Addr> {
        match self.data {
            RecordData::A(addr) => Some(addr),
            RecordData::Opaque(_) => None,
        }
    }

    /// Type mnemonic for logging, falling back to `TYPE<n>` (RFC 3597).
    pub fn type_label(&self) -> String {
        match self.record_type() {
            Some(rt) => rt.as_str().to_string(),
            None => format!("TYPE{}", self.rtype),
        }
    }
}
