use super::{NameCodec, WireReader};
use crate::{DomainError, RecordData, RecordName, RecordType, ResourceRecord};
use std::net::Ipv4Addr;

/// Smallest possible record: root owner name (1) + type, class, ttl, rdlength (10).
pub const RECORD_MIN_LEN: usize = 11;

const POINTER_TAG: u8 = 0xC0;

pub struct RecordCodec;

impl RecordCodec {
    pub fn read(reader: &mut WireReader<'_>) -> Result<ResourceRecord, DomainError> {
        let name = Self::read_owner(reader)?;
        let rtype = reader.read_u16()?;
        let class = reader.read_u16()?;
        let ttl = reader.read_u32()?;
        let rdlength = reader.read_u16()? as usize;
        let rdata = reader.take(rdlength)?;

        let data = match rdata {
            [a, b, c, d] if rtype == RecordType::A.to_u16() => {
                RecordData::A(Ipv4Addr::new(*a, *b, *c, *d))
            }
            _ => RecordData::Opaque(rdata.to_vec()),
        };

        Ok(ResourceRecord {
            name,
            rtype,
            class,
            ttl,
            data,
        })
    }

    /// A leading `11xxxxxx` byte is a compression pointer: consume its two
    /// bytes verbatim. Anything else is decoded as an uncompressed name.
    fn read_owner(reader: &mut WireReader<'_>) -> Result<RecordName, DomainError> {
        if reader.peek_u8()? & POINTER_TAG == POINTER_TAG {
            return Ok(RecordName::CompressedNameRef(reader.read_array()?));
        }
        NameCodec::read(reader).map(RecordName::Labels)
    }
}
