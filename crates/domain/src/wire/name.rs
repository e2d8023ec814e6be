use super::WireReader;
use crate::DomainError;

pub const MAX_LABEL_LEN: usize = 63;
/// Maximum encoded length, length bytes and root terminator included.
pub const MAX_NAME_LEN: usize = 255;

const LABEL_TYPE_MASK: u8 = 0xC0;

/// Length-prefixed label encoding of domain names.
pub struct NameCodec;

impl NameCodec {
    /// Encodes a dotted name, e.g. `example.com` → `07 example 03 com 00`.
    ///
    /// Empty labels are dropped, so `example.com.` and `example.com` encode
    /// identically.
    pub fn encode(name: &str) -> Result<Vec<u8>, DomainError> {
        let mut buf = Vec::with_capacity(name.len() + 2);
        Self::encode_into(name, &mut buf)?;
        Ok(buf)
    }

    /// Appends the encoded name to `buf`. On error `buf` is left unchanged.
    pub fn encode_into(name: &str, buf: &mut Vec<u8>) -> Result<(), DomainError> {
        if !name.is_ascii() {
            return Err(DomainError::InvalidName(format!(
                "'{}' contains non-ASCII characters",
                name
            )));
        }

        let start = buf.len();
        for label in name.split('.').filter(|label| !label.is_empty()) {
            if label.len() > MAX_LABEL_LEN {
                buf.truncate(start);
                return Err(DomainError::InvalidName(format!(
                    "label '{}' is {} bytes (max {})",
                    label,
                    label.len(),
                    MAX_LABEL_LEN
                )));
            }
            buf.push(label.len() as u8);
            buf.extend_from_slice(label.as_bytes());
        }
        buf.push(0);

        let encoded_len = buf.len() - start;
        if encoded_len > MAX_NAME_LEN {
            buf.truncate(start);
            return Err(DomainError::InvalidName(format!(
                "'{}' encodes to {} bytes (max {})",
                name, encoded_len, MAX_NAME_LEN
            )));
        }
        Ok(())
    }

    /// Decodes the name starting at `offset`, returning it with the offset of
    /// the first byte after the root terminator.
    pub fn decode(buffer: &[u8], offset: usize) -> Result<(String, usize), DomainError> {
        let mut reader = WireReader::at(buffer, offset);
        let name = Self::read(&mut reader)?;
        Ok((name, reader.position()))
    }

    /// Reads an uncompressed name. Compression pointers are rejected as
    /// `Malformed`; pointer-following is not supported.
    pub fn read(reader: &mut WireReader<'_>) -> Result<String, DomainError> {
        let start = reader.position();
        let mut name = String::new();
        let mut encoded_len = 0usize;

        loop {
            let len = reader.read_u8()?;
            encoded_len += 1;
            if len == 0 {
                break;
            }
            if len & LABEL_TYPE_MASK != 0 {
                return Err(DomainError::Malformed(format!(
                    "unsupported label type {:#04x} at offset {}",
                    len,
                    reader.position() - 1
                )));
            }

            let label = reader.take(len as usize)?;
            encoded_len += label.len();
            if encoded_len + 1 > MAX_NAME_LEN {
                return Err(DomainError::Malformed(format!(
                    "name at offset {} exceeds {} bytes",
                    start, MAX_NAME_LEN
                )));
            }

            if !name.is_empty() {
                name.push('.');
            }
            name.push_str(&String::from_utf8_lossy(label));
        }

        Ok(name)
    }
}
