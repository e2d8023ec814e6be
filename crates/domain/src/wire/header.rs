use super::WireReader;
use crate::DomainError;

pub const HEADER_LEN: usize = 12;

const OPCODE_MAX: u8 = 0x0F;
const Z_MAX: u8 = 0x07;
const RCODE_MAX: u8 = 0x0F;

/// The fixed 12-byte message header.
///
/// Flag word layout, most significant bit first:
/// `qr(1) opcode(4) aa(1) tc(1) rd(1) ra(1) z(3) rcode(4)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Header {
    pub id: u16,
    pub qr: bool,
    pub opcode: u8,
    pub aa: bool,
    pub tc: bool,
    pub rd: bool,
    pub ra: bool,
    pub z: u8,
    pub rcode: u8,
    pub qdcount: u16,
    pub ancount: u16,
    pub nscount: u16,
    pub arcount: u16,
}

impl Header {
    /// Standard recursive query header with a single question.
    pub fn query(id: u16) -> Self {
        Self {
            id,
            rd: true,
            qdcount: 1,
            ..Self::default()
        }
    }

    /// Packs the flag sub-fields, rejecting values wider than their field.
    pub fn flags(&self) -> Result<u16, DomainError> {
        check_width("opcode", self.opcode, OPCODE_MAX)?;
        check_width("z", self.z, Z_MAX)?;
        check_width("rcode", self.rcode, RCODE_MAX)?;

        Ok((self.qr as u16) << 15
            | (self.opcode as u16) << 11
            | (self.aa as u16) << 10
            | (self.tc as u16) << 9
            | (self.rd as u16) << 8
            | (self.ra as u16) << 7
            | (self.z as u16) << 4
            | self.rcode as u16)
    }

    fn with_flags(mut self, flags: u16) -> Self {
        self.qr = flags & 0x8000 != 0;
        self.opcode = ((flags >> 11) & 0x0F) as u8;
        self.aa = flags & 0x0400 != 0;
        self.tc = flags & 0x0200 != 0;
        self.rd = flags & 0x0100 != 0;
        self.ra = flags & 0x0080 != 0;
        self.z = ((flags >> 4) & 0x07) as u8;
        self.rcode = (flags & 0x0F) as u8;
        self
    }
}

fn check_width(field: &'static str, value: u8, max: u8) -> Result<(), DomainError> {
    if value > max {
        return Err(DomainError::InvalidHeaderField { field, value });
    }
    Ok(())
}

pub struct HeaderCodec;

impl HeaderCodec {
    pub fn encode(header: &Header) -> Result<[u8; HEADER_LEN], DomainError> {
        let flags = header.flags()?;
        let words = [
            header.id,
            flags,
            header.qdcount,
            header.ancount,
            header.nscount,
            header.arcount,
        ];

        let mut out = [0u8; HEADER_LEN];
        for (chunk, word) in out.chunks_exact_mut(2).zip(words) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        Ok(out)
    }

    pub fn decode(bytes: &[u8]) -> Result<Header, DomainError> {
        Self::read(&mut WireReader::new(bytes))
    }

    pub fn read(reader: &mut WireReader<'_>) -> Result<Header, DomainError> {
        // Check the whole header up front so a short buffer reports the full
        // 12 bytes needed rather than the first missing word.
        let raw = reader.take(HEADER_LEN)?;
        let word = |i: usize| u16::from_be_bytes([raw[i], raw[i + 1]]);

        let header = Header {
            id: word(0),
            qdcount: word(4),
            ancount: word(6),
            nscount: word(8),
            arcount: word(10),
            ..Header::default()
        };
        Ok(header.with_flags(word(2)))
    }
}
