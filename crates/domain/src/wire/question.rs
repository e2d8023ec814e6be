use super::{NameCodec, WireReader};
use crate::{DomainError, RecordClass, RecordType};

/// qtype + qclass following the name.
pub const QUESTION_FIXED_LEN: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub name: String,
    pub qtype: RecordType,
    pub qclass: RecordClass,
}

impl Question {
    pub fn new(name: impl Into<String>, qtype: RecordType, qclass: RecordClass) -> Self {
        Self {
            name: name.into(),
            qtype,
            qclass,
        }
    }
}

pub struct QuestionCodec;

impl QuestionCodec {
    pub fn encode(question: &Question) -> Result<Vec<u8>, DomainError> {
        let mut buf = Vec::with_capacity(question.name.len() + 2 + QUESTION_FIXED_LEN);
        Self::encode_into(question, &mut buf)?;
        Ok(buf)
    }

    pub fn encode_into(question: &Question, buf: &mut Vec<u8>) -> Result<(), DomainError> {
        NameCodec::encode_into(&question.name, buf)?;
        buf.extend_from_slice(&question.qtype.to_u16().to_be_bytes());
        buf.extend_from_slice(&question.qclass.to_u16().to_be_bytes());
        Ok(())
    }

    /// Moves the cursor past one echoed question, returning its name.
    /// qtype and qclass are not interpreted: they are fixed by our query.
    pub fn skip(reader: &mut WireReader<'_>) -> Result<String, DomainError> {
        let name = NameCodec::read(reader)?;
        reader.skip(QUESTION_FIXED_LEN)?;
        Ok(name)
    }
}
