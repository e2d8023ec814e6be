//! DNS wire format (RFC 1035 §4.1), restricted to what a stub A-record
//! lookup needs: one question, answers with at most a 2-byte compression
//! pointer as owner name.

mod header;
mod name;
mod question;
mod reader;
mod record;

pub use header::{Header, HeaderCodec, HEADER_LEN};
pub use name::{NameCodec, MAX_LABEL_LEN, MAX_NAME_LEN};
pub use question::{Question, QuestionCodec, QUESTION_FIXED_LEN};
pub use reader::WireReader;
pub use record::{RecordCodec, RECORD_MIN_LEN};
