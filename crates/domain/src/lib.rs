//! Ferrous Lookup Domain Layer
//!
//! Pure DNS wire codec (no I/O) plus the configuration model.
pub mod config;
pub mod dns_record;
pub mod errors;
pub mod message_builder;
pub mod response_parser;
pub mod wire;

pub use config::{CliOverrides, Config, ConfigError, DnsConfig, LoggingConfig};
pub use dns_record::{RecordClass, RecordData, RecordName, RecordType, ResourceRecord};
pub use errors::DomainError;
pub use message_builder::{DnsQueryMessage, QueryBuilder};
pub use response_parser::{DnsResponse, ResponseParser};
pub use wire::{Header, HeaderCodec, NameCodec, Question, QuestionCodec, WireReader};
