use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidName(String),

    #[error("Header field {field} out of range: {value}")]
    InvalidHeaderField { field: &'static str, value: u8 },

    #[error("Truncated message: need {needed} bytes at offset {offset}, {available} available")]
    Truncated {
        offset: usize,
        needed: usize,
        available: usize,
    },

    #[error("Malformed DNS message: {0}")]
    Malformed(String),

    #[error("Response id mismatch: expected {expected:#06x}, got {actual:#06x}")]
    MismatchedResponse { expected: u16, actual: u16 },

    #[error("Transport timeout waiting for {server}")]
    TransportTimeout { server: String },

    #[error("Transport error with {server}: {message}")]
    Transport { server: String, message: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl DomainError {
    /// Decode-side failures: the bytes we received cannot be trusted.
    pub fn is_decode_error(&self) -> bool {
        matches!(
            self,
            DomainError::Truncated { .. }
                | DomainError::Malformed(_)
                | DomainError::MismatchedResponse { .. }
        )
    }

    pub fn is_transport_error(&self) -> bool {
        matches!(
            self,
            DomainError::TransportTimeout { .. } | DomainError::Transport { .. }
        )
    }
}
