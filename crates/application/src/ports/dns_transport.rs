use async_trait::async_trait;
use ferrous_lookup_domain::DomainError;
use std::time::Duration;

#[derive(Debug)]
pub struct TransportResponse {
    pub bytes: Vec<u8>,

    pub protocol_used: &'static str,
}

/// Sends one encoded query to a fixed upstream and returns the raw reply.
///
/// Implementations fail with `TransportTimeout` when nothing arrives within
/// `timeout` and with `Transport` on socket errors. They never inspect the
/// message contents.
#[async_trait]
pub trait DnsTransport: Send + Sync {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError>;

    fn protocol_name(&self) -> &'static str;

    /// Upstream address, for logs and results.
    fn server(&self) -> String;
}
