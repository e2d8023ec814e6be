use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use super::errors::ConfigError;

pub const DEFAULT_DNS_PORT: u16 = 53;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DnsConfig {
    /// Upstream resolver, `IP` or `IP:PORT`.
    #[serde(default = "default_server")]
    pub server: String,

    #[serde(default = "default_query_timeout_ms")]
    pub query_timeout_ms: u64,

    /// Extra attempts after a transport failure. Each attempt uses a new id.
    #[serde(default)]
    pub retries: u8,

    /// Reject responses whose id does not match the query.
    #[serde(default)]
    pub strict_id_check: bool,

    /// Receive buffer size for a single UDP response.
    #[serde(default = "default_max_response_size")]
    pub max_response_size: usize,
}

impl Default for DnsConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            query_timeout_ms: default_query_timeout_ms(),
            retries: 0,
            strict_id_check: false,
            max_response_size: default_max_response_size(),
        }
    }
}

impl DnsConfig {
    /// Parses `server`, defaulting the port to 53 when only an IP is given.
    pub fn server_addr(&self) -> Result<SocketAddr, ConfigError> {
        let server = self.server.trim();
        if let Ok(addr) = server.parse::<SocketAddr>() {
            return Ok(addr);
        }
        if let Ok(ip) = server.parse::<IpAddr>() {
            return Ok(SocketAddr::new(ip, DEFAULT_DNS_PORT));
        }
        Err(ConfigError::Validation(format!(
            "Invalid DNS server '{}'. Expected IP or IP:PORT",
            self.server
        )))
    }

    pub fn query_timeout(&self) -> Duration {
        Duration::from_millis(self.query_timeout_ms)
    }
}

fn default_server() -> String {
    "8.8.8.8:53".to_string()
}

fn default_query_timeout_ms() -> u64 {
    3000
}

// RFC 1035 §4.2.1 UDP limit without EDNS(0).
fn default_max_response_size() -> usize {
    512
}
