pub mod udp;

use ferrous_lookup_domain::{DnsConfig, DomainError};

/// Builds the UDP transport for the configured upstream server.
pub fn create_transport(config: &DnsConfig) -> Result<udp::UdpTransport, DomainError> {
    let addr = config
        .server_addr()
        .map_err(|e| DomainError::ConfigError(e.to_string()))?;
    Ok(udp::UdpTransport::new(addr).with_max_response_size(config.max_response_size))
}
