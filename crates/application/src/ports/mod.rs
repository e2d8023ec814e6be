mod dns_transport;

pub use dns_transport::{DnsTransport, TransportResponse};
