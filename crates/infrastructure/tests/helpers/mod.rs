mod builders;
mod dns_server_mock;

pub use builders::DnsServerBuilder;
pub use dns_server_mock::{MockBehavior, MockDnsServer};
