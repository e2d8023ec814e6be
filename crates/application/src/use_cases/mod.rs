pub mod dns;

pub use dns::{DnsResolution, ResolveDomainUseCase};
