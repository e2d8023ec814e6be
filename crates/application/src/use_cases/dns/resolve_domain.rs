use crate::ports::DnsTransport;
use ferrous_lookup_domain::{
    DnsConfig, DnsResponse, DomainError, QueryBuilder, ResourceRecord, ResponseParser,
};
use std::net::Ipv4Addr;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct DnsResolution {
    /// A-record addresses in response order.
    pub addresses: Vec<Ipv4Addr>,
    pub response_status: &'static str,
    pub truncated: bool,
    pub answers: Vec<ResourceRecord>,
    pub upstream_server: String,
    pub response_time_us: u64,
}

impl DnsResolution {
    pub fn address_strings(&self) -> Vec<String> {
        self.addresses.iter().map(Ipv4Addr::to_string).collect()
    }
}

pub struct ResolveDomainUseCase {
    transport: Arc<dyn DnsTransport>,
    timeout: Duration,
    retries: u8,
    strict_id_check: bool,
}

impl ResolveDomainUseCase {
    pub fn new(transport: Arc<dyn DnsTransport>, timeout: Duration) -> Self {
        Self {
            transport,
            timeout,
            retries: 0,
            strict_id_check: false,
        }
    }

    pub fn from_config(transport: Arc<dyn DnsTransport>, config: &DnsConfig) -> Self {
        Self::new(transport, config.query_timeout())
            .with_retries(config.retries)
            .with_strict_id_check(config.strict_id_check)
    }

    pub fn with_retries(mut self, retries: u8) -> Self {
        self.retries = retries;
        self
    }

    pub fn with_strict_id_check(mut self, strict: bool) -> Self {
        self.strict_id_check = strict;
        self
    }

    /// Dotted-decimal IPv4 addresses for `domain`, empty when the answer
    /// carries no A records.
    pub async fn resolve(&self, domain: &str) -> Result<Vec<String>, DomainError> {
        Ok(self.execute(domain).await?.address_strings())
    }

    /// Only transport failures are retried; a response that fails to decode
    /// is returned as is.
    pub async fn execute(&self, domain: &str) -> Result<DnsResolution, DomainError> {
        let domain = domain.trim();
        if domain.is_empty() {
            return Err(DomainError::InvalidName("empty domain name".to_string()));
        }

        let mut attempt: u8 = 0;
        loop {
            match self.query_once(domain).await {
                Err(e) if e.is_transport_error() && attempt < self.retries => {
                    attempt += 1;
                    warn!(
                        error = %e,
                        domain = domain,
                        attempt = attempt,
                        retries = self.retries,
                        "DNS query failed, retrying"
                    );
                }
                result => return result,
            }
        }
    }

    async fn query_once(&self, domain: &str) -> Result<DnsResolution, DomainError> {
        let start = Instant::now();
        let query = QueryBuilder::build(domain)?;
        let server = self.transport.server();

        let response = self.transport.send(&query.bytes, self.timeout).await?;

        let parsed = if self.strict_id_check {
            ResponseParser::parse_expecting(&response.bytes, query.id())?
        } else {
            let parsed = ResponseParser::parse(&response.bytes)?;
            if parsed.header.id != query.id() {
                warn!(
                    expected = query.id(),
                    actual = parsed.header.id,
                    server = %server,
                    "Response id does not match query"
                );
            }
            parsed
        };

        Ok(Self::build_resolution(domain, parsed, server, start))
    }

    fn build_resolution(
        domain: &str,
        parsed: DnsResponse,
        server: String,
        start: Instant,
    ) -> DnsResolution {
        let response_status = parsed.status();
        let truncated = parsed.truncated();

        if truncated {
            warn!(domain = domain, server = %server, "Response truncated (TC bit set)");
        }
        if parsed.header.rcode != 0 {
            warn!(
                domain = domain,
                status = response_status,
                server = %server,
                "Upstream returned error response code"
            );
        }

        let response_time_us = start.elapsed().as_micros() as u64;
        debug!(
            domain = domain,
            addresses = parsed.addresses.len(),
            status = response_status,
            response_time_us = response_time_us,
            "Resolution complete"
        );

        DnsResolution {
            addresses: parsed.addresses,
            response_status,
            truncated,
            answers: parsed.answers,
            upstream_server: server,
            response_time_us,
        }
    }
}
