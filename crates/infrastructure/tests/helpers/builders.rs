#![allow(dead_code)]
use std::net::SocketAddr;

pub struct DnsServerBuilder;

impl DnsServerBuilder {
    pub fn google_dns() -> SocketAddr {
        "8.8.8.8:53".parse().unwrap()
    }

    pub fn google_dns_ipv6() -> SocketAddr {
        "[2001:4860:4860::8888]:53".parse().unwrap()
    }

    pub fn cloudflare_dns() -> SocketAddr {
        "1.1.1.1:53".parse().unwrap()
    }
}
