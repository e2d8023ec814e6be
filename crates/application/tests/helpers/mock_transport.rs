#![allow(dead_code)]

use async_trait::async_trait;
use ferrous_lookup_application::ports::{DnsTransport, TransportResponse};
use ferrous_lookup_domain::DomainError;
use std::collections::VecDeque;
use std::net::Ipv4Addr;
use std::sync::Mutex;
use std::time::Duration;

pub enum MockReply {
    /// Echo the query id and question, answer with these A records.
    Answer(Vec<Ipv4Addr>),
    /// Same as `Answer` but with the id flipped.
    WrongId(Vec<Ipv4Addr>),
    /// Echo the query with the given rcode and no answers.
    Rcode(u8),
    /// Bytes returned verbatim.
    Raw(Vec<u8>),
    Error(DomainError),
}

pub struct MockDnsTransport {
    replies: Mutex<VecDeque<MockReply>>,
    sent: Mutex<Vec<Vec<u8>>>,
    timeouts: Mutex<Vec<Duration>>,
}

impl MockDnsTransport {
    pub fn new() -> Self {
        Self {
            replies: Mutex::new(VecDeque::new()),
            sent: Mutex::new(Vec::new()),
            timeouts: Mutex::new(Vec::new()),
        }
    }

    pub fn with_replies(replies: Vec<MockReply>) -> Self {
        let mock = Self::new();
        mock.replies.lock().unwrap().extend(replies);
        mock
    }

    pub fn sent_queries(&self) -> Vec<Vec<u8>> {
        self.sent.lock().unwrap().clone()
    }

    pub fn timeouts(&self) -> Vec<Duration> {
        self.timeouts.lock().unwrap().clone()
    }

    fn answer(query: &[u8], id: u16, rcode: u8, addresses: &[Ipv4Addr]) -> Vec<u8> {
        let mut buf = Vec::with_capacity(512);
        buf.extend_from_slice(&id.to_be_bytes());
        buf.extend_from_slice(&(0x8180u16 | rcode as u16).to_be_bytes());
        buf.extend_from_slice(&query[4..6]);
        buf.extend_from_slice(&(addresses.len() as u16).to_be_bytes());
        buf.extend_from_slice(&[0x00, 0x00, 0x00, 0x00]);
        buf.extend_from_slice(&query[12..]);

        for addr in addresses {
            buf.extend_from_slice(&[
                0xC0, 0x0C, // pointer to question name
                0x00, 0x01, // A
                0x00, 0x01, // IN
                0x00, 0x00, 0x00, 0x3C, // ttl 60
                0x00, 0x04,
            ]);
            buf.extend_from_slice(&addr.octets());
        }
        buf
    }
}

#[async_trait]
impl DnsTransport for MockDnsTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        self.sent.lock().unwrap().push(message_bytes.to_vec());
        self.timeouts.lock().unwrap().push(timeout);

        let reply = self.replies.lock().unwrap().pop_front();
        let id = u16::from_be_bytes([message_bytes[0], message_bytes[1]]);

        let bytes = match reply {
            Some(MockReply::Answer(addresses)) => Self::answer(message_bytes, id, 0, &addresses),
            Some(MockReply::WrongId(addresses)) => {
                Self::answer(message_bytes, !id, 0, &addresses)
            }
            Some(MockReply::Rcode(rcode)) => Self::answer(message_bytes, id, rcode, &[]),
            Some(MockReply::Raw(bytes)) => bytes,
            Some(MockReply::Error(e)) => return Err(e),
            None => {
                return Err(DomainError::TransportTimeout {
                    server: self.server(),
                })
            }
        };

        Ok(TransportResponse {
            bytes,
            protocol_used: "MOCK",
        })
    }

    fn protocol_name(&self) -> &'static str {
        "MOCK"
    }

    fn server(&self) -> String {
        "127.0.0.1:53".to_string()
    }
}
