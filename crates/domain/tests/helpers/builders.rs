#![allow(dead_code)]
use std::net::Ipv4Addr;

/// Assembles response messages byte by byte, independent of the crate's
/// own encoders.
pub struct ResponseBuilder {
    id: u16,
    flags: u16,
    question: Option<String>,
    answers: Vec<Vec<u8>>,
    ancount: Option<u16>,
    nscount: u16,
    trailing: Vec<u8>,
}

impl ResponseBuilder {
    pub fn new() -> Self {
        Self {
            id: 0x04D2,
            flags: 0x8180,
            question: Some("example.com".to_string()),
            answers: Vec::new(),
            ancount: None,
            nscount: 0,
            trailing: Vec::new(),
        }
    }

    pub fn id(mut self, id: u16) -> Self {
        self.id = id;
        self
    }

    pub fn flags(mut self, flags: u16) -> Self {
        self.flags = flags;
        self
    }

    pub fn rcode(mut self, rcode: u8) -> Self {
        self.flags = (self.flags & 0xFFF0) | (rcode as u16 & 0x0F);
        self
    }

    pub fn question(mut self, name: &str) -> Self {
        self.question = Some(name.to_string());
        self
    }

    pub fn no_question(mut self) -> Self {
        self.question = None;
        self
    }

    /// A record whose owner is a pointer to the question name at offset 12.
    pub fn a_record(self, ip: Ipv4Addr, ttl: u32) -> Self {
        self.record(&[0xC0, 0x0C], 1, 1, ttl, &ip.octets())
    }

    pub fn typed_record(self, rtype: u16, rdata: &[u8]) -> Self {
        self.record(&[0xC0, 0x0C], rtype, 1, 60, rdata)
    }

    pub fn record(mut self, owner: &[u8], rtype: u16, class: u16, ttl: u32, rdata: &[u8]) -> Self {
        let mut rr = owner.to_vec();
        rr.extend_from_slice(&rtype.to_be_bytes());
        rr.extend_from_slice(&class.to_be_bytes());
        rr.extend_from_slice(&ttl.to_be_bytes());
        rr.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
        rr.extend_from_slice(rdata);
        self.answers.push(rr);
        self
    }

    /// Declared answer count, when it should disagree with the records added.
    pub fn ancount(mut self, ancount: u16) -> Self {
        self.ancount = Some(ancount);
        self
    }

    /// Raw bytes after the answers (authority/additional sections).
    pub fn trailing(mut self, nscount: u16, bytes: &[u8]) -> Self {
        self.nscount = nscount;
        self.trailing = bytes.to_vec();
        self
    }

    pub fn build(self) -> Vec<u8> {
        let qdcount: u16 = if self.question.is_some() { 1 } else { 0 };
        let ancount = self.ancount.unwrap_or(self.answers.len() as u16);

        let mut buf = Vec::with_capacity(512);
        for word in [self.id, self.flags, qdcount, ancount, self.nscount, 0] {
            buf.extend_from_slice(&word.to_be_bytes());
        }

        if let Some(name) = &self.question {
            for label in name.split('.').filter(|l| !l.is_empty()) {
                buf.push(label.len() as u8);
                buf.extend_from_slice(label.as_bytes());
            }
            buf.push(0x00);
            buf.extend_from_slice(&[0x00, 0x01, 0x00, 0x01]);
        }

        for rr in &self.answers {
            buf.extend_from_slice(rr);
        }
        buf.extend_from_slice(&self.trailing);
        buf
    }
}
