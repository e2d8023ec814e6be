#![allow(dead_code)]
use std::net::{Ipv4Addr, SocketAddr};
use tokio::net::UdpSocket;
use tokio::sync::oneshot;

#[derive(Clone)]
pub enum MockBehavior {
    /// Echo id and question, answer with these A records.
    Answer(Vec<Ipv4Addr>),
    /// Reply with these bytes regardless of the query.
    Raw(Vec<u8>),
    /// Read queries, never reply.
    Silent,
}

pub struct MockDnsServer {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    /// Binds an ephemeral loopback port and serves until dropped.
    pub async fn start(behavior: MockBehavior) -> Result<Self, std::io::Error> {
        let socket = UdpSocket::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = socket.local_addr()?;

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            if let Some(response) = Self::build_response(&behavior, &buf[..len]) {
                                let _ = socket.send_to(&response, peer).await;
                            }
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    fn build_response(behavior: &MockBehavior, query: &[u8]) -> Option<Vec<u8>> {
        match behavior {
            MockBehavior::Silent => None,
            MockBehavior::Raw(bytes) => Some(bytes.clone()),
            MockBehavior::Answer(addresses) => {
                if query.len() < 12 {
                    return None;
                }

                let mut response = Vec::with_capacity(512);
                response.extend_from_slice(&query[0..2]);
                response.push(0x81);
                response.push(0x80);
                response.extend_from_slice(&query[4..6]);
                response.extend_from_slice(&(addresses.len() as u16).to_be_bytes());
                response.extend_from_slice(&[0x00, 0x00, 0x00, 0x00]);
                response.extend_from_slice(&query[12..]);

                for addr in addresses {
                    response.extend_from_slice(&[
                        0xc0, 0x0c, 0x00, 0x01, 0x00, 0x01, 0x00, 0x00, 0x00, 0x3c, 0x00, 0x04,
                    ]);
                    response.extend_from_slice(&addr.octets());
                }
                Some(response)
            }
        }
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
