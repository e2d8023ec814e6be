pub mod transport;

pub use transport::{create_transport, udp::UdpTransport};
