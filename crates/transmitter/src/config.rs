use std::net::SocketAddr;

/// Receiver endpoint of the bench setup; override with `--addr`.
pub const DEFAULT_RECEIVER_ADDR: &str = "192.168.2.79:9688";

#[derive(Debug, Clone)]
pub struct TransmitterConfig {
    pub receiver_addr: SocketAddr,
    pub device_id: u8,
}

impl Default for TransmitterConfig {
    fn default() -> Self {
        Self {
            receiver_addr: DEFAULT_RECEIVER_ADDR.parse().unwrap(),
            device_id: 0,
        }
    }
}
