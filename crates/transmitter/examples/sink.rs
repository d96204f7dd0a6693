//! Bench sink: accepts transmitter connections and hex-dumps every read.
//!
//! Usage:
//!   cargo run --example sink -- [listen_addr]
//!
//! Default:
//!   cargo run --example sink -- 0.0.0.0:9688

use anyhow::Result;
use tokio::io::AsyncReadExt;
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let args: Vec<String> = std::env::args().collect();
    let listen_addr = args.get(1).map(|s| s.as_str()).unwrap_or("0.0.0.0:9688");

    let listener = TcpListener::bind(listen_addr).await?;
    info!("sink listening on {listen_addr}");

    loop {
        let (mut socket, peer) = listener.accept().await?;
        info!("transmitter connected: {peer}");
        tokio::spawn(async move {
            let mut buf = [0u8; 256];
            loop {
                match socket.read(&mut buf).await {
                    Ok(0) => break,
                    Ok(n) => {
                        let hex: Vec<String> =
                            buf[..n].iter().map(|b| format!("{b:02x}")).collect();
                        info!("{n} bytes from {peer}: {}", hex.join(" "));
                    }
                    Err(e) => {
                        warn!("read error from {peer}: {e}");
                        break;
                    }
                }
            }
            info!("transmitter disconnected: {peer}");
        });
    }
}
