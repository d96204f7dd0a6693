mod config;
mod input;
mod link;

use std::io::Write as _;
use std::net::SocketAddr;

use anyhow::Result;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use config::TransmitterConfig;
use link::ControllerLink;

/// Interactive harness that sends controller commands to a receiver.
#[derive(Parser, Debug)]
#[command(name = "transmitter")]
struct Args {
    /// Receiver address.
    #[arg(long)]
    addr: Option<SocketAddr>,
    /// Device id stamped on every frame.
    #[arg(long)]
    id: Option<u8>,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let args = Args::parse();
    let mut config = TransmitterConfig::default();
    if let Some(addr) = args.addr {
        config.receiver_addr = addr;
    }
    if let Some(id) = args.id {
        config.device_id = id;
    }

    run(config).await
}

async fn run(config: TransmitterConfig) -> Result<()> {
    info!("transmitter starting, receiver {}", config.receiver_addr);
    let mut link = ControllerLink::new(config.receiver_addr);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        prompt()?;
        let Some(line) = lines.next_line().await? else {
            break;
        };
        match input::parse_line(&line, config.device_id) {
            Ok(cmd) => link.send(&cmd).await?,
            Err(e) => warn!("input rejected: {e}"),
        }
    }

    info!("stdin closed, transmitter stopping");
    Ok(())
}

fn prompt() -> Result<()> {
    let mut stdout = std::io::stdout();
    write!(stdout, "Input: ")?;
    stdout.flush()?;
    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse().unwrap()))
        .try_init();
}
