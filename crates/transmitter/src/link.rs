use std::net::SocketAddr;

use anyhow::{Context, Result};
use shared::codec::encode_command;
use shared::protocol::Command;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;
use tracing::{debug, info, warn};

/// Connection to the controller receiver.
///
/// Connects lazily on the first send and keeps the stream for the life of
/// the process; the receiver never sees a clean shutdown.
pub struct ControllerLink {
    addr: SocketAddr,
    stream: Option<TcpStream>,
}

impl ControllerLink {
    pub fn new(addr: SocketAddr) -> Self {
        Self { addr, stream: None }
    }

    /// Encodes one command and sends the frame, fire-and-forget.
    ///
    /// A short write is reported and otherwise ignored; there is no retry
    /// and no response to wait for.
    pub async fn send(&mut self, cmd: &Command) -> Result<()> {
        let frame = encode_command(cmd)?;
        let stream = self.connect().await?;

        let sent = stream.write(&frame).await?;
        stream.flush().await?;
        if sent < frame.len() {
            warn!("incomplete frame: sent {sent} of {} bytes", frame.len());
        } else {
            debug!("sent {} byte frame", frame.len());
        }
        Ok(())
    }

    async fn connect(&mut self) -> Result<&mut TcpStream> {
        match &mut self.stream {
            Some(stream) => Ok(stream),
            slot @ None => {
                let stream = TcpStream::connect(self.addr)
                    .await
                    .with_context(|| format!("failed to connect to receiver at {}", self.addr))?;
                info!("connected to receiver at {}", self.addr);
                Ok(slot.insert(stream))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::protocol::{AsciiCommand, JoystickCommand};
    use tokio::io::AsyncReadExt;
    use tokio::net::TcpListener;

    #[tokio::test]
    async fn sends_frames_and_reuses_the_connection() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let mut link = ControllerLink::new(addr);
        link.send(&Command::Ascii(AsciiCommand::new(0, 'Q')))
            .await
            .unwrap();

        let (mut peer, _) = listener.accept().await.unwrap();
        let mut frame = [0u8; 4];
        peer.read_exact(&mut frame).await.unwrap();
        assert_eq!(frame, [0x00, 0x00, 0x02, 0x51]);

        link.send(&Command::Joystick(JoystickCommand::new(7, 5, 120)))
            .await
            .unwrap();

        // Second frame arrives on the same accepted socket.
        let mut frame = [0u8; 7];
        peer.read_exact(&mut frame).await.unwrap();
        assert_eq!(frame, [0x07, 0x00, 0x01, 0x00, 0x05, 0x00, 0x78]);
    }

    #[tokio::test]
    async fn connect_failure_is_reported() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let mut link = ControllerLink::new(addr);
        let err = link
            .send(&Command::Ascii(AsciiCommand::new(0, 'Q')))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("failed to connect"));
    }

    #[tokio::test]
    async fn encoding_violation_surfaces_before_any_io() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let mut link = ControllerLink::new(addr);
        let err = link
            .send(&Command::Ascii(AsciiCommand::new(0, 'é')))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("not ASCII"));
    }
}
