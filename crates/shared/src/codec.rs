use bytes::BufMut;
use thiserror::Error;

use crate::protocol::command::Command;
use crate::protocol::types::{TYPE_ASCII, TYPE_DPAD, TYPE_JOYSTICK, TYPE_ROTARY};

/// Largest frame the protocol produces (joystick: id, type, two axes).
const MAX_FRAME: usize = 7;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EncodeError {
    #[error("payload character {0:?} is not ASCII")]
    NonAscii(char),
    #[error("{field} value {value} does not fit the 16-bit wire field")]
    ValueOutOfRange { field: &'static str, value: u32 },
}

pub type EncodeResult<T> = Result<T, EncodeError>;

/// Serializes one command into its wire frame.
///
/// Layout is `[id] [type_hi type_lo] [payload]`, all multi-byte fields
/// big-endian. The id byte is omitted only for [`AsciiCommand::bare`]
/// frames. There is no length prefix; the receiver infers the payload
/// length from the frame length.
///
/// [`AsciiCommand::bare`]: crate::protocol::command::AsciiCommand::bare
pub fn encode_command(cmd: &Command) -> EncodeResult<Vec<u8>> {
    let mut out = Vec::with_capacity(MAX_FRAME);
    match cmd {
        Command::Ascii(ascii) => {
            if !ascii.ch.is_ascii() {
                return Err(EncodeError::NonAscii(ascii.ch));
            }
            if let Some(id) = ascii.id {
                out.put_u8(id);
            }
            out.put_u16(TYPE_ASCII);
            out.put_u8(ascii.ch as u8);
        }
        Command::Joystick(stick) => {
            let x = narrow("x axis", stick.x)?;
            let y = narrow("y axis", stick.y)?;
            out.put_u8(stick.id);
            out.put_u16(TYPE_JOYSTICK);
            out.put_u16(x);
            out.put_u16(y);
        }
        Command::DPad(dpad) => {
            out.put_u8(dpad.id);
            out.put_u16(TYPE_DPAD);
            out.put_u8(dpad.direction.as_u8());
        }
        Command::Rotary(rotary) => {
            let value = narrow("rotary", rotary.value)?;
            out.put_u8(rotary.id);
            out.put_u16(TYPE_ROTARY);
            out.put_u16(value);
        }
    }
    Ok(out)
}

fn narrow(field: &'static str, value: u32) -> EncodeResult<u16> {
    u16::try_from(value).map_err(|_| EncodeError::ValueOutOfRange { field, value })
}
