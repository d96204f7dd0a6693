use super::types::{DPadDirection, DeviceId};

/// Commands the transmitter puts on the wire, one frame per command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Ascii(AsciiCommand),
    Joystick(JoystickCommand),
    DPad(DPadCommand),
    Rotary(RotaryCommand),
}

/// Single ASCII character, type tag `0x0002`.
///
/// `id` is optional: the first receiver build reads ASCII frames without the
/// leading id byte. New code should go through [`AsciiCommand::new`];
/// [`AsciiCommand::bare`] keeps the header-less form expressible for that
/// build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AsciiCommand {
    pub id: Option<DeviceId>,
    pub ch: char,
}

impl AsciiCommand {
    pub fn new(id: DeviceId, ch: char) -> Self {
        Self { id: Some(id), ch }
    }

    /// Header-less frame without the id byte.
    pub fn bare(ch: char) -> Self {
        Self { id: None, ch }
    }
}

/// Joystick axes, type tag `0x0001`.
///
/// Axes are carried as `u32` so values beyond the 16-bit wire range survive
/// until the encoder can reject them instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JoystickCommand {
    pub id: DeviceId,
    pub x: u32,
    pub y: u32,
}

impl JoystickCommand {
    pub fn new(id: DeviceId, x: u32, y: u32) -> Self {
        Self { id, x, y }
    }
}

/// D-pad press, type tag `0x0000`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DPadCommand {
    pub id: DeviceId,
    pub direction: DPadDirection,
}

impl DPadCommand {
    pub fn new(id: DeviceId, direction: DPadDirection) -> Self {
        Self { id, direction }
    }
}

/// Rotary ADC reading, type tag `0x0003`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotaryCommand {
    pub id: DeviceId,
    pub value: u32,
}

impl RotaryCommand {
    pub fn new(id: DeviceId, value: u32) -> Self {
        Self { id, value }
    }
}
