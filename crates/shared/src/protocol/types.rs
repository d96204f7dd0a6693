/// Wire type tags, always emitted as a 2-byte big-endian field.
pub const TYPE_DPAD: u16 = 0x0000;
pub const TYPE_JOYSTICK: u16 = 0x0001;
pub const TYPE_ASCII: u16 = 0x0002;
pub const TYPE_ROTARY: u16 = 0x0003;

/// Identifier carried in the first header byte of a frame.
pub type DeviceId = u8;

/// D-pad direction as encoded in the payload byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum DPadDirection {
    Up = 0,
    Right = 1,
    Down = 2,
    Left = 3,
}

impl DPadDirection {
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}
