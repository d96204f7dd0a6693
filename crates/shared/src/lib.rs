pub mod codec;
pub mod protocol;

pub use codec::*;
pub use protocol::*;
