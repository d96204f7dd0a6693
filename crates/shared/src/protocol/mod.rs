pub mod command;
pub mod types;

pub use command::*;
pub use types::*;
