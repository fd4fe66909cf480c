//! Talk to the switch from inside a tokio runtime
pub mod switch;

pub use self::switch::AsyncSwitch;
