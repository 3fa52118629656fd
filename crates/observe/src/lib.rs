//! Initialization logic shared by the binaries to make their behavior
//! observable: tracing setup and a panic hook that logs through it.

pub mod panic_hook;
pub mod tracing;
