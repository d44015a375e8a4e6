//! Sink implementations

#[cfg(feature = "console")]
pub mod console;
#[cfg(feature = "file")]
pub mod file;

#[cfg(feature = "console")]
pub use console::{ConsoleSink, ConsoleTarget};
#[cfg(feature = "file")]
pub use file::FileSink;

pub use crate::core::Sink;
