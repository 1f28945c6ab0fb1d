//! # Adapters
//!
//! The I/O shells around the engine:
//! - Stream: byte-at-a-time enciphering over `std::io` readers/writers
//! - Console: interactive configuration prompts
//!
//! Each adapter talks to the engine only through the ports; swapping one
//! out never touches core logic.

pub mod console;
pub mod stream;
