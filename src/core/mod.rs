//! # Core domain - pure cipher math, no I/O
//!
//! Everything in here is a pure function of its inputs:
//! - Alphabet arithmetic (indices 0..25, non-negative modulo)
//! - Immutable rotor/reflector wiring tables
//! - The plugboard involution
//! - Configuration types (positions, plugboard pairs)
//!
//! Character-code conversion happens only at the adapter boundary;
//! inside this module a letter is always a `u8` index in `0..26`.

pub mod alphabet;
pub mod config;
pub mod plugboard;
pub mod wiring;

pub use config::{MachineConfig, Positions};
pub use plugboard::Plugboard;
pub use wiring::{Reflector, Rotor, RotorSet};
