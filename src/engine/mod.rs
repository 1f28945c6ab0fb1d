//! # Engine
//!
//! The orchestration layer: one [`Machine`] owning the wiring tables,
//! the plugboard, and the three mutable rotor positions.

mod machine;

pub use machine::Machine;
