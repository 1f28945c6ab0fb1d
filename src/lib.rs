//! # UNIGMA - The Little Enigma Simulator
//!
//! A faithful simulator of the three-rotor electromechanical cipher
//! machine: rotors I, II, III with reflector B. Given an initial rotor
//! setting and a plugboard, it produces the cipher stream the physical
//! machine would have produced - involutively, so running the output
//! back through a machine at the same start setting recovers the input.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        UNIGMA                               │
//! ├─────────────────────────────────────────────────────────────┤
//! │                                                             │
//! │  CORE (pure math, no I/O)                                   │
//! │    alphabet arithmetic, wiring tables, Plugboard,           │
//! │    Positions, MachineConfig                                 │
//! │                                                             │
//! │  PORTS (trait contracts)                                    │
//! │    Encipher, ConfigError                                    │
//! │                                                             │
//! │  ADAPTERS (swappable I/O shells)                            │
//! │    Stream: std::io byte streams                             │
//! │    Console: interactive configuration                       │
//! │                                                             │
//! │  ENGINE (orchestration)                                     │
//! │    Machine - stepping + substitution pipeline               │
//! │                                                             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use unigma::{encipher_stream, Machine};
//!
//! let mut machine = Machine::new("AAA", "").unwrap();
//!
//! let mut cipher = Vec::new();
//! encipher_stream(&mut machine, &b"HELLO WORLD"[..], &mut cipher).unwrap();
//! assert_eq!(cipher, b"ILBDA AMTAZ");
//!
//! // Same start setting deciphers.
//! let mut fresh = Machine::new("AAA", "").unwrap();
//! let mut plain = Vec::new();
//! encipher_stream(&mut fresh, &cipher[..], &mut plain).unwrap();
//! assert_eq!(plain, b"HELLO WORLD");
//! ```

// ============================================================================
// MODULES
// ============================================================================

/// Core domain - pure cipher math, no I/O
/// Contains: alphabet arithmetic, wiring tables, Plugboard, Positions
pub mod core;

/// Port definitions - trait contracts for adapters
/// Contains: Encipher trait, ConfigError
pub mod ports;

/// Adapter implementations - the I/O shells
/// Contains: stream, console submodules
pub mod adapters;

/// Engine - orchestration layer
/// Contains: the Machine struct
pub mod engine;

// ============================================================================
// RE-EXPORTS (public API)
// ============================================================================

// Core types
pub use crate::core::config::{MachineConfig, Positions};
pub use crate::core::plugboard::{Plugboard, MAX_PLUGBOARD_LEN};
pub use crate::core::wiring::{Reflector, Rotor, RotorSet};

// Ports
pub use crate::ports::{ConfigError, ConfigResult, Encipher};

// Adapters
pub use crate::adapters::console::interactive_config;
pub use crate::adapters::stream::encipher_stream;

// Engine
pub use crate::engine::Machine;
