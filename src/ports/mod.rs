//! # Ports
//!
//! Trait contracts and error types sitting between the engine and its
//! adapters. An adapter that can feed bytes to something implementing
//! [`Encipher`] never needs to know about rotors.

use thiserror::Error;

/// Configuration failures. All of these are reported before any
/// enciphering begins; a constructed machine cannot fail at runtime.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The position string is not exactly three letters A-Z.
    #[error("bad rotor positions {0:?}: expected exactly three letters A-Z")]
    BadPositions(String),

    /// The plugboard string is not a disjoint list of two-letter pairs.
    #[error("bad plugboard: {0}")]
    BadPlugboard(String),
}

/// Result alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Byte-at-a-time cipher port.
///
/// Contract: letters (`A-Z`, `a-z`) fold to uppercase, advance the
/// machine exactly once, and come back enciphered in uppercase. Every
/// other byte passes through unchanged and does not advance anything.
pub trait Encipher {
    fn encipher_byte(&mut self, byte: u8) -> u8;
}
