//! # Machine configuration
//!
//! The two user-settable knobs: initial rotor positions and plugboard
//! pairs. Both are validated once, before any enciphering begins; after
//! construction the machine never re-checks them.
//!
//! Human-facing position strings are always read and written
//! left-middle-right.

use std::fmt;

use crate::core::alphabet::{index_letter, letter_index};
use crate::core::plugboard::Plugboard;
use crate::ports::{ConfigError, ConfigResult};

/// Rotor positions by slot, each in `0..26`.
///
/// `AAA` is all zeroes. The string form is interpreted positionally as
/// left, middle, right - so `"ADU"` puts the left rotor at `A`, the
/// middle at `D`, the right at `U`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Positions {
    pub left: u8,
    pub middle: u8,
    pub right: u8,
}

impl Default for Positions {
    /// The start setting: `AAA`.
    fn default() -> Self {
        Self {
            left: 0,
            middle: 0,
            right: 0,
        }
    }
}

impl Positions {
    /// Parse a three-letter, case-insensitive position string.
    pub fn parse(s: &str) -> ConfigResult<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 3 || !bytes.iter().all(u8::is_ascii_alphabetic) {
            return Err(ConfigError::BadPositions(s.to_string()));
        }
        Ok(Self {
            left: letter_index(bytes[0].to_ascii_uppercase()),
            middle: letter_index(bytes[1].to_ascii_uppercase()),
            right: letter_index(bytes[2].to_ascii_uppercase()),
        })
    }
}

impl fmt::Display for Positions {
    /// Left-middle-right, e.g. `ADU`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            index_letter(self.left) as char,
            index_letter(self.middle) as char,
            index_letter(self.right) as char
        )
    }
}

/// A complete initial configuration. Wirings are fixed (rotors I-III,
/// reflector B), so this is all the state a run needs.
#[derive(Debug, Clone, Default)]
pub struct MachineConfig {
    pub positions: Positions,
    pub plugboard: Plugboard,
}
