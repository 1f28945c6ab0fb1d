//! # Plugboard
//!
//! A partial involution on the alphabet: disjoint letter pairs swap,
//! everything else maps to itself. Built once at configuration time as a
//! 26-entry lookup table - the pair string is never re-parsed per letter.

use std::fmt;

use crate::core::alphabet::{index_letter, letter_index, ALPHABET_LEN};
use crate::ports::{ConfigError, ConfigResult};

/// Longest accepted plugboard configuration string, in bytes.
pub const MAX_PLUGBOARD_LEN: usize = 255;

/// Symmetric plugboard substitution, identity on unpaired letters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plugboard {
    map: [u8; 26],
}

impl Default for Plugboard {
    fn default() -> Self {
        Self::identity()
    }
}

impl Plugboard {
    /// The empty plugboard: every letter maps to itself.
    pub fn identity() -> Self {
        let mut map = [0u8; 26];
        for (i, slot) in map.iter_mut().enumerate() {
            *slot = i as u8;
        }
        Self { map }
    }

    /// Parse a whitespace-separated list of two-letter pairs, e.g. `"AB CD EF"`.
    /// Case-insensitive. Rejects non-letters, tokens that are not exactly two
    /// letters, a letter paired with itself, a letter reused across pairs, and
    /// strings longer than [`MAX_PLUGBOARD_LEN`].
    pub fn parse(pairs: &str) -> ConfigResult<Self> {
        if pairs.len() > MAX_PLUGBOARD_LEN {
            return Err(ConfigError::BadPlugboard(format!(
                "configuration is {} bytes, maximum is {MAX_PLUGBOARD_LEN}",
                pairs.len()
            )));
        }

        let mut board = Self::identity();
        let mut used = [false; 26];

        for token in pairs.split_whitespace() {
            let bytes = token.as_bytes();
            if bytes.len() != 2 || !bytes.iter().all(u8::is_ascii_alphabetic) {
                return Err(ConfigError::BadPlugboard(format!(
                    "pair {token:?} is not exactly two letters A-Z"
                )));
            }

            let a = letter_index(bytes[0].to_ascii_uppercase());
            let b = letter_index(bytes[1].to_ascii_uppercase());
            if a == b {
                return Err(ConfigError::BadPlugboard(format!(
                    "pair {token:?} plugs a letter into itself"
                )));
            }
            if used[a as usize] || used[b as usize] {
                return Err(ConfigError::BadPlugboard(format!(
                    "pair {token:?} reuses an already plugged letter"
                )));
            }

            used[a as usize] = true;
            used[b as usize] = true;
            board.map[a as usize] = b;
            board.map[b as usize] = a;
        }

        Ok(board)
    }

    /// Apply the substitution to a letter index in `0..26`.
    #[inline]
    pub fn swap(&self, letter: u8) -> u8 {
        self.map[letter as usize]
    }

    pub fn is_identity(&self) -> bool {
        self.map.iter().enumerate().all(|(i, &v)| v == i as u8)
    }
}

impl fmt::Display for Plugboard {
    /// Renders the pairs in alphabetical order, or `(none)` when empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_identity() {
            return f.write_str("(none)");
        }
        let mut first = true;
        for i in 0..ALPHABET_LEN {
            let j = self.map[i as usize];
            if j > i {
                if !first {
                    f.write_str(" ")?;
                }
                write!(
                    f,
                    "{}{}",
                    index_letter(i) as char,
                    index_letter(j) as char
                )?;
                first = false;
            }
        }
        Ok(())
    }
}
