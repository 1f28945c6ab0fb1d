//! # Rotor and reflector wiring
//!
//! The historical wiring tables for rotors I, II, III and reflector B,
//! materialized once as permutations of `0..26` together with their
//! inverses (the inverse is needed on the return path from the reflector,
//! and a linear search per letter would be wasteful).
//!
//! Slot vs. rotor identity: the pipeline thinks in *slots*
//! (right/middle/left), the wiring tables in *rotors* (I/II/III).
//! [`RotorSet::historical`] fixes the mapping once - rotor III in the
//! right slot, II in the middle, I on the left - and the hot path only
//! ever indexes by slot.

use crate::core::alphabet::{add_offset, letter_index, sub_offset, ALPHABET_LEN};

/// Rotor wirings as shipped: input contact A..Z maps to the listed letter.
const ROTOR_I: &[u8; 26] = b"EKMFLGDQVZNTOWYHXUSPAIBRCJ";
const ROTOR_II: &[u8; 26] = b"AJDKSIRUXBLHWTMCQGZNPYFVOE";
const ROTOR_III: &[u8; 26] = b"BDFHJLCPRTXVZNYEIWGAKMUSQO";
const REFLECTOR_B: &[u8; 26] = b"YRUHQSLDPXNGOKMIEBFZCWVJAT";

/// Turnover notches: Q, E, V for rotors I, II, III.
const NOTCH_I: u8 = 16;
const NOTCH_II: u8 = 4;
const NOTCH_III: u8 = 21;

/// A fixed permutation of `0..26` plus its materialized inverse.
#[derive(Debug, Clone)]
struct Wiring {
    forward: [u8; 26],
    inverse: [u8; 26],
}

impl Wiring {
    fn from_letters(letters: &[u8; 26]) -> Self {
        let mut forward = [0u8; 26];
        let mut inverse = [0u8; 26];
        for (i, &letter) in letters.iter().enumerate() {
            forward[i] = letter_index(letter);
        }
        for (i, &out) in forward.iter().enumerate() {
            inverse[out as usize] = i as u8;
        }
        debug_assert!(is_permutation(&forward), "wiring is not a permutation");
        Self { forward, inverse }
    }
}

fn is_permutation(table: &[u8; 26]) -> bool {
    let mut seen = [false; 26];
    for &v in table {
        if v >= ALPHABET_LEN || seen[v as usize] {
            return false;
        }
        seen[v as usize] = true;
    }
    true
}

/// One rotor: a wiring permutation plus its turnover notch.
///
/// Rotating the rotor to offset `position` shifts the input contact by
/// `+position`, applies the fixed wiring, then shifts the output contact
/// back by `-position`.
#[derive(Debug, Clone)]
pub struct Rotor {
    wiring: Wiring,
    notch: u8,
}

impl Rotor {
    fn new(letters: &[u8; 26], notch: u8) -> Self {
        Self {
            wiring: Wiring::from_letters(letters),
            notch,
        }
    }

    /// Entry-side traversal: `(W[(x + p) mod 26] - p) mod 26`.
    #[inline]
    pub fn forward(&self, position: u8, contact: u8) -> u8 {
        let entry = add_offset(contact, position);
        sub_offset(self.wiring.forward[entry as usize], position)
    }

    /// Return-side traversal through the inverse permutation.
    #[inline]
    pub fn reverse(&self, position: u8, contact: u8) -> u8 {
        let entry = add_offset(contact, position);
        sub_offset(self.wiring.inverse[entry as usize], position)
    }

    /// The position at which this rotor carries its left neighbour along.
    pub fn notch(&self) -> u8 {
        self.notch
    }

    /// True when a rotor sitting at `position` is on its notch.
    #[inline]
    pub fn at_notch(&self, position: u8) -> bool {
        position == self.notch
    }
}

/// Reflector B: an involutive permutation with no fixed point.
/// The reflector never rotates, so it is queried at offset zero.
#[derive(Debug, Clone)]
pub struct Reflector {
    table: [u8; 26],
}

impl Reflector {
    fn b() -> Self {
        let table = Wiring::from_letters(REFLECTOR_B).forward;
        debug_assert!(
            table
                .iter()
                .enumerate()
                .all(|(i, &v)| table[v as usize] == i as u8 && v != i as u8),
            "reflector must be a fixed-point-free involution"
        );
        Self { table }
    }

    #[inline]
    pub fn reflect(&self, contact: u8) -> u8 {
        self.table[contact as usize]
    }
}

/// The three rotor slots plus the reflector, assembled in the historical
/// order: right slot = rotor III, middle = II, left = I, reflector B.
#[derive(Debug, Clone)]
pub struct RotorSet {
    right: Rotor,
    middle: Rotor,
    left: Rotor,
    reflector: Reflector,
}

impl RotorSet {
    pub fn historical() -> Self {
        Self {
            right: Rotor::new(ROTOR_III, NOTCH_III),
            middle: Rotor::new(ROTOR_II, NOTCH_II),
            left: Rotor::new(ROTOR_I, NOTCH_I),
            reflector: Reflector::b(),
        }
    }

    pub fn right(&self) -> &Rotor {
        &self.right
    }

    pub fn middle(&self) -> &Rotor {
        &self.middle
    }

    pub fn left(&self) -> &Rotor {
        &self.left
    }

    pub fn reflector(&self) -> &Reflector {
        &self.reflector
    }
}
