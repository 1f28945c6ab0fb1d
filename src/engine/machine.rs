//! # Machine
//!
//! The assembled cipher machine. Immutable after construction except for
//! the three rotor positions, which advance exactly once per alphabetic
//! input character.
//!
//! Per letter the machine runs:
//!
//! ```text
//! step rotors
//! plugboard -> III -> II -> I -> reflector B -> I -> II -> III -> plugboard
//!              (forward, right to left)          (reverse, left to right)
//! ```
//!
//! At any fixed position vector this pipeline is an involution on the
//! alphabet with no fixed point: feeding ciphertext back through a
//! machine at the same start setting recovers the plaintext, and no
//! letter ever enciphers to itself.

use crate::core::alphabet::{add_offset, index_letter, letter_index};
use crate::core::config::{MachineConfig, Positions};
use crate::core::plugboard::Plugboard;
use crate::core::wiring::RotorSet;
use crate::ports::{ConfigResult, Encipher};

/// A three-rotor machine with reflector B.
///
/// Holds sequence-dependent history in its rotor positions, so a single
/// instance must own each stream end to end; clone it for a fresh run
/// from the same start setting.
#[derive(Debug, Clone)]
pub struct Machine {
    rotors: RotorSet,
    plugboard: Plugboard,
    positions: Positions,
}

impl Machine {
    /// Build a machine from a position string (`"AAA"`-style,
    /// left-middle-right) and a plugboard pair list (`""` for none).
    pub fn new(positions: &str, plugboard: &str) -> ConfigResult<Self> {
        Ok(Self::with_config(MachineConfig {
            positions: Positions::parse(positions)?,
            plugboard: Plugboard::parse(plugboard)?,
        }))
    }

    /// Build a machine from an already validated configuration.
    pub fn with_config(config: MachineConfig) -> Self {
        Self {
            rotors: RotorSet::historical(),
            plugboard: config.plugboard,
            positions: config.positions,
        }
    }

    /// Reset the rotor positions from a position string.
    pub fn set_positions(&mut self, positions: &str) -> ConfigResult<()> {
        self.positions = Positions::parse(positions)?;
        Ok(())
    }

    /// Replace the plugboard from a pair list.
    pub fn set_plugboard(&mut self, pairs: &str) -> ConfigResult<()> {
        self.plugboard = Plugboard::parse(pairs)?;
        Ok(())
    }

    /// Current rotor positions.
    pub fn positions(&self) -> Positions {
        self.positions
    }

    /// Current plugboard.
    pub fn plugboard(&self) -> &Plugboard {
        &self.plugboard
    }

    /// Human-readable configuration summary. Positions are always shown
    /// left-middle-right.
    pub fn describe(&self) -> String {
        format!(
            "Rotors:    I, II, III\n\
             Reflector: B\n\
             Positions: {} (left-middle-right)\n\
             Plugboard: {}",
            self.positions, self.plugboard
        )
    }

    /// Advance the rotors once.
    ///
    /// All decisions are taken on the pre-step positions, then every
    /// flagged rotor increments together. The middle rotor stepping on
    /// its own notch is the double-step anomaly: it fires even when the
    /// right rotor is nowhere near its notch, carries the left rotor
    /// along, and makes the middle rotor advance on two consecutive
    /// characters.
    fn step_rotors(&mut self) {
        let right_at_notch = self.rotors.right().at_notch(self.positions.right);
        let middle_at_notch = self.rotors.middle().at_notch(self.positions.middle);

        let step_middle = right_at_notch || middle_at_notch;
        let step_left = middle_at_notch;

        self.positions.right = add_offset(self.positions.right, 1);
        if step_middle {
            self.positions.middle = add_offset(self.positions.middle, 1);
        }
        if step_left {
            self.positions.left = add_offset(self.positions.left, 1);
        }
    }

    /// Encipher one letter index in `0..26`, stepping the rotors first.
    pub fn encipher_letter(&mut self, letter: u8) -> u8 {
        self.step_rotors();

        let p = self.positions;
        let c = self.plugboard.swap(letter);
        let c = self.rotors.right().forward(p.right, c);
        let c = self.rotors.middle().forward(p.middle, c);
        let c = self.rotors.left().forward(p.left, c);
        let c = self.rotors.reflector().reflect(c);
        let c = self.rotors.left().reverse(p.left, c);
        let c = self.rotors.middle().reverse(p.middle, c);
        let c = self.rotors.right().reverse(p.right, c);
        self.plugboard.swap(c)
    }
}

impl Encipher for Machine {
    fn encipher_byte(&mut self, byte: u8) -> u8 {
        if byte.is_ascii_alphabetic() {
            let letter = letter_index(byte.to_ascii_uppercase());
            index_letter(self.encipher_letter(letter))
        } else {
            byte
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encipher_str(machine: &mut Machine, input: &str) -> String {
        input
            .bytes()
            .map(|b| machine.encipher_byte(b) as char)
            .collect()
    }

    #[test]
    fn test_aaaaa_from_start_setting() {
        let mut machine = Machine::new("AAA", "").unwrap();
        assert_eq!(encipher_str(&mut machine, "AAAAA"), "BDZGO");
    }

    #[test]
    fn test_hello_world_preserves_the_space() {
        let mut machine = Machine::new("AAA", "").unwrap();
        assert_eq!(encipher_str(&mut machine, "HELLO WORLD"), "ILBDA AMTAZ");
    }

    #[test]
    fn test_round_trip_from_fresh_machine() {
        let mut machine = Machine::new("AAA", "").unwrap();
        let cipher = encipher_str(&mut machine, "HELLO WORLD");

        let mut fresh = Machine::new("AAA", "").unwrap();
        assert_eq!(encipher_str(&mut fresh, &cipher), "HELLO WORLD");
    }

    #[test]
    fn test_lowercase_input_matches_uppercase() {
        let mut upper = Machine::new("AAA", "").unwrap();
        let mut lower = Machine::new("AAA", "").unwrap();
        assert_eq!(
            encipher_str(&mut upper, "HELLO WORLD"),
            encipher_str(&mut lower, "hello world")
        );
    }

    #[test]
    fn test_non_letters_pass_through_without_stepping() {
        let mut machine = Machine::new("AAA", "").unwrap();
        let before = machine.positions();
        assert_eq!(
            encipher_str(&mut machine, "12 .,!\t\n"),
            "12 .,!\t\n"
        );
        assert_eq!(machine.positions(), before);
    }

    #[test]
    fn test_right_rotor_steps_every_letter() {
        let mut machine = Machine::new("AAA", "").unwrap();
        machine.encipher_byte(b'A');
        assert_eq!(machine.positions(), Positions::parse("AAB").unwrap());
    }

    #[test]
    fn test_right_rotor_period_is_26() {
        let mut machine = Machine::new("AAA", "").unwrap();
        for _ in 0..26 {
            machine.encipher_byte(b'A');
        }
        let p = machine.positions();
        assert_eq!(p.right, 0);
        // the right rotor passed its notch V exactly once
        assert_eq!(p.middle, 1);
        assert_eq!(p.left, 0);
    }

    #[test]
    fn test_double_step_advances_middle_twice_in_a_row() {
        // Right rotor at notch V: stepping it carries the middle to E.
        let mut machine = Machine::new("ADV", "").unwrap();
        machine.encipher_byte(b'A');
        assert_eq!(machine.positions(), Positions::parse("AEW").unwrap());

        // Middle now on its own notch E: next character it steps again,
        // dragging the left rotor along.
        machine.encipher_byte(b'A');
        assert_eq!(machine.positions(), Positions::parse("BFX").unwrap());
    }

    #[test]
    fn test_no_double_step_one_short_of_the_notch() {
        let mut machine = Machine::new("ADU", "").unwrap();
        machine.encipher_byte(b'A');
        // right rotor was at U, not yet V: middle holds
        assert_eq!(machine.positions(), Positions::parse("ADV").unwrap());
    }

    #[test]
    fn test_all_three_rotors_at_notch() {
        let mut machine = Machine::new("QEV", "").unwrap();
        machine.encipher_byte(b'A');
        // left advances exactly once, carried by the middle rotor's notch
        assert_eq!(machine.positions(), Positions::parse("RFW").unwrap());
    }

    #[test]
    fn test_middle_right_cycle_skips_25_pairs() {
        // Over 26*26 consecutive steps the double-step collapses the
        // middle rotor's notch position to a single state, leaving
        // 26*26 - 25 = 651 distinct (middle, right) pairs.
        let mut machine = Machine::new("AAA", "").unwrap();
        let mut seen = std::collections::HashSet::new();
        for _ in 0..26 * 26 {
            machine.encipher_byte(b'A');
            let p = machine.positions();
            seen.insert((p.middle, p.right));
        }
        assert_eq!(seen.len(), 651);
    }

    #[test]
    fn test_plugboard_conjugates_the_pipeline() {
        // A single pair at the board is the same as swapping the two
        // letters at both the input and the output of a plugboard-free
        // run. Stepping does not depend on the plugboard, so the two
        // machines stay in lockstep.
        fn swap_ab(byte: u8) -> u8 {
            match byte {
                b'A' => b'B',
                b'B' => b'A',
                other => other,
            }
        }

        let mut plugged = Machine::new("AAA", "AB").unwrap();
        let mut bare = Machine::new("AAA", "").unwrap();

        let input = "ATTACK AT DAWN, REGROUP AT BRIDGE";
        let plugged_out = encipher_str(&mut plugged, input);
        let conjugated: String = input
            .bytes()
            .map(|b| swap_ab(bare.encipher_byte(swap_ab(b))) as char)
            .collect();

        assert_eq!(plugged_out, conjugated);
    }

    #[test]
    fn test_plugboard_round_trips() {
        let mut machine = Machine::new("KFD", "AB CD EF GH").unwrap();
        let cipher = encipher_str(&mut machine, "ATTACK AT DAWN");

        let mut fresh = Machine::new("KFD", "AB CD EF GH").unwrap();
        assert_eq!(encipher_str(&mut fresh, &cipher), "ATTACK AT DAWN");
    }

    #[test]
    fn test_control_surface() {
        let mut machine = Machine::new("AAA", "").unwrap();
        machine.set_positions("qev").unwrap();
        assert_eq!(machine.positions(), Positions::parse("QEV").unwrap());

        machine.set_plugboard("AB CD").unwrap();
        assert_eq!(machine.plugboard().to_string(), "AB CD");

        assert!(machine.set_positions("bad input").is_err());
        assert!(machine.set_plugboard("AB BC").is_err());
    }

    #[test]
    fn test_describe_is_left_middle_right() {
        let machine = Machine::new("ADU", "AB").unwrap();
        let summary = machine.describe();
        assert!(summary.contains("Positions: ADU (left-middle-right)"));
        assert!(summary.contains("Plugboard: AB"));
        assert!(summary.contains("Rotors:    I, II, III"));
        assert!(summary.contains("Reflector: B"));
    }
}
