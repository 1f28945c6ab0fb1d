//! # Alphabet arithmetic
//!
//! The 26 uppercase Latin letters, identified with integers 0..25.
//! All position arithmetic is modulo 26 and must never go negative;
//! a raw remainder on a signed difference can, which silently corrupts
//! rotor positions downstream. The helpers here keep every intermediate
//! value inside `0..26`.
//!
//! Letter classification and case folding are pure ASCII. No locale.

/// Number of contacts on a rotor. Also the modulus for all position math.
pub const ALPHABET_LEN: u8 = 26;

/// Index of an uppercase letter: 0 for `A` through 25 for `Z`.
#[inline]
pub fn letter_index(letter: u8) -> u8 {
    letter - b'A'
}

/// Uppercase letter for an index in `0..26`.
#[inline]
pub fn index_letter(index: u8) -> u8 {
    index + b'A'
}

/// `(x + p) mod 26` for `x, p` in `0..26`.
#[inline]
pub fn add_offset(x: u8, p: u8) -> u8 {
    (x + p) % ALPHABET_LEN
}

/// `(x - p) mod 26` with a non-negative result, for `x, p` in `0..26`.
#[inline]
pub fn sub_offset(x: u8, p: u8) -> u8 {
    (x + ALPHABET_LEN - p) % ALPHABET_LEN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_index_round_trip() {
        for letter in b'A'..=b'Z' {
            assert_eq!(index_letter(letter_index(letter)), letter);
        }
        assert_eq!(letter_index(b'A'), 0);
        assert_eq!(letter_index(b'Z'), 25);
    }

    #[test]
    fn test_add_offset_wraps() {
        assert_eq!(add_offset(0, 0), 0);
        assert_eq!(add_offset(25, 1), 0);
        assert_eq!(add_offset(13, 25), 12);
    }

    #[test]
    fn test_sub_offset_never_negative() {
        assert_eq!(sub_offset(0, 1), 25);
        assert_eq!(sub_offset(0, 25), 1);
        assert_eq!(sub_offset(12, 12), 0);

        // sub undoes add for every pair
        for x in 0..ALPHABET_LEN {
            for p in 0..ALPHABET_LEN {
                assert_eq!(sub_offset(add_offset(x, p), p), x);
            }
        }
    }
}
