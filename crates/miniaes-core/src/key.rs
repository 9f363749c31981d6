//! Key type for the single-round cipher.

use crate::error::CipherError;

/// Number of binary digits in a key.
pub const KEY_BITS: usize = 12;

/// The 12-bit round key, fixed for a whole message.
///
/// Only the low twelve bits are ever set. There is no key schedule: the
/// same key is applied to every block of the single round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundKey(u16);

impl RoundKey {
    /// Parses a key given as exactly twelve ASCII binary digits.
    ///
    /// Anything else fails with [`CipherError::InvalidKey`] carrying the
    /// rejected value.
    pub fn parse(key: &str) -> Result<Self, CipherError> {
        if key.len() != KEY_BITS || !key.bytes().all(|b| b == b'0' || b == b'1') {
            return Err(CipherError::InvalidKey {
                key: key.to_string(),
            });
        }
        let bits = key
            .bytes()
            .fold(0u16, |acc, digit| (acc << 1) | u16::from(digit - b'0'));
        Ok(Self(bits))
    }

    /// Builds a key from raw bits; anything above the low twelve is masked off.
    pub fn from_bits(bits: u16) -> Self {
        Self(bits & 0x0fff)
    }

    /// Returns the 12 key bits.
    #[inline]
    pub fn bits(&self) -> u16 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_valid_key() {
        let key = RoundKey::parse("110011001100").unwrap();
        assert_eq!(key.bits(), 0xccc);
    }

    #[test]
    fn rejects_wrong_lengths() {
        for key in ["", "1", "11001100110", "1100110011001", "110011001100110011"] {
            assert_eq!(
                RoundKey::parse(key),
                Err(CipherError::InvalidKey {
                    key: key.to_string()
                })
            );
        }
    }

    #[test]
    fn rejects_non_binary_digits_in_every_position() {
        for position in 0..KEY_BITS {
            let mut digits = b"110011001100".to_vec();
            digits[position] = b'2';
            let key = String::from_utf8(digits).unwrap();
            assert_eq!(
                RoundKey::parse(&key),
                Err(CipherError::InvalidKey { key: key.clone() })
            );
        }
    }

    #[test]
    fn rejects_non_ascii_input() {
        // Twelve bytes, but the last two are one non-binary character.
        assert!(RoundKey::parse("1100110011\u{e9}").is_err());
    }

    #[test]
    fn from_bits_masks_to_twelve_bits() {
        assert_eq!(RoundKey::from_bits(0xffff).bits(), 0x0fff);
    }
}
