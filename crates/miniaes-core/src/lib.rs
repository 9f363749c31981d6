//! Single-round 2×2 AES over GF(2^3).
//!
//! A teaching-scale reduction of AES: 12-bit blocks as 2×2 matrices of
//! 3-bit field elements, one round of SubBytes → ShiftRows → MixColumns →
//! AddRoundKey, and a string-level driver that handles block chunking and
//! hex framing through `miniaes-codec`.
//!
//! The implementation aims for clarity and testability. It is a toy
//! cipher with a 12-bit key and must not be used to protect anything.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod cipher;
mod error;
mod field;
mod key;
mod round;
mod sbox;
mod state;

pub use crate::cipher::{decrypt, decrypt_block, encrypt, encrypt_block};
pub use crate::error::CipherError;
pub use crate::key::{RoundKey, KEY_BITS};
pub use crate::state::{state_from_block, state_to_block, State};
