//! Conversion utilities for the mini-AES block pipeline.
//!
//! This crate handles the data reformatting around the cipher core:
//! plaintext to bit-stream, bit-stream to fixed-size 12-bit blocks
//! (zero-padding the final block), and the hex framing used for
//! ciphertext. It knows nothing about the cipher itself.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod bits;
mod blocks;

pub use crate::bits::{bits_to_hex, bits_to_text, hex_to_bits, text_to_bits, CodecError};
pub use crate::blocks::{bits_to_blocks, blocks_to_bits, Block, BLOCK_BITS};
