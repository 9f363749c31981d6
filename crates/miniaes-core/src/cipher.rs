//! Single-round block encryption and the string-level driver.

use miniaes_codec::{
    bits_to_blocks, bits_to_hex, bits_to_text, blocks_to_bits, hex_to_bits, text_to_bits, Block,
};

use crate::error::CipherError;
use crate::key::RoundKey;
use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes,
};
use crate::state::{state_from_block, state_to_block, State};

/// Encrypts a single state with one round:
/// SubBytes → ShiftRows → MixColumns → AddRoundKey.
pub fn encrypt_block(state: &State, key: &RoundKey) -> State {
    let mut state = *state;
    sub_bytes(&mut state);
    shift_rows(&mut state);
    mix_columns(&mut state);
    add_round_key(&mut state, key);
    state
}

/// Decrypts a single state, running the inverse transforms in reverse:
/// AddRoundKey → InvMixColumns → InvShiftRows → InvSubBytes.
pub fn decrypt_block(state: &State, key: &RoundKey) -> State {
    let mut state = *state;
    add_round_key(&mut state, key);
    inv_mix_columns(&mut state);
    inv_shift_rows(&mut state);
    inv_sub_bytes(&mut state);
    state
}

/// Encrypts a plaintext string under a 12-bit binary key, returning the
/// ciphertext as lowercase hex, three digits per block.
///
/// The plaintext is taken as UTF-8 bytes, eight bits each, split into
/// 12-bit blocks with the final block zero-padded on the right. Blocks
/// never interact: each is encrypted independently and the results are
/// reassembled in order.
pub fn encrypt(plaintext: &str, key: &str) -> Result<String, CipherError> {
    let key = RoundKey::parse(key)?;
    let blocks = bits_to_blocks(&text_to_bits(plaintext));
    let encrypted: Vec<Block> = blocks
        .iter()
        .map(|&block| state_to_block(&encrypt_block(&state_from_block(block), &key)))
        .collect();
    Ok(bits_to_hex(&blocks_to_bits(&encrypted)))
}

/// Decrypts a hex ciphertext under a 12-bit binary key.
///
/// Padding from the final block decrypts to trailing NUL characters;
/// stripping them is the caller's responsibility.
pub fn decrypt(ciphertext_hex: &str, key: &str) -> Result<String, CipherError> {
    let key = RoundKey::parse(key)?;
    let blocks = bits_to_blocks(&hex_to_bits(ciphertext_hex)?);
    let decrypted: Vec<Block> = blocks
        .iter()
        .map(|&block| state_to_block(&decrypt_block(&state_from_block(block), &key)))
        .collect();
    Ok(bits_to_text(&blocks_to_bits(&decrypted)))
}
