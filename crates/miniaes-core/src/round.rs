//! Round transformations over the 2×2 state.

use crate::field;
use crate::key::RoundKey;
use crate::sbox::{inv_sbox, sbox};
use crate::state::{state_from_block, state_to_block, State};

/// Applies SubBytes to the state in place.
#[inline]
pub fn sub_bytes(state: &mut State) {
    for cell in state.iter_mut() {
        *cell = sbox(*cell);
    }
}

/// Applies the inverse SubBytes transformation.
#[inline]
pub fn inv_sub_bytes(state: &mut State) {
    for cell in state.iter_mut() {
        *cell = inv_sbox(*cell);
    }
}

/// Performs ShiftRows in place: row 0 fixed, row 1 rotated left by one.
#[inline]
pub fn shift_rows(state: &mut State) {
    state[2..].rotate_left(1);
}

/// Performs the inverse of ShiftRows: row 1 rotated right by one.
#[inline]
pub fn inv_shift_rows(state: &mut State) {
    state[2..].rotate_right(1);
}

/// MixColumns over both rows: each row `[a, b]` becomes
/// `[a ⊕ x·b, x·a ⊕ b]`, multiplication by `[[1, x], [x, 1]]`.
#[inline]
pub fn mix_columns(state: &mut State) {
    let [a, b, c, d] = *state;
    state[0] = field::add(a, field::xtime(b));
    state[1] = field::add(field::xtime(a), b);
    state[2] = field::add(c, field::xtime(d));
    state[3] = field::add(field::xtime(c), d);
}

/// Inverse MixColumns: multiplication by `[[x, x²], [x², x]]`, the matrix
/// inverse of the forward coefficients over GF(2^3).
#[inline]
pub fn inv_mix_columns(state: &mut State) {
    let [a, b, c, d] = *state;
    state[0] = field::add(field::xtime(a), field::xtime2(b));
    state[1] = field::add(field::xtime2(a), field::xtime(b));
    state[2] = field::add(field::xtime(c), field::xtime2(d));
    state[3] = field::add(field::xtime2(c), field::xtime(d));
}

/// Adds (XORs) the round key into the flattened 12-bit state.
#[inline]
pub fn add_round_key(state: &mut State, key: &RoundKey) {
    let mixed = state_to_block(state) ^ key.bits();
    *state = state_from_block(mixed);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_round_key_is_an_involution() {
        for key_bits in [0x000, 0xccc, 0xa5a, 0xfff] {
            let key = RoundKey::from_bits(key_bits);
            for block in 0..(1u16 << 12) {
                let state = state_from_block(block);
                let mut mixed = state;
                add_round_key(&mut mixed, &key);
                add_round_key(&mut mixed, &key);
                assert_eq!(mixed, state);
            }
        }
    }

    #[test]
    fn mix_columns_inverse_restores_every_state() {
        for block in 0..(1u16 << 12) {
            let state = state_from_block(block);
            let mut mixed = state;
            mix_columns(&mut mixed);
            inv_mix_columns(&mut mixed);
            assert_eq!(mixed, state);
        }
    }

    #[test]
    fn mix_columns_matches_coefficient_matrix() {
        // Row [5, 3]: x·3 = 6 and x·5 = 1, so the row becomes [5 ⊕ 6, 1 ⊕ 3].
        let mut state = [5, 3, 0, 0];
        mix_columns(&mut state);
        assert_eq!(state, [3, 2, 0, 0]);
    }

    #[test]
    fn shift_rows_rotates_only_the_second_row() {
        let mut state = [1, 2, 3, 4];
        shift_rows(&mut state);
        assert_eq!(state, [1, 2, 4, 3]);
        inv_shift_rows(&mut state);
        assert_eq!(state, [1, 2, 3, 4]);
    }

    #[test]
    fn sub_bytes_round_trips() {
        let mut state = [0, 3, 5, 7];
        sub_bytes(&mut state);
        assert_eq!(state, [0, 6, 2, 4]);
        inv_sub_bytes(&mut state);
        assert_eq!(state, [0, 3, 5, 7]);
    }
}
