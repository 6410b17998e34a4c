//! Encoding and decoding of single 4-bit nibbles.
//!
//! One nibble maps to one 7-bit codeword. Data bits go to the non-parity
//! positions in scan order; the 3 parity bits are computed last so that each
//! parity calculation reads only data bits and lower parity positions that
//! are already final.

use crate::layout::{is_parity_position, parity_position, CODE_BITS, DATA_BITS, DATA_POSITIONS, PARITY_BITS};
use crate::parity::{group_parity, syndrome};
use bitvec::prelude::*;

/// Encodes a 4-bit nibble into a 7-bit codeword.
///
/// `data` must be exactly [`DATA_BITS`] long and `code` exactly
/// [`CODE_BITS`]; the output is fully overwritten. For any nibble this
/// produces the unique valid Hamming(7,4) codeword. Infallible.
pub fn encode_nibble(data: &BitSlice<u8, Msb0>, code: &mut BitSlice<u8, Msb0>) {
    debug_assert_eq!(data.len(), DATA_BITS);
    debug_assert_eq!(code.len(), CODE_BITS);

    code.fill(false);

    // Place data bits at the non-parity positions, in nibble order.
    let mut next = 0;
    for i in 0..code.len() {
        if is_parity_position(i) {
            continue;
        }
        code.set(i, data[next]);
        next += 1;
    }

    // Fill the parity positions from the now-placed data bits.
    for group in 0..PARITY_BITS {
        let parity = group_parity(code, group);
        code.set(parity_position(group), parity);
    }
}

/// Decodes a 7-bit codeword into a 4-bit nibble, correcting in place.
///
/// `code` must be exactly [`CODE_BITS`] long and `data` exactly
/// [`DATA_BITS`]. A non-zero syndrome flips the indicated codeword bit
/// before the data bits at indices 2, 4, 5, 6 are extracted, so `code`
/// holds the corrected codeword afterwards.
///
/// If at most one bit was flipped since encoding, the output equals the
/// original nibble. Two flips mis-correct a third position and return wrong
/// data with no indication; that is inherent to Hamming(7,4). Always total,
/// never panics on a 7-bit input.
pub fn decode_nibble(code: &mut BitSlice<u8, Msb0>, data: &mut BitSlice<u8, Msb0>) {
    debug_assert_eq!(code.len(), CODE_BITS);
    debug_assert_eq!(data.len(), DATA_BITS);

    let s = syndrome(code);
    if s != 0 {
        let error_pos = s - 1;
        if error_pos < code.len() {
            let flipped = !code[error_pos];
            code.set(error_pos, flipped);
            log::debug!("corrected single-bit error at index {}", error_pos);
        } else {
            // Unreachable for a true 7-bit codeword; left as a guard.
            log::warn!("syndrome {} outside codeword, no correction applied", s);
        }
    }

    for (slot, &pos) in DATA_POSITIONS.iter().enumerate() {
        data.set(slot, code[pos]);
    }
}
