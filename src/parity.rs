//! Parity and syndrome calculation.
//!
//! The even parity of a parity group is the XOR of every bit the group
//! covers. Collecting each group's parity into one integer yields the
//! syndrome: zero for a consistent codeword, otherwise the 1-based position
//! of the single flipped bit.

use crate::layout::{group_covers, parity_position};
use bitvec::prelude::*;

/// Computes the even parity of one parity group over a bit slice.
///
/// XORs every bit at 0-based index `i` in `[2^group - 1, bits.len())` with
/// `group_covers(group, i)`. Returns `false` for an empty group (first
/// covered index past the end of the slice). Pure and total for any slice
/// length and any group.
pub fn group_parity(bits: &BitSlice<u8, Msb0>, group: usize) -> bool {
    let first = parity_position(group);
    let mut parity = false;
    for i in first..bits.len() {
        if group_covers(group, i) && bits[i] {
            parity = !parity;
        }
    }
    parity
}

/// Computes the syndrome of a received codeword.
///
/// Bit `p` of the result is the parity of group `p`, for every group whose
/// parity bit fits inside the slice. The result is 0 iff every parity bit
/// matches the even parity of its group; a non-zero syndrome `s` names the
/// 1-based position of the single inconsistent bit.
///
/// With two flipped bits the syndrome is the XOR of their positions and
/// points at a third, uncorrupted bit. Hamming(7,4) cannot distinguish that
/// case from a single flip.
pub fn syndrome(code: &BitSlice<u8, Msb0>) -> usize {
    let mut syndrome = 0;
    let mut group = 0;
    while (1 << group) <= code.len() {
        if parity_position(group) >= code.len() {
            break;
        }
        if group_parity(code, group) {
            syndrome |= 1 << group;
        }
        group += 1;
    }
    syndrome
}
