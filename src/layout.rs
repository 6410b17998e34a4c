//! Codeword layout of the Hamming(7,4) code.
//!
//! Position roles inside a codeword are fixed and derived purely from index
//! arithmetic on 1-based positions:
//! - Parity bits sit at positions that are powers of two (1, 2, 4), which is
//!   0-based indices 0, 1 and 3.
//! - Data bits fill the remaining indices 2, 4, 5, 6 in scan order.
//! - Parity group `p` covers every position whose 1-based index has bit `p`
//!   set, including the parity bit's own position.
//!
//! These predicates are the crux of the code: an off-by-one here produces a
//! different but internally self-consistent codeword layout, so they are kept
//! as standalone functions with exhaustive tests rather than inlined.

/// Number of data bits per block
pub const DATA_BITS: usize = 4;
/// Number of codeword bits per block
pub const CODE_BITS: usize = 7;
/// Number of parity bits (and parity groups) per block
pub const PARITY_BITS: usize = 3;

/// 0-based codeword indices holding the data bits `d1..d4`, in nibble order.
pub const DATA_POSITIONS: [usize; DATA_BITS] = [2, 4, 5, 6];

/// Returns true if the 0-based `index` holds a parity bit.
///
/// `index & (index + 1) == 0` holds exactly when `index + 1` is a power of
/// two, i.e. at indices 0, 1, 3, 7, ...
pub fn is_parity_position(index: usize) -> bool {
    index & (index + 1) == 0
}

/// 0-based codeword index of the parity bit for parity group `group`.
pub fn parity_position(group: usize) -> usize {
    (1 << group) - 1
}

/// Returns true if parity group `group` covers the bit at 0-based `index`.
///
/// Membership is determined by the 1-based position's binary representation:
/// group `p` covers every position with bit `p` set.
pub fn group_covers(group: usize, index: usize) -> bool {
    (index + 1) & (1 << group) != 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parity_positions() {
        let parity: Vec<usize> = (0..CODE_BITS).filter(|&i| is_parity_position(i)).collect();
        assert_eq!(parity, vec![0, 1, 3]);
    }

    #[test]
    fn test_data_positions() {
        let data: Vec<usize> = (0..CODE_BITS).filter(|&i| !is_parity_position(i)).collect();
        assert_eq!(data, DATA_POSITIONS.to_vec());
    }

    #[test]
    fn test_parity_position_of_group() {
        assert_eq!(parity_position(0), 0);
        assert_eq!(parity_position(1), 1);
        assert_eq!(parity_position(2), 3);
    }

    #[test]
    fn test_group_covers_own_parity_bit() {
        for group in 0..PARITY_BITS {
            assert!(group_covers(group, parity_position(group)));
        }
    }

    #[test]
    fn test_group_membership() {
        // Group 0 covers 1-based positions 1, 3, 5, 7.
        let members: Vec<usize> = (0..CODE_BITS).filter(|&i| group_covers(0, i)).collect();
        assert_eq!(members, vec![0, 2, 4, 6]);

        // Group 1 covers 1-based positions 2, 3, 6, 7.
        let members: Vec<usize> = (0..CODE_BITS).filter(|&i| group_covers(1, i)).collect();
        assert_eq!(members, vec![1, 2, 5, 6]);

        // Group 2 covers 1-based positions 4, 5, 6, 7.
        let members: Vec<usize> = (0..CODE_BITS).filter(|&i| group_covers(2, i)).collect();
        assert_eq!(members, vec![3, 4, 5, 6]);
    }

    #[test]
    fn test_position_group_bijection() {
        // Each codeword index maps to a unique non-empty subset of groups,
        // equal to the bit pattern of its 1-based position. This is what
        // makes the syndrome numerically identify the flipped position.
        for index in 0..CODE_BITS {
            let mut subset = 0usize;
            for group in 0..PARITY_BITS {
                if group_covers(group, index) {
                    subset |= 1 << group;
                }
            }
            assert_eq!(subset, index + 1);
        }
    }
}
