//! Byte-stream adapter.
//!
//! Splits a byte buffer into 4-bit nibbles and runs them through the block
//! codec. Byte `k` contributes nibble `2k` (the high 4 bits) followed by
//! nibble `2k + 1` (the low 4 bits), each extracted most-significant-bit
//! first. That is exactly the `Msb0` bit view of the byte stream, so the
//! framing is preserved bit-for-bit by viewing the bytes directly.

use crate::block::{decode_blocks, decoded_len, encode_blocks, encoded_len};
use crate::error::{Error, Result};
use crate::layout::CODE_BITS;
use bitvec::prelude::*;
use bitvec::view::BitView;

/// Encodes a byte buffer into a Hamming(7,4) bit stream.
///
/// Produces `14` bits per input byte (two 7-bit codewords, high nibble
/// first). This is the one operation of the crate that allocates; the
/// returned `BitVec` is the caller's to keep.
pub fn encode_bytes(data: &[u8]) -> BitVec<u8, Msb0> {
    let bits = data.view_bits::<Msb0>();
    let mut encoded = bitvec![u8, Msb0; 0; encoded_len(bits.len())];
    // A byte view is always nibble-aligned and the output is sized to match.
    encode_blocks(bits, &mut encoded).expect("byte view is a multiple of 4 bits");
    encoded
}

/// Decodes a Hamming(7,4) bit stream back into bytes, correcting up to one
/// flipped bit per 7-bit codeword.
///
/// `encoded.len()` must be a multiple of 14 so the decoded nibbles repack
/// into whole bytes; anything else is rejected with [`Error::InvalidInput`].
pub fn decode_bytes(encoded: &BitSlice<u8, Msb0>) -> Result<Vec<u8>> {
    if encoded.len() % (2 * CODE_BITS) != 0 {
        return Err(Error::InvalidInput(format!(
            "Encoded length {} is not a multiple of {}",
            encoded.len(),
            2 * CODE_BITS
        )));
    }

    let mut decoded = bitvec![u8, Msb0; 0; decoded_len(encoded.len())];
    decode_blocks(encoded, &mut decoded)?;
    Ok(decoded.as_raw_slice().to_vec())
}
