//! Block codec over arbitrary-length bit arrays.
//!
//! Encoding walks the input in 4-bit groups and writes 7-bit codewords
//! consecutively; decoding walks 7-bit groups and writes 4-bit nibbles.
//! Blocks are independent, so a large buffer may be split at any block
//! boundary and the pieces processed separately (or on separate threads over
//! disjoint slices) with identical results.

use crate::error::{Error, Result};
use crate::layout::{CODE_BITS, DATA_BITS};
use crate::nibble::{decode_nibble, encode_nibble};
use bitvec::prelude::*;

/// Number of encoded bits produced for `data_bits` input bits.
pub fn encoded_len(data_bits: usize) -> usize {
    data_bits / DATA_BITS * CODE_BITS
}

/// Number of decoded bits produced for `code_bits` encoded bits.
pub fn decoded_len(code_bits: usize) -> usize {
    code_bits / CODE_BITS * DATA_BITS
}

/// Encodes a bit array, 4 input bits to 7 output bits per block.
///
/// `input.len()` must be a multiple of 4 and `output.len()` exactly
/// `encoded_len(input.len())`; anything else is rejected with
/// [`Error::InvalidInput`].
pub fn encode_blocks(input: &BitSlice<u8, Msb0>, output: &mut BitSlice<u8, Msb0>) -> Result<()> {
    if input.len() % DATA_BITS != 0 {
        return Err(Error::InvalidInput(format!(
            "Input length {} is not a multiple of {}",
            input.len(),
            DATA_BITS
        )));
    }
    if output.len() != encoded_len(input.len()) {
        return Err(Error::InvalidInput(format!(
            "Output length {} does not match expected {}",
            output.len(),
            encoded_len(input.len())
        )));
    }

    for block in 0..input.len() / DATA_BITS {
        encode_nibble(
            &input[block * DATA_BITS..(block + 1) * DATA_BITS],
            &mut output[block * CODE_BITS..(block + 1) * CODE_BITS],
        );
    }

    Ok(())
}

/// Decodes an encoded bit array, 7 input bits to 4 output bits per block,
/// correcting up to one flipped bit per 7-bit block.
///
/// `input.len()` must be a multiple of 7 and `output.len()` exactly
/// `decoded_len(input.len())`; anything else is rejected with
/// [`Error::InvalidInput`]. The input is not modified; each block is copied
/// to a scratch codeword before correction.
pub fn decode_blocks(input: &BitSlice<u8, Msb0>, output: &mut BitSlice<u8, Msb0>) -> Result<()> {
    if input.len() % CODE_BITS != 0 {
        return Err(Error::InvalidInput(format!(
            "Input length {} is not a multiple of {}",
            input.len(),
            CODE_BITS
        )));
    }
    if output.len() != decoded_len(input.len()) {
        return Err(Error::InvalidInput(format!(
            "Output length {} does not match expected {}",
            output.len(),
            decoded_len(input.len())
        )));
    }

    let mut scratch = bitarr![u8, Msb0; 0; 7];
    for block in 0..input.len() / CODE_BITS {
        scratch[..CODE_BITS]
            .copy_from_bitslice(&input[block * CODE_BITS..(block + 1) * CODE_BITS]);
        decode_nibble(
            &mut scratch[..CODE_BITS],
            &mut output[block * DATA_BITS..(block + 1) * DATA_BITS],
        );
    }

    Ok(())
}
