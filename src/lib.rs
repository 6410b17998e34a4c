//! Hamming(7,4) error-correcting block code.
//!
//! Hamming(7,4) encodes 4 data bits into a 7-bit codeword by adding 3 parity
//! bits, and corrects any single flipped bit per codeword on decode. The
//! syndrome computed from a received codeword is numerically equal to the
//! 1-based position of the flipped bit, which makes correction a single XOR.
//!
//! This crate provides:
//! - The bit-index predicates defining the codeword layout ([`layout`])
//! - Parity and syndrome calculation over bit slices ([`parity`])
//! - Encoding/decoding of single 4-bit nibbles ([`nibble`])
//! - A block codec over arbitrary-length bit arrays ([`block`])
//! - A byte-stream adapter splitting bytes into nibbles ([`bytes`])
//!
//! All buffers are caller-owned `bitvec` slices; the core never allocates.
//! Each 7-bit block is independent of every other block, so callers may
//! partition large buffers across threads over disjoint slices.
//!
//! # Limitations
//!
//! Hamming(7,4) guarantees single-error correction only. Two flipped bits in
//! one codeword produce a syndrome pointing at a third, uncorrupted position,
//! and the decoder silently returns wrong data. Callers needing double-error
//! detection must layer an outer integrity check such as a CRC.
//!
//! # Examples
//!
//! ```
//! use bitvec::prelude::*;
//! use hamming74::{encode_nibble, decode_nibble};
//!
//! let data = bits![u8, Msb0; 1, 0, 1, 1];
//! let code = bits![mut u8, Msb0; 0; 7];
//! encode_nibble(data, code);
//! assert_eq!(code, bits![u8, Msb0; 0, 1, 1, 0, 0, 1, 1]);
//!
//! // Corrupt one bit; decoding still recovers the nibble.
//! let flipped = !code[4];
//! code.set(4, flipped);
//! let recovered = bits![mut u8, Msb0; 0; 4];
//! decode_nibble(code, recovered);
//! assert_eq!(recovered, data);
//! ```

pub mod block;
pub mod bytes;
pub mod error;
pub mod layout;
pub mod nibble;
pub mod parity;

pub use block::{decode_blocks, decoded_len, encode_blocks, encoded_len};
pub use bytes::{decode_bytes, encode_bytes};
pub use error::{Error, Result};
pub use nibble::{decode_nibble, encode_nibble};
pub use parity::{group_parity, syndrome};
