//! Error correction code building blocks.
//!
//! This module provides the pieces shared by the polar code encoders and
//! decoders:
//! - Validated code parameters (block size, frozen layout, info positions)
//! - Bit-reversal of indices for the butterfly recursion
//! - Packed and unpacked bit-array diagnostics
//!
//! # Polar Codes
//!
//! A polar code of length N = 2^n carries K information bits; the remaining
//! N - K positions are frozen to values known to both ends of the link.
//!
//! # Examples
//!
//! ```rust
//! use polar_common::cs::ecc::polar::CodeParameters;
//!
//! let params = CodeParameters::new(8, 4, vec![0, 1, 2, 4], vec![0, 0, 0, 0]).unwrap();
//! assert_eq!(params.info_bit_positions(), &[3, 5, 6, 7]);
//! assert_eq!(params.block_power(), 3);
//! ```

pub use crate::error::Result;

/// Polar code parameters and helpers
pub mod polar;
pub use polar::{
    bit_reverse, create_code_parameters, format_packed_bits, format_unpacked_bits, BitUnpacker,
    CodeParameters, Lsb0Unpacker, Msb0Unpacker,
};
