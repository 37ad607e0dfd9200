//! Polar code common parameters and helpers.
//!
//! Polar codes are a class of capacity-achieving error correction codes introduced by
//! Erdal Arikan in 2009 ("Channel Polarization: A Method for Constructing
//! Capacity-Achieving Codes for Symmetric Binary-Input Memoryless Channels").
//!
//! Polar codes work by "polarizing" the channel - transforming the physical transmission channel
//! into virtual channels that are either very reliable or very unreliable. Information bits
//! are sent over the reliable channels, while the unreliable ones are "frozen" to known values.
//!
//! This module holds what every polar encoder and decoder shares:
//! - [`CodeParameters`]: validated block size, info-bit count and frozen layout
//! - [`bit_reverse`]: index bit-reversal used by the butterfly recursion
//! - [`format_packed_bits`] / [`format_unpacked_bits`]: bit-array diagnostics
//!
//! Choosing *which* positions to freeze (Bhattacharyya bounds, Gaussian
//! approximation, 5G NR sequences) is left to the caller.
//!
//! # Bit Representations
//!
//! Encoders and decoders work with two layouts:
//! - packed: 8 bits per byte, most significant bit first by default
//! - unpacked: one bit per byte, each byte holding 0 or 1

mod bit_reverse;
mod diagnostics;
mod params;
mod unpack;

pub use bit_reverse::bit_reverse;
pub use diagnostics::{format_packed_bits, format_unpacked_bits, log_packed_bits, log_unpacked_bits};
pub use params::{create_code_parameters, CodeParameters};
pub use unpack::{unpack_bytes, BitUnpacker, Lsb0Unpacker, Msb0Unpacker};
