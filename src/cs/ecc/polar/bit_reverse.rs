//! Bit-reversal permutation of indices.

use crate::cs::ecc::Result;
use crate::error::Error;
use num_traits::{PrimInt, Unsigned};

/// Reverse the low `active_bits` bits of `value`.
///
/// Bits above `active_bits` are ignored, so the result always fits in
/// `active_bits` bits. Applying the function twice with the same width
/// gives back the original value for any `value < 2^active_bits`.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] when `active_bits` is zero or wider than `T`.
///
/// # Example
/// ```
/// use polar_common::bit_reverse;
///
/// // 001 -> 100
/// assert_eq!(bit_reverse(1u32, 3).unwrap(), 4);
/// ```
pub fn bit_reverse<T>(value: T, active_bits: u32) -> Result<T>
where
    T: PrimInt + Unsigned,
{
    let width = T::zero().count_zeros();
    if active_bits == 0 || active_bits > width {
        return Err(Error::argument(format!(
            "active_bits must be in 1..={}, got {}",
            width, active_bits
        )));
    }

    // Full-width reversal moves bit i to width-1-i; shifting drops the
    // reversed upper bits and lands bit i at active_bits-1-i.
    Ok(value.reverse_bits() >> (width - active_bits) as usize)
}
