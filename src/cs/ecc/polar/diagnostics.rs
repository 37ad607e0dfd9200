//! Human-readable rendering of packed and unpacked bit buffers.
//!
//! Both formatters render bit values separated by single spaces, so a packed
//! byte and its 8 unpacked counterparts produce identical text.

use super::unpack::{unpack_bytes, BitUnpacker};
use crate::cs::ecc::Result;
use crate::error::Error;
use log::debug;

fn checked_prefix(buffer: &[u8], num_bytes: usize) -> Result<&[u8]> {
    buffer.get(..num_bytes).ok_or_else(|| {
        Error::argument(format!(
            "buffer holds {} bytes, {} requested",
            buffer.len(),
            num_bytes
        ))
    })
}

fn join_bits(bits: &[u8]) -> String {
    bits.iter()
        .map(|bit| bit.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render the first `num_bytes` packed bytes of `buffer` as `8 * num_bytes` bit values.
///
/// Each byte is expanded by `unpacker`, so the bit order of the text is the
/// unpacker's order.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `buffer` is shorter than `num_bytes`.
///
/// # Example
/// ```
/// use polar_common::{format_packed_bits, Msb0Unpacker};
///
/// let text = format_packed_bits(&[0b1011_0000], 1, &Msb0Unpacker).unwrap();
/// assert_eq!(text, "1 0 1 1 0 0 0 0");
/// ```
pub fn format_packed_bits<U: BitUnpacker + ?Sized>(
    buffer: &[u8],
    num_bytes: usize,
    unpacker: &U,
) -> Result<String> {
    let packed = checked_prefix(buffer, num_bytes)?;
    Ok(join_bits(&unpack_bytes(packed, unpacker)))
}

/// Render the first `num_bytes` bytes of `buffer`, each holding one bit, as-is.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `buffer` is shorter than `num_bytes`.
pub fn format_unpacked_bits(buffer: &[u8], num_bytes: usize) -> Result<String> {
    let bits = checked_prefix(buffer, num_bytes)?;
    Ok(join_bits(bits))
}

/// Log a packed buffer at debug level under `label`.
pub fn log_packed_bits<U: BitUnpacker + ?Sized>(
    label: &str,
    buffer: &[u8],
    num_bytes: usize,
    unpacker: &U,
) -> Result<()> {
    let text = format_packed_bits(buffer, num_bytes, unpacker)?;
    debug!("{} [{}]", label, text);
    Ok(())
}

/// Log an unpacked buffer at debug level under `label`.
pub fn log_unpacked_bits(label: &str, buffer: &[u8], num_bytes: usize) -> Result<()> {
    let text = format_unpacked_bits(buffer, num_bytes)?;
    debug!("{} ({})", label, text);
    Ok(())
}
