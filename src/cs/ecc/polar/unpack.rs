//! Unpacking of packed bytes into one-bit-per-byte form.

use bitvec::prelude::*;

/// Expands one packed byte into 8 bit values (each 0 or 1).
///
/// The order of the returned bits is fixed by the implementation. Any
/// `Fn(u8) -> [u8; 8]` closure is an unpacker as well.
pub trait BitUnpacker {
    /// Unpack `byte` into 8 one-byte bit values
    fn unpack_byte(&self, byte: u8) -> [u8; 8];
}

/// Most significant bit first: `0b1011_0000` unpacks to `[1, 0, 1, 1, 0, 0, 0, 0]`.
///
/// This is the order used by the polar kernels for packed I/O.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Msb0Unpacker;

/// Least significant bit first: `0b1011_0000` unpacks to `[0, 0, 0, 0, 1, 1, 0, 1]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Lsb0Unpacker;

fn unpack_with<O: BitOrder>(byte: u8) -> [u8; 8] {
    let mut bits = [0u8; 8];
    for (slot, bit) in bits.iter_mut().zip(byte.view_bits::<O>().iter().by_vals()) {
        *slot = u8::from(bit);
    }
    bits
}

impl BitUnpacker for Msb0Unpacker {
    fn unpack_byte(&self, byte: u8) -> [u8; 8] {
        unpack_with::<Msb0>(byte)
    }
}

impl BitUnpacker for Lsb0Unpacker {
    fn unpack_byte(&self, byte: u8) -> [u8; 8] {
        unpack_with::<Lsb0>(byte)
    }
}

impl<F> BitUnpacker for F
where
    F: Fn(u8) -> [u8; 8],
{
    fn unpack_byte(&self, byte: u8) -> [u8; 8] {
        self(byte)
    }
}

/// Unpack every byte of `bytes`, 8 output values per input byte.
pub fn unpack_bytes<U: BitUnpacker + ?Sized>(bytes: &[u8], unpacker: &U) -> Vec<u8> {
    let mut bits = Vec::with_capacity(bytes.len() * 8);
    for &byte in bytes {
        bits.extend_from_slice(&unpacker.unpack_byte(byte));
    }
    bits
}
