pub mod cs;
pub mod error;

pub use cs::ecc::polar;
pub use cs::ecc::polar::{
    bit_reverse, create_code_parameters, format_packed_bits, format_unpacked_bits, BitUnpacker,
    CodeParameters, Lsb0Unpacker, Msb0Unpacker,
};
pub use error::{Error, Result};
