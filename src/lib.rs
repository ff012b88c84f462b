#![ doc = include_str!( concat!( env!( "CARGO_MANIFEST_DIR" ), "/", "README.md" ) ) ]
#![ doc = include_str!( concat!( env!( "CARGO_MANIFEST_DIR" ), "/", "CHANGELOG.md" ) ) ]
#![cfg_attr(not(any(feature = "std", test)), no_std)]

extern crate alloc;

#[macro_use]
mod macros;

pub mod chunk;
pub mod cipher;
pub mod codec;
pub mod consts;
pub mod crc;
pub mod field;
pub mod frame;
pub mod sort;
pub mod text;

mod vector;
pub use vector::VectorTrait;

mod error;
pub use error::ErrorKind;

pub use cipher::{aes_cfb8, decrypt, encrypt, CipherParams, Direction};
pub use crc::crc16;
pub use frame::FrameFields;

#[cfg(test)]
mod tests;

/// Byte order of a multi-byte numeric field
///
/// * for **Little**, the first byte (first hex pair) is the least significant one
/// * for **Big**, the first byte is the most significant one
#[derive(PartialEq, Eq, Debug, Copy, Clone, Hash)]
#[cfg_attr(feature = "with_serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with_bincode", derive(bincode::Encode, bincode::Decode))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Endianness {
    Little,
    Big,
}

impl Endianness {
    /// Maps the "is little endian" flag used by device register tables
    #[inline]
    pub fn from_little(little: bool) -> Self {
        if little {
            Endianness::Little
        } else {
            Endianness::Big
        }
    }

    #[inline]
    pub fn is_little(self) -> bool {
        self == Endianness::Little
    }
}
