//! Hex / ASCII / numeric conversions
//!
//! Hex output is always lowercase unless uppercase is explicitly requested. Hex input is
//! case-insensitive and may contain ASCII whitespace between digit pairs (e.g. "01 0a FF").
use crate::consts::MAX_INT_WIDTH;
use crate::{Endianness, ErrorKind, VectorTrait};
use alloc::string::String;
use alloc::vec::Vec;
use ieee754::Ieee754;

/// Render bytes as a hex string
///
/// * **uppercase** use A-F instead of a-f
/// * **spaced** separate byte pairs with a single space
pub fn bytes_to_hex(data: &[u8], uppercase: bool, spaced: bool) -> String {
    let mut result = String::with_capacity(data.len() * 3);
    bytes_to_hex_into(data, uppercase, spaced, &mut result);
    result
}

/// Same as [`bytes_to_hex`], appends to an existing string
pub fn bytes_to_hex_into(data: &[u8], uppercase: bool, spaced: bool, result: &mut String) {
    let encoded = if uppercase {
        hex::encode_upper(data)
    } else {
        hex::encode(data)
    };
    if !spaced {
        result.push_str(&encoded);
        return;
    }
    for (i, pair) in encoded.as_bytes().chunks(2).enumerate() {
        if i > 0 {
            result.push(' ');
        }
        result.push(char::from(pair[0]));
        result.push(char::from(pair[1]));
    }
}

/// Canonical (lowercase, no spaces) hex form of bytes
#[inline]
pub fn to_hex(data: &[u8]) -> String {
    hex::encode(data)
}

/// Decode a hex string to bytes
///
/// Whitespace is accepted only between digit pairs ("01 ab"), never inside a pair ("0 1").
///
/// Errors:
///
/// * **MalformedHex** odd number of digits in a group or a non-hex character
pub fn hex_to_bytes(hex: &str) -> Result<Vec<u8>, ErrorKind> {
    if !hex.bytes().any(|c| c.is_ascii_whitespace()) {
        return Ok(hex::decode(hex)?);
    }
    let mut result = Vec::with_capacity(hex.len() / 2);
    for group in hex.split_ascii_whitespace() {
        result.extend_from_slice(&hex::decode(group)?);
    }
    Ok(result)
}

/// Decode a hex string, appending the bytes to the output vector
///
/// Errors:
///
/// * **MalformedHex** the input is not valid hex, nothing is appended
/// * **OOB** the output vector has no space left
pub fn hex_to_bytes_into<V: VectorTrait<u8>>(hex: &str, result: &mut V) -> Result<(), ErrorKind> {
    let data = hex_to_bytes(hex)?;
    result.extend(&data)
}

/// Reverse byte order inside each **width**-byte field of a hex string
///
/// "11223344" with width 2 gives "22114433", with width 4 gives "44332211".
///
/// Errors:
///
/// * **MalformedHex** the input is not valid hex
/// * **InvalidWidth** width is zero or does not evenly divide the input byte length
pub fn swap_endianness_hex(hex: &str, width: usize) -> Result<String, ErrorKind> {
    let mut data = hex_to_bytes(hex)?;
    if width == 0 || data.len() % width != 0 {
        return Err(ErrorKind::InvalidWidth);
    }
    for field in data.chunks_mut(width) {
        field.reverse();
    }
    Ok(to_hex(&data))
}

/// Reverse byte order of a **width**-byte unsigned value
///
/// Errors:
///
/// * **InvalidWidth** width is not 1..=8
/// * **ValueOverflow** the value has bits above the field width
pub fn swap_endianness_value(value: u64, width: usize) -> Result<u64, ErrorKind> {
    check_width(width)?;
    if !fits_unsigned(value, width) {
        return Err(ErrorKind::ValueOverflow);
    }
    let mut buf = value.to_le_bytes();
    buf[..width].reverse();
    Ok(u64::from_le_bytes(buf))
}

/// Encode an unsigned value as a **width**-byte hex field
///
/// Errors:
///
/// * **InvalidWidth** width is not 1..=8
/// * **ValueOverflow** the value does not fit the width
pub fn decimal_to_hex(value: u64, endian: Endianness, width: usize) -> Result<String, ErrorKind> {
    check_width(width)?;
    if !fits_unsigned(value, width) {
        return Err(ErrorKind::ValueOverflow);
    }
    Ok(encode_field(value, endian, width))
}

/// Encode a signed value as a two's complement **width**-byte hex field
///
/// Errors:
///
/// * **InvalidWidth** width is not 1..=8
/// * **ValueOverflow** the value is outside of the signed range of the width
pub fn signed_decimal_to_hex(
    value: i64,
    endian: Endianness,
    width: usize,
) -> Result<String, ErrorKind> {
    check_width(width)?;
    if width < MAX_INT_WIDTH {
        let bits = width * 8;
        let min = -(1i64 << (bits - 1));
        let max = (1i64 << (bits - 1)) - 1;
        if value < min || value > max {
            return Err(ErrorKind::ValueOverflow);
        }
    }
    #[allow(clippy::cast_sign_loss)]
    let raw = value as u64 & width_mask(width);
    Ok(encode_field(raw, endian, width))
}

/// Numeric form of a decimal-to-hex conversion: the low **width** bytes of the value as u32,
/// byte-swapped if **swap** is set (e.g. 0x1234, width 2, swapped: 0x3412)
///
/// Errors:
///
/// * **InvalidWidth** width is not 1..=4
/// * **ValueOverflow** the value does not fit the width
#[allow(clippy::cast_possible_truncation)]
pub fn decimal_to_swapped_u32(value: u64, swap: bool, width: usize) -> Result<u32, ErrorKind> {
    if width == 0 || width > 4 {
        return Err(ErrorKind::InvalidWidth);
    }
    if !fits_unsigned(value, width) {
        return Err(ErrorKind::ValueOverflow);
    }
    if swap {
        Ok(swap_endianness_value(value, width)? as u32)
    } else {
        Ok(value as u32)
    }
}

/// Decode a 1..=8 byte hex field as unsigned integer
///
/// Errors:
///
/// * **MalformedHex** the input is not valid hex
/// * **InvalidLength** the input is empty or longer than 8 bytes
pub fn hex_to_decimal(hex: &str, endian: Endianness) -> Result<u64, ErrorKind> {
    let data = hex_to_bytes(hex)?;
    decode_unsigned(&data, endian)
}

/// Decode a 1..=8 byte hex field as two's complement signed integer, the sign bit is the top bit
/// of the field ("ff" is -1, "00ff" big endian is 255)
///
/// Errors:
///
/// * **MalformedHex** the input is not valid hex
/// * **InvalidLength** the input is empty or longer than 8 bytes
#[allow(clippy::cast_possible_wrap)]
pub fn hex_to_signed_decimal(hex: &str, endian: Endianness) -> Result<i64, ErrorKind> {
    let data = hex_to_bytes(hex)?;
    let unsigned = decode_unsigned(&data, endian)?;
    let shift = 64 - data.len() * 8;
    Ok(((unsigned << shift) as i64) >> shift)
}

/// Reinterpret 4 bytes as IEEE-754 single precision
///
/// Errors:
///
/// * **MalformedHex** the input is not valid hex
/// * **InvalidLength** the input is not exactly 8 hex digits
pub fn hex_to_float(hex: &str, endian: Endianness) -> Result<f32, ErrorKind> {
    let data = hex_to_bytes(hex)?;
    let raw: [u8; 4] = data
        .as_slice()
        .try_into()
        .map_err(|_| ErrorKind::InvalidLength)?;
    let bits = match endian {
        Endianness::Big => u32::from_be_bytes(raw),
        Endianness::Little => u32::from_le_bytes(raw),
    };
    Ok(Ieee754::from_bits(bits))
}

pub fn float_to_hex(value: f32, endian: Endianness) -> String {
    encode_field(u64::from(value.bits()), endian, 4)
}

/// Encode text as hex, one byte per character
///
/// Characters are taken as Latin-1 code points, control characters are not escaped.
///
/// Errors:
///
/// * **InvalidCharacter** a character is above U+00FF
pub fn ascii_to_hex(text: &str) -> Result<String, ErrorKind> {
    Ok(to_hex(&ascii_to_bytes(text)?))
}

#[allow(clippy::cast_possible_truncation)]
pub fn ascii_to_bytes(text: &str) -> Result<Vec<u8>, ErrorKind> {
    text.chars()
        .map(|c| {
            let code = u32::from(c);
            if code > 0xff {
                Err(ErrorKind::InvalidCharacter)
            } else {
                Ok(code as u8)
            }
        })
        .collect()
}

/// Decode hex as text, one character per byte (inverse of [`ascii_to_hex`])
pub fn hex_to_ascii(hex: &str) -> Result<String, ErrorKind> {
    let data = hex_to_bytes(hex)?;
    Ok(data.iter().map(|&b| char::from(b)).collect())
}

pub fn bytes_to_utf8(data: &[u8]) -> Result<String, ErrorKind> {
    Ok(core::str::from_utf8(data)?.into())
}

pub fn hex_to_utf8(hex: &str) -> Result<String, ErrorKind> {
    Ok(String::from_utf8(hex_to_bytes(hex)?)?)
}

#[inline]
fn check_width(width: usize) -> Result<(), ErrorKind> {
    if width == 0 || width > MAX_INT_WIDTH {
        Err(ErrorKind::InvalidWidth)
    } else {
        Ok(())
    }
}

#[inline]
fn width_mask(width: usize) -> u64 {
    if width >= MAX_INT_WIDTH {
        u64::MAX
    } else {
        (1u64 << (width * 8)) - 1
    }
}

#[inline]
fn fits_unsigned(value: u64, width: usize) -> bool {
    value & !width_mask(width) == 0
}

// width must be checked by the caller
fn encode_field(value: u64, endian: Endianness, width: usize) -> String {
    let be = value.to_be_bytes();
    let mut field = [0u8; MAX_INT_WIDTH];
    field[..width].copy_from_slice(&be[MAX_INT_WIDTH - width..]);
    if endian == Endianness::Little {
        field[..width].reverse();
    }
    to_hex(&field[..width])
}

fn decode_unsigned(data: &[u8], endian: Endianness) -> Result<u64, ErrorKind> {
    if data.is_empty() || data.len() > MAX_INT_WIDTH {
        return Err(ErrorKind::InvalidLength);
    }
    let push_byte = |acc: u64, b: &u8| acc << 8 | u64::from(*b);
    Ok(match endian {
        Endianness::Big => data.iter().fold(0, push_byte),
        Endianness::Little => data.iter().rev().fold(0, push_byte),
    })
}
