//! CRC-16/MODBUS
//!
//! Polynomial 0x8005 (processed reflected as 0xA001), init 0xFFFF, input and output reflected, no
//! final XOR. The check value for "123456789" is 0x4B37. On the wire the CRC is sent low byte
//! first.
use crate::codec::{hex_to_bytes, to_hex};
use crate::consts::{CRC16_INIT, CRC16_LEN, CRC16_POLY_REFLECTED};
use crate::{ErrorKind, VectorTrait};
use alloc::string::String;

/// Calculate CRC-16/MODBUS of the data
///
/// Total function, the CRC of an empty slice is the init value 0xFFFF.
#[inline]
pub fn crc16(data: &[u8]) -> u16 {
    crc16_update(CRC16_INIT, data)
}

/// Continue a CRC over the next part of a message
///
/// `crc16_update(crc16(a), b) == crc16(a ++ b)`
pub fn crc16_update(mut crc: u16, data: &[u8]) -> u16 {
    for i in data {
        crc ^= u16::from(*i);
        for _ in 0..8 {
            if (crc & 0x0001) == 0 {
                crc >>= 1;
            } else {
                crc >>= 1;
                crc ^= CRC16_POLY_REFLECTED;
            }
        }
    }
    crc
}

/// CRC of a hex payload, rendered in wire order (low byte first), e.g. "01030000000a" gives
/// "c5cd"
///
/// Errors:
///
/// * **MalformedHex** the payload is not valid hex
pub fn crc16_hex(hex: &str) -> Result<String, ErrorKind> {
    let data = hex_to_bytes(hex)?;
    Ok(to_hex(&crc16(&data).to_le_bytes()))
}

/// Push the payload followed by its CRC to the output vector
pub fn append_crc16<V: VectorTrait<u8>>(payload: &[u8], result: &mut V) -> Result<(), ErrorKind> {
    result.extend(payload)?;
    result.extend(&crc16(payload).to_le_bytes())
}

/// Check a buffer which ends with its own CRC (wire order)
///
/// Buffers shorter than the CRC itself are never valid.
pub fn verify_crc16(data: &[u8]) -> bool {
    if data.len() < CRC16_LEN {
        return false;
    }
    let l = data.len() - CRC16_LEN;
    crc16(&data[..l]) == u16::from_le_bytes([data[l], data[l + 1]])
}
