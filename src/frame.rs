//! Status/size/data/CRC response frames
//!
//! ```text
//! +--------+------+------------------+-----------+
//! | status | size | data (size bytes)| crc16 LE  |
//! +--------+------+------------------+-----------+
//! ```
//!
//! The CRC covers status, size and data. Decoding is stateless, one frame per call.
use crate::codec::{hex_to_bytes, to_hex};
use crate::consts::{
    CRC16_LEN, FRAME_HEADER_LEN, FRAME_MAX_DATA_LEN, FRAME_MIN_LEN, FRAME_SIZE_POS,
    FRAME_STATUS_POS,
};
use crate::crc::{crc16, crc16_update};
use crate::{ErrorKind, VectorTrait};
use alloc::string::String;
use alloc::vec::Vec;

/// Decoded frame
///
/// A CRC mismatch does not fail decoding, the fields are returned with **crc_valid** unset and
/// the caller decides whether to discard them (see [`FrameFields::verified`]).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "with_serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameFields {
    pub status: u8,
    pub size: u8,
    pub data: Vec<u8>,
    /// CRC as received
    pub crc: u16,
    pub crc_valid: bool,
}

impl FrameFields {
    /// Strict form: fails with **CrcMismatch** if the received CRC is wrong
    pub fn verified(self) -> Result<Self, ErrorKind> {
        if self.crc_valid {
            Ok(self)
        } else {
            Err(ErrorKind::CrcMismatch)
        }
    }

    #[inline]
    pub fn data_hex(&self) -> String {
        to_hex(&self.data)
    }

    /// CRC in wire order, as it appears in the frame hex
    #[inline]
    pub fn crc_hex(&self) -> String {
        to_hex(&self.crc.to_le_bytes())
    }
}

/// Decode a raw frame
///
/// The buffer MUST contain exactly one frame
///
/// Errors:
///
/// * **TruncatedFrame** less than 4 bytes, or the declared size exceeds the bytes available
///   before the CRC
/// * **InvalidLength** extra bytes after the CRC
pub fn decode(buf: &[u8]) -> Result<FrameFields, ErrorKind> {
    let l = buf.len();
    if l < FRAME_MIN_LEN {
        trace!("frame truncated: {} bytes", l);
        return Err(ErrorKind::TruncatedFrame);
    }
    let status = buf[FRAME_STATUS_POS];
    let size = buf[FRAME_SIZE_POS];
    let data_end = FRAME_HEADER_LEN + size as usize;
    let expected = data_end + CRC16_LEN;
    if l < expected {
        trace!("frame truncated: {} bytes, {} declared", l, expected);
        return Err(ErrorKind::TruncatedFrame);
    }
    if l > expected {
        trace!("frame too long: {} bytes, {} declared", l, expected);
        return Err(ErrorKind::InvalidLength);
    }
    let crc = u16::from_le_bytes([buf[data_end], buf[data_end + 1]]);
    let crc_valid = crc16(&buf[..data_end]) == crc;
    if !crc_valid {
        warn!("frame CRC mismatch, status {=u8}, size {=u8}", status, size);
    }
    Ok(FrameFields {
        status,
        size,
        data: buf[FRAME_HEADER_LEN..data_end].to_vec(),
        crc,
        crc_valid,
    })
}

/// Decode a hex-encoded frame, as received from the device text channel
///
/// Errors: same as [`decode`], plus **MalformedHex**
pub fn decode_hex(hex: &str) -> Result<FrameFields, ErrorKind> {
    decode(&hex_to_bytes(hex)?)
}

/// Build a frame: status, size, data and CRC
///
/// Errors:
///
/// * **InvalidLength** data is longer than 255 bytes
/// * **OOB** the output vector has no space left
pub fn encode_into<V: VectorTrait<u8>>(
    status: u8,
    data: &[u8],
    result: &mut V,
) -> Result<(), ErrorKind> {
    if data.len() > FRAME_MAX_DATA_LEN {
        return Err(ErrorKind::InvalidLength);
    }
    #[allow(clippy::cast_possible_truncation)]
    let header = [status, data.len() as u8];
    let crc = crc16_update(crc16(&header), data);
    result.extend(&header)?;
    result.extend(data)?;
    result.extend(&crc.to_le_bytes())
}

pub fn encode(status: u8, data: &[u8]) -> Result<Vec<u8>, ErrorKind> {
    let mut result = Vec::with_capacity(data.len() + FRAME_MIN_LEN);
    encode_into(status, data, &mut result)?;
    Ok(result)
}

pub fn encode_hex(status: u8, data: &[u8]) -> Result<String, ErrorKind> {
    Ok(to_hex(&encode(status, data)?))
}
