//! Protocol constants

// CRC-16/MODBUS
pub const CRC16_INIT: u16 = 0xFFFF;
pub const CRC16_POLY_REFLECTED: u16 = 0xA001;
pub const CRC16_LEN: usize = 2;

// Frame layout: status(1) size(1) data(size) crc(2)
pub const FRAME_STATUS_POS: usize = 0;
pub const FRAME_SIZE_POS: usize = 1;
pub const FRAME_HEADER_LEN: usize = 2;
pub const FRAME_MIN_LEN: usize = FRAME_HEADER_LEN + CRC16_LEN;
pub const FRAME_MAX_DATA_LEN: usize = u8::MAX as usize;

// AES
pub const AES_BLOCK_LEN: usize = 16;
pub const AES_IV_LEN: usize = AES_BLOCK_LEN;
pub const AES128_KEY_LEN: usize = 16;
pub const AES192_KEY_LEN: usize = 24;
pub const AES256_KEY_LEN: usize = 32;

// Largest integer field handled by the codec, in bytes
pub const MAX_INT_WIDTH: usize = 8;

// Data field type codes
pub const FIELD_TYPE_UINT32: u8 = 1;
pub const FIELD_TYPE_INT32: u8 = 2;
pub const FIELD_TYPE_INT8: u8 = 3;
pub const FIELD_TYPE_FLOAT: u8 = 4;
pub const FIELD_TYPE_UINT8: u8 = 5;
