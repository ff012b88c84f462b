//! Data field checks
//!
//! Field descriptors come from the device register tables owned by the caller, this module only
//! evaluates them. Nothing here enforces anything: the answers are plain booleans (or a `Result`
//! for [`validate_write`]) and the caller decides what to do.
use crate::codec::{hex_to_bytes, hex_to_decimal, hex_to_float, hex_to_signed_decimal};
use crate::consts::{
    FIELD_TYPE_FLOAT, FIELD_TYPE_INT32, FIELD_TYPE_INT8, FIELD_TYPE_UINT32, FIELD_TYPE_UINT8,
};
use crate::{Endianness, ErrorKind};
use alloc::string::String;

/// Value type of a field, codes as stored in the register tables
#[derive(PartialEq, Eq, Debug, Copy, Clone, Hash)]
#[cfg_attr(feature = "with_serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with_bincode", derive(bincode::Encode, bincode::Decode))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum FieldType {
    UInt32 = FIELD_TYPE_UINT32,
    Int32 = FIELD_TYPE_INT32,
    Int8 = FIELD_TYPE_INT8,
    Float = FIELD_TYPE_FLOAT,
    UInt8 = FIELD_TYPE_UINT8,
}

impl FieldType {
    pub fn from_code(code: u8) -> Result<Self, ErrorKind> {
        match code {
            FIELD_TYPE_UINT32 => Ok(FieldType::UInt32),
            FIELD_TYPE_INT32 => Ok(FieldType::Int32),
            FIELD_TYPE_INT8 => Ok(FieldType::Int8),
            FIELD_TYPE_FLOAT => Ok(FieldType::Float),
            FIELD_TYPE_UINT8 => Ok(FieldType::UInt8),
            _ => Err(ErrorKind::UnknownFieldType),
        }
    }

    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn byte_width(self) -> usize {
        match self {
            FieldType::UInt32 | FieldType::Int32 | FieldType::Float => 4,
            FieldType::Int8 | FieldType::UInt8 => 1,
        }
    }

    /// Number of 16-bit registers the field occupies
    #[inline]
    pub fn registers(self) -> u16 {
        if self.byte_width() > 2 {
            2
        } else {
            1
        }
    }
}

#[derive(PartialEq, Debug, Copy, Clone)]
#[cfg_attr(feature = "with_serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FieldValue {
    Unsigned(u64),
    Signed(i64),
    Float(f32),
}

impl FieldValue {
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(self) -> f64 {
        match self {
            FieldValue::Unsigned(v) => v as f64,
            FieldValue::Signed(v) => v as f64,
            FieldValue::Float(v) => f64::from(v),
        }
    }
}

/// Register descriptor
#[derive(PartialEq, Debug, Clone)]
#[cfg_attr(feature = "with_serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DataField {
    pub name: String,
    /// first register of the field
    pub address: u16,
    pub field_type: FieldType,
    pub min: f64,
    pub max: f64,
    pub writable: bool,
}

impl DataField {
    pub fn new(name: &str, address: u16, field_type: FieldType, min: f64, max: f64) -> Self {
        Self {
            name: String::from(name),
            address,
            field_type,
            min,
            max,
            writable: false,
        }
    }

    #[must_use]
    pub fn writable(mut self, writable: bool) -> Self {
        self.writable = writable;
        self
    }

    /// Decode a raw field value received from the device
    ///
    /// Errors:
    ///
    /// * **MalformedHex** the input is not valid hex
    /// * **InvalidLength** the input size does not match the field type width
    pub fn decode(&self, hex: &str, endian: Endianness) -> Result<FieldValue, ErrorKind> {
        let len = hex_to_bytes(hex)?.len();
        if len != self.field_type.byte_width() {
            return Err(ErrorKind::InvalidLength);
        }
        Ok(match self.field_type {
            FieldType::UInt32 | FieldType::UInt8 => {
                FieldValue::Unsigned(hex_to_decimal(hex, endian)?)
            }
            FieldType::Int32 | FieldType::Int8 => {
                FieldValue::Signed(hex_to_signed_decimal(hex, endian)?)
            }
            FieldType::Float => FieldValue::Float(hex_to_float(hex, endian)?),
        })
    }
}

/// True if the value is within [min, max] of the field, NaN is never within
pub fn check_bounds(value: f64, field: &DataField) -> bool {
    value >= field.min && value <= field.max
}

#[inline]
pub fn can_write(field: &DataField) -> bool {
    field.writable
}

/// True if the register address belongs to the field
pub fn check_address(address: u16, field: &DataField) -> bool {
    address >= field.address
        && u32::from(address) < u32::from(field.address) + u32::from(field.field_type.registers())
}

/// Writability and bounds in one call
///
/// Errors:
///
/// * **ReadOnlyField** the field is not writable
/// * **OutOfRange** the value is outside of [min, max]
pub fn validate_write(value: f64, field: &DataField) -> Result<(), ErrorKind> {
    if !can_write(field) {
        return Err(ErrorKind::ReadOnlyField);
    }
    if !check_bounds(value, field) {
        return Err(ErrorKind::OutOfRange);
    }
    Ok(())
}
