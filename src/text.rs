//! String helpers, all lengths and positions are counted in characters
use crate::ErrorKind;
use alloc::string::String;

/// Pad **text** with **pad** up to **total_length** characters, on the left if **left** is set
///
/// Text already at or above the total length is returned unchanged.
pub fn pad(text: &str, pad: char, total_length: usize, left: bool) -> String {
    let len = text.chars().count();
    if len >= total_length {
        return String::from(text);
    }
    let mut result = String::with_capacity(total_length);
    if !left {
        result.push_str(text);
    }
    for _ in len..total_length {
        result.push(pad);
    }
    if left {
        result.push_str(text);
    }
    result
}

pub fn reverse_string(text: &str) -> String {
    text.chars().rev().collect()
}

/// **length** characters starting at character **from**
///
/// Errors:
///
/// * **OOB** the range is not within the text
pub fn substring(text: &str, from: usize, length: usize) -> Result<String, ErrorKind> {
    let end = from.checked_add(length).ok_or(ErrorKind::OOB)?;
    if end > text.chars().count() {
        return Err(ErrorKind::OOB);
    }
    Ok(text.chars().skip(from).take(length).collect())
}

/// Binary digits of the value, without leading zeros ("0" for zero)
pub fn to_binary_string(value: u64) -> String {
    alloc::format!("{:b}", value)
}
