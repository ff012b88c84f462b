#[allow(clippy::module_name_repetitions)]
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ErrorKind {
    OOB,
    MalformedHex,
    InvalidWidth,
    InvalidLength,
    ValueOverflow,
    InvalidCharacter,
    TruncatedFrame,
    CrcMismatch,
    InvalidKeyLength,
    InvalidIVLength,
    InvalidChunkSize,
    UnknownFieldType,
    ReadOnlyField,
    OutOfRange,
    Utf8Error,
}

impl ErrorKind {
    /// Errors which still leave decoded data usable by the caller
    pub fn is_recoverable(self) -> bool {
        self == ErrorKind::CrcMismatch
    }
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg: &str = match self {
            ErrorKind::OOB => "OUT OF BUFFER",
            ErrorKind::MalformedHex => "MALFORMED HEX STRING",
            ErrorKind::InvalidWidth => "INVALID BYTE WIDTH",
            ErrorKind::InvalidLength => "INVALID LENGTH",
            ErrorKind::ValueOverflow => "VALUE DOES NOT FIT BYTE WIDTH",
            ErrorKind::InvalidCharacter => "CHARACTER HAS NO SINGLE-BYTE ENCODING",
            ErrorKind::TruncatedFrame => "FRAME TRUNCATED",
            ErrorKind::CrcMismatch => "FRAME CRC ERROR",
            ErrorKind::InvalidKeyLength => "INVALID CIPHER KEY LENGTH",
            ErrorKind::InvalidIVLength => "INVALID CIPHER IV LENGTH",
            ErrorKind::InvalidChunkSize => "INVALID CHUNK SIZE",
            ErrorKind::UnknownFieldType => "UNKNOWN FIELD TYPE",
            ErrorKind::ReadOnlyField => "FIELD IS READ-ONLY",
            ErrorKind::OutOfRange => "VALUE OUT OF FIELD RANGE",
            ErrorKind::Utf8Error => "UTF8 CONVERTION ERROR",
        };
        write!(f, "{}", msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ErrorKind {}

impl From<hex::FromHexError> for ErrorKind {
    fn from(_: hex::FromHexError) -> Self {
        ErrorKind::MalformedHex
    }
}

impl From<core::str::Utf8Error> for ErrorKind {
    fn from(_: core::str::Utf8Error) -> Self {
        ErrorKind::Utf8Error
    }
}

impl From<alloc::string::FromUtf8Error> for ErrorKind {
    fn from(_: alloc::string::FromUtf8Error) -> Self {
        ErrorKind::Utf8Error
    }
}
