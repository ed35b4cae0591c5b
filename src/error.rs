use std::io;
use std::string::FromUtf8Error;
use thiserror::Error;

/// Result type for `BinaryReader` and `BinaryWriter` operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Error type for `BinaryReader` and `BinaryWriter`.
///
/// None of these are retried internally. After any error from a `read_*` method the input stream
/// may have been partially consumed and should be discarded.
#[derive(Debug, Error)]
pub enum Error {
    /// The underlying stream failed, or ended before the requested number of bytes was
    /// transferred.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A decoded length prefix was negative.
    #[error("invalid length prefix: {0}")]
    InvalidLength(i32),

    /// A value is too large to be described by its length prefix. The payload is the length that
    /// could not be encoded.
    #[error("value too large to encode: {0} bytes")]
    ValueTooLarge(usize),

    /// A decoded time zone name is not in the time zone database.
    #[error("unknown time zone: {0:?}")]
    UnknownTimeZone(String),

    /// A string payload was not well-formed UTF-8.
    #[error("string payload is not valid UTF-8")]
    InvalidUtf8(#[from] FromUtf8Error),

    /// A decoded length prefix exceeded the limit configured on the reader.
    #[error("length {len} exceeds configured limit of {limit} bytes")]
    LengthLimitExceeded {
        /// Length read from the stream
        len: usize,
        /// Configured limit
        limit: usize,
    },

    /// Decoded epoch seconds cannot be represented as a calendar date.
    #[error("timestamp out of range: {0} seconds")]
    TimestampOutOfRange(i64),
}

impl Error {
    /// Returns true if the stream ended before the requested bytes were available.
    pub fn is_short_read(&self) -> bool {
        matches!(self, Self::Io(e) if e.kind() == io::ErrorKind::UnexpectedEof)
    }
}
