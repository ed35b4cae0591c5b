use chrono::{DateTime, TimeZone};
use chrono_tz::Tz;
use tracing::{debug, trace, warn};

use crate::{ByteOrder, ByteSource, Error, Result};

/// Largest buffer handed to the source in one `read_exact_bytes` call.
const READ_CHUNK_LEN: usize = 64 * 1024;

/// Reads values from a byte stream, using the byte order given at construction.
///
/// Fixed-size values are read as exactly their wire width. Strings are read as a signed 32-bit
/// length prefix followed by that many bytes. Timestamps are read as signed 64-bit Unix seconds
/// followed by a string naming an IANA time zone.
///
/// Every `read_*` call either obtains all the bytes it needs or fails; a partial value is never
/// returned. However, the source is not rewound on failure. Bytes drawn before the failure stay
/// consumed, so after an error the stream should be treated as unsynchronized and discarded.
///
/// Reading a string takes two reads from the source (prefix, then payload). If several readers
/// share one stream, the caller must serialize access to it.
pub struct BinaryReader<R> {
    source: R,
    order: ByteOrder,
    max_string_len: Option<usize>,
}

impl<R: ByteSource> BinaryReader<R> {
    /// Creates a reader that decodes multi-byte values in big-endian order.
    pub fn new(source: R) -> Self {
        Self::with_order(source, ByteOrder::BigEndian)
    }

    /// Creates a reader that decodes multi-byte values in `order`.
    pub fn with_order(source: R, order: ByteOrder) -> Self {
        Self {
            source,
            order,
            max_string_len: None,
        }
    }

    /// Rejects any string (or zone name) whose length prefix is greater than `limit` bytes.
    ///
    /// The check happens before any payload is read. Without a limit, payloads are still read in
    /// bounded chunks, but a prefix up to `i32::MAX` is accepted as long as the source delivers.
    pub fn with_max_string_len(mut self, limit: usize) -> Self {
        self.max_string_len = Some(limit);
        self
    }

    /// The byte order this reader was constructed with.
    pub fn byte_order(&self) -> ByteOrder {
        self.order
    }

    /// Accesses the underlying source.
    pub fn get_ref(&self) -> &R {
        &self.source
    }

    /// Mutably accesses the underlying source. Reading from it directly will desynchronize any
    /// value the caller expects to decode next.
    pub fn get_mut(&mut self) -> &mut R {
        &mut self.source
    }

    /// Extracts the underlying source.
    pub fn into_inner(self) -> R {
        self.source
    }

    /// Reads a small array of bytes, with a constant length.
    ///
    /// A zero-length read does not touch the source.
    #[inline(always)]
    pub fn read_cbytes<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut buf = [0u8; N];
        if N != 0 {
            self.source.read_exact_bytes(&mut buf)?;
        }
        Ok(buf)
    }

    /// Reads exactly `len` raw bytes.
    ///
    /// The source is asked for at most 64 KiB at a time, so memory use follows the bytes that
    /// actually arrive. A zero-length read returns an empty vector without touching the source.
    pub fn read_bytes(&mut self, len: usize) -> Result<Vec<u8>> {
        if len == 0 {
            return Ok(Vec::new());
        }
        // Capacity follows delivered bytes, not the requested length.
        let mut buf = Vec::with_capacity(len.min(READ_CHUNK_LEN));
        while buf.len() < len {
            let start = buf.len();
            let end = len.min(start + READ_CHUNK_LEN);
            buf.resize(end, 0);
            self.source.read_exact_bytes(&mut buf[start..end])?;
        }
        Ok(buf)
    }

    /// Reads a single byte and returns true if it is nonzero.
    pub fn read_bool(&mut self) -> Result<bool> {
        Ok(self.read_u8()? != 0)
    }

    /// Reads a single `u8` value.
    #[inline(always)]
    pub fn read_u8(&mut self) -> Result<u8> {
        let [b] = self.read_cbytes::<1>()?;
        Ok(b)
    }

    /// Reads a `u16`.
    #[inline(always)]
    pub fn read_u16(&mut self) -> Result<u16> {
        let bytes = self.read_cbytes()?;
        Ok(self.order.decode_u16(bytes))
    }

    /// Reads a `u32`.
    #[inline(always)]
    pub fn read_u32(&mut self) -> Result<u32> {
        let bytes = self.read_cbytes()?;
        Ok(self.order.decode_u32(bytes))
    }

    /// Reads a `u64`.
    #[inline(always)]
    pub fn read_u64(&mut self) -> Result<u64> {
        let bytes = self.read_cbytes()?;
        Ok(self.order.decode_u64(bytes))
    }

    /// Reads a single `i8` value.
    #[inline(always)]
    pub fn read_i8(&mut self) -> Result<i8> {
        Ok(self.read_u8()? as i8)
    }

    /// Reads an `i16`.
    #[inline(always)]
    pub fn read_i16(&mut self) -> Result<i16> {
        Ok(self.read_u16()? as i16)
    }

    /// Reads an `i32`.
    #[inline(always)]
    pub fn read_i32(&mut self) -> Result<i32> {
        Ok(self.read_u32()? as i32)
    }

    /// Reads an `i64`.
    #[inline(always)]
    pub fn read_i64(&mut self) -> Result<i64> {
        Ok(self.read_u64()? as i64)
    }

    /// Reads the default-width integer, a signed 32-bit value. This is the same encoding used
    /// for string length prefixes.
    #[inline(always)]
    pub fn read_int(&mut self) -> Result<i32> {
        self.read_i32()
    }

    /// Reads an `f32` from its IEEE-754 bit pattern. NaN payloads are preserved.
    pub fn read_f32(&mut self) -> Result<f32> {
        Ok(f32::from_bits(self.read_u32()?))
    }

    /// Reads an `f64` from its IEEE-754 bit pattern. NaN payloads are preserved.
    pub fn read_f64(&mut self) -> Result<f64> {
        Ok(f64::from_bits(self.read_u64()?))
    }

    fn read_len_prefix(&mut self) -> Result<usize> {
        let len = self.read_int()?;
        let Ok(len_usize) = usize::try_from(len) else {
            warn!(len, "negative length prefix");
            return Err(Error::InvalidLength(len));
        };

        if let Some(limit) = self.max_string_len {
            if len_usize > limit {
                warn!(len, limit, "length prefix exceeds configured limit");
                return Err(Error::LengthLimitExceeded {
                    len: len_usize,
                    limit,
                });
            }
        }

        Ok(len_usize)
    }

    /// Reads a length-prefixed string and returns its payload without validating it.
    pub fn read_string_bytes(&mut self) -> Result<Vec<u8>> {
        let len = self.read_len_prefix()?;
        self.read_bytes(len)
    }

    /// Reads a length-prefixed UTF-8 string.
    ///
    /// Fails with `Error::InvalidUtf8` if the payload is not well-formed UTF-8. The payload has
    /// already been consumed in that case.
    pub fn read_string(&mut self) -> Result<String> {
        Ok(String::from_utf8(self.read_string_bytes()?)?)
    }

    /// Reads a length-prefixed string, replacing byte sequences that are not valid UTF-8 with the
    /// Unicode replacement character.
    pub fn read_string_lossy(&mut self) -> Result<String> {
        let bytes = self.read_string_bytes()?;
        Ok(match String::from_utf8(bytes) {
            Ok(s) => s,
            Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
        })
    }

    /// Reads a length-prefixed string as a `bstr::BString`. The payload is kept byte-for-byte.
    #[cfg(feature = "bstr")]
    pub fn read_bstring(&mut self) -> Result<bstr::BString> {
        Ok(bstr::BString::from(self.read_string_bytes()?))
    }

    /// Reads a timestamp: signed 64-bit Unix seconds, then a length-prefixed time zone name.
    ///
    /// The zone name is resolved against the IANA database compiled into `chrono-tz`. Timestamps
    /// have whole-second precision.
    pub fn read_timestamp(&mut self) -> Result<DateTime<Tz>> {
        let secs = self.read_i64()?;
        let name_bytes = self.read_string_bytes()?;

        let name = match String::from_utf8(name_bytes) {
            Ok(name) => name,
            Err(e) => {
                let name = String::from_utf8_lossy(e.as_bytes()).into_owned();
                debug!(zone = %name, "time zone name is not valid UTF-8");
                return Err(Error::UnknownTimeZone(name));
            }
        };

        let Ok(tz) = name.parse::<Tz>() else {
            debug!(zone = %name, "unknown time zone");
            return Err(Error::UnknownTimeZone(name));
        };

        let Some(value) = tz.timestamp_opt(secs, 0).single() else {
            warn!(secs, zone = %name, "timestamp out of range");
            return Err(Error::TimestampOutOfRange(secs));
        };

        trace!(secs, zone = %name, "read timestamp");
        Ok(value)
    }
}
