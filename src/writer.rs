use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use tracing::trace;

use crate::{ByteOrder, ByteSink, Error, Result};

/// Encodes values to a byte stream, using the byte order given at construction.
///
/// This is the mirror of [`BinaryReader`](crate::BinaryReader): every `write_*` method has a
/// `read_*` counterpart that decodes exactly what it wrote. Each method returns the number of
/// bytes written, which for scalars is always the fixed width of the type.
///
/// Use [`wrap`](Self::wrap) / [`wrap_with_order`](Self::wrap_with_order) to encode into any sink;
/// these match `BinaryReader::new` / `BinaryReader::with_order`. `BinaryWriter::new`,
/// `with_order` and `with_capacity` build a writer over a fresh `Vec<u8>` and take no sink.
pub struct BinaryWriter<W> {
    out: W,
    order: ByteOrder,
}

impl<W: ByteSink> BinaryWriter<W> {
    /// Wraps `out`, encoding multi-byte values in big-endian order.
    pub fn wrap(out: W) -> Self {
        Self::wrap_with_order(out, ByteOrder::BigEndian)
    }

    /// Wraps `out`, encoding multi-byte values in `order`.
    pub fn wrap_with_order(out: W, order: ByteOrder) -> Self {
        Self { out, order }
    }

    /// The byte order this writer was constructed with.
    pub fn byte_order(&self) -> ByteOrder {
        self.order
    }

    /// Accesses the inner sink
    pub fn get_ref(&self) -> &W {
        &self.out
    }

    /// Mutably accesses the inner sink
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.out
    }

    /// Extracts the inner sink
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Writes `bytes` to the output.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<usize> {
        if !bytes.is_empty() {
            self.out.write_all_bytes(bytes)?;
        }
        Ok(bytes.len())
    }

    /// Writes a small, fixed-size array of bytes.
    pub fn write_cbytes<const N: usize>(&mut self, value: [u8; N]) -> Result<usize> {
        self.write_bytes(&value)
    }

    /// Writes a `bool` value. True is encoded as 1. False is encoded as 0.
    pub fn write_bool(&mut self, value: bool) -> Result<usize> {
        self.write_u8(value as u8)
    }

    /// Writes a single `u8` value
    pub fn write_u8(&mut self, value: u8) -> Result<usize> {
        self.write_cbytes([value])
    }

    /// Writes a single `u16` value
    pub fn write_u16(&mut self, value: u16) -> Result<usize> {
        self.write_cbytes(self.order.encode_u16(value))
    }

    /// Writes a single `u32` value
    pub fn write_u32(&mut self, value: u32) -> Result<usize> {
        self.write_cbytes(self.order.encode_u32(value))
    }

    /// Writes a single `u64` value
    pub fn write_u64(&mut self, value: u64) -> Result<usize> {
        self.write_cbytes(self.order.encode_u64(value))
    }

    /// Writes a single `i8` value
    pub fn write_i8(&mut self, value: i8) -> Result<usize> {
        self.write_u8(value as u8)
    }

    /// Writes a single `i16` value
    pub fn write_i16(&mut self, value: i16) -> Result<usize> {
        self.write_u16(value as u16)
    }

    /// Writes a single `i32` value
    pub fn write_i32(&mut self, value: i32) -> Result<usize> {
        self.write_u32(value as u32)
    }

    /// Writes a single `i64` value
    pub fn write_i64(&mut self, value: i64) -> Result<usize> {
        self.write_u64(value as u64)
    }

    /// Writes the default-width integer, a signed 32-bit value.
    pub fn write_int(&mut self, value: i32) -> Result<usize> {
        self.write_i32(value)
    }

    /// Writes an `f32` value as its IEEE-754 bit pattern.
    pub fn write_f32(&mut self, value: f32) -> Result<usize> {
        self.write_u32(value.to_bits())
    }

    /// Writes an `f64` value as its IEEE-754 bit pattern.
    pub fn write_f64(&mut self, value: f64) -> Result<usize> {
        self.write_u64(value.to_bits())
    }

    /// Writes a string in length-prefixed form: the byte length as a signed 32-bit integer, then
    /// the UTF-8 bytes. Returns `4 + s.len()`.
    pub fn write_string(&mut self, s: &str) -> Result<usize> {
        self.write_string_bytes(s.as_bytes())
    }

    /// Writes a byte string in length-prefixed form.
    ///
    /// This function does not validate that the input is well-formed UTF-8.
    pub fn write_string_bytes(&mut self, s: &[u8]) -> Result<usize> {
        let len_i32 = len_prefix(s.len())?;
        let n = self.write_int(len_i32)?;
        Ok(n + self.write_bytes(s)?)
    }

    /// Writes a timestamp as signed 64-bit Unix seconds followed by the IANA name of its zone.
    ///
    /// Sub-second precision is discarded.
    pub fn write_timestamp(&mut self, value: &DateTime<Tz>) -> Result<usize> {
        let secs = value.timestamp();
        let zone = value.timezone().name();
        trace!(secs, zone, "write timestamp");
        let n = self.write_i64(secs)?;
        Ok(n + self.write_string(zone)?)
    }

    /// Writes a UTC timestamp. The zone is recorded as `"UTC"`.
    pub fn write_utc_timestamp(&mut self, value: &DateTime<Utc>) -> Result<usize> {
        self.write_timestamp(&value.with_timezone(&Tz::UTC))
    }
}

impl BinaryWriter<Vec<u8>> {
    /// Creates a new big-endian `BinaryWriter` over a `Vec<u8>`
    pub fn new() -> Self {
        Self::with_order(ByteOrder::BigEndian)
    }

    /// Creates a new `BinaryWriter` over a `Vec<u8>` with the given byte order.
    pub fn with_order(order: ByteOrder) -> Self {
        Self {
            out: Vec::new(),
            order,
        }
    }

    /// Creates a new `BinaryWriter` over a `Vec<u8>` with the given byte order and capacity.
    pub fn with_capacity(order: ByteOrder, len: usize) -> Self {
        Self {
            out: Vec::with_capacity(len),
            order,
        }
    }
}

impl Default for BinaryWriter<Vec<u8>> {
    fn default() -> Self {
        Self::new()
    }
}

fn len_prefix(len: usize) -> Result<i32> {
    i32::try_from(len).map_err(|_| Error::ValueTooLarge(len))
}
