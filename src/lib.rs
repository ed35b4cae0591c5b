//! Reads and writes primitive values over byte streams using a byte order chosen at construction.
//!
//! Every value has a fixed wire layout:
//!
//! | Value | Layout | Width |
//! |---|---|---|
//! | `bool` | 1 byte, 0 = false, nonzero = true | 1 |
//! | `u8`/`i8` | raw byte | 1 |
//! | `u16`/`i16` | 2 bytes, configured order | 2 |
//! | `u32`/`i32` | 4 bytes, configured order | 4 |
//! | `u64`/`i64` | 8 bytes, configured order | 8 |
//! | `f32`/`f64` | IEEE-754 bit pattern, configured order | 4 / 8 |
//! | string | signed 32-bit byte length, then the raw bytes | 4 + n |
//! | timestamp | signed 64-bit epoch seconds, then the zone name as a string | 8 + 4 + m |
//!
//! [`BinaryReader`] and [`BinaryWriter`] are mirror images. Neither buffers data beyond the value
//! being transferred, and neither rewinds its stream after a failure: once a read fails the stream
//! should be considered out of sync.
//!
//! ```
//! use endian_binary_io::{BinaryReader, BinaryWriter, ByteOrder};
//!
//! let mut w = BinaryWriter::with_order(ByteOrder::LittleEndian);
//! w.write_u16(0x0102).unwrap();
//! w.write_string("hello").unwrap();
//! assert_eq!(w.get_ref().len(), 2 + 4 + 5);
//!
//! let mut r = BinaryReader::with_order(w.get_ref().as_slice(), ByteOrder::LittleEndian);
//! assert_eq!(r.read_u16().unwrap(), 0x0102);
//! assert_eq!(r.read_string().unwrap(), "hello");
//! ```

#![forbid(unsafe_code)]
#![forbid(unused_must_use)]
#![warn(missing_docs)]

mod error;
mod order;
mod reader;
mod stream;
mod writer;


pub use error::{Error, Result};
pub use order::ByteOrder;
pub use reader::BinaryReader;
pub use stream::{ByteSink, ByteSource};
pub use writer::BinaryWriter;
