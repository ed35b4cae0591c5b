//! The two capabilities the reader and writer need from the stream they wrap.
//!
//! Both traits are implemented for every `std::io::Read` / `std::io::Write` type, so slices,
//! `Vec<u8>`, files, and sockets can be used directly. Types that are not `Read` or `Write` can
//! implement the traits themselves.

use std::io;

/// A sequential source of bytes that can fill a buffer exactly.
pub trait ByteSource {
    /// Fills `buf` completely or fails.
    ///
    /// Running out of input before `buf` is full must be reported as an error (conventionally
    /// `io::ErrorKind::UnexpectedEof`). Bytes consumed before the failure stay consumed.
    fn read_exact_bytes(&mut self, buf: &mut [u8]) -> io::Result<()>;
}

/// A sequential sink of bytes that accepts a whole buffer or fails.
pub trait ByteSink {
    /// Writes all of `buf` or fails.
    fn write_all_bytes(&mut self, buf: &[u8]) -> io::Result<()>;
}

impl<R: io::Read + ?Sized> ByteSource for R {
    #[inline]
    fn read_exact_bytes(&mut self, buf: &mut [u8]) -> io::Result<()> {
        self.read_exact(buf)
    }
}

impl<W: io::Write + ?Sized> ByteSink for W {
    #[inline]
    fn write_all_bytes(&mut self, buf: &[u8]) -> io::Result<()> {
        self.write_all(buf)
    }
}
