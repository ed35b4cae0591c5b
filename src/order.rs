use zerocopy::byteorder::{BE, LE, U16, U32, U64};

/// Selects how multi-byte integers map to byte sequences.
///
/// The order is fixed when a [`BinaryReader`](crate::BinaryReader) or
/// [`BinaryWriter`](crate::BinaryWriter) is constructed and never changes afterwards.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum ByteOrder {
    /// Most significant byte first. This is the default.
    #[default]
    BigEndian,
    /// Least significant byte first.
    LittleEndian,
}

impl ByteOrder {
    /// The byte order of the target this crate was compiled for.
    pub const fn native() -> Self {
        if cfg!(target_endian = "big") {
            Self::BigEndian
        } else {
            Self::LittleEndian
        }
    }

    #[inline(always)]
    pub(crate) fn decode_u16(self, bytes: [u8; 2]) -> u16 {
        match self {
            Self::BigEndian => U16::<BE>::from_bytes(bytes).get(),
            Self::LittleEndian => U16::<LE>::from_bytes(bytes).get(),
        }
    }

    #[inline(always)]
    pub(crate) fn decode_u32(self, bytes: [u8; 4]) -> u32 {
        match self {
            Self::BigEndian => U32::<BE>::from_bytes(bytes).get(),
            Self::LittleEndian => U32::<LE>::from_bytes(bytes).get(),
        }
    }

    #[inline(always)]
    pub(crate) fn decode_u64(self, bytes: [u8; 8]) -> u64 {
        match self {
            Self::BigEndian => U64::<BE>::from_bytes(bytes).get(),
            Self::LittleEndian => U64::<LE>::from_bytes(bytes).get(),
        }
    }

    #[inline(always)]
    pub(crate) fn encode_u16(self, value: u16) -> [u8; 2] {
        match self {
            Self::BigEndian => U16::<BE>::new(value).to_bytes(),
            Self::LittleEndian => U16::<LE>::new(value).to_bytes(),
        }
    }

    #[inline(always)]
    pub(crate) fn encode_u32(self, value: u32) -> [u8; 4] {
        match self {
            Self::BigEndian => U32::<BE>::new(value).to_bytes(),
            Self::LittleEndian => U32::<LE>::new(value).to_bytes(),
        }
    }

    #[inline(always)]
    pub(crate) fn encode_u64(self, value: u64) -> [u8; 8] {
        match self {
            Self::BigEndian => U64::<BE>::new(value).to_bytes(),
            Self::LittleEndian => U64::<LE>::new(value).to_bytes(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_big_endian() {
        assert_eq!(ByteOrder::default(), ByteOrder::BigEndian);
    }

    #[test]
    fn native_matches_target() {
        let expected = if u16::from_ne_bytes([1, 0]) == 1 {
            ByteOrder::LittleEndian
        } else {
            ByteOrder::BigEndian
        };
        assert_eq!(ByteOrder::native(), expected);
    }

    #[test]
    fn u16_layout() {
        assert_eq!(ByteOrder::BigEndian.encode_u16(0x0102), [0x01, 0x02]);
        assert_eq!(ByteOrder::LittleEndian.encode_u16(0x0102), [0x02, 0x01]);
        assert_eq!(ByteOrder::BigEndian.decode_u16([0x01, 0x02]), 0x0102);
        assert_eq!(ByteOrder::LittleEndian.decode_u16([0x01, 0x02]), 0x0201);
    }

    #[test]
    fn u32_layout() {
        assert_eq!(
            ByteOrder::BigEndian.encode_u32(0x0102_0304),
            [0x01, 0x02, 0x03, 0x04]
        );
        assert_eq!(
            ByteOrder::LittleEndian.encode_u32(0x0102_0304),
            [0x04, 0x03, 0x02, 0x01]
        );
    }

    #[test]
    fn u64_layout() {
        let be = ByteOrder::BigEndian.encode_u64(0x0102_0304_0506_0708);
        assert_eq!(be, [1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(
            ByteOrder::LittleEndian.decode_u64(be),
            0x0807_0605_0403_0201
        );
    }
}
