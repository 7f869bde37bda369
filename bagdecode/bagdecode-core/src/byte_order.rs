use std::fmt;

/// Byte order used to interpret multi-byte scalars.
///
/// ROS 1 bags are little-endian, which is the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    #[default]
    LittleEndian,
    BigEndian,
}

impl ByteOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LittleEndian => "little-endian",
            Self::BigEndian => "big-endian",
        }
    }

    pub fn read_i16(self, b: [u8; 2]) -> i16 {
        match self {
            Self::LittleEndian => i16::from_le_bytes(b),
            Self::BigEndian => i16::from_be_bytes(b),
        }
    }

    pub fn read_i32(self, b: [u8; 4]) -> i32 {
        match self {
            Self::LittleEndian => i32::from_le_bytes(b),
            Self::BigEndian => i32::from_be_bytes(b),
        }
    }

    pub fn read_i64(self, b: [u8; 8]) -> i64 {
        match self {
            Self::LittleEndian => i64::from_le_bytes(b),
            Self::BigEndian => i64::from_be_bytes(b),
        }
    }

    pub fn read_f32(self, b: [u8; 4]) -> f32 {
        f32::from_bits(self.read_i32(b) as u32)
    }

    pub fn read_f64(self, b: [u8; 8]) -> f64 {
        f64::from_bits(self.read_i64(b) as u64)
    }
}

impl fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
