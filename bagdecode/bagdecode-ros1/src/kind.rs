//! ROS 1 built-in types and their serialized element widths.

use std::fmt;

/// Serialized width in bytes of every fixed-width built-in type.
///
/// `string` is absent: its width is only known after reading its length prefix.
/// Anything not listed here is decoded as a compound element.
const ELEMENT_WIDTHS: &[(&str, usize)] = &[
    ("bool", 1),
    ("byte", 1),
    ("char", 1),
    ("int8", 1),
    ("uint8", 1),
    ("int16", 2),
    ("uint16", 2),
    ("int32", 4),
    ("uint32", 4),
    ("float32", 4),
    ("duration", 8),
    ("float64", 8),
    ("int64", 8),
    ("time", 8),
    ("uint64", 8),
];

/// Width of one serialized element of `type_name`, if it is fixed-width.
pub fn element_width(type_name: &str) -> Option<usize> {
    ELEMENT_WIDTHS
        .iter()
        .find(|(name, _)| *name == type_name)
        .map(|(_, width)| *width)
}

/// Scalar built-in types of the ROS 1 message format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Bool,
    /// Deprecated alias of `int8`.
    Byte,
    /// Deprecated alias of `uint8`.
    Char,
    Int8,
    UInt8,
    Int16,
    UInt16,
    Int32,
    UInt32,
    Int64,
    UInt64,
    Float32,
    Float64,
    String,
    Time,
    Duration,
}

impl PrimitiveKind {
    pub fn from_type_name(name: &str) -> Option<Self> {
        Some(match name {
            "bool" => Self::Bool,
            "byte" => Self::Byte,
            "char" => Self::Char,
            "int8" => Self::Int8,
            "uint8" => Self::UInt8,
            "int16" => Self::Int16,
            "uint16" => Self::UInt16,
            "int32" => Self::Int32,
            "uint32" => Self::UInt32,
            "int64" => Self::Int64,
            "uint64" => Self::UInt64,
            "float32" => Self::Float32,
            "float64" => Self::Float64,
            "string" => Self::String,
            "time" => Self::Time,
            "duration" => Self::Duration,
            _ => return None,
        })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Byte => "byte",
            Self::Char => "char",
            Self::Int8 => "int8",
            Self::UInt8 => "uint8",
            Self::Int16 => "int16",
            Self::UInt16 => "uint16",
            Self::Int32 => "int32",
            Self::UInt32 => "uint32",
            Self::Int64 => "int64",
            Self::UInt64 => "uint64",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
            Self::String => "string",
            Self::Time => "time",
            Self::Duration => "duration",
        }
    }

    /// Serialized width, or `None` for `string`.
    pub fn width(&self) -> Option<usize> {
        element_width(self.as_str())
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_table_groups_types_by_size() {
        for name in ["bool", "byte", "char", "int8", "uint8"] {
            assert_eq!(element_width(name), Some(1), "{name}");
        }
        for name in ["int16", "uint16"] {
            assert_eq!(element_width(name), Some(2), "{name}");
        }
        for name in ["int32", "uint32", "float32"] {
            assert_eq!(element_width(name), Some(4), "{name}");
        }
        for name in ["duration", "float64", "int64", "time", "uint64"] {
            assert_eq!(element_width(name), Some(8), "{name}");
        }
    }

    #[test]
    fn variable_width_and_unknown_types_have_no_width() {
        assert_eq!(element_width("string"), None);
        assert_eq!(element_width("geometry_msgs/Point"), None);
        assert_eq!(element_width("int32[4]"), None);
        assert_eq!(element_width(""), None);
    }

    #[test]
    fn kind_names_round_trip_and_agree_with_table() {
        for (name, width) in ELEMENT_WIDTHS {
            let kind = PrimitiveKind::from_type_name(name).expect("table entry is a kind");
            assert_eq!(kind.as_str(), *name);
            assert_eq!(kind.width(), Some(*width));
        }
        assert_eq!(PrimitiveKind::from_type_name("string"), Some(PrimitiveKind::String));
        assert_eq!(PrimitiveKind::String.width(), None);
        assert_eq!(PrimitiveKind::from_type_name("Header"), None);
    }
}
