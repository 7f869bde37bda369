//! Dynamic value tree produced from decoded fields.

use std::sync::Arc;

use crate::{
    error::FieldError,
    time::{Duration, Time},
};

/// Owned snapshot of a decoded field.
/// Scalar variants mirror the ROS 1 built-in types one to one; no lossy conversions.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
    String(Arc<str>),
    /// `uint8[]`, `byte[]` and `char[]` payloads.
    Bytes(Arc<[u8]>),
    Time(Time),
    Duration(Duration),
    Array(Vec<Value>),
    /// Named fields in schema order.
    Struct(Vec<(String, Value)>),
}

impl Value {
    pub fn string(s: impl AsRef<str>) -> Self {
        Self::String(Arc::from(s.as_ref()))
    }

    /// Look up a named member of a [`Value::Struct`].
    pub fn get(&self, name: &str) -> Option<&Value> {
        match self {
            Value::Struct(fields) => fields.iter().find(|(n, _)| n == name).map(|(_, v)| v),
            _ => None,
        }
    }

    pub fn try_bool(&self) -> Result<bool, FieldError> {
        match self {
            Value::Bool(v) => Ok(*v),
            _ => Err(self.type_mismatch("Bool")),
        }
    }

    /// Any integer variant that fits in `i64`.
    pub fn try_i64(&self) -> Result<i64, FieldError> {
        match self {
            Value::I8(v) => Ok(i64::from(*v)),
            Value::I16(v) => Ok(i64::from(*v)),
            Value::I32(v) => Ok(i64::from(*v)),
            Value::I64(v) => Ok(*v),
            Value::U8(v) => Ok(i64::from(*v)),
            Value::U16(v) => Ok(i64::from(*v)),
            Value::U32(v) => Ok(i64::from(*v)),
            _ => Err(self.type_mismatch("I64")),
        }
    }

    pub fn try_u64(&self) -> Result<u64, FieldError> {
        match self {
            Value::U8(v) => Ok(u64::from(*v)),
            Value::U16(v) => Ok(u64::from(*v)),
            Value::U32(v) => Ok(u64::from(*v)),
            Value::U64(v) => Ok(*v),
            _ => Err(self.type_mismatch("U64")),
        }
    }

    pub fn try_f64(&self) -> Result<f64, FieldError> {
        match self {
            Value::F32(v) => Ok(f64::from(*v)),
            Value::F64(v) => Ok(*v),
            _ => Err(self.type_mismatch("F64")),
        }
    }

    pub fn try_str(&self) -> Result<&str, FieldError> {
        match self {
            Value::String(v) => Ok(v.as_ref()),
            _ => Err(self.type_mismatch("String")),
        }
    }

    pub fn try_bytes(&self) -> Result<&[u8], FieldError> {
        match self {
            Value::Bytes(v) => Ok(v.as_ref()),
            _ => Err(self.type_mismatch("Bytes")),
        }
    }

    pub fn try_time(&self) -> Result<Time, FieldError> {
        match self {
            Value::Time(v) => Ok(*v),
            _ => Err(self.type_mismatch("Time")),
        }
    }

    pub fn try_duration(&self) -> Result<Duration, FieldError> {
        match self {
            Value::Duration(v) => Ok(*v),
            _ => Err(self.type_mismatch("Duration")),
        }
    }

    pub fn try_array(&self) -> Result<&[Value], FieldError> {
        match self {
            Value::Array(v) => Ok(v),
            _ => Err(self.type_mismatch("Array")),
        }
    }

    pub fn type_mismatch(&self, expected: &'static str) -> FieldError {
        FieldError::type_mismatch(self.variant_name(), expected)
    }

    pub fn variant_name(&self) -> &'static str {
        match self {
            Value::Bool(_) => "Bool",
            Value::I8(_) => "I8",
            Value::I16(_) => "I16",
            Value::I32(_) => "I32",
            Value::I64(_) => "I64",
            Value::U8(_) => "U8",
            Value::U16(_) => "U16",
            Value::U32(_) => "U32",
            Value::U64(_) => "U64",
            Value::F32(_) => "F32",
            Value::F64(_) => "F64",
            Value::String(_) => "String",
            Value::Bytes(_) => "Bytes",
            Value::Time(_) => "Time",
            Value::Duration(_) => "Duration",
            Value::Array(_) => "Array",
            Value::Struct(_) => "Struct",
        }
    }
}
