//! Single scalar or string field.

use bagdecode_core::{ByteOrder, Cursor, Duration, FieldError, Time, Value};
use bytes::Bytes;

use crate::kind::PrimitiveKind;

/// A field holding one built-in value.
///
/// Fixed-width kinds retain their bytes and interpret them on access, the same
/// way primitive arrays do. Strings are a 4-byte length prefix followed by the
/// raw bytes, with no terminator.
#[derive(Debug, Clone)]
pub struct PrimitiveField {
    kind: PrimitiveKind,
    name: String,
    data: Option<Bytes>,
    order: ByteOrder,
}

impl PrimitiveField {
    pub fn new(kind: PrimitiveKind) -> Self {
        Self {
            kind,
            name: String::new(),
            data: None,
            order: ByteOrder::default(),
        }
    }

    pub fn kind(&self) -> PrimitiveKind {
        self.kind
    }

    pub fn type_name(&self) -> &str {
        self.kind.as_str()
    }

    pub fn field_name(&self) -> &str {
        &self.name
    }

    pub fn set_field_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn is_decoded(&self) -> bool {
        self.data.is_some()
    }

    pub fn decode(&mut self, cursor: &mut Cursor) -> Result<(), FieldError> {
        if self.data.is_some() {
            return Ok(());
        }
        let len = match self.kind.width() {
            Some(width) => width,
            None => cursor.read_length()?,
        };
        self.data = Some(cursor.take(len)?);
        self.order = cursor.order();
        Ok(())
    }

    pub fn reset(&mut self) {
        self.data = None;
    }

    pub fn clone_template(&self) -> Self {
        Self {
            kind: self.kind,
            name: self.name.clone(),
            data: None,
            order: ByteOrder::default(),
        }
    }

    pub fn order(&self) -> ByteOrder {
        self.order
    }

    pub fn set_order(&mut self, order: ByteOrder) {
        self.order = order;
    }

    /// Retained payload bytes; for strings, without the length prefix.
    pub fn raw_bytes(&self) -> Result<&Bytes, FieldError> {
        self.data.as_ref().ok_or_else(|| FieldError::Uninitialized {
            field: self.display_name().to_string(),
        })
    }

    pub fn as_bool(&self) -> Result<bool, FieldError> {
        let [b] = self.fixed::<1>(&[PrimitiveKind::Bool], "bool")?;
        Ok(b != 0)
    }

    pub fn as_i8(&self) -> Result<i8, FieldError> {
        let [b] = self.fixed::<1>(&[PrimitiveKind::Int8, PrimitiveKind::Byte], "i8")?;
        Ok(b as i8)
    }

    pub fn as_u8(&self) -> Result<u8, FieldError> {
        let [b] = self.fixed::<1>(&[PrimitiveKind::UInt8, PrimitiveKind::Char], "u8")?;
        Ok(b)
    }

    pub fn as_i16(&self) -> Result<i16, FieldError> {
        let b = self.fixed::<2>(&[PrimitiveKind::Int16], "i16")?;
        Ok(self.order.read_i16(b))
    }

    pub fn as_u16(&self) -> Result<u16, FieldError> {
        let b = self.fixed::<2>(&[PrimitiveKind::UInt16], "u16")?;
        Ok(self.order.read_i16(b) as u16)
    }

    pub fn as_i32(&self) -> Result<i32, FieldError> {
        let b = self.fixed::<4>(&[PrimitiveKind::Int32], "i32")?;
        Ok(self.order.read_i32(b))
    }

    pub fn as_u32(&self) -> Result<u32, FieldError> {
        let b = self.fixed::<4>(&[PrimitiveKind::UInt32], "u32")?;
        Ok(self.order.read_i32(b) as u32)
    }

    pub fn as_i64(&self) -> Result<i64, FieldError> {
        let b = self.fixed::<8>(&[PrimitiveKind::Int64], "i64")?;
        Ok(self.order.read_i64(b))
    }

    pub fn as_u64(&self) -> Result<u64, FieldError> {
        let b = self.fixed::<8>(&[PrimitiveKind::UInt64], "u64")?;
        Ok(self.order.read_i64(b) as u64)
    }

    pub fn as_f32(&self) -> Result<f32, FieldError> {
        let b = self.fixed::<4>(&[PrimitiveKind::Float32], "f32")?;
        Ok(self.order.read_f32(b))
    }

    pub fn as_f64(&self) -> Result<f64, FieldError> {
        let b = self.fixed::<8>(&[PrimitiveKind::Float64], "f64")?;
        Ok(self.order.read_f64(b))
    }

    pub fn as_str(&self) -> Result<&str, FieldError> {
        self.expect_kind(&[PrimitiveKind::String], "string")?;
        Ok(std::str::from_utf8(self.raw_bytes()?)?)
    }

    pub fn as_time(&self) -> Result<Time, FieldError> {
        let (sec, nsec) = self.pair(PrimitiveKind::Time, "time")?;
        Ok(Time::from_signed_pair(sec, nsec))
    }

    pub fn as_duration(&self) -> Result<Duration, FieldError> {
        let (sec, nsec) = self.pair(PrimitiveKind::Duration, "duration")?;
        Ok(Duration::new(sec, nsec))
    }

    pub fn to_value(&self) -> Result<Value, FieldError> {
        Ok(match self.kind {
            PrimitiveKind::Bool => Value::Bool(self.as_bool()?),
            PrimitiveKind::Byte | PrimitiveKind::Int8 => Value::I8(self.as_i8()?),
            PrimitiveKind::Char | PrimitiveKind::UInt8 => Value::U8(self.as_u8()?),
            PrimitiveKind::Int16 => Value::I16(self.as_i16()?),
            PrimitiveKind::UInt16 => Value::U16(self.as_u16()?),
            PrimitiveKind::Int32 => Value::I32(self.as_i32()?),
            PrimitiveKind::UInt32 => Value::U32(self.as_u32()?),
            PrimitiveKind::Int64 => Value::I64(self.as_i64()?),
            PrimitiveKind::UInt64 => Value::U64(self.as_u64()?),
            PrimitiveKind::Float32 => Value::F32(self.as_f32()?),
            PrimitiveKind::Float64 => Value::F64(self.as_f64()?),
            PrimitiveKind::String => Value::string(self.as_str()?),
            PrimitiveKind::Time => Value::Time(self.as_time()?),
            PrimitiveKind::Duration => Value::Duration(self.as_duration()?),
        })
    }

    fn display_name(&self) -> &str {
        if self.name.is_empty() {
            self.kind.as_str()
        } else {
            &self.name
        }
    }

    fn expect_kind(
        &self,
        accepted: &[PrimitiveKind],
        requested: &'static str,
    ) -> Result<(), FieldError> {
        if accepted.contains(&self.kind) {
            Ok(())
        } else {
            Err(FieldError::type_mismatch(self.kind.as_str(), requested))
        }
    }

    fn fixed<const N: usize>(
        &self,
        accepted: &[PrimitiveKind],
        requested: &'static str,
    ) -> Result<[u8; N], FieldError> {
        self.expect_kind(accepted, requested)?;
        let data = self.raw_bytes()?;
        data.get(..N)
            .and_then(|b| <[u8; N]>::try_from(b).ok())
            .ok_or(FieldError::UnexpectedEof {
                needed: N,
                available: data.len(),
            })
    }

    fn pair(&self, kind: PrimitiveKind, requested: &'static str) -> Result<(i32, i32), FieldError> {
        let [a, b, c, d, e, f, g, h] = self.fixed::<8>(&[kind], requested)?;
        Ok((
            self.order.read_i32([a, b, c, d]),
            self.order.read_i32([e, f, g, h]),
        ))
    }
}
