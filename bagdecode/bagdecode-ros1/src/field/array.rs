//! Fixed- and variable-length array fields.
//!
//! Arrays of fixed-width built-ins keep their payload as one contiguous byte
//! region and reinterpret it on every accessor call, so fields that are never
//! read cost one slice and no conversion. Arrays of strings or nested messages
//! are decoded eagerly: each element's width is only known once the element
//! itself has been read, so the elements are decoded one after another.

use bagdecode_core::{ByteOrder, Cursor, Duration, FieldError, Time, Value};
use bytes::Bytes;
use tracing::{debug, trace};

use super::Field;
use crate::kind::{PrimitiveKind, element_width};

/// Upper bound on the element count of arrays whose elements occupy no bytes
/// (`std_msgs/Empty[]`). Any other element type is bounded by the buffer.
pub const MAX_ZERO_WIDTH_ELEMENTS: usize = 1 << 16;

#[derive(Debug, Clone)]
enum ArrayData {
    Undecoded,
    /// Fixed-width elements, not yet interpreted.
    Primitive { bytes: Bytes, order: ByteOrder },
    /// Strings and nested messages, one decoded instance per element.
    Compound(Vec<Field>),
}

/// A field repeating a base template either a fixed number of times or as many
/// times as a 4-byte count prefix in the stream says.
#[derive(Debug, Clone)]
pub struct ArrayField {
    base: Box<Field>,
    length: usize,
    type_name: String,
    name: String,
    data: ArrayData,
}

impl ArrayField {
    /// `length == 0` declares a variable-length array.
    pub fn new(base: Field, length: usize) -> Self {
        let type_name = if length > 0 {
            format!("{}[{length}]", base.type_name())
        } else {
            format!("{}[]", base.type_name())
        };
        Self {
            base: Box::new(base),
            length,
            type_name,
            name: String::new(),
            data: ArrayData::Undecoded,
        }
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn field_name(&self) -> &str {
        &self.name
    }

    pub fn set_field_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Template every element is stamped from.
    pub fn base(&self) -> &Field {
        &self.base
    }

    /// Declared length; `0` for variable-length arrays.
    pub fn declared_length(&self) -> usize {
        self.length
    }

    pub fn is_variable_length(&self) -> bool {
        self.length == 0
    }

    /// Element kind when the base template is a built-in.
    pub fn element_kind(&self) -> Option<PrimitiveKind> {
        PrimitiveKind::from_type_name(self.base.type_name())
    }

    pub fn is_decoded(&self) -> bool {
        !matches!(self.data, ArrayData::Undecoded)
    }

    /// Consume this array's bytes from `cursor`.
    ///
    /// A second call without [`reset`](Self::reset) leaves the cursor untouched.
    /// On failure the array stays undecoded and no partial elements are kept.
    pub fn decode(&mut self, cursor: &mut Cursor) -> Result<(), FieldError> {
        if self.is_decoded() {
            return Ok(());
        }
        let count = if self.length > 0 {
            self.length
        } else {
            cursor.read_length()?
        };

        self.data = match element_width(self.base.type_name()) {
            Some(width) => {
                let len = count.checked_mul(width).ok_or(FieldError::UnexpectedEof {
                    needed: usize::MAX,
                    available: cursor.remaining(),
                })?;
                let bytes = cursor.take(len)?;
                trace!(type_name = %self.type_name, count, bytes = len, "retained array payload");
                ArrayData::Primitive {
                    bytes,
                    order: cursor.order(),
                }
            }
            None => {
                let elements = self.decode_elements(count, cursor)?;
                trace!(type_name = %self.type_name, count, "decoded compound array");
                ArrayData::Compound(elements)
            }
        };
        Ok(())
    }

    fn decode_elements(&self, count: usize, cursor: &mut Cursor) -> Result<Vec<Field>, FieldError> {
        // The count is untrusted; cap the preallocation by what is left.
        let mut elements = Vec::with_capacity(count.min(cursor.remaining()));
        for i in 0..count {
            let mut element = self.base.clone_template();
            let before = cursor.position();
            element.decode(cursor).map_err(|e| {
                debug!(
                    type_name = %self.type_name,
                    index = i,
                    count,
                    "array element decode failed, discarding {} decoded elements",
                    elements.len()
                );
                e.at(&format!("[{i}]"))
            })?;
            // Every element shares one shape, so an empty first element means
            // the whole array reads nothing and only the count bounds the loop.
            if i == 0 && cursor.position() == before && count > MAX_ZERO_WIDTH_ELEMENTS {
                debug!(type_name = %self.type_name, count, "zero-width element count rejected");
                return Err(FieldError::TooManyElements {
                    count,
                    limit: MAX_ZERO_WIDTH_ELEMENTS,
                });
            }
            elements.push(element);
        }
        Ok(elements)
    }

    pub fn reset(&mut self) {
        self.data = ArrayData::Undecoded;
    }

    /// Undecoded copy with the same base template, length, and name.
    pub fn clone_template(&self) -> Self {
        let mut copy = Self::new(self.base.clone_template(), self.length);
        copy.name = self.name.clone();
        copy
    }

    /// Byte order used by the scalar accessors, once decoded.
    pub fn order(&self) -> Option<ByteOrder> {
        match &self.data {
            ArrayData::Primitive { order, .. } => Some(*order),
            _ => None,
        }
    }

    /// Reinterpret the retained payload in `order` from now on.
    ///
    /// Compound arrays forward the order to their elements. Before decode this
    /// has no effect; the order is taken from the cursor.
    pub fn set_order(&mut self, order: ByteOrder) {
        match &mut self.data {
            ArrayData::Undecoded => {}
            ArrayData::Primitive { order: current, .. } => *current = order,
            ArrayData::Compound(elements) => {
                elements.iter_mut().for_each(|e| e.set_order(order));
            }
        }
    }

    /// Number of decoded elements.
    pub fn len(&self) -> Result<usize, FieldError> {
        match &self.data {
            ArrayData::Undecoded => Err(self.uninitialized()),
            ArrayData::Primitive { bytes, .. } => {
                let width = element_width(self.base.type_name()).unwrap_or(1);
                Ok(bytes.len() / width)
            }
            ArrayData::Compound(elements) => Ok(elements.len()),
        }
    }

    pub fn is_empty(&self) -> Result<bool, FieldError> {
        self.len().map(|n| n == 0)
    }

    /// Decoded elements of a string or nested-message array.
    pub fn fields(&self) -> Result<&[Field], FieldError> {
        match &self.data {
            ArrayData::Undecoded => Err(self.uninitialized()),
            ArrayData::Compound(elements) => Ok(elements),
            ArrayData::Primitive { .. } => Err(FieldError::type_mismatch(
                self.type_name.as_str(),
                "fields",
            )),
        }
    }

    /// Retained payload of any fixed-width element type, uninterpreted.
    pub fn raw_bytes(&self) -> Result<&Bytes, FieldError> {
        self.primitive(None, "raw bytes").map(|(bytes, _)| bytes)
    }

    pub fn as_bytes(&self) -> Result<Vec<u8>, FieldError> {
        const ONE_BYTE: &[PrimitiveKind] = &[
            PrimitiveKind::Bool,
            PrimitiveKind::Byte,
            PrimitiveKind::Char,
            PrimitiveKind::Int8,
            PrimitiveKind::UInt8,
        ];
        let (bytes, _) = self.primitive(Some(ONE_BYTE), "bytes")?;
        Ok(bytes.to_vec())
    }

    pub fn as_shorts(&self) -> Result<Vec<i16>, FieldError> {
        self.view(&[PrimitiveKind::Int16, PrimitiveKind::UInt16], "shorts", ByteOrder::read_i16)
    }

    pub fn as_ushorts(&self) -> Result<Vec<u16>, FieldError> {
        self.view(&[PrimitiveKind::Int16, PrimitiveKind::UInt16], "ushorts", |o, b: [u8; 2]| {
            o.read_i16(b) as u16
        })
    }

    pub fn as_ints(&self) -> Result<Vec<i32>, FieldError> {
        self.view(&[PrimitiveKind::Int32, PrimitiveKind::UInt32], "ints", ByteOrder::read_i32)
    }

    pub fn as_uints(&self) -> Result<Vec<u32>, FieldError> {
        self.view(&[PrimitiveKind::Int32, PrimitiveKind::UInt32], "uints", |o, b: [u8; 4]| {
            o.read_i32(b) as u32
        })
    }

    pub fn as_longs(&self) -> Result<Vec<i64>, FieldError> {
        self.view(&[PrimitiveKind::Int64, PrimitiveKind::UInt64], "longs", ByteOrder::read_i64)
    }

    pub fn as_ulongs(&self) -> Result<Vec<u64>, FieldError> {
        self.view(&[PrimitiveKind::Int64, PrimitiveKind::UInt64], "ulongs", |o, b: [u8; 8]| {
            o.read_i64(b) as u64
        })
    }

    pub fn as_floats(&self) -> Result<Vec<f32>, FieldError> {
        self.view(&[PrimitiveKind::Float32], "floats", ByteOrder::read_f32)
    }

    pub fn as_doubles(&self) -> Result<Vec<f64>, FieldError> {
        self.view(&[PrimitiveKind::Float64], "doubles", ByteOrder::read_f64)
    }

    /// `duration[]` as `sec + nsec / 1e9` per element.
    pub fn as_durations(&self) -> Result<Vec<f64>, FieldError> {
        Ok(self
            .as_duration_values()?
            .iter()
            .map(Duration::as_secs_f64)
            .collect())
    }

    pub fn as_duration_values(&self) -> Result<Vec<Duration>, FieldError> {
        let halves = self.halves(PrimitiveKind::Duration, "durations")?;
        Ok(halves
            .as_chunks::<2>()
            .0
            .iter()
            .map(|&[sec, nsec]| Duration::new(sec, nsec))
            .collect())
    }

    /// `time[]` with both 32-bit halves read as unsigned.
    pub fn as_timestamps(&self) -> Result<Vec<Time>, FieldError> {
        let halves = self.halves(PrimitiveKind::Time, "timestamps")?;
        Ok(halves
            .as_chunks::<2>()
            .0
            .iter()
            .map(|&[sec, nsec]| Time::from_signed_pair(sec, nsec))
            .collect())
    }

    pub fn to_value(&self) -> Result<Value, FieldError> {
        let values: Vec<Value> = match self.element_kind() {
            Some(PrimitiveKind::Byte | PrimitiveKind::Char | PrimitiveKind::UInt8) => {
                return Ok(Value::Bytes(self.as_bytes()?.into()));
            }
            Some(PrimitiveKind::Bool) => {
                self.as_bytes()?.into_iter().map(|b| Value::Bool(b != 0)).collect()
            }
            Some(PrimitiveKind::Int8) => {
                self.as_bytes()?.into_iter().map(|b| Value::I8(b as i8)).collect()
            }
            Some(PrimitiveKind::Int16) => self.as_shorts()?.into_iter().map(Value::I16).collect(),
            Some(PrimitiveKind::UInt16) => self.as_ushorts()?.into_iter().map(Value::U16).collect(),
            Some(PrimitiveKind::Int32) => self.as_ints()?.into_iter().map(Value::I32).collect(),
            Some(PrimitiveKind::UInt32) => self.as_uints()?.into_iter().map(Value::U32).collect(),
            Some(PrimitiveKind::Int64) => self.as_longs()?.into_iter().map(Value::I64).collect(),
            Some(PrimitiveKind::UInt64) => self.as_ulongs()?.into_iter().map(Value::U64).collect(),
            Some(PrimitiveKind::Float32) => self.as_floats()?.into_iter().map(Value::F32).collect(),
            Some(PrimitiveKind::Float64) => {
                self.as_doubles()?.into_iter().map(Value::F64).collect()
            }
            Some(PrimitiveKind::Time) => {
                self.as_timestamps()?.into_iter().map(Value::Time).collect()
            }
            Some(PrimitiveKind::Duration) => self
                .as_duration_values()?
                .into_iter()
                .map(Value::Duration)
                .collect(),
            Some(PrimitiveKind::String) | None => self
                .fields()?
                .iter()
                .map(Field::to_value)
                .collect::<Result<_, _>>()?,
        };
        Ok(Value::Array(values))
    }

    fn uninitialized(&self) -> FieldError {
        FieldError::Uninitialized {
            field: if self.name.is_empty() {
                self.type_name.clone()
            } else {
                self.name.clone()
            },
        }
    }

    /// Retained payload and order, after checking decode state and element kind.
    /// `accepted == None` admits every fixed-width kind.
    fn primitive(
        &self,
        accepted: Option<&[PrimitiveKind]>,
        requested: &'static str,
    ) -> Result<(&Bytes, ByteOrder), FieldError> {
        let (bytes, order) = match &self.data {
            ArrayData::Undecoded => return Err(self.uninitialized()),
            ArrayData::Compound(_) => {
                return Err(FieldError::type_mismatch(self.type_name.as_str(), requested));
            }
            ArrayData::Primitive { bytes, order } => (bytes, *order),
        };
        let admitted = match (accepted, self.element_kind()) {
            (None, _) => true,
            (Some(kinds), Some(kind)) => kinds.contains(&kind),
            (Some(_), None) => false,
        };
        if !admitted {
            return Err(FieldError::type_mismatch(self.type_name.as_str(), requested));
        }
        Ok((bytes, order))
    }

    fn view<const N: usize, T>(
        &self,
        accepted: &[PrimitiveKind],
        requested: &'static str,
        read: impl Fn(ByteOrder, [u8; N]) -> T,
    ) -> Result<Vec<T>, FieldError> {
        let (bytes, order) = self.primitive(Some(accepted), requested)?;
        let (chunks, _) = bytes.as_chunks::<N>();
        Ok(chunks.iter().map(|chunk| read(order, *chunk)).collect())
    }

    /// Flat 32-bit halves of a `time[]` or `duration[]` payload; element `k`
    /// is the pair at indices `2k` and `2k + 1`.
    fn halves(&self, kind: PrimitiveKind, requested: &'static str) -> Result<Vec<i32>, FieldError> {
        self.view(&[kind], requested, ByteOrder::read_i32)
    }
}
