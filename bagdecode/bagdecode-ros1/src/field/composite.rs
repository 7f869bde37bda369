//! Nested message field.

use bagdecode_core::{ByteOrder, Cursor, FieldError, Value};
use tracing::{debug, trace};

use super::Field;

/// A message type made of named subfields, decoded in declaration order.
#[derive(Debug, Clone)]
pub struct CompositeField {
    type_name: String,
    name: String,
    fields: Vec<Field>,
    decoded: bool,
}

impl CompositeField {
    pub fn new(type_name: impl Into<String>, fields: Vec<Field>) -> Self {
        Self {
            type_name: type_name.into(),
            name: String::new(),
            fields,
            decoded: false,
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

    pub fn is_decoded(&self) -> bool {
        self.decoded
    }

    /// Decode every subfield in order.
    ///
    /// If a subfield fails, the subfields before it stay readable and this
    /// composite stays undecoded. A later decode starts over from the first
    /// subfield, so leftovers of a failed attempt never mix with a new payload.
    pub fn decode(&mut self, cursor: &mut Cursor) -> Result<(), FieldError> {
        if self.decoded {
            return Ok(());
        }
        self.fields.iter_mut().for_each(Field::reset);
        let start = cursor.position();
        for field in &mut self.fields {
            field.decode(cursor).map_err(|e| {
                debug!(
                    message_type = %self.type_name,
                    field = field.field_name(),
                    offset = cursor.position(),
                    "subfield decode failed: {e}"
                );
                e.at(field.field_name())
            })?;
        }
        trace!(
            message_type = %self.type_name,
            bytes = cursor.position() - start,
            "decoded composite"
        );
        self.decoded = true;
        Ok(())
    }

    pub fn reset(&mut self) {
        self.fields.iter_mut().for_each(Field::reset);
        self.decoded = false;
    }

    pub fn clone_template(&self) -> Self {
        Self {
            type_name: self.type_name.clone(),
            name: self.name.clone(),
            fields: self.fields.iter().map(Field::clone_template).collect(),
            decoded: false,
        }
    }

    pub fn set_order(&mut self, order: ByteOrder) {
        for field in &mut self.fields {
            field.set_order(order);
        }
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.field_name() == name)
    }

    pub fn field_mut(&mut self, name: &str) -> Option<&mut Field> {
        self.fields.iter_mut().find(|f| f.field_name() == name)
    }

    /// Resolve a dotted path such as `header.stamp` or `points[2].x`.
    ///
    /// Indexed segments address the decoded children of a compound array.
    pub fn path(&self, path: &str) -> Option<&Field> {
        let mut segments = path.split('.');
        let mut current = self.segment(segments.next()?)?;
        for segment in segments {
            current = current.as_composite()?.segment(segment)?;
        }
        Some(current)
    }

    fn segment(&self, segment: &str) -> Option<&Field> {
        let Some((name, rest)) = segment.split_once('[') else {
            return self.field(segment);
        };
        let mut current = self.field(name)?;
        let mut rest = rest;
        loop {
            let (index, tail) = rest.split_once(']')?;
            let index: usize = index.parse().ok()?;
            current = current.as_array()?.fields().ok()?.get(index)?;
            match tail.strip_prefix('[') {
                Some(next) => rest = next,
                None if tail.is_empty() => return Some(current),
                None => return None,
            }
        }
    }

    pub fn to_value(&self) -> Result<Value, FieldError> {
        if !self.decoded {
            return Err(FieldError::Uninitialized {
                field: self.display_name().to_string(),
            });
        }
        let members = self
            .fields
            .iter()
            .map(|f| -> Result<_, FieldError> { Ok((f.field_name().to_string(), f.to_value()?)) })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Value::Struct(members))
    }

    fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.type_name
        } else {
            &self.name
        }
    }
}
