//! The polymorphic field model.
//!
//! A schema is turned into a tree of [`Field`] templates once. Each serialized
//! occurrence of the message is then decoded into that tree (or into a
//! [`Field::clone_template`] copy of it), read through the accessors, and
//! [`Field::reset`] before the next occurrence.

mod array;
mod composite;
mod primitive;

pub use array::{ArrayField, MAX_ZERO_WIDTH_ELEMENTS};
pub use composite::CompositeField;
pub use primitive::PrimitiveField;

use bagdecode_core::{ByteOrder, Cursor, FieldError, Value};

use crate::kind::PrimitiveKind;

/// One decodable unit of a message: a built-in value, a nested message, or an
/// array of either.
#[derive(Debug, Clone)]
pub enum Field {
    Primitive(PrimitiveField),
    Composite(CompositeField),
    Array(ArrayField),
}

impl Field {
    pub fn primitive(kind: PrimitiveKind) -> Self {
        Self::Primitive(PrimitiveField::new(kind))
    }

    pub fn composite(type_name: impl Into<String>, fields: Vec<Field>) -> Self {
        Self::Composite(CompositeField::new(type_name, fields))
    }

    /// Array of `base`; `length == 0` reads the element count from the stream.
    pub fn array(base: Field, length: usize) -> Self {
        Self::Array(ArrayField::new(base, length))
    }

    /// Builder-style [`set_field_name`](Self::set_field_name).
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.set_field_name(name);
        self
    }

    pub fn type_name(&self) -> &str {
        match self {
            Self::Primitive(f) => f.type_name(),
            Self::Composite(f) => f.type_name(),
            Self::Array(f) => f.type_name(),
        }
    }

    pub fn field_name(&self) -> &str {
        match self {
            Self::Primitive(f) => f.field_name(),
            Self::Composite(f) => f.field_name(),
            Self::Array(f) => f.field_name(),
        }
    }

    pub fn set_field_name(&mut self, name: impl Into<String>) {
        match self {
            Self::Primitive(f) => f.set_field_name(name),
            Self::Composite(f) => f.set_field_name(name),
            Self::Array(f) => f.set_field_name(name),
        }
    }

    pub fn is_decoded(&self) -> bool {
        match self {
            Self::Primitive(f) => f.is_decoded(),
            Self::Composite(f) => f.is_decoded(),
            Self::Array(f) => f.is_decoded(),
        }
    }

    /// Consume exactly this field's bytes from `cursor`.
    ///
    /// Decoding an already-decoded field is a no-op; [`reset`](Self::reset)
    /// first to decode the next occurrence.
    pub fn decode(&mut self, cursor: &mut Cursor) -> Result<(), FieldError> {
        match self {
            Self::Primitive(f) => f.decode(cursor),
            Self::Composite(f) => f.decode(cursor),
            Self::Array(f) => f.decode(cursor),
        }
    }

    /// Drop decoded state, keeping the declared shape.
    pub fn reset(&mut self) {
        match self {
            Self::Primitive(f) => f.reset(),
            Self::Composite(f) => f.reset(),
            Self::Array(f) => f.reset(),
        }
    }

    /// Independent copy of the undecoded shape, name included.
    ///
    /// Unlike [`Clone`], decoded state is never carried over.
    pub fn clone_template(&self) -> Self {
        match self {
            Self::Primitive(f) => Self::Primitive(f.clone_template()),
            Self::Composite(f) => Self::Composite(f.clone_template()),
            Self::Array(f) => Self::Array(f.clone_template()),
        }
    }

    /// Reinterpret every retained scalar in this subtree in `order`.
    pub fn set_order(&mut self, order: ByteOrder) {
        match self {
            Self::Primitive(f) => f.set_order(order),
            Self::Composite(f) => f.set_order(order),
            Self::Array(f) => f.set_order(order),
        }
    }

    pub fn to_value(&self) -> Result<Value, FieldError> {
        match self {
            Self::Primitive(f) => f.to_value(),
            Self::Composite(f) => f.to_value(),
            Self::Array(f) => f.to_value(),
        }
    }

    pub fn as_primitive(&self) -> Option<&PrimitiveField> {
        match self {
            Self::Primitive(f) => Some(f),
            _ => None,
        }
    }

    pub fn as_composite(&self) -> Option<&CompositeField> {
        match self {
            Self::Composite(f) => Some(f),
            _ => None,
        }
    }

    pub fn as_composite_mut(&mut self) -> Option<&mut CompositeField> {
        match self {
            Self::Composite(f) => Some(f),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&ArrayField> {
        match self {
            Self::Array(f) => Some(f),
            _ => None,
        }
    }

    pub fn as_array_mut(&mut self) -> Option<&mut ArrayField> {
        match self {
            Self::Array(f) => Some(f),
            _ => None,
        }
    }
}

impl From<PrimitiveField> for Field {
    fn from(f: PrimitiveField) -> Self {
        Self::Primitive(f)
    }
}

impl From<CompositeField> for Field {
    fn from(f: CompositeField) -> Self {
        Self::Composite(f)
    }
}

impl From<ArrayField> for Field {
    fn from(f: ArrayField) -> Self {
        Self::Array(f)
    }
}
