//! ROS 1 message decoding for `bagdecode`.
//!
//! A message definition is represented as a tree of [`Field`] templates:
//! [`PrimitiveField`] for built-ins and strings, [`CompositeField`] for nested
//! messages, and [`ArrayField`] for fixed- or variable-length arrays of either.
//! Templates are built by the schema layer and decoded against a
//! [`Cursor`](bagdecode_core::Cursor) positioned at the start of a message
//! payload.
//!
//! # Pipeline
//!
//! ```text
//! template tree (built once per connection)
//!   └─ clone_template / reset   – fresh, undecoded instance
//!       └─ decode(&mut Cursor)   – consumes the payload, recursing into children
//!           └─ accessors         – typed views, reinterpreted on demand
//! ```
//!
//! # Example
//!
//! ```
//! use bagdecode_core::Cursor;
//! use bagdecode_ros1::{Field, PrimitiveKind};
//!
//! let mut field = Field::array(Field::primitive(PrimitiveKind::UInt32), 3).named("ids");
//! let mut cursor = Cursor::new(vec![1, 0, 0, 0, 2, 0, 0, 0, 3, 0, 0, 0]);
//! field.decode(&mut cursor).unwrap();
//!
//! let ids = field.as_array().unwrap().as_uints().unwrap();
//! assert_eq!(ids, vec![1, 2, 3]);
//! ```

mod field;
mod kind;
mod message;

pub use field::{ArrayField, CompositeField, Field, MAX_ZERO_WIDTH_ELEMENTS, PrimitiveField};
pub use kind::{PrimitiveKind, element_width};
pub use message::{BagMessage, Connection};
