//! Encoding-agnostic building blocks for `bagdecode`.
//!
//! This crate provides the byte [`Cursor`] that field decoders consume, the
//! [`FieldError`] taxonomy, the ROS [`Time`] / [`Duration`] value types, and
//! the dynamic [`Value`] tree produced from decoded fields.

mod byte_order;
mod cursor;
mod error;
mod time;
mod value;

pub use byte_order::ByteOrder;
pub use cursor::Cursor;
pub use error::FieldError;
pub use time::{Duration, Time};
pub use value::Value;
