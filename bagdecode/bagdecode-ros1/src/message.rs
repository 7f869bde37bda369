//! Decoded messages paired with their bag metadata.

use std::sync::Arc;

use bagdecode_core::{Cursor, FieldError, Time};
use bytes::Bytes;
use tracing::debug;

use crate::field::CompositeField;

/// Connection record from the bag container: one topic published with one
/// message type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    pub id: u32,
    pub topic: String,
    pub message_type: String,
    pub md5sum: String,
    /// Full `.msg` text the field templates were built from.
    pub message_definition: String,
}

/// A decoded message with the topic, receive time and connection it came from.
#[derive(Debug, Clone)]
pub struct BagMessage {
    topic: String,
    message: CompositeField,
    timestamp: Time,
    connection: Option<Arc<Connection>>,
}

impl BagMessage {
    pub fn new(topic: impl Into<String>, message: CompositeField, timestamp: Time) -> Self {
        Self {
            topic: topic.into(),
            message,
            timestamp,
            connection: None,
        }
    }

    pub fn from_connection(
        connection: Arc<Connection>,
        message: CompositeField,
        timestamp: Time,
    ) -> Self {
        Self {
            topic: connection.topic.clone(),
            message,
            timestamp,
            connection: Some(connection),
        }
    }

    /// Decode `data` into a fresh copy of `template` and pair it with `connection`.
    ///
    /// `template` itself is left untouched, so one template serves every
    /// message on the connection.
    pub fn decode(
        connection: Arc<Connection>,
        template: &CompositeField,
        data: impl Into<Bytes>,
        timestamp: Time,
    ) -> Result<Self, FieldError> {
        let mut cursor = Cursor::new(data);
        let mut message = template.clone_template();
        message.decode(&mut cursor)?;
        if !cursor.is_empty() {
            debug!(
                topic = %connection.topic,
                message_type = %connection.message_type,
                trailing = cursor.remaining(),
                "message payload has trailing bytes"
            );
        }
        Ok(Self::from_connection(connection, message, timestamp))
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn message(&self) -> &CompositeField {
        &self.message
    }

    pub fn timestamp(&self) -> Time {
        self.timestamp
    }

    pub fn connection(&self) -> Option<&Connection> {
        self.connection.as_deref()
    }

    pub fn into_message(self) -> CompositeField {
        self.message
    }
}
