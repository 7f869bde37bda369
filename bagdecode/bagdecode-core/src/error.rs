//! Error taxonomy shared by every field decoder and accessor.

/// Error returned by field decoding and by accessors over decoded fields.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    /// An accessor was called before `decode`, or after `reset` without a new decode.
    #[error("field '{field}' has not been decoded")]
    Uninitialized { field: String },

    /// The buffer ended before the field's bytes were complete.
    #[error("unexpected end of buffer: needed {needed} bytes, {available} remaining")]
    UnexpectedEof { needed: usize, available: usize },

    /// A variable-length prefix was negative.
    #[error("invalid length prefix: {0}")]
    InvalidLength(i32),

    /// A stream count asked for more zero-width elements than are accepted.
    #[error("{count} elements of zero width exceed the limit of {limit}")]
    TooManyElements { count: usize, limit: usize },

    /// An accessor was requested that does not match the element type.
    #[error("cannot read '{type_name}' as {requested}")]
    TypeMismatch {
        type_name: String,
        requested: &'static str,
    },

    /// String bytes were not valid UTF-8.
    #[error("invalid UTF-8 in string: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    /// A failure while decoding the field at `path`.
    #[error("at {path}: {source}")]
    At {
        path: String,
        #[source]
        source: Box<FieldError>,
    },
}

impl FieldError {
    pub fn type_mismatch(type_name: impl Into<String>, requested: &'static str) -> Self {
        Self::TypeMismatch {
            type_name: type_name.into(),
            requested,
        }
    }

    /// Attach the field path segment `segment` to this error.
    ///
    /// Nested contexts collapse into one dotted path, so an error raised three
    /// levels deep reads `at header.stamp.sec: ...` rather than three wrappers.
    pub fn at(self, segment: &str) -> Self {
        if segment.is_empty() {
            return self;
        }
        match self {
            Self::At { path, source } => {
                let path = if path.starts_with('[') {
                    format!("{segment}{path}")
                } else {
                    format!("{segment}.{path}")
                };
                Self::At { path, source }
            }
            other => Self::At {
                path: segment.to_string(),
                source: Box::new(other),
            },
        }
    }

    /// The innermost error, with path context stripped.
    pub fn root_cause(&self) -> &FieldError {
        match self {
            Self::At { source, .. } => source.root_cause(),
            other => other,
        }
    }
}
