// src/error.rs
//
// Crate-wide error type. Every fallible operation in the library returns
// `Result<T>`; the binary turns these into exit codes.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// No shape is registered under the requested name.
    #[error("unknown shape `{0}`")]
    UnknownShape(String),

    /// The payload failed to deserialize into the typed shape: a required
    /// field is missing, a literal value is undocumented, or a value has
    /// the wrong JSON type.
    #[error("payload does not conform to `{shape}`: {source}")]
    Nonconforming {
        shape: String,
        #[source]
        source: serde_json::Error,
    },

    /// The payload carries fields the shape does not document (strict checks only).
    #[error("payload for `{shape}` carries undocumented fields: {}", fields.join(", "))]
    UndocumentedFields { shape: String, fields: Vec<String> },

    #[error("invalid search pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed JSON in {} (record {record}): {source}", path.display())]
    MalformedRecord {
        path: PathBuf,
        record: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to parse config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("invalid timestamp `{value}`: {source}")]
    Timestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// Returned by `FromStr` on literal unions when the text is not one of the
/// documented values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("`{value}` is not a documented {kind} value")]
pub struct LiteralError {
    pub kind: &'static str,
    pub value: String,
}

impl LiteralError {
    pub fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}
