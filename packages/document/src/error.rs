use crate::kind::ValueKind;
use thiserror::Error;

/// A path step that could not be followed
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ResolveError {
    #[error("Key {key:?} not found at {at}")]
    MissingKey { at: String, key: String },

    #[error("Index {index} out of range at {at} (length {len})")]
    IndexOutOfRange { at: String, index: usize, len: usize },

    #[error("Cannot step into {found} at {at}: expected {expected}")]
    ShapeMismatch {
        at: String,
        expected: ValueKind,
        found: ValueKind,
    },

    #[error("Invalid JSON pointer {0:?}")]
    InvalidPointer(String),
}

impl ResolveError {
    pub fn missing_key(at: impl Into<String>, key: impl Into<String>) -> Self {
        Self::MissingKey {
            at: at.into(),
            key: key.into(),
        }
    }

    pub fn index_out_of_range(at: impl Into<String>, index: usize, len: usize) -> Self {
        Self::IndexOutOfRange {
            at: at.into(),
            index,
            len,
        }
    }

    pub fn shape_mismatch(at: impl Into<String>, expected: ValueKind, found: ValueKind) -> Self {
        Self::ShapeMismatch {
            at: at.into(),
            expected,
            found,
        }
    }
}

/// Failure converting between document text and the parsed tree
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CodecError {
    #[error("Parse error at {line}:{column}: {message}")]
    Parse {
        line: usize,
        column: usize,
        message: String,
    },

    #[error("Serialize error: {0}")]
    Serialize(String),
}

impl CodecError {
    pub fn parse(line: usize, column: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            column,
            message: message.into(),
        }
    }
}
