//! Error types for schema construction, encoding and decoding.

use thiserror::Error;

use crate::kind::ScalarKind;

/// Errors produced while building a descriptor tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// Two fields of the same struct share a name.
    #[error("struct `{structure}` declares field `{name}` more than once")]
    DuplicateField { structure: String, name: String },

    /// String fields must be at least one byte wide.
    #[error("string field `{field}` has zero width")]
    InvalidStringWidth { field: String },

    /// Scalar kind code is not one of the supported kinds.
    #[error("unsupported scalar kind `{0}`")]
    UnsupportedKind(String),

    /// A schema definition could not be read.
    #[error("invalid schema definition: {0}")]
    Definition(String),
}

/// Errors produced when a [crate::value::Value] does not fit the schema.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodingError {
    /// Value variant does not match the descriptor (e.g. bytes given to an integer).
    #[error("{field}: expected {expected}, got {found}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        found: &'static str,
    },

    /// Scalar does not fit in the field's kind.
    #[error("{field}: {value} is out of range for {kind}")]
    OutOfRange {
        field: String,
        kind: ScalarKind,
        value: String,
    },

    /// Struct value has no entry for a declared field.
    #[error("{field}: missing field `{name}`")]
    MissingField { field: String, name: String },

    /// Array value has the wrong number of elements.
    #[error("{field}: expected {expected} elements, got {found}")]
    LengthMismatch {
        field: String,
        expected: usize,
        found: usize,
    },

    /// Byte string longer than a strict string field.
    #[error("{field}: {len} bytes do not fit in {width}")]
    StringTooLong {
        field: String,
        width: usize,
        len: usize,
    },
}

/// Errors produced when reading a buffer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodingError {
    /// Input is shorter than the descriptor's size.
    #[error("{field}: buffer too short (need {needed} bytes, have {have})")]
    TooShort {
        field: String,
        needed: usize,
        have: usize,
    },
}
