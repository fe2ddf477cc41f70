//! Scalar kinds supported by primitive fields.

use std::{fmt, str::FromStr};

use crate::errors::SchemaError;

/// The semantic type of a primitive field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    SInt8,
    UInt8,
    SInt16,
    UInt16,
    SInt32,
    UInt32,
    Float32,
    Float64,
}

impl ScalarKind {
    /// Encoded width in bytes.
    pub fn size(self) -> usize {
        match self {
            ScalarKind::SInt8 | ScalarKind::UInt8 => 1,
            ScalarKind::SInt16 | ScalarKind::UInt16 => 2,
            ScalarKind::SInt32 | ScalarKind::UInt32 | ScalarKind::Float32 => 4,
            ScalarKind::Float64 => 8,
        }
    }

    pub fn is_float(self) -> bool {
        matches!(self, ScalarKind::Float32 | ScalarKind::Float64)
    }

    /// Inclusive value range of an integer kind, `None` for float kinds.
    pub fn int_range(self) -> Option<(i64, i64)> {
        match self {
            ScalarKind::SInt8 => Some((i8::MIN as i64, i8::MAX as i64)),
            ScalarKind::UInt8 => Some((0, u8::MAX as i64)),
            ScalarKind::SInt16 => Some((i16::MIN as i64, i16::MAX as i64)),
            ScalarKind::UInt16 => Some((0, u16::MAX as i64)),
            ScalarKind::SInt32 => Some((i32::MIN as i64, i32::MAX as i64)),
            ScalarKind::UInt32 => Some((0, u32::MAX as i64)),
            ScalarKind::Float32 | ScalarKind::Float64 => None,
        }
    }

    /// Packed-struct format character for this kind.
    pub fn format_char(self) -> char {
        match self {
            ScalarKind::SInt8 => 'b',
            ScalarKind::UInt8 => 'B',
            ScalarKind::SInt16 => 'h',
            ScalarKind::UInt16 => 'H',
            ScalarKind::SInt32 => 'i',
            ScalarKind::UInt32 => 'I',
            ScalarKind::Float32 => 'f',
            ScalarKind::Float64 => 'd',
        }
    }
}

impl TryFrom<char> for ScalarKind {
    type Error = SchemaError;

    fn try_from(code: char) -> Result<Self, Self::Error> {
        match code {
            'b' => Ok(ScalarKind::SInt8),
            'B' => Ok(ScalarKind::UInt8),
            'h' => Ok(ScalarKind::SInt16),
            'H' => Ok(ScalarKind::UInt16),
            'i' => Ok(ScalarKind::SInt32),
            'I' => Ok(ScalarKind::UInt32),
            'f' => Ok(ScalarKind::Float32),
            'd' => Ok(ScalarKind::Float64),
            other => Err(SchemaError::UnsupportedKind(other.to_string())),
        }
    }
}

/// Accepts a kind name (`"UInt16"`) or a single format character (`"H"`).
impl FromStr for ScalarKind {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        if let (Some(code), None) = (chars.next(), chars.next()) {
            return ScalarKind::try_from(code);
        }

        match s {
            "SInt8" => Ok(ScalarKind::SInt8),
            "UInt8" => Ok(ScalarKind::UInt8),
            "SInt16" => Ok(ScalarKind::SInt16),
            "UInt16" => Ok(ScalarKind::UInt16),
            "SInt32" => Ok(ScalarKind::SInt32),
            "UInt32" => Ok(ScalarKind::UInt32),
            "Float32" | "Float" => Ok(ScalarKind::Float32),
            "Float64" | "Double" => Ok(ScalarKind::Float64),
            other => Err(SchemaError::UnsupportedKind(other.to_string())),
        }
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
