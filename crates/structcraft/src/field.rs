//! Primitive field descriptor: a single named scalar.

use crate::{
    bytes::{self, Scalar},
    errors::{DecodingError, EncodingError},
    kind::ScalarKind,
    order::ByteOrder,
    value::Value,
};

/// A named scalar of fixed width.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub(crate) name: String,
    pub(crate) kind: ScalarKind,
    pub(crate) offset: usize,
    pub(crate) byte_order: ByteOrder,
}

impl Field {
    pub fn new(name: impl Into<String>, kind: ScalarKind) -> Self {
        Field {
            name: name.into(),
            kind,
            offset: 0,
            byte_order: ByteOrder::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ScalarKind {
        self.kind
    }

    pub fn size(&self) -> usize {
        self.kind.size()
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    pub fn set_offset(&mut self, offset: usize) {
        self.offset = offset;
    }

    pub fn set_byte_order(&mut self, byte_order: ByteOrder) {
        self.byte_order = byte_order;
    }

    /// Copy of this field under a different name.
    pub fn instantiate(&self, name: impl Into<String>) -> Self {
        Field {
            name: name.into(),
            ..self.clone()
        }
    }

    pub fn encode(&self, value: &Value) -> Result<Vec<u8>, EncodingError> {
        let mut out = Vec::with_capacity(self.size());
        self.encode_into(value, &mut out)?;
        Ok(out)
    }

    pub(crate) fn encode_into(&self, value: &Value, out: &mut Vec<u8>) -> Result<(), EncodingError> {
        let scalar = self.check(value)?;
        bytes::write_scalar(self.kind, self.byte_order, scalar, out);
        Ok(())
    }

    pub fn decode(&self, data: &[u8]) -> Result<Value, DecodingError> {
        if data.len() < self.size() {
            return Err(DecodingError::TooShort {
                field: self.name.clone(),
                needed: self.size(),
                have: data.len(),
            });
        }

        Ok(bytes::read_scalar(self.kind, self.byte_order, data))
    }

    /// Validates `value` against the field's kind.
    fn check(&self, value: &Value) -> Result<Scalar, EncodingError> {
        let out_of_range = || EncodingError::OutOfRange {
            field: self.name.clone(),
            kind: self.kind,
            value: match value {
                Value::Int(v) => v.to_string(),
                Value::Float(v) => v.to_string(),
                other => other.type_name().to_string(),
            },
        };

        match (self.kind.int_range(), value) {
            (Some((min, max)), Value::Int(v)) => {
                if *v < min || *v > max {
                    return Err(out_of_range());
                }
                Ok(Scalar::Int(*v))
            }
            (Some((min, max)), Value::Float(v)) if v.is_finite() && v.fract() == 0.0 => {
                if *v < min as f64 || *v > max as f64 {
                    return Err(out_of_range());
                }
                Ok(Scalar::Int(*v as i64))
            }
            (None, Value::Int(v)) => Ok(Scalar::Float(*v as f64)),
            (None, Value::Float(v)) => {
                if self.kind == ScalarKind::Float32 && v.is_finite() && v.abs() > f32::MAX as f64
                {
                    return Err(out_of_range());
                }
                Ok(Scalar::Float(*v))
            }
            (range, other) => Err(EncodingError::TypeMismatch {
                field: self.name.clone(),
                expected: if range.is_some() { "integer" } else { "number" },
                found: other.type_name(),
            }),
        }
    }
}
