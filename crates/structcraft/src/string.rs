//! Fixed-width byte string descriptor.

use crate::{
    errors::{DecodingError, EncodingError, SchemaError},
    order::ByteOrder,
    value::Value,
};

/// What to do with input longer than the field width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum StringPolicy {
    /// Keep the first `width` bytes.
    #[default]
    Truncate,
    /// Reject the value with [EncodingError::StringTooLong].
    Strict,
}

/// A byte string of exactly `width` bytes. Shorter input is zero padded on the right;
/// decoding returns the raw bytes including any padding.
#[derive(Debug, Clone, PartialEq)]
pub struct StringField {
    pub(crate) name: String,
    pub(crate) width: usize,
    pub(crate) offset: usize,
    pub(crate) byte_order: ByteOrder,
    pub(crate) policy: StringPolicy,
}

impl StringField {
    pub fn new(name: impl Into<String>, width: usize) -> Result<Self, SchemaError> {
        let name = name.into();
        if width == 0 {
            return Err(SchemaError::InvalidStringWidth { field: name });
        }

        Ok(StringField {
            name,
            width,
            offset: 0,
            byte_order: ByteOrder::default(),
            policy: StringPolicy::default(),
        })
    }

    pub fn with_policy(mut self, policy: StringPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> usize {
        self.width
    }

    pub fn policy(&self) -> StringPolicy {
        self.policy
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Recorded for uniformity with the rest of the tree; it does not affect the bytes.
    pub fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    pub fn set_offset(&mut self, offset: usize) {
        self.offset = offset;
    }

    pub fn set_byte_order(&mut self, byte_order: ByteOrder) {
        self.byte_order = byte_order;
    }

    pub fn instantiate(&self, name: impl Into<String>) -> Self {
        StringField {
            name: name.into(),
            ..self.clone()
        }
    }

    pub fn encode(&self, value: &Value) -> Result<Vec<u8>, EncodingError> {
        let mut out = Vec::with_capacity(self.width);
        self.encode_into(value, &mut out)?;
        Ok(out)
    }

    pub(crate) fn encode_into(&self, value: &Value, out: &mut Vec<u8>) -> Result<(), EncodingError> {
        let Value::Bytes(data) = value else {
            return Err(EncodingError::TypeMismatch {
                field: self.name.clone(),
                expected: "bytes",
                found: value.type_name(),
            });
        };

        if data.len() > self.width && self.policy == StringPolicy::Strict {
            return Err(EncodingError::StringTooLong {
                field: self.name.clone(),
                width: self.width,
                len: data.len(),
            });
        }

        let kept = data.len().min(self.width);
        out.extend_from_slice(&data[..kept]);
        out.resize(out.len() + self.width - kept, 0);
        Ok(())
    }

    pub fn decode(&self, data: &[u8]) -> Result<Value, DecodingError> {
        if data.len() < self.width {
            return Err(DecodingError::TooShort {
                field: self.name.clone(),
                needed: self.width,
                have: data.len(),
            });
        }

        Ok(Value::Bytes(data[..self.width].to_vec()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pads_short_input() {
        let field = StringField::new("s", 5).unwrap();
        assert_eq!(field.encode(&Value::bytes(b"hi")), Ok(b"hi\0\0\0".to_vec()));
    }

    #[test]
    fn test_truncates_long_input() {
        let field = StringField::new("s", 3).unwrap();
        assert_eq!(field.encode(&Value::bytes(b"hello")), Ok(b"hel".to_vec()));
    }

    #[test]
    fn test_strict_rejects_long_input() {
        let field = StringField::new("s", 3).unwrap().with_policy(StringPolicy::Strict);
        assert_eq!(
            field.encode(&Value::bytes(b"hello")),
            Err(EncodingError::StringTooLong {
                field: "s".to_string(),
                width: 3,
                len: 5,
            })
        );
        assert_eq!(field.encode(&Value::bytes(b"hi")), Ok(b"hi\0".to_vec()));
    }

    #[test]
    fn test_decode_keeps_padding() {
        let field = StringField::new("s", 5).unwrap();
        assert_eq!(field.decode(b"hi\0\0\0"), Ok(Value::bytes(b"hi\0\0\0")));
    }

    #[test]
    fn test_zero_width() {
        assert_eq!(
            StringField::new("s", 0),
            Err(SchemaError::InvalidStringWidth {
                field: "s".to_string()
            })
        );
    }

    #[test]
    fn test_rejects_non_bytes() {
        let field = StringField::new("s", 2).unwrap();
        assert!(matches!(
            field.encode(&Value::Int(1)),
            Err(EncodingError::TypeMismatch { .. })
        ));
    }
}
