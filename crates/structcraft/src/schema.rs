//! Schema: a root descriptor ready to encode and decode whole buffers.

use crate::{
    descriptor::Descriptor,
    errors::{DecodingError, EncodingError},
    layout::LayoutEntry,
    order::ByteOrder,
    value::Value,
};

/// A root descriptor placed at offset 0. Use [Schema::encode] and [Schema::decode]
/// to move between [Value]s and buffers of exactly [Schema::size] bytes.
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    root: Descriptor,
}

impl Schema {
    pub fn new(mut root: Descriptor) -> Self {
        root.set_offset(0);
        Schema { root }
    }

    pub fn with_byte_order(mut self, byte_order: ByteOrder) -> Self {
        self.set_byte_order(byte_order);
        self
    }

    pub fn root(&self) -> &Descriptor {
        &self.root
    }

    pub fn into_root(self) -> Descriptor {
        self.root
    }

    pub fn size(&self) -> usize {
        self.root.size()
    }

    pub fn byte_order(&self) -> ByteOrder {
        self.root.byte_order()
    }

    pub fn set_byte_order(&mut self, byte_order: ByteOrder) {
        self.root.set_byte_order(byte_order);
    }

    pub fn layout(&self) -> Vec<LayoutEntry> {
        self.root.layout()
    }

    pub fn encode(&self, value: &Value) -> Result<Vec<u8>, EncodingError> {
        self.root.encode(value)
    }

    /// Decodes `data`, which must hold at least [Schema::size] bytes. Trailing bytes are ignored.
    pub fn decode(&self, data: &[u8]) -> Result<Value, DecodingError> {
        self.root.decode(data)
    }
}

impl From<Descriptor> for Schema {
    fn from(root: Descriptor) -> Self {
        Schema::new(root)
    }
}

#[cfg(test)]
mod tests {
    use crate::{kind::ScalarKind, value::StructData};

    use super::*;

    fn header() -> Schema {
        let root = Descriptor::structure(
            "Header",
            [
                Descriptor::string("magic", 4).unwrap(),
                Descriptor::primitive("version", ScalarKind::UInt16),
                Descriptor::primitive("length", ScalarKind::UInt32),
            ],
        )
        .unwrap();
        Schema::new(root)
    }

    #[test]
    fn test_encode_decode() {
        let schema = header().with_byte_order(ByteOrder::LittleEndian);
        let value = Value::Struct(StructData::from_iter([
            ("magic", Value::bytes(b"RIFF")),
            ("version", Value::Int(2)),
            ("length", Value::Int(0x0a0b0c0d)),
        ]));

        let bytes = schema.encode(&value).unwrap();
        assert_eq!(bytes, b"RIFF\x02\x00\x0d\x0c\x0b\x0a".to_vec());
        assert_eq!(schema.decode(&bytes), Ok(value));
    }

    #[test]
    fn test_trailing_bytes_ignored() {
        let schema = header();
        let mut data = vec![0u8; schema.size()];
        data.extend_from_slice(&[0xaa, 0xbb]);
        assert!(schema.decode(&data).is_ok());
    }

    #[test]
    fn test_new_moves_root_to_zero() {
        let mut root = Descriptor::primitive("x", ScalarKind::UInt8);
        root.set_offset(5);
        let schema = Schema::from(root);
        assert_eq!(schema.root().offset(), 0);
        assert_eq!(schema.layout()[0].offset, 0);
    }
}
