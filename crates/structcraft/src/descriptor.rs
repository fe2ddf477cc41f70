//! The closed set of schema nodes and the dispatch between them.

use log::trace;

use crate::{
    array::Array,
    errors::{DecodingError, EncodingError, SchemaError},
    field::Field,
    kind::ScalarKind,
    order::ByteOrder,
    string::StringField,
    structure::Struct,
    value::Value,
};

/// A node of a schema tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Descriptor {
    Primitive(Field),
    String(StringField),
    Array(Array),
    Struct(Struct),
}

impl Descriptor {
    pub fn primitive(name: impl Into<String>, kind: ScalarKind) -> Self {
        Descriptor::Primitive(Field::new(name, kind))
    }

    pub fn string(name: impl Into<String>, width: usize) -> Result<Self, SchemaError> {
        Ok(Descriptor::String(StringField::new(name, width)?))
    }

    /// Array of `count` copies of `element`.
    pub fn array(name: impl Into<String>, element: &Descriptor, count: usize) -> Self {
        Descriptor::Array(Array::new(name, element, count))
    }

    pub fn structure(
        name: impl Into<String>,
        fields: impl IntoIterator<Item = Descriptor>,
    ) -> Result<Self, SchemaError> {
        Ok(Descriptor::Struct(Struct::new(name, fields)?))
    }

    pub fn name(&self) -> &str {
        match self {
            Descriptor::Primitive(d) => d.name(),
            Descriptor::String(d) => d.name(),
            Descriptor::Array(d) => d.name(),
            Descriptor::Struct(d) => d.name(),
        }
    }

    pub fn size(&self) -> usize {
        match self {
            Descriptor::Primitive(d) => d.size(),
            Descriptor::String(d) => d.size(),
            Descriptor::Array(d) => d.size(),
            Descriptor::Struct(d) => d.size(),
        }
    }

    pub fn offset(&self) -> usize {
        match self {
            Descriptor::Primitive(d) => d.offset(),
            Descriptor::String(d) => d.offset(),
            Descriptor::Array(d) => d.offset(),
            Descriptor::Struct(d) => d.offset(),
        }
    }

    pub fn byte_order(&self) -> ByteOrder {
        match self {
            Descriptor::Primitive(d) => d.byte_order(),
            Descriptor::String(d) => d.byte_order(),
            Descriptor::Array(d) => d.byte_order(),
            Descriptor::Struct(d) => d.byte_order(),
        }
    }

    /// Moves this node to `offset`, recomputing the offsets of every descendant.
    pub fn set_offset(&mut self, offset: usize) {
        match self {
            Descriptor::Primitive(d) => d.set_offset(offset),
            Descriptor::String(d) => d.set_offset(offset),
            Descriptor::Array(d) => d.set_offset(offset),
            Descriptor::Struct(d) => d.set_offset(offset),
        }
    }

    /// Sets the byte order of this node and every descendant.
    pub fn set_byte_order(&mut self, byte_order: ByteOrder) {
        match self {
            Descriptor::Primitive(d) => d.set_byte_order(byte_order),
            Descriptor::String(d) => d.set_byte_order(byte_order),
            Descriptor::Array(d) => d.set_byte_order(byte_order),
            Descriptor::Struct(d) => d.set_byte_order(byte_order),
        }
    }

    /// Independent copy of this node under a new name.
    pub fn instantiate(&self, name: impl Into<String>) -> Self {
        match self {
            Descriptor::Primitive(d) => Descriptor::Primitive(d.instantiate(name)),
            Descriptor::String(d) => Descriptor::String(d.instantiate(name)),
            Descriptor::Array(d) => Descriptor::Array(d.instantiate(name)),
            Descriptor::Struct(d) => Descriptor::Struct(d.instantiate(name)),
        }
    }

    /// Encodes `value` into exactly [Descriptor::size] bytes.
    pub fn encode(&self, value: &Value) -> Result<Vec<u8>, EncodingError> {
        trace!("encoding `{}` ({} bytes)", self.name(), self.size());

        let mut out = Vec::with_capacity(self.size());
        self.encode_into(value, &mut out)?;
        Ok(out)
    }

    pub(crate) fn encode_into(&self, value: &Value, out: &mut Vec<u8>) -> Result<(), EncodingError> {
        match self {
            Descriptor::Primitive(d) => d.encode_into(value, out),
            Descriptor::String(d) => d.encode_into(value, out),
            Descriptor::Array(d) => d.encode_into(value, out),
            Descriptor::Struct(d) => d.encode_into(value, out),
        }
    }

    /// Decodes the first [Descriptor::size] bytes of `data`.
    pub fn decode(&self, data: &[u8]) -> Result<Value, DecodingError> {
        trace!("decoding `{}` from {} bytes", self.name(), data.len());

        match self {
            Descriptor::Primitive(d) => d.decode(data),
            Descriptor::String(d) => d.decode(data),
            Descriptor::Array(d) => d.decode(data).map(Value::Array),
            Descriptor::Struct(d) => d.decode(data).map(Value::Struct),
        }
    }

    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Descriptor::Array(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_struct(&self) -> Option<&Struct> {
        match self {
            Descriptor::Struct(d) => Some(d),
            _ => None,
        }
    }
}

impl From<Field> for Descriptor {
    fn from(value: Field) -> Self {
        Descriptor::Primitive(value)
    }
}

impl From<StringField> for Descriptor {
    fn from(value: StringField) -> Self {
        Descriptor::String(value)
    }
}

impl From<Array> for Descriptor {
    fn from(value: Array) -> Self {
        Descriptor::Array(value)
    }
}

impl From<Struct> for Descriptor {
    fn from(value: Struct) -> Self {
        Descriptor::Struct(value)
    }
}
