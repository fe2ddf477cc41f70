//! Struct descriptor: an ordered composition of named fields.

use std::collections::HashMap;

use log::debug;

use crate::{
    descriptor::Descriptor,
    errors::{DecodingError, EncodingError, SchemaError},
    order::ByteOrder,
    value::{StructData, Value},
};

/// Named fields laid out back to back in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct Struct {
    name: String,
    offset: usize,
    byte_order: ByteOrder,
    size: usize,
    fields: Vec<Descriptor>,
    index: HashMap<String, usize>,
}

impl Struct {
    /// Builds the struct at offset 0 in big-endian order. Field names must be unique.
    pub fn new(
        name: impl Into<String>,
        fields: impl IntoIterator<Item = Descriptor>,
    ) -> Result<Self, SchemaError> {
        let name = name.into();
        let fields: Vec<Descriptor> = fields.into_iter().collect();

        let mut index = HashMap::with_capacity(fields.len());
        for (i, field) in fields.iter().enumerate() {
            if index.insert(field.name().to_string(), i).is_some() {
                return Err(SchemaError::DuplicateField {
                    structure: name,
                    name: field.name().to_string(),
                });
            }
        }

        let mut structure = Struct {
            name,
            offset: 0,
            byte_order: ByteOrder::default(),
            size: fields.iter().map(Descriptor::size).sum(),
            fields,
            index,
        };
        structure.set_offset(0);
        structure.set_byte_order(ByteOrder::default());

        debug!(
            "built struct `{}`: {} fields, {} bytes",
            structure.name,
            structure.fields.len(),
            structure.size
        );

        Ok(structure)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    /// Looks up a field descriptor by name.
    pub fn field(&self, name: &str) -> Option<&Descriptor> {
        self.index.get(name).map(|&i| &self.fields[i])
    }

    pub fn fields(&self) -> &[Descriptor] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Swaps the sub-schema stored under `name`, returning the previous one.
    ///
    /// The replacement takes the slot's name and the struct's byte order; size
    /// and offsets are recomputed. Returns `None` and leaves the struct unchanged
    /// when no such field exists.
    pub fn replace_field(&mut self, name: &str, descriptor: Descriptor) -> Option<Descriptor> {
        let i = *self.index.get(name)?;

        let mut descriptor = descriptor.instantiate(name);
        descriptor.set_byte_order(self.byte_order);

        let previous = std::mem::replace(&mut self.fields[i], descriptor);
        self.size = self.fields.iter().map(Descriptor::size).sum();
        self.set_offset(self.offset);

        Some(previous)
    }

    pub fn set_offset(&mut self, offset: usize) {
        self.offset = offset;

        let mut running = offset;
        for field in &mut self.fields {
            field.set_offset(running);
            running += field.size();
        }
    }

    pub fn set_byte_order(&mut self, byte_order: ByteOrder) {
        self.byte_order = byte_order;
        for field in &mut self.fields {
            field.set_byte_order(byte_order);
        }
    }

    pub fn instantiate(&self, name: impl Into<String>) -> Self {
        Struct {
            name: name.into(),
            ..self.clone()
        }
    }

    pub fn encode(&self, value: &Value) -> Result<Vec<u8>, EncodingError> {
        let mut out = Vec::with_capacity(self.size);
        self.encode_into(value, &mut out)?;
        Ok(out)
    }

    pub(crate) fn encode_into(&self, value: &Value, out: &mut Vec<u8>) -> Result<(), EncodingError> {
        let Value::Struct(data) = value else {
            return Err(EncodingError::TypeMismatch {
                field: self.name.clone(),
                expected: "struct",
                found: value.type_name(),
            });
        };

        for field in &self.fields {
            let item = data
                .get(field.name())
                .ok_or_else(|| EncodingError::MissingField {
                    field: self.name.clone(),
                    name: field.name().to_string(),
                })?;
            field.encode_into(item, out)?;
        }

        Ok(())
    }

    pub fn decode(&self, data: &[u8]) -> Result<StructData, DecodingError> {
        if data.len() < self.size {
            return Err(DecodingError::TooShort {
                field: self.name.clone(),
                needed: self.size,
                have: data.len(),
            });
        }

        let mut values = StructData::with_capacity(self.fields.len());
        let mut position = 0;
        for field in &self.fields {
            let size = field.size();
            values.insert(field.name(), field.decode(&data[position..position + size])?);
            position += size;
        }

        Ok(values)
    }
}
