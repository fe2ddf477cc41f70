//! Fixed-length array descriptor.

use std::ops::Index;

use log::debug;

use crate::{
    descriptor::Descriptor,
    errors::{DecodingError, EncodingError},
    order::ByteOrder,
    value::{ArrayData, Value},
};

/// `count` copies of one element descriptor laid out back to back.
///
/// Each element is an independent copy of the template named `name[i]`, so
/// nested containers inside elements carry their own offsets.
#[derive(Debug, Clone, PartialEq)]
pub struct Array {
    name: String,
    offset: usize,
    byte_order: ByteOrder,
    element_size: usize,
    elements: Vec<Descriptor>,
}

impl Array {
    /// Builds the array at offset 0 in big-endian order.
    pub fn new(name: impl Into<String>, element: &Descriptor, count: usize) -> Self {
        let name = name.into();
        let elements: Vec<Descriptor> = (0..count)
            .map(|i| element.instantiate(format!("{name}[{i}]")))
            .collect();
        let element_size = elements.first().map_or(0, Descriptor::size);

        let mut array = Array {
            name,
            offset: 0,
            byte_order: ByteOrder::default(),
            element_size,
            elements,
        };
        array.set_offset(0);
        array.set_byte_order(ByteOrder::default());

        debug!(
            "built array `{}`: {} x {} bytes",
            array.name, count, array.element_size
        );

        array
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn element_size(&self) -> usize {
        self.element_size
    }

    pub fn size(&self) -> usize {
        self.element_size * self.elements.len()
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Descriptor> {
        self.elements.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Descriptor> {
        self.elements.iter()
    }

    pub fn set_offset(&mut self, offset: usize) {
        self.offset = offset;
        for (i, element) in self.elements.iter_mut().enumerate() {
            element.set_offset(offset + i * self.element_size);
        }
    }

    pub fn set_byte_order(&mut self, byte_order: ByteOrder) {
        self.byte_order = byte_order;
        for element in &mut self.elements {
            element.set_byte_order(byte_order);
        }
    }

    pub fn instantiate(&self, name: impl Into<String>) -> Self {
        Array {
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
        let Value::Array(items) = value else {
            return Err(EncodingError::TypeMismatch {
                field: self.name.clone(),
                expected: "array",
                found: value.type_name(),
            });
        };

        if items.len() != self.elements.len() {
            return Err(EncodingError::LengthMismatch {
                field: self.name.clone(),
                expected: self.elements.len(),
                found: items.len(),
            });
        }

        for (element, item) in self.elements.iter().zip(items.iter()) {
            element.encode_into(item, out)?;
        }

        Ok(())
    }

    pub fn decode(&self, data: &[u8]) -> Result<ArrayData, DecodingError> {
        if data.len() < self.size() {
            return Err(DecodingError::TooShort {
                field: self.name.clone(),
                needed: self.size(),
                have: data.len(),
            });
        }

        let mut values = Vec::with_capacity(self.elements.len());
        for (i, element) in self.elements.iter().enumerate() {
            let start = i * self.element_size;
            values.push(element.decode(&data[start..start + self.element_size])?);
        }

        Ok(ArrayData::from(values))
    }
}

impl Index<usize> for Array {
    type Output = Descriptor;

    fn index(&self, index: usize) -> &Descriptor {
        &self.elements[index]
    }
}

impl<'a> IntoIterator for &'a Array {
    type Item = &'a Descriptor;
    type IntoIter = std::slice::Iter<'a, Descriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
