//! Decoded values: the data side of a descriptor tree.
//!
//! A [Value] is produced by decoding and consumed by encoding. Struct
//! descriptors map to [StructData], array descriptors to [ArrayData].

use std::ops::{Deref, Index};

/// A decoded (or to-be-encoded) value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Any integer kind.
    Int(i64),
    /// `Float32` or `Float64`.
    Float(f64),
    /// Fixed-width string contents.
    Bytes(Vec<u8>),
    Struct(StructData),
    Array(ArrayData),
}

impl Value {
    pub fn bytes(data: impl Into<Vec<u8>>) -> Self {
        Value::Bytes(data.into())
    }

    /// Variant name used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "integer",
            Value::Float(_) => "float",
            Value::Bytes(_) => "bytes",
            Value::Struct(_) => "struct",
            Value::Array(_) => "array",
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Bytes(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_struct(&self) -> Option<&StructData> {
        match self {
            Value::Struct(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&ArrayData> {
        match self {
            Value::Array(v) => Some(v),
            _ => None,
        }
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Value::Int(v as i64)
                }
            }
        )*
    };
}

impl_from_int!(i8, u8, i16, u16, i32, u32, i64);

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(v as f64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Bytes(v)
    }
}

impl From<&[u8]> for Value {
    fn from(v: &[u8]) -> Self {
        Value::Bytes(v.to_vec())
    }
}

impl From<StructData> for Value {
    fn from(v: StructData) -> Self {
        Value::Struct(v)
    }
}

impl From<ArrayData> for Value {
    fn from(v: ArrayData) -> Self {
        Value::Array(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Value::Array(ArrayData(v))
    }
}

/// Named container mirroring a struct descriptor. Entries keep insertion order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StructData {
    entries: Vec<(String, Value)>,
}

impl StructData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Sets `name` to `value`. An existing entry is replaced in place and its old value returned.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        let name = name.into();
        let value = value.into();

        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((name, value));
                None
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }
}

impl Index<&str> for StructData {
    type Output = Value;

    fn index(&self, name: &str) -> &Value {
        match self.get(name) {
            Some(value) => value,
            None => panic!("no field named `{name}`"),
        }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for StructData {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut data = StructData::new();
        for (name, value) in iter {
            data.insert(name, value);
        }
        data
    }
}

impl IntoIterator for StructData {
    type Item = (String, Value);
    type IntoIter = std::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Ordered container mirroring an array descriptor.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ArrayData(Vec<Value>);

impl ArrayData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, value: impl Into<Value>) {
        self.0.push(value.into());
    }

    pub fn into_inner(self) -> Vec<Value> {
        self.0
    }
}

impl Deref for ArrayData {
    type Target = [Value];

    fn deref(&self) -> &[Value] {
        &self.0
    }
}

impl From<Vec<Value>> for ArrayData {
    fn from(v: Vec<Value>) -> Self {
        ArrayData(v)
    }
}

impl<V: Into<Value>> FromIterator<V> for ArrayData {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        ArrayData(iter.into_iter().map(Into::into).collect())
    }
}

impl IntoIterator for ArrayData {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ArrayData {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_struct_data_keeps_insertion_order() {
        let data: StructData = [("z", 1), ("a", 2), ("m", 3)].into_iter().collect();
        assert_eq!(data.names().collect::<Vec<_>>(), vec!["z", "a", "m"]);
    }

    #[test]
    fn test_struct_data_insert_replaces_in_place() {
        let mut data = StructData::new();
        data.insert("x", 1);
        data.insert("y", 2);
        assert_eq!(data.insert("x", 10), Some(Value::Int(1)));
        assert_eq!(data.len(), 2);
        assert_eq!(data.names().collect::<Vec<_>>(), vec!["x", "y"]);
        assert_eq!(data["x"], Value::Int(10));
    }

    #[test]
    fn test_array_data_collect() {
        let data: ArrayData = [1u8, 2, 3].into_iter().collect();
        assert_eq!(data.len(), 3);
        assert_eq!(data[2], Value::Int(3));
    }

    #[test]
    fn test_accessors() {
        assert_eq!(Value::Int(4).as_int(), Some(4));
        assert_eq!(Value::Int(4).as_float(), None);
        assert_eq!(Value::bytes(b"ab").as_bytes(), Some(&b"ab"[..]));
        assert_eq!(Value::Float(1.5).type_name(), "float");
    }
}
