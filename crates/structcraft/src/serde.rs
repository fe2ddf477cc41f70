//! JSON-deserializable schema description.
//!
//! These types describe the *shape* of a binary record. They are intended to be
//! read from JSON (for example a schema file shipped with your application) and
//! then compiled into a [Schema].
//!
//! ```json
//! {
//!   "byte_order": "LittleEndian",
//!   "root": {
//!     "type": "Struct",
//!     "name": "Point",
//!     "fields": [
//!       { "type": "Primitive", "name": "x", "kind": "SInt32" },
//!       { "type": "Primitive", "name": "y", "kind": "i" }
//!     ]
//!   }
//! }
//! ```
//!
//! Decoded values implement [serde::Serialize]: integers and floats as
//! numbers, strings as byte sequences, arrays as sequences and structs as maps in
//! declaration order.

use log::debug;
use serde::{
    Deserialize, Serialize, Serializer,
    ser::{SerializeMap, SerializeSeq},
};

use crate::{
    array::Array,
    descriptor::Descriptor,
    errors::SchemaError,
    field::Field,
    order::ByteOrder,
    schema::Schema,
    string::{StringField, StringPolicy},
    structure::Struct,
    value::{ArrayData, StructData, Value},
};

/// Top-level schema definition.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SchemaDef {
    /// The record layout.
    pub root: DescriptorDef,
    /// Byte order applied to the whole tree; big-endian when absent.
    #[serde(default)]
    pub byte_order: Option<ByteOrder>,
}

/// Description of a single node of the tree.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(tag = "type")]
pub enum DescriptorDef {
    /// Scalar field. `kind` is a kind name (`UInt16`) or a format character (`H`).
    Primitive { name: String, kind: String },
    /// Fixed-width byte string.
    String {
        name: String,
        width: usize,
        #[serde(default)]
        policy: StringPolicy,
    },
    /// `count` copies of `element`; the element's own name is not used.
    Array {
        name: String,
        element: Box<DescriptorDef>,
        count: usize,
    },
    /// Ordered named fields.
    Struct {
        name: String,
        fields: Vec<DescriptorDef>,
    },
}

impl TryFrom<DescriptorDef> for Descriptor {
    type Error = SchemaError;

    fn try_from(value: DescriptorDef) -> Result<Self, Self::Error> {
        match value {
            DescriptorDef::Primitive { name, kind } => {
                Ok(Descriptor::Primitive(Field::new(name, kind.parse()?)))
            }
            DescriptorDef::String {
                name,
                width,
                policy,
            } => Ok(Descriptor::String(
                StringField::new(name, width)?.with_policy(policy),
            )),
            DescriptorDef::Array {
                name,
                element,
                count,
            } => {
                let element = Descriptor::try_from(*element)?;
                Ok(Descriptor::Array(Array::new(name, &element, count)))
            }
            DescriptorDef::Struct { name, fields } => {
                let fields = fields
                    .into_iter()
                    .map(Descriptor::try_from)
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Descriptor::Struct(Struct::new(name, fields)?))
            }
        }
    }
}

impl TryFrom<SchemaDef> for Schema {
    type Error = SchemaError;

    fn try_from(value: SchemaDef) -> Result<Self, Self::Error> {
        let root = Descriptor::try_from(value.root)?;
        let schema = Schema::new(root).with_byte_order(value.byte_order.unwrap_or_default());

        debug!(
            "compiled schema `{}`: {} bytes, {:?}",
            schema.root().name(),
            schema.size(),
            schema.byte_order()
        );

        Ok(schema)
    }
}

impl Schema {
    /// Parses a [SchemaDef] from JSON and compiles it.
    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        let def: SchemaDef =
            serde_json::from_str(json).map_err(|e| SchemaError::Definition(e.to_string()))?;
        Schema::try_from(def)
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Int(v) => serializer.serialize_i64(*v),
            Value::Float(v) => serializer.serialize_f64(*v),
            Value::Bytes(v) => {
                let mut seq = serializer.serialize_seq(Some(v.len()))?;
                for byte in v {
                    seq.serialize_element(byte)?;
                }
                seq.end()
            }
            Value::Struct(v) => v.serialize(serializer),
            Value::Array(v) => v.serialize(serializer),
        }
    }
}

impl Serialize for StructData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, value) in self.iter() {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl Serialize for ArrayData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for value in self.iter() {
            seq.serialize_element(value)?;
        }
        seq.end()
    }
}

#[cfg(test)]
mod tests {
    use crate::kind::ScalarKind;

    use super::*;

    const POINT: &str = r#"{
        "byte_order": "LittleEndian",
        "root": {
            "type": "Struct",
            "name": "Point",
            "fields": [
                { "type": "Primitive", "name": "x", "kind": "SInt32" },
                { "type": "Primitive", "name": "y", "kind": "i" },
                { "type": "String", "name": "label", "width": 4, "policy": "Strict" },
                {
                    "type": "Array",
                    "name": "tags",
                    "count": 2,
                    "element": { "type": "Primitive", "name": "tag", "kind": "UInt8" }
                }
            ]
        }
    }"#;

    #[test]
    fn test_from_json() {
        let schema = Schema::from_json(POINT).unwrap();
        assert_eq!(schema.size(), 14);
        assert_eq!(schema.byte_order(), ByteOrder::LittleEndian);

        let root = schema.root().as_struct().unwrap();
        assert_eq!(
            root.field("y"),
            Some(&Descriptor::Primitive({
                let mut f = Field::new("y", ScalarKind::SInt32);
                f.set_offset(4);
                f.set_byte_order(ByteOrder::LittleEndian);
                f
            }))
        );

        let Some(Descriptor::String(label)) = root.field("label") else {
            panic!("label is not a string field");
        };
        assert_eq!(label.policy(), StringPolicy::Strict);
        assert_eq!(root.field("tags").unwrap().as_array().unwrap()[1].name(), "tags[1]");
    }

    #[test]
    fn test_unsupported_kind() {
        let json = r#"{ "root": { "type": "Primitive", "name": "x", "kind": "Int128" } }"#;
        assert_eq!(
            Schema::from_json(json),
            Err(SchemaError::UnsupportedKind("Int128".to_string()))
        );
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            Schema::from_json("{ \"root\": 3 }"),
            Err(SchemaError::Definition(_))
        ));
    }

    #[test]
    fn test_serialize_value() {
        let schema = Schema::from_json(POINT).unwrap();
        let value = schema
            .decode(&[1, 0, 0, 0, 0xff, 0xff, 0xff, 0xff, b'a', b'b', 0, 0, 7, 8])
            .unwrap();

        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, r#"{"x":1,"y":-1,"label":[97,98,0,0],"tags":[7,8]}"#);
    }
}
