//! # structcraft
//!
//! A library for encoding and decoding fixed-format binary records described by
//! declarative schemas.
//!
//! Compose primitive fields, fixed-width byte strings, structs and fixed-length
//! arrays into a [descriptor::Descriptor] tree. Sizes and offsets are computed
//! when the tree is built; byte order is set once on a container and applies to
//! everything below it. Encoding turns a [value::Value] into exactly `size()`
//! bytes, decoding turns bytes back into a named, nested value.
//!
//! ## Example
//!
//! ```
//! use structcraft::descriptor::Descriptor;
//! use structcraft::kind::ScalarKind;
//! use structcraft::order::ByteOrder;
//! use structcraft::value::{StructData, Value};
//!
//! let mut point = Descriptor::structure(
//!     "Point",
//!     [
//!         Descriptor::primitive("x", ScalarKind::SInt32),
//!         Descriptor::primitive("y", ScalarKind::SInt32),
//!     ],
//! )
//! .unwrap();
//!
//! let value = Value::Struct(StructData::from_iter([("x", 1), ("y", -1)]));
//! assert_eq!(
//!     point.encode(&value).unwrap(),
//!     vec![0x00, 0x00, 0x00, 0x01, 0xff, 0xff, 0xff, 0xff]
//! );
//!
//! point.set_byte_order(ByteOrder::LittleEndian);
//! let decoded = point.decode(&[0x01, 0x00, 0x00, 0x00, 0xff, 0xff, 0xff, 0xff]).unwrap();
//! assert_eq!(decoded, value);
//! ```

pub mod array;
pub mod bytes;
pub mod descriptor;
pub mod errors;
pub mod field;
pub mod kind;
pub mod layout;
pub mod order;
pub mod schema;
#[cfg(feature = "serde")]
pub mod serde;
pub mod string;
pub mod structure;
pub mod value;
