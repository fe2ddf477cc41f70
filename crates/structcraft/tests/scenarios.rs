use structcraft::{
    descriptor::Descriptor,
    errors::{DecodingError, EncodingError},
    kind::ScalarKind,
    order::ByteOrder,
    schema::Schema,
    value::{ArrayData, StructData, Value},
};

#[test]
fn test_point_big_endian() {
    let point = Descriptor::structure(
        "P",
        [
            Descriptor::primitive("x", ScalarKind::SInt32),
            Descriptor::primitive("y", ScalarKind::SInt32),
        ],
    )
    .unwrap();
    let value = Value::Struct(StructData::from_iter([("x", 1), ("y", -1)]));

    let bytes = point.encode(&value).unwrap();
    assert_eq!(bytes, b"\x00\x00\x00\x01\xff\xff\xff\xff".to_vec());
    assert_eq!(point.decode(&bytes), Ok(value));
}

#[test]
fn test_string_padding_kept() {
    let s = Descriptor::string("s", 5).unwrap();

    let bytes = s.encode(&Value::bytes(b"hi")).unwrap();
    assert_eq!(bytes, b"hi\x00\x00\x00".to_vec());
    assert_eq!(s.decode(&bytes), Ok(Value::bytes(b"hi\x00\x00\x00")));
}

#[test]
fn test_uint8_array() {
    let uint8 = Descriptor::primitive("UInt8", ScalarKind::UInt8);
    let a = Descriptor::array("a", &uint8, 3);

    let value = Value::Array([1, 2, 3].into_iter().collect());
    assert_eq!(a.encode(&value), Ok(b"\x01\x02\x03".to_vec()));
    assert_eq!(a.decode(b"\x01\x02\x03"), Ok(value));

    let empty = Descriptor::array("a", &uint8, 0);
    assert_eq!(empty.encode(&Value::Array(ArrayData::new())), Ok(Vec::new()));
    assert_eq!(empty.decode(b"anything"), Ok(Value::Array(ArrayData::new())));
}

#[test]
fn test_little_endian_struct_of_array() {
    let mut s = Descriptor::structure(
        "S",
        [Descriptor::array(
            "a",
            &Descriptor::primitive("UInt16", ScalarKind::UInt16),
            2,
        )],
    )
    .unwrap();
    s.set_byte_order(ByteOrder::LittleEndian);

    let value = Value::Struct(StructData::from_iter([(
        "a",
        [1, 256].into_iter().collect::<ArrayData>(),
    )]));
    assert_eq!(s.encode(&value), Ok(b"\x01\x00\x00\x01".to_vec()));
}

#[test]
fn test_short_buffer_fails() {
    let point = Descriptor::structure(
        "P",
        [
            Descriptor::primitive("x", ScalarKind::SInt32),
            Descriptor::primitive("y", ScalarKind::SInt32),
        ],
    )
    .unwrap();

    assert_eq!(
        point.decode(&[0, 0, 0, 1, 0xff]),
        Err(DecodingError::TooShort {
            field: "P".to_string(),
            needed: 8,
            have: 5,
        })
    );
}

#[test]
fn test_nested_record() {
    let vertex = Descriptor::structure(
        "Vertex",
        [
            Descriptor::primitive("x", ScalarKind::Float32),
            Descriptor::primitive("y", ScalarKind::Float32),
            Descriptor::primitive("flags", ScalarKind::UInt8),
        ],
    )
    .unwrap();
    let mesh = Descriptor::structure(
        "Mesh",
        [
            Descriptor::string("name", 8).unwrap(),
            Descriptor::primitive("id", ScalarKind::UInt32),
            Descriptor::array("vertices", &vertex, 3),
            Descriptor::primitive("scale", ScalarKind::Float64),
        ],
    )
    .unwrap();
    let schema = Schema::new(mesh).with_byte_order(ByteOrder::LittleEndian);
    assert_eq!(schema.size(), 8 + 4 + 3 * 9 + 8);

    let vertices: ArrayData = (0..3)
        .map(|i| {
            Value::Struct(StructData::from_iter([
                ("x", Value::Float(i as f64 * 0.5)),
                ("y", Value::Float(-(i as f64))),
                ("flags", Value::Int(i)),
            ]))
        })
        .collect();
    let value = Value::Struct(StructData::from_iter([
        ("name", Value::bytes(b"cube\0\0\0\0")),
        ("id", Value::Int(42)),
        ("vertices", Value::Array(vertices)),
        ("scale", Value::Float(2.25)),
    ]));

    let bytes = schema.encode(&value).unwrap();
    assert_eq!(bytes.len(), schema.size());
    assert_eq!(&bytes[8..12], &[42, 0, 0, 0]);
    assert_eq!(schema.decode(&bytes), Ok(value));

    let layout = schema.layout();
    let flags = layout
        .iter()
        .find(|e| e.path == "vertices[2].flags")
        .unwrap();
    assert_eq!(flags.offset, 12 + 2 * 9 + 8);
}

#[test]
fn test_nested_error_aborts_encode() {
    let inner = Descriptor::structure(
        "Inner",
        [Descriptor::primitive("v", ScalarKind::SInt8)],
    )
    .unwrap();
    let outer = Descriptor::structure(
        "Outer",
        [
            Descriptor::primitive("a", ScalarKind::UInt8),
            Descriptor::array("items", &inner, 2),
        ],
    )
    .unwrap();

    let value = Value::Struct(StructData::from_iter([
        ("a", Value::Int(1)),
        (
            "items",
            Value::from(vec![
                Value::Struct(StructData::from_iter([("v", 1)])),
                Value::Struct(StructData::new()),
            ]),
        ),
    ]));

    assert_eq!(
        outer.encode(&value),
        Err(EncodingError::MissingField {
            field: "items[1]".to_string(),
            name: "v".to_string(),
        })
    );
}

#[test]
fn test_template_reuse_without_aliasing() {
    let mut temperature = Descriptor::primitive("SInt16", ScalarKind::SInt16);

    let first = Descriptor::structure("A", [temperature.instantiate("t")]).unwrap();
    temperature.set_byte_order(ByteOrder::LittleEndian);
    let second = Descriptor::structure(
        "B",
        [temperature.instantiate("t"), temperature.instantiate("u")],
    )
    .unwrap();

    let t = first.as_struct().unwrap().field("t").unwrap();
    assert_eq!(t.byte_order(), ByteOrder::BigEndian);
    assert_eq!(second.as_struct().unwrap().field("u").unwrap().offset(), 2);
    assert_eq!(temperature.name(), "SInt16");
}
