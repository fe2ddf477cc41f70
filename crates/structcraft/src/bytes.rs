//! Low-level scalar read and write utilities.
//!
//! Callers check buffer lengths; these functions assume `data` holds at least
//! `kind.size()` bytes.

use byteorder::{BigEndian, LittleEndian};

use crate::{kind::ScalarKind, order::ByteOrder, value::Value};

/// A scalar already checked against its kind, ready to be written.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar {
    Int(i64),
    Float(f64),
}

/// Reads one scalar of `kind` from the start of `data`.
pub fn read_scalar(kind: ScalarKind, order: ByteOrder, data: &[u8]) -> Value {
    match order {
        ByteOrder::BigEndian => read_with::<BigEndian>(kind, data),
        ByteOrder::LittleEndian => read_with::<LittleEndian>(kind, data),
    }
}

/// Appends `kind.size()` bytes for `scalar` to `out`.
pub fn write_scalar(kind: ScalarKind, order: ByteOrder, scalar: Scalar, out: &mut Vec<u8>) {
    let mut buf = [0u8; 8];
    let len = kind.size();

    match order {
        ByteOrder::BigEndian => write_with::<BigEndian>(kind, scalar, &mut buf[..len]),
        ByteOrder::LittleEndian => write_with::<LittleEndian>(kind, scalar, &mut buf[..len]),
    }

    out.extend_from_slice(&buf[..len]);
}

fn read_with<B: byteorder::ByteOrder>(kind: ScalarKind, data: &[u8]) -> Value {
    match kind {
        ScalarKind::SInt8 => Value::Int(data[0] as i8 as i64),
        ScalarKind::UInt8 => Value::Int(data[0] as i64),
        ScalarKind::SInt16 => Value::Int(B::read_i16(data) as i64),
        ScalarKind::UInt16 => Value::Int(B::read_u16(data) as i64),
        ScalarKind::SInt32 => Value::Int(B::read_i32(data) as i64),
        ScalarKind::UInt32 => Value::Int(B::read_u32(data) as i64),
        ScalarKind::Float32 => Value::Float(B::read_f32(data) as f64),
        ScalarKind::Float64 => Value::Float(B::read_f64(data)),
    }
}

fn write_with<B: byteorder::ByteOrder>(kind: ScalarKind, scalar: Scalar, buf: &mut [u8]) {
    let (int, float) = match scalar {
        Scalar::Int(v) => (v, v as f64),
        Scalar::Float(v) => (v as i64, v),
    };

    match kind {
        ScalarKind::SInt8 => buf[0] = int as i8 as u8,
        ScalarKind::UInt8 => buf[0] = int as u8,
        ScalarKind::SInt16 => B::write_i16(buf, int as i16),
        ScalarKind::UInt16 => B::write_u16(buf, int as u16),
        ScalarKind::SInt32 => B::write_i32(buf, int as i32),
        ScalarKind::UInt32 => B::write_u32(buf, int as u32),
        ScalarKind::Float32 => B::write_f32(buf, float as f32),
        ScalarKind::Float64 => B::write_f64(buf, float),
    }
}
