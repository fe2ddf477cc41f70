//! Flat view of a descriptor tree: one entry per leaf, in buffer order.

use crate::{descriptor::Descriptor, kind::ScalarKind};

/// What a leaf holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeafKind {
    Scalar(ScalarKind),
    /// Fixed-width string of this many bytes.
    Bytes(usize),
}

/// Position of a single leaf inside the top-level buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutEntry {
    /// Struct fields joined by `.`, array indices as `[i]`, e.g. `points[1].x`.
    pub path: String,
    pub offset: usize,
    pub size: usize,
    pub kind: LeafKind,
}

impl Descriptor {
    /// Lists every leaf with its absolute offset. The root contributes no path segment.
    pub fn layout(&self) -> Vec<LayoutEntry> {
        let mut entries = Vec::new();
        collect(self, String::new(), &mut entries);
        entries
    }
}

fn collect(descriptor: &Descriptor, path: String, entries: &mut Vec<LayoutEntry>) {
    match descriptor {
        Descriptor::Primitive(field) => entries.push(LayoutEntry {
            path,
            offset: field.offset(),
            size: field.size(),
            kind: LeafKind::Scalar(field.kind()),
        }),
        Descriptor::String(field) => entries.push(LayoutEntry {
            path,
            offset: field.offset(),
            size: field.size(),
            kind: LeafKind::Bytes(field.size()),
        }),
        Descriptor::Array(array) => {
            for (i, element) in array.iter().enumerate() {
                collect(element, format!("{path}[{i}]"), entries);
            }
        }
        Descriptor::Struct(structure) => {
            for field in structure.fields() {
                let child = if path.is_empty() {
                    field.name().to_string()
                } else {
                    format!("{path}.{}", field.name())
                };
                collect(field, child, entries);
            }
        }
    }
}
