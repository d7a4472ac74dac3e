//! Mesh file import/export.

pub mod stl;
