//! World-space bounding information that drives camera placement.

use crate::float_types::Real;
use crate::mesh::{Aabb, TriMesh};
use nalgebra::{Point3, Vector3};

/// Floor applied to the largest extent so degenerate (near-zero-volume)
/// geometry cannot produce a zero or negative orthographic scale downstream.
pub const DEGENERATE_EXTENT: Real = 0.001;

/// Center, per-axis extents and largest extent of a mesh, derived once per
/// render session and read-only thereafter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModelBounds {
    pub center: Point3<Real>,
    pub extents: Vector3<Real>,
    pub max_extent: Real,
}

impl ModelBounds {
    /// Bounds of `mesh` in world space; `None` when it has no geometry.
    pub fn from_mesh(mesh: &TriMesh) -> Option<Self> {
        mesh.bounding_box().map(|aabb| Self::from_aabb(&aabb))
    }

    pub fn from_aabb(aabb: &Aabb) -> Self {
        let extents = aabb.extents();
        let max_extent = extents
            .x
            .max(extents.y)
            .max(extents.z)
            .max(DEGENERATE_EXTENT);
        Self {
            center: aabb.center(),
            extents,
            max_extent,
        }
    }
}
