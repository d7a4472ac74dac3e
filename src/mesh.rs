//! Triangle-soup meshes and their bounding volumes.
//!
//! [`TriMesh`] is the interchange representation on both sides of the
//! pipeline: the model loader produces one, the STL codec round-trips it, and
//! the rasterizer consumes it. No connectivity is kept — the renderer only
//! ever walks whole triangles.

use crate::float_types::Real;
use nalgebra::{Point3, Vector3};
use std::sync::OnceLock;

/// One triangle in world space, counter-clockwise when viewed from outside.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub a: Point3<Real>,
    pub b: Point3<Real>,
    pub c: Point3<Real>,
}

impl Triangle {
    #[inline]
    pub const fn new(a: Point3<Real>, b: Point3<Real>, c: Point3<Real>) -> Self {
        Self { a, b, c }
    }

    /// Unit face normal from the winding order, or `None` for a sliver whose
    /// edges are numerically collinear.
    pub fn normal(&self) -> Option<Vector3<Real>> {
        let n = (self.b - self.a).cross(&(self.c - self.a));
        let len = n.norm();
        if len > 1e-12 { Some(n / len) } else { None }
    }

    #[inline]
    pub fn vertices(&self) -> [Point3<Real>; 3] {
        [self.a, self.b, self.c]
    }
}

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub mins: Point3<Real>,
    pub maxs: Point3<Real>,
}

impl Aabb {
    #[inline]
    pub const fn new(mins: Point3<Real>, maxs: Point3<Real>) -> Self {
        Self { mins, maxs }
    }

    #[inline]
    pub fn center(&self) -> Point3<Real> {
        Point3::new(
            (self.mins.x + self.maxs.x) / 2.0,
            (self.mins.y + self.maxs.y) / 2.0,
            (self.mins.z + self.maxs.z) / 2.0,
        )
    }

    /// Per-axis extent (max − min).
    #[inline]
    pub fn extents(&self) -> Vector3<Real> {
        self.maxs - self.mins
    }

    fn grow(&mut self, p: &Point3<Real>) {
        self.mins.x = self.mins.x.min(p.x);
        self.mins.y = self.mins.y.min(p.y);
        self.mins.z = self.mins.z.min(p.z);
        self.maxs.x = self.maxs.x.max(p.x);
        self.maxs.y = self.maxs.y.max(p.y);
        self.maxs.z = self.maxs.z.max(p.z);
    }

    /// Smallest box enclosing all `points`; `None` for an empty iterator.
    pub fn from_points<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Point3<Real>>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut aabb = Self::new(*first, *first);
        for p in iter {
            aabb.grow(p);
        }
        Some(aabb)
    }
}

/// A triangulated surface mesh.
#[derive(Clone, Debug, Default)]
pub struct TriMesh {
    pub triangles: Vec<Triangle>,

    /// Lazily calculated AABB that spans `triangles`.
    bounding_box: OnceLock<Option<Aabb>>,
}

impl TriMesh {
    pub const fn from_triangles(triangles: Vec<Triangle>) -> Self {
        Self {
            triangles,
            bounding_box: OnceLock::new(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// World-space bounding box of the mesh; `None` when it has no geometry.
    pub fn bounding_box(&self) -> Option<Aabb> {
        *self.bounding_box.get_or_init(|| {
            Aabb::from_points(
                self.triangles
                    .iter()
                    .flat_map(|t| [&t.a, &t.b, &t.c]),
            )
        })
    }
}
