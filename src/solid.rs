//! Primitive solid constructors.
//!
//! Each constructor produces a watertight triangle soup in model units.
//! Curved primitives take an explicit segment count; [`segments_for_radius`]
//! derives one from the export tolerance when the model does not specify its
//! own.

use crate::float_types::{EPSILON, PI, Real, TAU};
use crate::mesh::{TriMesh, Triangle};
use nalgebra::Point3;

/// Chordal tolerance (model units) controlling triangulation fidelity of
/// curved surfaces on export.
pub const EXPORT_TOLERANCE: Real = 0.01;

/// Floor for any tessellation so even tiny features stay recognizably round.
pub const MIN_SEGMENTS: usize = 16;

/// Segment count keeping the chord error of a circle of `radius` within
/// [`EXPORT_TOLERANCE`]. The sagitta of an n-gon side is `r·(1 − cos(π/n))`.
pub fn segments_for_radius(radius: Real) -> usize {
    if radius <= EPSILON {
        return MIN_SEGMENTS;
    }
    let tolerance = EXPORT_TOLERANCE.min(radius);
    let step = (1.0 - tolerance / radius).acos();
    if step <= 0.0 {
        MIN_SEGMENTS
    } else {
        ((PI / step).ceil() as usize).max(MIN_SEGMENTS)
    }
}

/// A cone with its base centered on the origin, apex at `(0, 0, height)`.
pub fn cone(bottom_radius: Real, height: Real, segments: usize) -> TriMesh {
    frustum(bottom_radius, 0.0, height, segments)
}

/// A cylinder with its base centered on the origin, extending up the +Z axis.
pub fn cylinder(radius: Real, height: Real, segments: usize) -> TriMesh {
    frustum(radius, radius, height, segments)
}

/// A conical frustum from `bottom_radius` at z=0 to `top_radius` at
/// z=`height`. A radius at or below [`EPSILON`] collapses that cap to a
/// point, so this also covers cones in both orientations.
pub fn frustum(bottom_radius: Real, top_radius: Real, height: Real, segments: usize) -> TriMesh {
    let segments = segments.max(3);
    let bottom_center = Point3::new(0.0, 0.0, 0.0);
    let top_center = Point3::new(0.0, 0.0, height);

    let ring = |radius: Real, z: Real| -> Vec<Point3<Real>> {
        (0..segments)
            .map(|i| {
                let angle = (i as Real / segments as Real) * TAU;
                Point3::new(angle.cos() * radius, angle.sin() * radius, z)
            })
            .collect()
    };
    let bottom = ring(bottom_radius, 0.0);
    let top = ring(top_radius, height);

    let has_bottom = bottom_radius > EPSILON;
    let has_top = top_radius > EPSILON;

    let mut triangles = Vec::new();
    for i in 0..segments {
        let next = (i + 1) % segments;

        // Caps wind counter-clockwise when viewed from outside.
        if has_bottom {
            triangles.push(Triangle::new(bottom_center, bottom[next], bottom[i]));
        }
        if has_top {
            triangles.push(Triangle::new(top_center, top[i], top[next]));
        }

        // Side faces: quads split into triangles, or a fan onto the apex
        // when one cap has collapsed.
        match (has_bottom, has_top) {
            (true, true) => {
                triangles.push(Triangle::new(bottom[i], bottom[next], top[i]));
                triangles.push(Triangle::new(bottom[next], top[next], top[i]));
            },
            (true, false) => {
                triangles.push(Triangle::new(bottom[i], bottom[next], top_center));
            },
            (false, true) => {
                triangles.push(Triangle::new(bottom_center, top[next], top[i]));
            },
            (false, false) => {},
        }
    }

    TriMesh::from_triangles(triangles)
}

/// An axis-aligned box centered on the Z axis, sitting on z=0.
pub fn cuboid(width: Real, depth: Real, height: Real) -> TriMesh {
    let (hw, hd) = (width / 2.0, depth / 2.0);
    // Corners, bottom face first.
    let c = [
        Point3::new(-hw, -hd, 0.0),
        Point3::new(hw, -hd, 0.0),
        Point3::new(hw, hd, 0.0),
        Point3::new(-hw, hd, 0.0),
        Point3::new(-hw, -hd, height),
        Point3::new(hw, -hd, height),
        Point3::new(hw, hd, height),
        Point3::new(-hw, hd, height),
    ];
    // Two triangles per face, counter-clockwise from outside.
    let faces: [[usize; 4]; 6] = [
        [0, 3, 2, 1], // bottom (-Z)
        [4, 5, 6, 7], // top (+Z)
        [0, 1, 5, 4], // front (-Y)
        [2, 3, 7, 6], // back (+Y)
        [1, 2, 6, 5], // right (+X)
        [3, 0, 4, 7], // left (-X)
    ];
    let mut triangles = Vec::with_capacity(12);
    for [a, b, d, e] in faces {
        triangles.push(Triangle::new(c[a], c[b], c[d]));
        triangles.push(Triangle::new(c[a], c[d], c[e]));
    }
    TriMesh::from_triangles(triangles)
}

/// A UV sphere centered on the origin, poles on the Z axis.
pub fn sphere(radius: Real, segments: usize, stacks: usize) -> TriMesh {
    let segments = segments.max(3);
    let stacks = stacks.max(2);

    let north = Point3::new(0.0, 0.0, radius);
    let south = Point3::new(0.0, 0.0, -radius);

    // Vertex rings between the poles.
    let rings: Vec<Vec<Point3<Real>>> = (1..stacks)
        .map(|j| {
            let phi = (j as Real / stacks as Real) * PI;
            let z = radius * phi.cos();
            let ring_radius = radius * phi.sin();
            (0..segments)
                .map(|i| {
                    let theta = (i as Real / segments as Real) * TAU;
                    Point3::new(ring_radius * theta.cos(), ring_radius * theta.sin(), z)
                })
                .collect()
        })
        .collect();

    let mut triangles = Vec::new();
    for i in 0..segments {
        let next = (i + 1) % segments;

        // Polar caps.
        triangles.push(Triangle::new(north, rings[0][i], rings[0][next]));
        let last = &rings[rings.len() - 1];
        triangles.push(Triangle::new(last[i], south, last[next]));

        // Quad strips between adjacent rings.
        for j in 0..rings.len() - 1 {
            let (upper, lower) = (&rings[j], &rings[j + 1]);
            triangles.push(Triangle::new(upper[i], lower[i], upper[next]));
            triangles.push(Triangle::new(upper[next], lower[i], lower[next]));
        }
    }

    TriMesh::from_triangles(triangles)
}
