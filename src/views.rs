//! The four canonical viewpoints.
//!
//! Every render session produces the same four model-independent views:
//! isometric, plan (straight down), front (along −Y) and side (along −X).
//! Only the orthographic scale depends on the model, via its bounding box.

use crate::bounds::{DEGENERATE_EXTENT, ModelBounds};
use crate::float_types::Real;
use nalgebra::Vector3;

/// View names in render order. Stable so output naming is deterministic.
pub const VIEW_NAMES: [&str; 4] = ["isometric", "plan", "front", "side"];

/// Extra orthographic scale so the model never touches the frame edge.
const FRAME_MARGIN: Real = 1.1;

/// World axis used as the camera's up reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpAxis {
    X,
    Y,
    Z,
}

impl UpAxis {
    pub fn vector(self) -> Vector3<Real> {
        match self {
            UpAxis::X => Vector3::x(),
            UpAxis::Y => Vector3::y(),
            UpAxis::Z => Vector3::z(),
        }
    }
}

/// One canonical camera configuration, consumed exactly once to render one
/// image.
#[derive(Clone, Debug)]
pub struct ViewSpec {
    /// Output filename stem (e.g. "isometric").
    pub name: &'static str,
    /// Unit vector from the model center toward the camera.
    pub direction: Vector3<Real>,
    /// World units visible across the frame under parallel projection.
    pub ortho_scale: Real,
    pub up: UpAxis,
}

/// Direction of the true isometric viewpoint: azimuth 45°, elevation
/// `atan(1/√2)` ≈ 35.264°, the angle giving equal foreshortening on all
/// three axes. Independent of the model.
pub fn isometric_direction() -> Vector3<Real> {
    let azimuth: Real = Real::to_radians(45.0);
    let elevation: Real = (1.0 / Real::sqrt(2.0)).atan();
    Vector3::new(
        elevation.cos() * azimuth.cos(),
        elevation.cos() * azimuth.sin(),
        elevation.sin(),
    )
}

/// Derive the four canonical views for a model with the given bounds, in
/// [`VIEW_NAMES`] order.
pub fn canonical_views(bounds: &ModelBounds) -> [ViewSpec; 4] {
    let (dx, dy, dz) = (bounds.extents.x, bounds.extents.y, bounds.extents.z);

    [
        ViewSpec {
            name: "isometric",
            direction: isometric_direction(),
            ortho_scale: bounds.max_extent * FRAME_MARGIN,
            up: UpAxis::Z,
        },
        // Camera above, looking straight down. Up is +Y so plan reads like a
        // drawing: north up.
        ViewSpec {
            name: "plan",
            direction: Vector3::z(),
            ortho_scale: dx.max(dy).max(DEGENERATE_EXTENT) * FRAME_MARGIN,
            up: UpAxis::Y,
        },
        ViewSpec {
            name: "front",
            direction: Vector3::y(),
            ortho_scale: dx.max(dz).max(DEGENERATE_EXTENT) * FRAME_MARGIN,
            up: UpAxis::Z,
        },
        ViewSpec {
            name: "side",
            direction: Vector3::x(),
            ortho_scale: dy.max(dz).max(DEGENERATE_EXTENT) * FRAME_MARGIN,
            up: UpAxis::Z,
        },
    ]
}
