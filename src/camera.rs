//! Orthographic camera placement and projection.

use crate::bounds::ModelBounds;
use crate::float_types::Real;
use crate::views::ViewSpec;
use nalgebra::{Isometry3, Point3};

/// Camera distance as a multiple of the largest model extent. Orthographic
/// projection has no perspective falloff, so the distance only needs to keep
/// the model clear of the near plane for any placement.
const DISTANCE_FACTOR: Real = 20.0;

const CLIP_NEAR: Real = 0.1;
const CLIP_FAR_FACTOR: Real = 3.0;

/// A fully placed orthographic camera for one canonical view. Transient:
/// built per view and dropped after that view's render, so no camera state
/// leaks into the next view.
#[derive(Clone, Debug)]
pub struct OrthoCamera {
    /// World → camera transform; the camera looks down its −Z axis.
    view: Isometry3<Real>,
    half_width: Real,
    half_height: Real,
    pub clip_near: Real,
    pub clip_far: Real,
    width: u32,
    height: u32,
}

impl OrthoCamera {
    /// Place the camera for `spec`, looking at the center of `bounds` with
    /// the spec's up axis. The look-at with an explicit up fully determines
    /// the rotation; no roll ambiguity remains.
    pub fn place(spec: &ViewSpec, bounds: &ModelBounds, width: u32, height: u32) -> Self {
        let distance = bounds.max_extent * DISTANCE_FACTOR;
        let eye = bounds.center + spec.direction * distance;
        let view = Isometry3::look_at_rh(&eye, &bounds.center, &spec.up.vector());

        let aspect = width as Real / height as Real;
        let half_width = spec.ortho_scale / 2.0;
        Self {
            view,
            half_width,
            half_height: half_width / aspect,
            clip_near: CLIP_NEAR,
            clip_far: distance * CLIP_FAR_FACTOR,
            width,
            height,
        }
    }

    /// Project a world-space point to pixel coordinates plus view depth
    /// (distance in front of the camera). Depth clipping happens per
    /// fragment, not here.
    pub fn project(&self, p: &Point3<Real>) -> (Real, Real, Real) {
        let cam = self.view.transform_point(p);
        let sx = (cam.x / self.half_width + 1.0) * 0.5 * self.width as Real;
        let sy = (1.0 - cam.y / self.half_height) * 0.5 * self.height as Real;
        (sx, sy, -cam.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bounds::ModelBounds;
    use crate::mesh::Aabb;
    use crate::views::canonical_views;
    use approx::assert_relative_eq;

    fn bounds() -> ModelBounds {
        ModelBounds::from_aabb(&Aabb::new(
            Point3::new(-5.0, -5.0, 0.0),
            Point3::new(5.0, 5.0, 20.0),
        ))
    }

    #[test]
    fn center_projects_to_frame_center_at_camera_distance() {
        let bounds = bounds();
        for spec in canonical_views(&bounds) {
            let camera = OrthoCamera::place(&spec, &bounds, 1024, 1024);
            let (sx, sy, depth) = camera.project(&bounds.center);
            assert_relative_eq!(sx, 512.0, epsilon = 1e-6);
            assert_relative_eq!(sy, 512.0, epsilon = 1e-6);
            assert_relative_eq!(depth, bounds.max_extent * 20.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn clip_range_brackets_the_subject() {
        let bounds = bounds();
        for spec in canonical_views(&bounds) {
            let camera = OrthoCamera::place(&spec, &bounds, 1024, 1024);
            let distance = bounds.max_extent * 20.0;
            assert_eq!(camera.clip_near, 0.1);
            assert_relative_eq!(camera.clip_far, distance * 3.0);
            // The whole model sits inside the clip range.
            assert!(distance - bounds.max_extent > camera.clip_near);
            assert!(distance + bounds.max_extent < camera.clip_far);
        }
    }

    #[test]
    fn up_axis_controls_screen_vertical() {
        let bounds = bounds();
        let views = canonical_views(&bounds);
        // Front view, up = Z: a point above the center lands higher on
        // screen (smaller y in image coordinates).
        let front = &views[2];
        let camera = OrthoCamera::place(front, &bounds, 1024, 1024);
        let (_, sy_top, _) = camera.project(&Point3::new(0.0, 0.0, 15.0));
        let (_, sy_mid, _) = camera.project(&bounds.center);
        assert!(sy_top < sy_mid);
    }
}
