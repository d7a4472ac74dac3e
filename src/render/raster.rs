//! Depth-buffered, flat-shaded triangle rasterization.
//!
//! One still image per call: project every triangle through the placed
//! camera, then fill horizontal framebuffer bands with an edge-function
//! test and a per-fragment depth compare. Shading is a single fixed fill
//! light plus an ambient term; faces are lit from either side because STL
//! winding in the wild is not trustworthy enough to cull on.

use super::RasterBackend;
use crate::camera::OrthoCamera;
use crate::float_types::Real;
use crate::mesh::TriMesh;
use image::{Rgb, RgbImage};
use nalgebra::Vector3;

/// Fixed render settings. Deterministic, not configurable per model.
#[derive(Clone, Debug)]
pub struct RenderSettings {
    pub width: u32,
    pub height: u32,
    /// Light neutral background for clean CAD renders.
    pub background: Rgb<u8>,
    /// Body color at full illumination, linear RGB in [0, 1].
    pub body_color: [Real; 3],
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 1024,
            background: Rgb([230, 230, 230]),
            body_color: [0.62, 0.67, 0.74],
        }
    }
}

const AMBIENT: Real = 0.3;
const DIFFUSE: Real = 0.7;

/// Rows per framebuffer band; the parallel backend hands one band to each
/// rayon task.
const BAND_ROWS: u32 = 64;

/// Screen-space triangles below this area are dropped as slivers.
const MIN_AREA: Real = 1e-12;

/// Fill light direction (toward the light): azimuth 45°, elevation 55°.
fn light_direction() -> Vector3<Real> {
    let azimuth: Real = Real::to_radians(45.0);
    let elevation: Real = Real::to_radians(55.0);
    Vector3::new(
        elevation.cos() * azimuth.cos(),
        elevation.cos() * azimuth.sin(),
        elevation.sin(),
    )
}

/// A triangle after projection: pixel coordinates, per-vertex depth, one
/// flat shade, and its clamped pixel bounding box.
struct ScreenTriangle {
    v: [(Real, Real); 3],
    depth: [Real; 3],
    shade: Rgb<u8>,
    min_x: u32,
    max_x: u32,
    min_y: u32,
    max_y: u32,
}

/// One horizontal slice of the framebuffer with its own depth buffer.
struct Band {
    y0: u32,
    rows: u32,
    color: Vec<Rgb<u8>>,
    depth: Vec<Real>,
}

/// Render one view of `mesh` through `camera`.
pub fn render(
    mesh: &TriMesh,
    camera: &OrthoCamera,
    settings: &RenderSettings,
    backend: RasterBackend,
) -> RgbImage {
    let triangles = prepare(mesh, camera, settings);
    let clip = (camera.clip_near, camera.clip_far);

    let mut bands: Vec<Band> = (0..settings.height)
        .step_by(BAND_ROWS as usize)
        .map(|y0| {
            let rows = BAND_ROWS.min(settings.height - y0);
            Band {
                y0,
                rows,
                color: vec![settings.background; (rows * settings.width) as usize],
                depth: vec![Real::INFINITY; (rows * settings.width) as usize],
            }
        })
        .collect();

    fill_bands(&triangles, &mut bands, clip, settings.width, backend);

    let mut image = RgbImage::from_pixel(settings.width, settings.height, settings.background);
    for band in &bands {
        for row in 0..band.rows {
            for x in 0..settings.width {
                let idx = (row * settings.width + x) as usize;
                image.put_pixel(x, band.y0 + row, band.color[idx]);
            }
        }
    }
    image
}

fn prepare(mesh: &TriMesh, camera: &OrthoCamera, settings: &RenderSettings) -> Vec<ScreenTriangle> {
    let light = light_direction();
    let (width, height) = (settings.width as Real, settings.height as Real);

    mesh.triangles
        .iter()
        .filter_map(|tri| {
            let normal = tri.normal()?;
            let brightness = (AMBIENT + DIFFUSE * normal.dot(&light).abs()).min(1.0);
            let channel = |c: Real| (c * brightness * 255.0).round() as u8;
            let shade = Rgb([
                channel(settings.body_color[0]),
                channel(settings.body_color[1]),
                channel(settings.body_color[2]),
            ]);

            let v = tri.vertices().map(|p| camera.project(&p));
            let min_xf = v[0].0.min(v[1].0).min(v[2].0);
            let max_xf = v[0].0.max(v[1].0).max(v[2].0);
            let min_yf = v[0].1.min(v[1].1).min(v[2].1);
            let max_yf = v[0].1.max(v[1].1).max(v[2].1);
            if max_xf < 0.0 || min_xf >= width || max_yf < 0.0 || min_yf >= height {
                return None;
            }

            Some(ScreenTriangle {
                v: [(v[0].0, v[0].1), (v[1].0, v[1].1), (v[2].0, v[2].1)],
                depth: [v[0].2, v[1].2, v[2].2],
                shade,
                min_x: min_xf.floor().max(0.0) as u32,
                max_x: max_xf.ceil().min(width - 1.0) as u32,
                min_y: min_yf.floor().max(0.0) as u32,
                max_y: max_yf.ceil().min(height - 1.0) as u32,
            })
        })
        .collect()
}

#[cfg(feature = "parallel")]
fn fill_bands(
    triangles: &[ScreenTriangle],
    bands: &mut [Band],
    clip: (Real, Real),
    width: u32,
    backend: RasterBackend,
) {
    use rayon::prelude::*;
    match backend {
        RasterBackend::Parallel => bands
            .par_iter_mut()
            .for_each(|band| raster_band(triangles, clip, width, band)),
        RasterBackend::Serial => bands
            .iter_mut()
            .for_each(|band| raster_band(triangles, clip, width, band)),
    }
}

#[cfg(not(feature = "parallel"))]
fn fill_bands(
    triangles: &[ScreenTriangle],
    bands: &mut [Band],
    clip: (Real, Real),
    width: u32,
    _backend: RasterBackend,
) {
    // Backend probing never selects Parallel without the feature compiled in.
    for band in bands.iter_mut() {
        raster_band(triangles, clip, width, band);
    }
}

#[inline]
fn edge(a: (Real, Real), b: (Real, Real), p: (Real, Real)) -> Real {
    (b.0 - a.0) * (p.1 - a.1) - (b.1 - a.1) * (p.0 - a.0)
}

fn raster_band(triangles: &[ScreenTriangle], clip: (Real, Real), width: u32, band: &mut Band) {
    let band_end = band.y0 + band.rows;
    for tri in triangles {
        if tri.max_y < band.y0 || tri.min_y >= band_end {
            continue;
        }
        let area = edge(tri.v[0], tri.v[1], tri.v[2]);
        if area.abs() < MIN_AREA {
            continue;
        }

        for y in tri.min_y.max(band.y0)..=tri.max_y.min(band_end - 1) {
            let py = y as Real + 0.5;
            for x in tri.min_x..=tri.max_x {
                let p = (x as Real + 0.5, py);
                // Barycentric weights normalized by the signed area, so the
                // inside test holds for either winding.
                let w0 = edge(tri.v[1], tri.v[2], p) / area;
                if w0 < 0.0 {
                    continue;
                }
                let w1 = edge(tri.v[2], tri.v[0], p) / area;
                if w1 < 0.0 {
                    continue;
                }
                let w2 = 1.0 - w0 - w1;
                if w2 < 0.0 {
                    continue;
                }

                let depth = w0 * tri.depth[0] + w1 * tri.depth[1] + w2 * tri.depth[2];
                if depth < clip.0 || depth > clip.1 {
                    continue;
                }

                let idx = ((y - band.y0) * width + x) as usize;
                if depth < band.depth[idx] {
                    band.depth[idx] = depth;
                    band.color[idx] = tri.shade;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bounds::ModelBounds;
    use crate::solid;
    use crate::views::canonical_views;

    #[test]
    fn cone_fills_frame_center_but_not_corners() {
        let mesh = solid::cone(10.0, 20.0, 32);
        let bounds = ModelBounds::from_mesh(&mesh).unwrap();
        let settings = RenderSettings::default();

        for spec in canonical_views(&bounds) {
            let camera = OrthoCamera::place(&spec, &bounds, settings.width, settings.height);
            let image = render(&mesh, &camera, &settings, RasterBackend::Serial);
            assert_eq!((image.width(), image.height()), (1024, 1024));
            assert_ne!(
                *image.get_pixel(512, 512),
                settings.background,
                "{}: model should cover the frame center",
                spec.name
            );
            assert_eq!(
                *image.get_pixel(0, 0),
                settings.background,
                "{}: margin should keep corners clear",
                spec.name
            );
        }
    }

    #[test]
    fn nearer_geometry_wins_the_depth_test() {
        use crate::mesh::Triangle;
        use nalgebra::Point3;

        // Two overlapping triangles seen from the front (camera on +Y,
        // looking along −Y, so larger y is nearer). The front one is flat,
        // the back one tilted, giving them different flat shades.
        let front_tri = Triangle::new(
            Point3::new(-5.0, 2.0, -5.0),
            Point3::new(5.0, 2.0, -5.0),
            Point3::new(0.0, 2.0, 5.0),
        );
        let back_tri = Triangle::new(
            Point3::new(-5.0, -2.0, -5.0),
            Point3::new(5.0, -2.0, -5.0),
            Point3::new(0.0, 0.0, 5.0),
        );
        let both = TriMesh::from_triangles(vec![front_tri, back_tri]);

        let bounds = ModelBounds::from_mesh(&both).unwrap();
        let settings = RenderSettings::default();
        let front_view = canonical_views(&bounds)[2].clone();
        let camera = OrthoCamera::place(&front_view, &bounds, settings.width, settings.height);

        let render_one = |mesh: &TriMesh| {
            *render(mesh, &camera, &settings, RasterBackend::Serial).get_pixel(512, 512)
        };
        let combined = render_one(&both);
        let front_only = render_one(&TriMesh::from_triangles(vec![front_tri]));
        let back_only = render_one(&TriMesh::from_triangles(vec![back_tri]));

        // Both cover the frame center; the nearer shade must win.
        assert_ne!(front_only, settings.background);
        assert_ne!(back_only, settings.background);
        assert_ne!(front_only, back_only);
        assert_eq!(combined, front_only);
    }
}
