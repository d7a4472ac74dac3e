//! Engine-side render session: one linear pass from mesh file to four images.
//!
//! The sequence never branches back: import mesh → select backend → fixed
//! settings → extract bounds → plan views → render each view → done. Every
//! failure is terminal for the session; the binary prints it to stderr and
//! exits non-zero.

use crate::bounds::ModelBounds;
use crate::camera::OrthoCamera;
use crate::errors::SessionError;
use crate::io::stl;
use crate::render::raster::{self, RenderSettings};
use crate::render::{RasterBackend, SERIAL_ENV, select_backend};
use crate::views::{ViewSpec, canonical_views};
use std::path::Path;
use tracing::info;

/// Run a full render session: read the mesh at `mesh_path` and write the
/// four canonical views into `output_dir`.
pub fn run(mesh_path: &Path, output_dir: &Path) -> Result<(), SessionError> {
    info!(
        mesh = %mesh_path.display(),
        out = %output_dir.display(),
        "render session start"
    );

    let mesh = stl::read_stl_file(mesh_path).map_err(|source| SessionError::MeshRead {
        path: mesh_path.to_path_buf(),
        source,
    })?;
    let Some(bounds) = ModelBounds::from_mesh(&mesh) else {
        return Err(SessionError::EmptyMesh {
            path: mesh_path.to_path_buf(),
        });
    };
    info!(
        triangles = mesh.triangle_count(),
        dx = bounds.extents.x,
        dy = bounds.extents.y,
        dz = bounds.extents.z,
        "mesh imported"
    );

    let force_serial = std::env::var_os(SERIAL_ENV).is_some();
    let backend = select_backend(force_serial);
    let settings = RenderSettings::default();

    for view in canonical_views(&bounds) {
        render_view(&mesh, &view, &bounds, &settings, backend, output_dir)?;
    }

    info!("render session done");
    Ok(())
}

/// Materialize a camera for one view, rasterize it, and write `<name>.png`.
/// The camera lives only for this call, so no state leaks between views.
fn render_view(
    mesh: &crate::mesh::TriMesh,
    view: &ViewSpec,
    bounds: &ModelBounds,
    settings: &RenderSettings,
    backend: RasterBackend,
    output_dir: &Path,
) -> Result<(), SessionError> {
    let camera = OrthoCamera::place(view, bounds, settings.width, settings.height);
    let image = raster::render(mesh, &camera, settings, backend);

    let path = output_dir.join(format!("{}.png", view.name));
    image.save(&path).map_err(|source| SessionError::ImageWrite {
        path: path.clone(),
        source,
    })?;
    info!(path = %path.display(), "saved");
    Ok(())
}
