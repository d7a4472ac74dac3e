//! Binary STL import/export for [`TriMesh`].
//!
//! STL is the interchange format across the process boundary: the
//! orchestrator exports the solid to a temporary STL file and the engine
//! imports it. Binary STL carries a per-facet normal; on export it is derived
//! from the winding order, and on import it is ignored in favor of
//! recomputing from the vertices (files in the wild often carry zeroed or
//! stale normals).

use crate::float_types::Real;
use crate::mesh::{TriMesh, Triangle};
use nalgebra::{Point3, Vector3};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Seek, Write};
use std::path::Path;

/// Serialize `mesh` as binary STL into `out`.
pub fn write_stl<W: Write>(mesh: &TriMesh, out: &mut W) -> std::io::Result<()> {
    let mut triangles = Vec::with_capacity(mesh.triangle_count());
    for tri in &mesh.triangles {
        let n = tri.normal().unwrap_or_else(Vector3::z);
        triangles.push(stl_io::Triangle {
            normal: stl_io::Normal::new([n.x as f32, n.y as f32, n.z as f32]),
            vertices: tri.vertices().map(|p| {
                stl_io::Vertex::new([p.x as f32, p.y as f32, p.z as f32])
            }),
        });
    }
    stl_io::write_stl(out, triangles.iter())
}

/// Write `mesh` to `path` as binary STL.
pub fn write_stl_file(mesh: &TriMesh, path: &Path) -> std::io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    write_stl(mesh, &mut out)?;
    out.flush()
}

/// Deserialize an STL stream (binary or ASCII) into a [`TriMesh`].
pub fn read_stl<R: Read + Seek>(input: &mut R) -> std::io::Result<TriMesh> {
    let reader = stl_io::create_stl_reader(input)?;
    let mut triangles = Vec::new();
    for tri in reader {
        let tri = tri?;
        let p = |i: usize| {
            Point3::new(
                tri.vertices[i][0] as Real,
                tri.vertices[i][1] as Real,
                tri.vertices[i][2] as Real,
            )
        };
        triangles.push(Triangle::new(p(0), p(1), p(2)));
    }
    Ok(TriMesh::from_triangles(triangles))
}

/// Read an STL file from `path`.
pub fn read_stl_file(path: &Path) -> std::io::Result<TriMesh> {
    let mut input = BufReader::new(File::open(path)?);
    read_stl(&mut input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solid;
    use std::io::Cursor;

    #[test]
    fn round_trip_preserves_geometry() {
        let cone = solid::cone(10.0, 20.0, 64);

        let mut bytes = Vec::new();
        write_stl(&cone, &mut bytes).unwrap();
        let restored = read_stl(&mut Cursor::new(bytes)).unwrap();

        assert_eq!(restored.triangle_count(), cone.triangle_count());
        let (a, b) = (
            cone.bounding_box().unwrap(),
            restored.bounding_box().unwrap(),
        );
        // Vertices pass through f32, so compare at single precision.
        assert!((a.mins - b.mins).norm() < 1e-5);
        assert!((a.maxs - b.maxs).norm() < 1e-5);
    }

    #[test]
    fn empty_mesh_round_trips_to_empty() {
        let mut bytes = Vec::new();
        write_stl(&TriMesh::default(), &mut bytes).unwrap();
        let restored = read_stl(&mut Cursor::new(bytes)).unwrap();
        assert!(restored.is_empty());
    }
}
