use quadview::TriMesh;
use quadview::errors::SessionError;
use quadview::io::stl;
use quadview::session;
use quadview::solid;

#[test]
fn session_writes_all_four_views_at_fixed_resolution() {
    let dir = tempfile::tempdir().unwrap();
    let mesh_path = dir.path().join("cone.stl");
    stl::write_stl_file(&solid::cone(10.0, 20.0, 64), &mesh_path).unwrap();
    let out = dir.path().join("out");
    std::fs::create_dir_all(&out).unwrap();

    session::run(&mesh_path, &out).unwrap();

    for name in ["isometric", "plan", "front", "side"] {
        let path = out.join(format!("{name}.png"));
        let img = image::open(&path).unwrap();
        assert_eq!((img.width(), img.height()), (1024, 1024), "{name}");
    }
}

#[test]
fn mesh_without_geometry_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let mesh_path = dir.path().join("empty.stl");
    stl::write_stl_file(&TriMesh::default(), &mesh_path).unwrap();
    let out = dir.path().join("out");
    std::fs::create_dir_all(&out).unwrap();

    let err = session::run(&mesh_path, &out).unwrap_err();
    assert!(matches!(err, SessionError::EmptyMesh { .. }), "{err}");
    assert_eq!(std::fs::read_dir(&out).unwrap().count(), 0);
}

#[test]
fn missing_mesh_file_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = session::run(&dir.path().join("nowhere.stl"), dir.path()).unwrap_err();
    assert!(matches!(err, SessionError::MeshRead { .. }), "{err}");
}
