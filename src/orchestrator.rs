//! Host-side orchestration of a single render request.
//!
//! The orchestrator owns the whole request: load the model definition,
//! export its solid to a temporary STL, invoke the render engine as a
//! subprocess, verify the four expected images exist, and remove the
//! temporary mesh on every exit path. The engine is an independently built
//! binary; the only shared state is the filesystem, the argument list, the
//! exit status and the standard streams.

use crate::errors::RequestError;
use crate::io::stl;
use crate::model;
use std::env;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, info};

/// Environment variable overriding the engine binary path.
pub const ENGINE_ENV: &str = "QUADVIEW_ENGINE";

/// Engine binary name resolved from `PATH` when no override is set.
pub const ENGINE_BIN: &str = "quadview-engine";

/// Image files the engine must produce for a successful session.
pub fn expected_outputs() -> [String; 4] {
    crate::views::VIEW_NAMES.map(|name| format!("{name}.png"))
}

/// Render the model at `model_path` into `<renders_root>/<request_name>/`.
/// Returns the output directory on success.
pub fn render_request(
    model_path: &Path,
    request_name: &str,
    renders_root: &Path,
) -> Result<PathBuf, RequestError> {
    let mesh = model::load_model(model_path)?;

    let output_dir = renders_root.join(request_name);
    std::fs::create_dir_all(&output_dir).map_err(|source| RequestError::OutputDir {
        path: output_dir.clone(),
        source,
    })?;

    // Leftovers from an earlier run must not be mistaken for this run's
    // output: verification only checks presence, so clear the names first.
    clear_stale_outputs(&output_dir)?;

    let engine = resolve_engine()?;

    // The guard removes the mesh file when dropped, which covers every exit
    // path below, early returns included.
    let mut mesh_file = tempfile::Builder::new()
        .prefix("quadview-")
        .suffix(".stl")
        .tempfile()?;
    {
        let mut out = BufWriter::new(mesh_file.as_file_mut());
        stl::write_stl(&mesh, &mut out)?;
        out.flush()?;
    }
    debug!(mesh = %mesh_file.path().display(), triangles = mesh.triangle_count(), "exported mesh");

    info!(engine = %engine.display(), "invoking render engine");
    let output = Command::new(&engine)
        .arg("--background")
        .arg("--routine")
        .arg("views")
        .arg("--")
        .arg(mesh_file.path())
        .arg(&output_dir)
        .output()
        .map_err(|source| RequestError::EngineSpawn {
            path: engine.clone(),
            source,
        })?;

    // Relay the engine's streams regardless of outcome.
    std::io::stdout().write_all(&output.stdout)?;
    std::io::stderr().write_all(&output.stderr)?;

    if !output.status.success() {
        return Err(RequestError::EngineFailed {
            status: output.status,
        });
    }

    let missing: Vec<String> = expected_outputs()
        .into_iter()
        .filter(|name| !output_dir.join(name).exists())
        .collect();
    if !missing.is_empty() {
        return Err(RequestError::MissingOutputs { missing });
    }

    mesh_file.close()?;
    Ok(output_dir)
}

fn clear_stale_outputs(output_dir: &Path) -> Result<(), RequestError> {
    for name in expected_outputs() {
        let path = output_dir.join(&name);
        match std::fs::remove_file(&path) {
            Ok(()) => debug!(path = %path.display(), "removed stale render"),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {},
            Err(err) => return Err(err.into()),
        }
    }
    Ok(())
}

/// Locate the render engine binary: the `QUADVIEW_ENGINE` override wins,
/// otherwise search the execution `PATH`.
pub fn resolve_engine() -> Result<PathBuf, RequestError> {
    if let Some(path) = env::var_os(ENGINE_ENV) {
        let path = PathBuf::from(path);
        if !path.is_file() {
            return Err(RequestError::EngineOverrideInvalid { path });
        }
        return Ok(path);
    }

    env::var_os("PATH")
        .and_then(|paths| {
            env::split_paths(&paths)
                .map(|dir| dir.join(ENGINE_BIN))
                .find(|candidate| candidate.is_file())
        })
        .ok_or(RequestError::EngineNotFound)
}
