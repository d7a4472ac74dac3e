//! Error types for both sides of the render pipeline.
//!
//! No failure is retried anywhere: every error here is terminal for the
//! request it belongs to, and each variant carries the underlying cause so
//! the original diagnostic text reaches the user unchanged.

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Failures while loading a model definition.
#[derive(Debug, Error)]
pub enum ModelError {
    /// The model file could not be read at all.
    #[error("failed to read model file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The model file is not valid TOML, or describes an unknown solid.
    #[error("failed to parse model file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    /// The model file parsed but does not define its solid output.
    #[error(
        "model file {} does not define a [solid] table; \
         assign the shape to render to a top-level [solid] table",
        .path.display()
    )]
    MissingSolid { path: PathBuf },
}

/// Host-side failures of a single render request.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error(transparent)]
    Model(#[from] ModelError),

    #[error("failed to create output directory {}: {source}", .path.display())]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `QUADVIEW_ENGINE` points somewhere that is not a file.
    #[error(
        "QUADVIEW_ENGINE is set to {} but the file does not exist",
        .path.display()
    )]
    EngineOverrideInvalid { path: PathBuf },

    /// No engine binary on `PATH` and no override set.
    #[error(
        "render engine 'quadview-engine' not found.\n\
         Install it alongside quadview and ensure it is on your PATH, or set\n\
         the QUADVIEW_ENGINE environment variable to the full path of the binary."
    )]
    EngineNotFound,

    #[error("failed to launch render engine {}: {source}", .path.display())]
    EngineSpawn {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The engine process reported failure; its status is mirrored to the caller.
    #[error("render engine exited with a non-zero status ({status})")]
    EngineFailed { status: ExitStatus },

    /// The engine exited zero but some expected images never appeared.
    #[error(
        "render engine exited successfully but the following renders are missing: {}",
        .missing.join(", ")
    )]
    MissingOutputs { missing: Vec<String> },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Engine-side failures of a render session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The mesh file yielded no triangles; nothing can be framed or rendered.
    #[error("no geometry imported from {}", .path.display())]
    EmptyMesh { path: PathBuf },

    #[error("failed to read mesh file {}: {source}", .path.display())]
    MeshRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write render {}: {source}", .path.display())]
    ImageWrite {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}
