//! Canonical orthographic preview rendering for CAD solids.
//!
//! `quadview` turns a solid model into four fixed preview images —
//! *isometric*, *plan*, *front* and *side* — for visual inspection of CAD
//! output. The work is split across a process boundary:
//!
//! - the **orchestrator** (the `quadview` binary, [`orchestrator`]) loads a
//!   model definition, exports it to a temporary STL file and drives the
//!   render engine as a subprocess, verifying its outputs afterwards;
//! - the **render session** (the `quadview-engine` binary, [`session`])
//!   imports the mesh, derives camera placement from its bounding box
//!   ([`bounds`], [`views`], [`camera`]) and rasterizes each view to a PNG
//!   ([`render`]).
//!
//! The two sides communicate only through process arguments, the filesystem
//! (one mesh file in, four images out), the exit status, and the standard
//! streams.
//!
//! # Features
//! - **parallel**: use rayon for the banded parallel raster backend

#![forbid(unsafe_code)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod bounds;
pub mod camera;
pub mod errors;
pub mod float_types;
pub mod io;
pub mod mesh;
pub mod model;
pub mod orchestrator;
pub mod render;
pub mod session;
pub mod solid;
pub mod views;

pub use mesh::TriMesh;
pub use views::ViewSpec;
