//! Model-definition loading.
//!
//! A model definition is a TOML file whose `[solid]` table names a primitive
//! and its dimensions. From the renderer's point of view the modeling step is
//! an opaque producer: a definition either yields one triangulated solid or
//! fails. The file must define its output explicitly — a definition without a
//! `[solid]` table is rejected, not defaulted.
//!
//! ```toml
//! [solid]
//! kind = "cone"
//! bottom_radius = 10.0
//! height = 20.0
//! ```

use crate::errors::ModelError;
use crate::float_types::Real;
use crate::mesh::TriMesh;
use crate::solid;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct ModelFile {
    solid: Option<SolidDef>,
}

/// The solid described by a model definition.
///
/// Curved primitives may pin their own `segments`; otherwise tessellation
/// density comes from the export tolerance via
/// [`solid::segments_for_radius`].
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SolidDef {
    Cone {
        bottom_radius: Real,
        #[serde(default)]
        top_radius: Real,
        height: Real,
        segments: Option<usize>,
    },
    Cylinder {
        radius: Real,
        height: Real,
        segments: Option<usize>,
    },
    Cuboid {
        width: Real,
        depth: Real,
        height: Real,
    },
    Sphere {
        radius: Real,
        segments: Option<usize>,
    },
}

impl SolidDef {
    /// Tessellate the definition into a mesh.
    pub fn build(&self) -> TriMesh {
        match *self {
            SolidDef::Cone {
                bottom_radius,
                top_radius,
                height,
                segments,
            } => {
                let segments = segments
                    .unwrap_or_else(|| solid::segments_for_radius(bottom_radius.max(top_radius)));
                solid::frustum(bottom_radius, top_radius, height, segments)
            },
            SolidDef::Cylinder {
                radius,
                height,
                segments,
            } => {
                let segments = segments.unwrap_or_else(|| solid::segments_for_radius(radius));
                solid::cylinder(radius, height, segments)
            },
            SolidDef::Cuboid {
                width,
                depth,
                height,
            } => solid::cuboid(width, depth, height),
            SolidDef::Sphere { radius, segments } => {
                let segments = segments.unwrap_or_else(|| solid::segments_for_radius(radius));
                solid::sphere(radius, segments, (segments / 2).max(2))
            },
        }
    }
}

/// Load a model definition and produce its solid.
pub fn load_model(path: &Path) -> Result<TriMesh, ModelError> {
    let text = fs::read_to_string(path).map_err(|source| ModelError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let file: ModelFile = toml::from_str(&text).map_err(|source| ModelError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    let def = file.solid.ok_or_else(|| ModelError::MissingSolid {
        path: path.to_path_buf(),
    })?;
    debug!(?def, "model definition loaded");
    Ok(def.build())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cone_definition_builds() {
        let def: ModelFile = toml::from_str(
            r#"
            [solid]
            kind = "cone"
            bottom_radius = 10.0
            height = 20.0
            "#,
        )
        .unwrap();
        let mesh = def.solid.unwrap().build();
        assert!(!mesh.is_empty());
        let aabb = mesh.bounding_box().unwrap();
        assert!((aabb.maxs.z - 20.0).abs() < 1e-12);
    }

    #[test]
    fn unknown_kind_is_a_parse_error() {
        let parsed: Result<ModelFile, _> = toml::from_str(
            r#"
            [solid]
            kind = "teapot"
            "#,
        );
        assert!(parsed.is_err());
    }

    #[test]
    fn missing_solid_table_is_detected() {
        let parsed: ModelFile = toml::from_str("title = \"nothing here\"").unwrap();
        assert!(parsed.solid.is_none());
    }
}
