//! OBJ file format support
//!
//! Only the geometry subset of Wavefront OBJ is read: `v` lines become
//! vertices and `f` lines become faces. Every other line is skipped for
//! geometry but advances the per-vertex attribute counter.

mod line;
mod parser;

use std::path::Path;

pub use line::{AttributeCounter, LineKind};
pub use parser::ObjParser;

/// File name suffix recognized as an OBJ mesh (case-sensitive)
pub const MESH_EXTENSION: &str = ".obj";

/// True if `path` ends with the literal `.obj` suffix.
///
/// The match is on the path text, so `model.OBJ` is not a mesh file.
#[must_use]
pub fn is_mesh_file(path: &Path) -> bool {
    path.as_os_str()
        .to_string_lossy()
        .ends_with(MESH_EXTENSION)
}
