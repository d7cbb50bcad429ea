//! meshseries-core - Wavefront OBJ loading and time-series aggregation
//!
//! This crate turns `.obj` text files into in-memory meshes made of vertex
//! positions, polygon face index lists and one scalar value per vertex. An
//! ordered list of files (or a directory) loads as a single
//! [`TimeSeriesMesh`] whose vertices carry the file's time index as an extra
//! leading coordinate.
//!
//! Only `v` and `f` lines are read. Materials, normals, texture coordinates
//! and groups are not interpreted.
//!
//! ## Examples
//!
//! Load one file:
//!
//! ```rust,no_run
//! use meshseries_core::ObjParser;
//!
//! let mesh = ObjParser::parse_file("frame_000.obj")?;
//! println!("Vertices: {}", mesh.vertex_count());
//! println!("Faces: {}", mesh.face_count());
//! # Ok::<(), meshseries_core::MeshError>(())
//! ```
//!
//! Load a directory of frames as a time series:
//!
//! ```rust,no_run
//! use meshseries_core::{load_source, EntryOrder, LoadOptions, LoadedMesh, MeshSource};
//!
//! let options = LoadOptions { entry_order: EntryOrder::Lexicographic };
//! let loaded = load_source(&MeshSource::from_path("frames/"), &options)?;
//! if let LoadedMesh::Series(series) = &loaded {
//!     for step in series.steps() {
//!         println!("t={} {} vertices", step.time_index, step.vertex_count);
//!     }
//! }
//! # Ok::<(), meshseries_core::MeshError>(())
//! ```
//!
//! ## Per-vertex values
//!
//! Each vertex is tagged with the number of non-geometry lines (comments,
//! group markers, normals, blank lines, ...) that precede it in its file. See
//! [`AttributeCounter`].

pub mod error;
pub mod mesh;
pub mod obj;
pub mod serializer;
pub mod series;
pub mod source;
pub mod summary;

// Re-export main types
pub use error::{MeshError, Result};
pub use mesh::{Mesh, TimeSeriesMesh, TimeStep};
pub use obj::{is_mesh_file, AttributeCounter, LineKind, ObjParser, MESH_EXTENSION};
pub use serializer::to_markdown;
pub use series::{load_series, SeriesBuilder};
pub use source::{load_source, EntryOrder, LoadOptions, LoadedMesh, MeshSource, ResolvedSource};
pub use summary::{BoundingBox, MeshSummary};
