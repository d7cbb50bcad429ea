//! Input resolution
//!
//! A host may hand over a single file, a list of files, or a directory.
//! [`MeshSource`] captures which one it was; [`load_source`] resolves it once
//! and dispatches to the single-file loader or the time-series aggregator.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{MeshError, Result};
use crate::mesh::{Mesh, TimeSeriesMesh};
use crate::obj::{is_mesh_file, ObjParser};
use crate::series::load_series;
use crate::summary::MeshSummary;

/// Order in which directory entries become time steps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryOrder {
    /// Whatever order the operating system lists entries in.
    ///
    /// This is not guaranteed to be sorted and differs across platforms.
    #[default]
    Listing,
    /// Sort entries by file name, byte-wise
    Lexicographic,
}

/// Options for [`load_source`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadOptions {
    /// Ordering applied when a directory is expanded
    pub entry_order: EntryOrder,
}

/// What the caller asked to load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MeshSource {
    /// One file, loaded as a single [`Mesh`]
    File(PathBuf),
    /// An ordered list of files, loaded as a time series
    Files(Vec<PathBuf>),
    /// A directory whose entries are loaded as a time series
    Directory(PathBuf),
}

/// A [`MeshSource`] after directory expansion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedSource {
    /// Load one file
    Single(PathBuf),
    /// Load these files in order as a time series
    Series(Vec<PathBuf>),
}

/// Result of [`load_source`]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LoadedMesh {
    /// Loaded from one file
    Single(Mesh),
    /// Loaded from a list of files or a directory
    Series(TimeSeriesMesh),
}

impl MeshSource {
    /// Classify a single path: directories become [`MeshSource::Directory`],
    /// anything else [`MeshSource::File`].
    #[must_use]
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        if path.is_dir() {
            Self::Directory(path.to_path_buf())
        } else {
            Self::File(path.to_path_buf())
        }
    }

    /// Build a list source. A list always loads as a series, even with one
    /// entry.
    #[must_use]
    pub fn from_paths<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        Self::Files(
            paths
                .into_iter()
                .map(|p| p.as_ref().to_path_buf())
                .collect(),
        )
    }

    /// Expand directories and check single-file format.
    ///
    /// # Errors
    ///
    /// - [`MeshError::UnsupportedFormat`] for a single file without `.obj`
    /// - [`MeshError::Io`] if a directory cannot be listed
    pub fn resolve(&self, options: &LoadOptions) -> Result<ResolvedSource> {
        match self {
            Self::File(path) => {
                if is_mesh_file(path) {
                    Ok(ResolvedSource::Single(path.clone()))
                } else {
                    Err(MeshError::UnsupportedFormat(path.clone()))
                }
            }
            Self::Files(paths) => Ok(ResolvedSource::Series(paths.clone())),
            Self::Directory(dir) => {
                let entries = list_directory(dir, options.entry_order)?;
                Ok(ResolvedSource::Series(entries))
            }
        }
    }
}

/// List the entries of `dir` as full paths.
fn list_directory(dir: &Path, order: EntryOrder) -> Result<Vec<PathBuf>> {
    let mut entries = fs::read_dir(dir)
        .map_err(|e| MeshError::io(dir, e))?
        .map(|entry| entry.map(|e| e.path()).map_err(|e| MeshError::io(dir, e)))
        .collect::<Result<Vec<PathBuf>>>()?;

    if order == EntryOrder::Lexicographic {
        entries.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    }
    log::debug!(
        "Expanded directory {} to {} entries ({order:?} order)",
        dir.display(),
        entries.len()
    );
    Ok(entries)
}

/// Resolve `source` and load it.
///
/// # Errors
///
/// Any error from [`MeshSource::resolve`], [`ObjParser::parse_file`] or
/// [`load_series`].
pub fn load_source(source: &MeshSource, options: &LoadOptions) -> Result<LoadedMesh> {
    match source.resolve(options)? {
        ResolvedSource::Single(path) => ObjParser::parse_file(path).map(LoadedMesh::Single),
        ResolvedSource::Series(paths) => load_series(paths).map(LoadedMesh::Series),
    }
}

impl LoadedMesh {
    /// Total vertex count
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        match self {
            Self::Single(mesh) => mesh.vertex_count(),
            Self::Series(series) => series.vertex_count(),
        }
    }

    /// Total face count
    #[must_use]
    pub fn face_count(&self) -> usize {
        match self {
            Self::Single(mesh) => mesh.face_count(),
            Self::Series(series) => series.face_count(),
        }
    }

    /// Geometry summary labelled `name`
    #[must_use]
    pub fn summary(&self, name: impl Into<String>) -> MeshSummary {
        match self {
            Self::Single(mesh) => MeshSummary::of_mesh(mesh, name),
            Self::Series(series) => MeshSummary::of_series(series, name),
        }
    }

    /// Serialize to JSON
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if serialization fails.
    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}
