//! Error types for mesh loading

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a mesh or a mesh time series.
///
/// Every failure is terminal for the load that produced it: no partially
/// parsed mesh is ever returned alongside an error.
///
/// # Examples
///
/// ```no_run
/// use meshseries_core::{ObjParser, MeshError};
///
/// match ObjParser::parse_file("frame_000.obj") {
///     Ok(mesh) => println!("{} vertices", mesh.vertex_count()),
///     Err(MeshError::Io { path, source }) => eprintln!("{}: {source}", path.display()),
///     Err(MeshError::Parse { line, message, .. }) => eprintln!("line {line}: {message}"),
///     Err(e) => eprintln!("Error: {e}"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum MeshError {
    /// File or directory could not be read
    #[error("IO error reading {}: {source}", path.display())]
    Io {
        /// Path that failed to open or list
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: io::Error,
    },

    /// Malformed OBJ content.
    ///
    /// `line` is 1-based. Out-of-range face indices report the line of the
    /// face that holds them.
    #[error("Parse error in {} (line {line}): {message}", path.display())]
    Parse {
        /// File (or in-memory origin label) being parsed
        path: PathBuf,
        /// 1-based line number of the offending `v` or `f` line
        line: usize,
        /// What went wrong
        message: String,
    },

    /// Aggregator was given no recognized `.obj` files
    #[error("No mesh files to load: {0}")]
    EmptyInput(String),

    /// A single path was given that does not carry the `.obj` suffix
    #[error("Unsupported mesh format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    /// Files in one series disagree on the spatial dimension of their vertices
    #[error(
        "Vertex dimension mismatch in {}: expected {expected}, found {found}",
        path.display()
    )]
    DimensionMismatch {
        /// Offending file
        path: PathBuf,
        /// Dimension established by earlier time steps
        expected: usize,
        /// Dimension of this file
        found: usize,
    },
}

impl MeshError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn parse(path: impl Into<PathBuf>, line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            line,
            message: message.into(),
        }
    }

    /// True for malformed-content errors, as opposed to IO or input-selection errors.
    #[inline]
    #[must_use]
    pub const fn is_parse_error(&self) -> bool {
        matches!(self, Self::Parse { .. } | Self::DimensionMismatch { .. })
    }
}

/// Result type for mesh operations
pub type Result<T> = std::result::Result<T, MeshError>;
