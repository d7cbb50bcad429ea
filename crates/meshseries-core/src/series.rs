//! Time-series aggregation
//!
//! Loads an ordered list of OBJ files and concatenates them into one
//! [`TimeSeriesMesh`]. File `i` gets time index `i`; its face indices are
//! shifted by the number of vertices contributed by files `0..i`.

use std::path::{Path, PathBuf};

use crate::error::{MeshError, Result};
use crate::mesh::{Mesh, TimeSeriesMesh, TimeStep};
use crate::obj::{is_mesh_file, ObjParser};

/// Accumulates meshes into a [`TimeSeriesMesh`], one time step per push.
///
/// ```
/// use meshseries_core::{ObjParser, SeriesBuilder};
///
/// let tri = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n";
/// let mut builder = SeriesBuilder::new();
/// builder.push("a.obj", ObjParser::parse_str(tri, "a.obj")?)?;
/// builder.push("b.obj", ObjParser::parse_str(tri, "b.obj")?)?;
/// let series = builder.finish();
///
/// assert_eq!(series.faces(), &[vec![0, 1, 2], vec![3, 4, 5]]);
/// # Ok::<(), meshseries_core::MeshError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct SeriesBuilder {
    spatial_dimension: Option<usize>,
    positions: Vec<f64>,
    faces: Vec<Vec<usize>>,
    values: Vec<f64>,
    steps: Vec<TimeStep>,
}

impl SeriesBuilder {
    /// Empty builder; the first push becomes time index 0
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of time steps pushed so far
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// True before the first push
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Append `mesh` as the next time step.
    ///
    /// Meshes without vertices are accepted and still consume a time index.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::DimensionMismatch`] if `mesh` has vertices of a
    /// different dimension than earlier steps. The builder is unchanged in
    /// that case.
    pub fn push<P: AsRef<Path>>(&mut self, source: P, mesh: Mesh) -> Result<()> {
        let source = source.as_ref();

        if mesh.vertex_count() > 0 {
            match self.spatial_dimension {
                None => self.spatial_dimension = Some(mesh.dimension()),
                Some(expected) if expected != mesh.dimension() => {
                    return Err(MeshError::DimensionMismatch {
                        path: source.to_path_buf(),
                        expected,
                        found: mesh.dimension(),
                    });
                }
                Some(_) => {}
            }
        }

        let time_index = self.steps.len();
        // Offset must be the count before this step's vertices are appended
        let vertex_offset = self.values.len();
        let face_offset = self.faces.len();
        let vertex_count = mesh.vertex_count();
        let face_count = mesh.face_count();

        let (dimension, positions, faces, values) = mesh.into_parts();

        #[allow(clippy::cast_precision_loss)] // time steps stay far below 2^53
        let time = time_index as f64;
        self.positions.reserve(positions.len() + vertex_count);
        for vertex in positions.chunks_exact(dimension.max(1)) {
            self.positions.push(time);
            self.positions.extend_from_slice(vertex);
        }

        self.faces.extend(
            faces
                .into_iter()
                .map(|face| face.into_iter().map(|i| i + vertex_offset).collect()),
        );
        self.values.extend(values);

        self.steps.push(TimeStep {
            time_index,
            source: source.to_path_buf(),
            vertex_offset,
            vertex_count,
            face_offset,
            face_count,
        });
        Ok(())
    }

    /// Finish into an immutable [`TimeSeriesMesh`]
    #[must_use]
    pub fn finish(self) -> TimeSeriesMesh {
        TimeSeriesMesh::from_parts(
            self.spatial_dimension.unwrap_or(0),
            self.positions,
            self.faces,
            self.values,
            self.steps,
        )
    }
}

/// Load an ordered list of files as a time series.
///
/// Paths not ending in `.obj` are skipped; the rest keep their relative order
/// and receive time indices 0, 1, 2, ...
///
/// # Errors
///
/// - [`MeshError::EmptyInput`] if no path ends in `.obj`
/// - [`MeshError::Io`] or [`MeshError::Parse`] from the first file that fails
/// - [`MeshError::DimensionMismatch`] if files disagree on vertex dimension
///
/// Any error aborts the whole load.
pub fn load_series<I, P>(paths: I) -> Result<TimeSeriesMesh>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let paths: Vec<PathBuf> = paths
        .into_iter()
        .map(|p| p.as_ref().to_path_buf())
        .collect();
    let total = paths.len();

    let mesh_paths: Vec<PathBuf> = paths
        .into_iter()
        .filter(|path| {
            let keep = is_mesh_file(path);
            if !keep {
                log::warn!("Skipping non-OBJ path: {}", path.display());
            }
            keep
        })
        .collect();

    if mesh_paths.is_empty() {
        return Err(MeshError::EmptyInput(format!(
            "none of {total} path(s) end with .obj"
        )));
    }

    let builder = mesh_paths
        .iter()
        .try_fold(SeriesBuilder::new(), |mut builder, path| {
            let mesh = ObjParser::parse_file(path)?;
            builder.push(path, mesh)?;
            Ok::<_, MeshError>(builder)
        })?;

    let series = builder.finish();
    log::info!(
        "Loaded time series: {} steps, {} vertices, {} faces",
        series.time_steps(),
        series.vertex_count(),
        series.face_count()
    );
    Ok(series)
}
