//! Mesh value types
//!
//! [`Mesh`] is what the single-file loader produces; [`TimeSeriesMesh`] is the
//! concatenation of several meshes with a leading time coordinate on every
//! vertex. Both are immutable once built.

use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;
use std::ops::Range;
use std::path::PathBuf;

/// Row view over flat coordinate storage, serialized as a list of lists.
struct Rows<'a> {
    data: &'a [f64],
    stride: usize,
}

impl Serialize for Rows<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.data.chunks_exact(self.stride.max(1)))
    }
}

/// A polygon mesh loaded from one OBJ file.
///
/// Vertex positions are stored flat (`[x0, y0, z0, x1, y1, z1, ...]`) with
/// stride [`dimension`](Self::dimension). Faces are 0-based index lists of
/// any length. There is exactly one scalar value per vertex.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    dimension: usize,
    positions: Vec<f64>,
    faces: Vec<Vec<usize>>,
    values: Vec<f64>,
}

impl Mesh {
    /// Assemble a mesh from already validated parts.
    ///
    /// Callers guarantee `positions.len() == dimension * values.len()` and
    /// that every face index is below `values.len()`.
    pub(crate) fn from_parts(
        dimension: usize,
        positions: Vec<f64>,
        faces: Vec<Vec<usize>>,
        values: Vec<f64>,
    ) -> Self {
        debug_assert_eq!(positions.len(), dimension * values.len());
        debug_assert!(faces.iter().flatten().all(|&i| i < values.len()));
        Self {
            dimension,
            positions,
            faces,
            values,
        }
    }

    /// Number of coordinates per vertex (0 for a mesh without vertices)
    #[inline]
    #[must_use]
    pub const fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of vertices
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.values.len()
    }

    /// Number of faces
    #[inline]
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// True when the file declared neither vertices nor faces
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty() && self.faces.is_empty()
    }

    /// Flat vertex coordinates
    #[inline]
    #[must_use]
    pub fn positions(&self) -> &[f64] {
        &self.positions
    }

    /// Coordinates of vertex `index`
    #[must_use]
    pub fn vertex(&self, index: usize) -> Option<&[f64]> {
        if index >= self.vertex_count() {
            return None;
        }
        let start = index.checked_mul(self.dimension)?;
        let end = start.checked_add(self.dimension)?;
        self.positions.get(start..end)
    }

    /// Iterate vertex coordinate tuples in file order
    pub fn vertices(&self) -> impl ExactSizeIterator<Item = &[f64]> + '_ {
        self.positions.chunks_exact(self.dimension.max(1))
    }

    /// 0-based face index lists
    #[inline]
    #[must_use]
    pub fn faces(&self) -> &[Vec<usize>] {
        &self.faces
    }

    /// Per-vertex scalar values
    #[inline]
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Consume the mesh, returning `(dimension, positions, faces, values)`
    #[must_use]
    pub fn into_parts(self) -> (usize, Vec<f64>, Vec<Vec<usize>>, Vec<f64>) {
        (self.dimension, self.positions, self.faces, self.values)
    }
}

impl Serialize for Mesh {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Mesh", 4)?;
        state.serialize_field("dimension", &self.dimension)?;
        state.serialize_field(
            "vertices",
            &Rows {
                data: &self.positions,
                stride: self.dimension,
            },
        )?;
        state.serialize_field("faces", &self.faces)?;
        state.serialize_field("values", &self.values)?;
        state.end()
    }
}

/// Where one time step's data lives inside a [`TimeSeriesMesh`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeStep {
    /// Time coordinate given to this step's vertices
    pub time_index: usize,
    /// File the step was loaded from
    pub source: PathBuf,
    /// Index of this step's first vertex in the combined mesh
    pub vertex_offset: usize,
    /// Number of vertices contributed
    pub vertex_count: usize,
    /// Index of this step's first face in the combined mesh
    pub face_offset: usize,
    /// Number of faces contributed
    pub face_count: usize,
}

impl TimeStep {
    /// Range of this step's vertices in the combined mesh
    #[inline]
    #[must_use]
    pub const fn vertex_range(&self) -> Range<usize> {
        self.vertex_offset..self.vertex_offset + self.vertex_count
    }

    /// Range of this step's faces in the combined mesh
    #[inline]
    #[must_use]
    pub const fn face_range(&self) -> Range<usize> {
        self.face_offset..self.face_offset + self.face_count
    }
}

/// Several meshes concatenated along a time axis.
///
/// Every vertex has `spatial_dimension + 1` coordinates; coordinate 0 is the
/// integer time index of the file it came from. Face indices address the
/// combined vertex list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimeSeriesMesh {
    spatial_dimension: usize,
    positions: Vec<f64>,
    faces: Vec<Vec<usize>>,
    values: Vec<f64>,
    steps: Vec<TimeStep>,
}

impl TimeSeriesMesh {
    pub(crate) fn from_parts(
        spatial_dimension: usize,
        positions: Vec<f64>,
        faces: Vec<Vec<usize>>,
        values: Vec<f64>,
        steps: Vec<TimeStep>,
    ) -> Self {
        debug_assert_eq!(positions.len(), (spatial_dimension + 1) * values.len());
        Self {
            spatial_dimension,
            positions,
            faces,
            values,
            steps,
        }
    }

    /// Coordinates per vertex, including the leading time coordinate
    #[inline]
    #[must_use]
    pub const fn dimension(&self) -> usize {
        self.spatial_dimension + 1
    }

    /// Coordinates per vertex in the source files (0 if no file had vertices)
    #[inline]
    #[must_use]
    pub const fn spatial_dimension(&self) -> usize {
        self.spatial_dimension
    }

    /// Total number of vertices across all time steps
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.values.len()
    }

    /// Total number of faces across all time steps
    #[inline]
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Flat vertex coordinates, stride [`dimension`](Self::dimension)
    #[inline]
    #[must_use]
    pub fn positions(&self) -> &[f64] {
        &self.positions
    }

    /// Coordinates of vertex `index`, time coordinate first
    #[must_use]
    pub fn vertex(&self, index: usize) -> Option<&[f64]> {
        if index >= self.vertex_count() {
            return None;
        }
        let stride = self.dimension();
        let start = index.checked_mul(stride)?;
        let end = start.checked_add(stride)?;
        self.positions.get(start..end)
    }

    /// Iterate `(time, x, y, ...)` tuples in time order
    pub fn vertices(&self) -> impl ExactSizeIterator<Item = &[f64]> + '_ {
        self.positions.chunks_exact(self.dimension())
    }

    /// Face index lists into the combined vertices
    #[inline]
    #[must_use]
    pub fn faces(&self) -> &[Vec<usize>] {
        &self.faces
    }

    /// Per-vertex scalar values, concatenated in time order
    #[inline]
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// One record per loaded file, in time order
    #[inline]
    #[must_use]
    pub fn steps(&self) -> &[TimeStep] {
        &self.steps
    }

    /// Number of time steps
    #[inline]
    #[must_use]
    pub fn time_steps(&self) -> usize {
        self.steps.len()
    }
}

impl Serialize for TimeSeriesMesh {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("TimeSeriesMesh", 5)?;
        state.serialize_field("dimension", &self.dimension())?;
        state.serialize_field(
            "vertices",
            &Rows {
                data: &self.positions,
                stride: self.dimension(),
            },
        )?;
        state.serialize_field("faces", &self.faces)?;
        state.serialize_field("values", &self.values)?;
        state.serialize_field("steps", &self.steps)?;
        state.end()
    }
}
