//! Geometry statistics for loaded meshes

use serde::Serialize;

use crate::mesh::{Mesh, TimeSeriesMesh};

/// Axis-aligned bounding box over spatial coordinates
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoundingBox {
    /// Per-axis minimum
    pub min: Vec<f64>,
    /// Per-axis maximum
    pub max: Vec<f64>,
}

impl BoundingBox {
    /// Compute the box over `rows`, reading `skip` leading coordinates past.
    ///
    /// Returns `None` if there are no rows.
    pub fn from_rows<'a, I>(rows: I, skip: usize) -> Option<Self>
    where
        I: IntoIterator<Item = &'a [f64]>,
    {
        let mut rows = rows.into_iter();
        let first = rows.next()?.get(skip..)?;
        let mut min = first.to_vec();
        let mut max = first.to_vec();

        for row in rows {
            for (axis, &value) in row.iter().skip(skip).enumerate() {
                min[axis] = min[axis].min(value);
                max[axis] = max[axis].max(value);
            }
        }
        Some(Self { min, max })
    }

    /// Size along each axis
    #[must_use]
    pub fn extent(&self) -> Vec<f64> {
        self.max
            .iter()
            .zip(&self.min)
            .map(|(max, min)| max - min)
            .collect()
    }
}

/// Counts and ranges describing a loaded mesh
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeshSummary {
    /// Display name (usually the file or directory name)
    pub name: String,
    /// Coordinates per vertex in the source files
    pub spatial_dimension: usize,
    /// Total vertices
    pub vertex_count: usize,
    /// Total faces
    pub face_count: usize,
    /// Number of time steps, `None` for a single-file load
    pub time_steps: Option<usize>,
    /// Smallest and largest polygon size
    pub face_sizes: Option<(usize, usize)>,
    /// Spatial bounding box
    pub bounding_box: Option<BoundingBox>,
    /// Smallest and largest per-vertex value
    pub value_range: Option<(f64, f64)>,
}

impl MeshSummary {
    /// Summarize a single-file mesh
    #[must_use]
    pub fn of_mesh(mesh: &Mesh, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            spatial_dimension: mesh.dimension(),
            vertex_count: mesh.vertex_count(),
            face_count: mesh.face_count(),
            time_steps: None,
            face_sizes: face_sizes(mesh.faces()),
            bounding_box: BoundingBox::from_rows(mesh.vertices(), 0),
            value_range: value_range(mesh.values()),
        }
    }

    /// Summarize a time series; the time coordinate is left out of the box
    #[must_use]
    pub fn of_series(series: &TimeSeriesMesh, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            spatial_dimension: series.spatial_dimension(),
            vertex_count: series.vertex_count(),
            face_count: series.face_count(),
            time_steps: Some(series.time_steps()),
            face_sizes: face_sizes(series.faces()),
            bounding_box: BoundingBox::from_rows(series.vertices(), 1),
            value_range: value_range(series.values()),
        }
    }

    /// True if every face is a triangle
    #[must_use]
    pub fn is_triangulated(&self) -> bool {
        matches!(self.face_sizes, Some((3, 3)))
    }
}

fn face_sizes(faces: &[Vec<usize>]) -> Option<(usize, usize)> {
    faces.iter().map(Vec::len).fold(None, |acc, len| match acc {
        None => Some((len, len)),
        Some((lo, hi)) => Some((lo.min(len), hi.max(len))),
    })
}

fn value_range(values: &[f64]) -> Option<(f64, f64)> {
    values.iter().fold(None, |acc, &v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((f64::min(lo, v), f64::max(hi, v))),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::obj::ObjParser;
    use crate::series::SeriesBuilder;

    const TRIANGLE: &str = "v 0 0 0\nv 2 0 0\nv 0 1 0\nf 1 2 3\n";

    #[test]
    fn test_bounding_box_from_rows() {
        let rows: [&[f64]; 3] = [&[0.0, -1.0], &[2.0, 3.0], &[1.0, 0.5]];
        let bbox = BoundingBox::from_rows(rows, 0).expect("non-empty rows");
        assert_eq!(bbox.min, vec![0.0, -1.0]);
        assert_eq!(bbox.max, vec![2.0, 3.0]);
        assert_eq!(bbox.extent(), vec![2.0, 4.0]);
    }

    #[test]
    fn test_bounding_box_empty() {
        assert_eq!(BoundingBox::from_rows(std::iter::empty(), 0), None);
    }

    #[test]
    fn test_mesh_summary() {
        let obj = format!("# header\n{TRIANGLE}");
        let mesh = ObjParser::parse_str(&obj, "tri.obj").expect("parse");
        let summary = MeshSummary::of_mesh(&mesh, "tri");

        assert_eq!(summary.vertex_count, 3);
        assert_eq!(summary.face_count, 1);
        assert_eq!(summary.time_steps, None);
        assert!(summary.is_triangulated());
        assert_eq!(summary.value_range, Some((1.0, 1.0)));
        let bbox = summary.bounding_box.expect("bbox");
        assert_eq!(bbox.max, vec![2.0, 1.0, 0.0]);
    }

    #[test]
    fn test_series_summary_skips_time_axis() {
        let mut builder = SeriesBuilder::new();
        for name in ["a.obj", "b.obj", "c.obj"] {
            let mesh = ObjParser::parse_str(TRIANGLE, name).expect("parse");
            builder.push(name, mesh).expect("push");
        }
        let summary = MeshSummary::of_series(&builder.finish(), "run");

        assert_eq!(summary.time_steps, Some(3));
        assert_eq!(summary.spatial_dimension, 3);
        let bbox = summary.bounding_box.expect("bbox");
        assert_eq!(bbox.min.len(), 3);
        assert_eq!(bbox.max, vec![2.0, 1.0, 0.0]);
    }

    #[test]
    fn test_empty_mesh_summary() {
        let summary = MeshSummary::of_mesh(&Mesh::default(), "empty");
        assert_eq!(summary.bounding_box, None);
        assert_eq!(summary.face_sizes, None);
        assert_eq!(summary.value_range, None);
        assert!(!summary.is_triangulated());
    }
}
