//! OBJ file parser
//!
//! Reads vertex and face lines into a [`Mesh`]. Face indices in the file are
//! 1-based; they are shifted to 0-based and then normalized so the smallest
//! index in the file becomes 0. Indices that still fall outside the vertex
//! list after that are rejected.

use std::fs;
use std::path::Path;

use super::line::{AttributeCounter, LineKind};
use crate::error::{MeshError, Result};
use crate::mesh::Mesh;

/// OBJ parser
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ObjParser;

impl ObjParser {
    /// Parse an OBJ file from disk.
    ///
    /// The file is read completely and closed before parsing starts.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::Io`] if the file cannot be read and
    /// [`MeshError::Parse`] if any vertex or face line is malformed or a face
    /// references a vertex that does not exist.
    #[must_use = "parsing produces a result that should be handled"]
    pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Mesh> {
        let path = path.as_ref();
        let data = fs::read_to_string(path).map_err(|e| MeshError::io(path, e))?;

        let mesh = Self::parse_str(&data, path)?;
        log::debug!(
            "Loaded {}: {} vertices, {} faces",
            path.display(),
            mesh.vertex_count(),
            mesh.face_count()
        );
        Ok(mesh)
    }

    /// Parse OBJ text held in memory.
    ///
    /// `origin` only labels errors; it is never opened.
    ///
    /// # Errors
    ///
    /// Same parse errors as [`ObjParser::parse_file`].
    #[must_use = "parsing produces a result that should be handled"]
    pub fn parse_str<P: AsRef<Path>>(data: &str, origin: P) -> Result<Mesh> {
        let origin = origin.as_ref();

        let mut counter = AttributeCounter::new();
        let mut dimension: Option<usize> = None;
        let mut positions: Vec<f64> = Vec::new();
        let mut values: Vec<f64> = Vec::new();
        let mut faces: Vec<Vec<i64>> = Vec::new();
        // Source line of each face, for out-of-range reports
        let mut face_lines: Vec<usize> = Vec::new();

        for (idx, line) in data.lines().enumerate() {
            let line_no = idx + 1;
            let mut tokens = line.split_whitespace();
            let kind = LineKind::classify(tokens.next());

            match kind {
                LineKind::Vertex => {
                    let start = positions.len();
                    for token in tokens {
                        let coord = token
                            .parse::<f64>()
                            .ok()
                            .filter(|c| c.is_finite())
                            .ok_or_else(|| {
                                MeshError::parse(
                                    origin,
                                    line_no,
                                    format!("invalid vertex coordinate '{token}'"),
                                )
                            })?;
                        positions.push(coord);
                    }

                    let found = positions.len() - start;
                    if found == 0 {
                        return Err(MeshError::parse(
                            origin,
                            line_no,
                            "vertex line has no coordinates",
                        ));
                    }
                    match dimension {
                        None => dimension = Some(found),
                        Some(expected) if expected != found => {
                            return Err(MeshError::parse(
                                origin,
                                line_no,
                                format!("vertex has {found} coordinates, expected {expected}"),
                            ));
                        }
                        Some(_) => {}
                    }
                    values.push(counter.current());
                }
                LineKind::Face => {
                    let face = tokens
                        .map(|token| parse_face_index(token, origin, line_no))
                        .collect::<Result<Vec<i64>>>()?;
                    if face.is_empty() {
                        return Err(MeshError::parse(origin, line_no, "face line has no indices"));
                    }
                    faces.push(face);
                    face_lines.push(line_no);
                }
                LineKind::Other => {}
            }
            counter.observe(kind);
        }

        let faces = renumber_faces(faces, &face_lines, values.len(), origin)?;
        Ok(Mesh::from_parts(
            dimension.unwrap_or(0),
            positions,
            faces,
            values,
        ))
    }
}

/// Parse one 1-based face token into a 0-based index
fn parse_face_index(token: &str, origin: &Path, line_no: usize) -> Result<i64> {
    token
        .parse::<i64>()
        .ok()
        .and_then(|index| index.checked_sub(1))
        .ok_or_else(|| MeshError::parse(origin, line_no, format!("invalid face index '{token}'")))
}

/// Shift all indices so the smallest becomes 0, then bounds-check them.
fn renumber_faces(
    faces: Vec<Vec<i64>>,
    face_lines: &[usize],
    vertex_count: usize,
    origin: &Path,
) -> Result<Vec<Vec<usize>>> {
    let Some(min_index) = faces.iter().flatten().copied().min() else {
        return Ok(Vec::new());
    };

    faces
        .into_iter()
        .zip(face_lines)
        .map(|(face, &line_no)| {
            face.into_iter()
                .map(|index| {
                    index
                        .checked_sub(min_index)
                        .and_then(|shifted| usize::try_from(shifted).ok())
                        .filter(|&shifted| shifted < vertex_count)
                        .ok_or_else(|| {
                            MeshError::parse(
                                origin,
                                line_no,
                                format!(
                                    "face index {} is out of range for {vertex_count} vertices",
                                    index.saturating_sub(min_index).saturating_add(1)
                                ),
                            )
                        })
                })
                .collect::<Result<Vec<usize>>>()
        })
        .collect()
}
