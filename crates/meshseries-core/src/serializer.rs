//! Mesh summary to Markdown serialization

use std::fmt::Write;

use crate::summary::MeshSummary;

/// Convert a mesh summary to markdown.
///
/// Generates a markdown document containing:
/// - Mesh name and kind (single file or time series)
/// - Geometry statistics (vertices, faces, polygon sizes)
/// - Bounding box and extent
/// - Per-vertex value range
#[must_use = "serialization returns markdown string"]
pub fn to_markdown(summary: &MeshSummary) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "# {}", summary.name);
    match summary.time_steps {
        Some(steps) => {
            let _ = writeln!(output, "- Format: Wavefront OBJ time series ({steps} steps)\n");
        }
        None => output.push_str("- Format: Wavefront OBJ\n\n"),
    }

    output.push_str("## Geometry Statistics\n\n");
    let _ = writeln!(output, "- **Dimension:** {}", summary.spatial_dimension);
    let _ = writeln!(output, "- **Total Vertices:** {}", summary.vertex_count);
    let _ = write!(output, "- **Total Faces:** {}", summary.face_count);
    match summary.face_sizes {
        Some((3, 3)) => output.push_str(" (triangles)"),
        Some((lo, hi)) if lo == hi => {
            let _ = write!(output, " ({lo}-gons)");
        }
        Some((lo, hi)) => {
            let _ = write!(output, " ({lo} to {hi} vertices each)");
        }
        None => {}
    }
    output.push_str("\n\n");

    if let Some(bbox) = &summary.bounding_box {
        output.push_str("## Bounding Box\n\n");
        let _ = writeln!(output, "- **Minimum:** ({})", format_coords(&bbox.min));
        let _ = writeln!(output, "- **Maximum:** ({})", format_coords(&bbox.max));
        let extent: Vec<String> = bbox.extent().iter().map(|v| format!("{v:.3}")).collect();
        let _ = writeln!(output, "- **Extent:** {}", extent.join(" x "));
        output.push('\n');
    }

    if let Some((lo, hi)) = summary.value_range {
        output.push_str("## Vertex Values\n\n");
        let _ = writeln!(output, "- **Range:** {lo} to {hi}");
        output.push('\n');
    }

    output
}

fn format_coords(coords: &[f64]) -> String {
    coords
        .iter()
        .map(|v| format!("{v:.3}"))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::obj::ObjParser;

    #[test]
    fn test_to_markdown_single() {
        let mesh = ObjParser::parse_str(
            "v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nf 1 2 3\nf 1 3 4\n",
            "square.obj",
        )
        .expect("parse");
        let markdown = to_markdown(&MeshSummary::of_mesh(&mesh, "square"));

        assert!(markdown.starts_with("# square\n"));
        assert!(markdown.contains("- Format: Wavefront OBJ\n"));
        assert!(markdown.contains("**Total Vertices:** 4"));
        assert!(markdown.contains("**Total Faces:** 2 (triangles)"));
        assert!(markdown.contains("**Maximum:** (1.000, 1.000, 0.000)"));
        assert!(markdown.contains("**Extent:** 1.000 x 1.000 x 0.000"));
    }

    #[test]
    fn test_to_markdown_mixed_faces() {
        let mesh = ObjParser::parse_str(
            "v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nf 1 2 3\nf 1 2 3 4\n",
            "mixed.obj",
        )
        .expect("parse");
        let markdown = to_markdown(&MeshSummary::of_mesh(&mesh, "mixed"));
        assert!(markdown.contains("(3 to 4 vertices each)"));
    }

    #[test]
    fn test_to_markdown_empty() {
        let mesh = ObjParser::parse_str("", "empty.obj").expect("parse");
        let markdown = to_markdown(&MeshSummary::of_mesh(&mesh, "empty"));
        assert!(markdown.contains("**Total Vertices:** 0"));
        assert!(!markdown.contains("Bounding Box"));
        assert!(!markdown.contains("Vertex Values"));
    }
}
