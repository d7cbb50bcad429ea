//! Line classification and the per-vertex attribute rule

/// What an OBJ line contributes to the mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    /// `v x y z ...`
    Vertex,
    /// `f i j k ...`
    Face,
    /// Anything else: comments, `vn`, `vt`, `o`, `g`, `usemtl`, blank lines
    Other,
}

impl LineKind {
    /// Classify a line by its leading keyword token.
    ///
    /// Only the exact keywords `v` and `f` carry geometry, so `vn` and `vt`
    /// lines are [`LineKind::Other`].
    #[inline]
    #[must_use]
    pub fn classify(keyword: Option<&str>) -> Self {
        match keyword {
            Some("v") => Self::Vertex,
            Some("f") => Self::Face,
            _ => Self::Other,
        }
    }
}

/// Tags each vertex with the number of non-geometry lines seen before it.
///
/// Files that interleave comment or group lines between vertex blocks thus
/// get a stepwise scalar that distinguishes the blocks. Vertex and face lines
/// never advance the count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttributeCounter {
    seen: u64,
}

impl AttributeCounter {
    /// Start at zero
    #[must_use]
    pub const fn new() -> Self {
        Self { seen: 0 }
    }

    /// Record one line
    #[inline]
    pub fn observe(&mut self, kind: LineKind) {
        if kind == LineKind::Other {
            self.seen += 1;
        }
    }

    /// Value for a vertex declared now
    #[inline]
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // line counts stay far below 2^53
    pub const fn current(&self) -> f64 {
        self.seen as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_keywords() {
        assert_eq!(LineKind::classify(Some("v")), LineKind::Vertex);
        assert_eq!(LineKind::classify(Some("f")), LineKind::Face);
        assert_eq!(LineKind::classify(Some("vn")), LineKind::Other);
        assert_eq!(LineKind::classify(Some("vt")), LineKind::Other);
        assert_eq!(LineKind::classify(Some("#")), LineKind::Other);
        assert_eq!(LineKind::classify(Some("fo")), LineKind::Other);
        assert_eq!(LineKind::classify(None), LineKind::Other);
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn test_counter_ignores_geometry_lines() {
        let mut counter = AttributeCounter::new();
        counter.observe(LineKind::Vertex);
        counter.observe(LineKind::Face);
        assert_eq!(counter.current(), 0.0);

        counter.observe(LineKind::Other);
        counter.observe(LineKind::Vertex);
        counter.observe(LineKind::Other);
        assert_eq!(counter.current(), 2.0);
    }
}
