use thiserror::Error;

/// Input validation errors raised when constructing the initial ring set.
///
/// All geometric absences that occur while the algorithm runs (parallel
/// lines, no candidate event, etc.) are expected conditions handled inline
/// with `Option`; only malformed input surfaces as an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShrinkError {
    /// Polygon has fewer than 3 vertices.
    #[error("polygon requires at least 3 vertices, got {0}")]
    TooFewVertices(usize),

    /// Two adjacent input vertices coincide. Carries the index of the edge's
    /// first vertex.
    #[error("zero-length edge starting at vertex {0}")]
    ZeroLengthEdge(usize),

    /// Signed area is not positive; the polygon is clockwise wound or
    /// degenerate.
    #[error("polygon must be simple and wound counter-clockwise")]
    ClockwiseWinding,

    /// Two non-adjacent boundary segments cross. Carries the indexes of the
    /// first vertex of each segment.
    #[error("polygon is self-intersecting (segments starting at vertices {seg_a} and {seg_b})")]
    SelfIntersecting { seg_a: usize, seg_b: usize },

    /// Target offset distance must be positive (inward offset).
    #[error("target offset distance must be positive")]
    NonPositiveDistance,
}
