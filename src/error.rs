//! Error types for the encoding pipeline.

use crate::geometry::Point;
use thiserror::Error;

/// Errors raised while building patterns or search problems.
///
/// The encoder never retries; all of these propagate to the caller and are
/// fatal to the current problem. Solver dispatch problems are *not* errors
/// here: the solver interface reports them as an `Error` outcome.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// Unification forced a known-alive cell to equal a known-dead cell,
    /// either through symmetry links or through transition deduplication.
    #[error("contradictory constraints: a cell is required to be both alive and dead")]
    Contradiction,

    /// Two transitions with identical neighborhoods have different known
    /// outputs, which no assignment can satisfy.
    #[error(
        "conflicting known outputs for identical transitions at {position}: \
         center {center}, neighbors {neighbors:?}, outputs {first} vs {second}"
    )]
    ConflictingTransition {
        position: Point,
        center: i32,
        neighbors: [i32; 8],
        first: i32,
        second: i32,
    },

    /// No pattern entry's mask accepts this in-bounds point.
    #[error("no pattern entry covers point {0}")]
    UncoveredPoint(Point),

    /// A transition clause exceeded the fixed literal capacity. The prime
    /// implicant analysis guarantees at most 9 literals, so this indicates a
    /// bug in clause generation rather than bad input.
    #[error("transition clause exceeded {} literals", crate::sat::clause::MAX_CLAUSE_LITERALS)]
    ClauseOverflow,
}
