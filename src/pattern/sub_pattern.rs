//! The interface search problems use to query their constituent patterns.

use crate::error::SearchError;
use crate::geometry::{Bounds, Point};
use crate::sat::clause::ClauseList;

/// A bounded spacetime region that can report per-cell variable ids and emit
/// its own transition clauses.
///
/// Variable ids follow the crate-wide convention: 0 = known dead, 1 = known
/// alive, anything >= 2 is a distinct Boolean variable local to this pattern.
/// Implementations must answer `cell_value` with 0 for out-of-bounds points.
///
/// Patterns are populated with setters, then [`build`](SubPattern::build) is
/// called; cell values and clause emission are only meaningful afterwards.
pub trait SubPattern {
    fn bounds(&self) -> Bounds;

    fn contains(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    /// Resolve symmetry constraints into variable assignments. Idempotent;
    /// must be re-run after any mutation.
    fn build(&mut self) -> Result<(), SearchError>;

    /// Count of distinct variables (ids 0 and 1 excluded) after build.
    fn num_variables(&self) -> i32;

    /// Cell value at `p`: 0 = dead, 1 = alive, >= 2 = local variable id.
    fn cell_value(&self, p: Point) -> i32;

    /// Whether the state at `p` is fixed.
    fn is_known(&self, p: Point) -> bool;

    /// The fixed state at `p`; only meaningful when `is_known(p)`.
    fn state(&self, p: Point) -> bool;

    /// Whether the cell at `p` must arise from its `t - 1` neighborhood by
    /// the transition rule.
    fn follows_rules(&self, p: Point) -> bool;

    /// Transition clauses internal to this pattern, with local variable ids
    /// shifted so that local id 2 becomes `base_var`.
    fn clauses(&self, base_var: i32) -> Result<ClauseList, SearchError>;
}
