//! Cells and symmetry groups.

use crate::geometry::{AffineTransform, Point};

/// One spacetime cell of a [`VariablePattern`](crate::pattern::VariablePattern).
///
/// `group` indexes into the owning pattern's cell-group table; `None` means
/// the cell carries no symmetry and is never identified with other cells.
/// `state` is only meaningful when `known` is true.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub position: Point,
    pub group: Option<usize>,
    pub follows_rules: bool,
    pub known: bool,
    pub state: bool,
}

impl Cell {
    pub fn unknown(position: Point) -> Self {
        Self {
            position,
            group: None,
            follows_rules: true,
            known: false,
            state: false,
        }
    }

    pub fn is_live(&self) -> bool {
        self.known && self.state
    }

    pub fn is_dead(&self) -> bool {
        self.known && !self.state
    }
}

/// Symmetry constraints shared by a group of cells.
///
/// Every cell in the group is equal in state to its images under the closure
/// of the spatial transforms, and to its image under one application of the
/// time transform. A time transform with `bt == 0` (the default identity)
/// identifies nothing across generations.
#[derive(Debug, Clone, Default)]
pub struct CellGroup {
    pub spatial_transforms: Vec<AffineTransform>,
    pub time_transform: AffineTransform,
}

impl CellGroup {
    /// A group whose only identification is the given time transform.
    pub fn with_time_transform(time_transform: AffineTransform) -> Self {
        Self {
            spatial_transforms: Vec::new(),
            time_transform,
        }
    }

    /// The identification used for stable patterns: every generation equals
    /// the next one.
    pub fn stable() -> Self {
        Self::with_time_transform(AffineTransform::translation(0, 0, 1))
    }
}
