//! Decoding solver models back into spacetime patterns.

use crate::geometry::{Bounds, Point};
use crate::sat::dimacs::SolverOutcome;
use crate::search::problem::SearchProblem;
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

/// A fully determined spacetime pattern decoded from a solver model.
#[derive(Debug, Clone, Serialize)]
pub struct Solution {
    bounds: Bounds,
    /// Cell states over the bounds, t-major then row-major.
    cells: Vec<bool>,
}

impl Solution {
    /// Lift a model over the problem's variables into concrete cell states.
    /// Variables absent from the model decode as dead.
    pub fn from_model(problem: &SearchProblem, outcome: &SolverOutcome) -> Self {
        let bounds = problem.bounds();
        let mut cells = Vec::with_capacity(bounds.cell_count());
        for t in bounds.t.0..=bounds.t.1 {
            for y in bounds.y.0..=bounds.y.1 {
                for x in bounds.x.0..=bounds.x.1 {
                    let id = problem.cell_value(Point::new(x, y, t));
                    let alive = match id {
                        0 => false,
                        1 => true,
                        var => outcome.is_true(var - 1),
                    };
                    cells.push(alive);
                }
            }
        }
        Self { bounds, cells }
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn alive(&self, p: Point) -> bool {
        if !self.bounds.contains(p) {
            return false;
        }
        let sz_x = self.bounds.size_x() as usize;
        let sz_y = self.bounds.size_y() as usize;
        let idx = (p.t - self.bounds.t.0) as usize * sz_y * sz_x
            + (p.y - self.bounds.y.0) as usize * sz_x
            + (p.x - self.bounds.x.0) as usize;
        self.cells[idx]
    }

    pub fn living_count(&self, gen: i32) -> usize {
        let mut count = 0;
        for y in self.bounds.y.0..=self.bounds.y.1 {
            for x in self.bounds.x.0..=self.bounds.x.1 {
                if self.alive(Point::new(x, y, gen)) {
                    count += 1;
                }
            }
        }
        count
    }

    /// Render one generation as text rows.
    pub fn render_generation(&self, gen: i32) -> String {
        let mut out = String::new();
        for y in self.bounds.y.0..=self.bounds.y.1 {
            for x in self.bounds.x.0..=self.bounds.x.1 {
                out.push(if self.alive(Point::new(x, y, gen)) { '█' } else { '·' });
            }
            out.push('\n');
        }
        out
    }

    /// Save as JSON.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize solution")?;
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }
        std::fs::write(&path, json)
            .with_context(|| format!("failed to write solution to {}", path.as_ref().display()))?;
        Ok(())
    }
}

impl std::fmt::Display for Solution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for t in self.bounds.t.0..=self.bounds.t.1 {
            writeln!(f, "Generation {} ({} alive):", t, self.living_count(t))?;
            write!(f, "{}", self.render_generation(t))?;
            writeln!(f)?;
        }
        Ok(())
    }
}
