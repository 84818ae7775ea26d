//! Search problem composition and solution decoding.

pub mod problem;
pub mod solution;

pub use problem::{EncodingStatistics, SearchProblem};
pub use solution::Solution;

use crate::sat::dimacs::SolverStatus;
use crate::sat::solver;
use anyhow::{bail, Result};

/// Outcome of running a search end to end.
#[derive(Debug)]
pub enum SearchOutcome {
    /// A pattern was found.
    Found(Solution),
    /// The search space is exhausted: no such pattern fits.
    Unsatisfiable,
}

/// Generate the CNF for a built problem, dispatch the solver and decode the
/// answer. `require_activity` adds the per-generation "at least one cell
/// alive" constraints so the empty field is not reported as a solution.
pub fn run_solver(
    problem: &SearchProblem,
    solver_config: &crate::config::SolverConfig,
    require_activity: bool,
) -> Result<SearchOutcome> {
    let clauses = problem.clauses()?;
    let extras = if require_activity {
        problem.liveness_clauses()
    } else {
        Vec::new()
    };

    let outcome = solver::solve(&clauses, &extras, problem.num_variables(), solver_config);
    match outcome.status {
        SolverStatus::Satisfiable => Ok(SearchOutcome::Found(Solution::from_model(problem, &outcome))),
        SolverStatus::Unsatisfiable => Ok(SearchOutcome::Unsatisfiable),
        SolverStatus::Error => bail!(
            "solver failed: {}",
            outcome.error_message.unwrap_or_else(|| "unknown error".to_string())
        ),
    }
}
