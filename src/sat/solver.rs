//! External SAT solver dispatch.
//!
//! The CNF is written to a temporary file (piping large inputs directly into
//! the child risks a write-side deadlock) and the solver is invoked as
//! `<solver> --quiet <file>`. Stdout and stderr are both parsed; the temp
//! file is removed once the child has exited.

use crate::config::SolverConfig;
use crate::sat::clause::{BigClause, ClauseList};
use crate::sat::dimacs::{dimacs_string, parse_solver_output, SolverOutcome};
use anyhow::{Context, Result};
use std::io::Write;
use std::process::Command;

/// Serialize the clauses, run the configured solver and parse its answer.
///
/// Dispatch failures never panic or return `Err`; they surface uniformly as
/// an `Error` outcome with a diagnostic message.
pub fn solve(
    clauses: &ClauseList,
    extras: &[BigClause],
    num_variables: i32,
    solver: &SolverConfig,
) -> SolverOutcome {
    match dispatch(clauses, extras, num_variables, solver) {
        Ok(outcome) => outcome,
        Err(e) => SolverOutcome::error(format!("solver dispatch failed: {e:#}")),
    }
}

fn dispatch(
    clauses: &ClauseList,
    extras: &[BigClause],
    num_variables: i32,
    solver: &SolverConfig,
) -> Result<SolverOutcome> {
    let dimacs = dimacs_string(clauses, extras, num_variables);

    let mut input = tempfile::Builder::new()
        .prefix("gol_search_")
        .suffix(".cnf")
        .tempfile()
        .context("failed to create temporary CNF file")?;
    input
        .write_all(dimacs.as_bytes())
        .context("failed to write CNF to temporary file")?;
    input.flush().context("failed to flush temporary CNF file")?;

    let program = solver.program();
    let output = Command::new(&program)
        .arg("--quiet")
        .arg(input.path())
        .output()
        .with_context(|| format!("failed to run solver {}", program.display()))?;

    // Solvers conventionally exit nonzero for SAT/UNSAT, so the exit status
    // is not meaningful on its own; the parsed status lines decide.
    let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
    text.push_str(&String::from_utf8_lossy(&output.stderr));

    Ok(parse_solver_output(&text))
}
