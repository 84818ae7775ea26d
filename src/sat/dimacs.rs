//! DIMACS CNF serialization and solver output parsing.
//!
//! Internal variable ids use the crate-wide convention (0 = dead, 1 = alive,
//! >= 2 = variable); clause literals are already in DIMACS numbering, where
//! internal id `k >= 2` is variable `k - 1`.

use crate::sat::clause::{BigClause, ClauseList};
use std::collections::HashSet;

/// Outcome of a solver run. `Error` covers both dispatch failures and
/// unparseable output; the raw diagnostic lands in `error_message`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverStatus {
    Satisfiable,
    Unsatisfiable,
    Error,
}

/// A parsed solver response: the status plus, for SAT, the model as the set
/// of literals the solver reported (positive = true, negative = false).
#[derive(Debug, Clone)]
pub struct SolverOutcome {
    pub status: SolverStatus,
    pub literals: HashSet<i32>,
    pub error_message: Option<String>,
}

impl SolverOutcome {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: SolverStatus::Error,
            literals: HashSet::new(),
            error_message: Some(message.into()),
        }
    }

    /// Whether the model assigns DIMACS variable `var` true.
    pub fn is_true(&self, var: i32) -> bool {
        self.literals.contains(&var)
    }
}

/// Render clauses as a DIMACS CNF document. `extras` are appended after the
/// fixed-width clauses and counted in the header.
pub fn dimacs_string(clauses: &ClauseList, extras: &[BigClause], num_variables: i32) -> String {
    let mut out = String::with_capacity(16 * clauses.len() + 64);
    out.push_str(&format!(
        "p cnf {} {}\n",
        num_variables,
        clauses.len() + extras.len()
    ));
    for clause in clauses {
        write_clause(&mut out, clause.literals());
    }
    for clause in extras {
        write_clause(&mut out, clause);
    }
    out
}

fn write_clause(out: &mut String, literals: &[i32]) {
    for &lit in literals {
        out.push_str(&format!("{} ", lit));
    }
    out.push_str("0\n");
}

/// Parse a solver's stdout. Lines starting with `s` carry the status, lines
/// starting with `v` carry the model (their terminating 0 is skipped); other
/// lines are ignored. No status line at all is an error carrying an excerpt
/// of the raw output.
pub fn parse_solver_output(output: &str) -> SolverOutcome {
    let mut status = SolverStatus::Error;
    let mut literals = HashSet::new();

    for line in output.lines() {
        if let Some(rest) = line.strip_prefix("s ") {
            if rest.contains("UNSATISFIABLE") {
                status = SolverStatus::Unsatisfiable;
            } else if rest.contains("SATISFIABLE") {
                status = SolverStatus::Satisfiable;
            }
        } else if let Some(rest) = line.strip_prefix("v ") {
            for token in rest.split_ascii_whitespace() {
                if let Ok(lit) = token.parse::<i32>() {
                    if lit != 0 {
                        literals.insert(lit);
                    }
                }
            }
        }
    }

    if status == SolverStatus::Error {
        let excerpt: String = output.chars().take(200).collect();
        SolverOutcome::error(format!("failed to parse solver output: {excerpt:?}"))
    } else {
        SolverOutcome { status, literals, error_message: None }
    }
}
