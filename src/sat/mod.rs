//! SAT encoding primitives: clauses, the transition clause table, DIMACS
//! serialization and external solver dispatch.

pub mod clause;
pub mod dimacs;
pub mod logic;
pub mod solver;

pub use clause::{deduplicate_clauses, BigClause, Clause, ClauseBuilder, ClauseList};
pub use dimacs::{dimacs_string, parse_solver_output, SolverOutcome, SolverStatus};
pub use logic::{append_transition_clauses, prime_implicants, transition_valid, Implicant};
pub use solver::solve;
