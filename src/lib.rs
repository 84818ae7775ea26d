//! SAT-based search for Game of Life patterns with spatio-temporal symmetry.
//!
//! Still lifes, oscillators, spaceships and composite catalyst searches are
//! all the same question: does a field of cells exist that satisfies the
//! B3/S23 transition rule everywhere and equals its own image under some
//! spacetime transform? This crate encodes that question as CNF, hands it to
//! an external SAT solver and decodes the model back into a pattern.

pub mod config;
pub mod error;
pub mod geometry;
pub mod pattern;
pub mod sat;
pub mod search;
pub mod utils;

pub use config::Settings;
pub use error::SearchError;
pub use search::{SearchOutcome, SearchProblem, Solution};
