//! Configuration management for the pattern search tool.

pub mod settings;

pub use settings::{CliOverrides, OutputFormat, SearchConfig, Settings, SolverConfig};
