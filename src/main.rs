//! Command line interface for the symmetric pattern search.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use game_of_life_search::{
    config::{CliOverrides, OutputFormat, Settings},
    geometry::AffineTransform,
    pattern::{SubPattern, VariablePattern},
    search::{run_solver, SearchOutcome, SearchProblem},
    utils::{format_duration, ColorOutput},
};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "game_of_life_search")]
#[command(about = "SAT-based search for symmetric Game of Life patterns")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search for a pattern with the given spacetime symmetry
    Solve {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Region width, border included (overrides config)
        #[arg(long)]
        width: Option<i32>,

        /// Region height, border included (overrides config)
        #[arg(long)]
        height: Option<i32>,

        /// Period of the pattern: 1 for still lifes, p for oscillators
        /// and spaceships
        #[arg(short, long, default_value_t = 1)]
        period: i32,

        /// Horizontal displacement per period (spaceships)
        #[arg(long, default_value_t = 0)]
        dx: i32,

        /// Vertical displacement per period (spaceships)
        #[arg(long, default_value_t = 0)]
        dy: i32,

        /// Reflect vertically per period (glide-symmetric spaceships)
        #[arg(long)]
        flip_y: bool,

        /// Solver executable (overrides config)
        #[arg(short, long)]
        solver: Option<String>,

        /// Allow the empty field as a solution
        #[arg(long)]
        allow_empty: bool,

        /// Output directory (overrides config)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Build the encoding and report its size without solving
    Analyze {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Region width, border included (overrides config)
        #[arg(long)]
        width: Option<i32>,

        /// Region height, border included (overrides config)
        #[arg(long)]
        height: Option<i32>,

        /// Period of the pattern
        #[arg(short, long, default_value_t = 1)]
        period: i32,

        /// Horizontal displacement per period
        #[arg(long, default_value_t = 0)]
        dx: i32,

        /// Vertical displacement per period
        #[arg(long, default_value_t = 0)]
        dy: i32,

        /// Reflect vertically per period
        #[arg(long)]
        flip_y: bool,
    },

    /// Create a default configuration file
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Solve {
            config,
            width,
            height,
            period,
            dx,
            dy,
            flip_y,
            solver,
            allow_empty,
            output,
            verbose,
        } => {
            let mut settings = load_settings(&config)?;
            settings.merge_with_cli(&CliOverrides {
                width,
                height,
                solver,
                output_dir: output,
                require_activity: if allow_empty { Some(false) } else { None },
            });
            settings.validate().context("configuration validation failed")?;
            solve_command(settings, period, dx, dy, flip_y, verbose)
        }
        Commands::Analyze { config, width, height, period, dx, dy, flip_y } => {
            let mut settings = load_settings(&config)?;
            settings.merge_with_cli(&CliOverrides {
                width,
                height,
                ..Default::default()
            });
            settings.validate().context("configuration validation failed")?;
            analyze_command(settings, period, dx, dy, flip_y)
        }
        Commands::Setup { directory, force } => setup_command(directory, force),
    }
}

fn load_settings(config_path: &PathBuf) -> Result<Settings> {
    if config_path.exists() {
        Settings::from_file(config_path)
            .with_context(|| format!("failed to load config from {}", config_path.display()))
    } else {
        println!(
            "{}",
            ColorOutput::warning(&format!(
                "Config file {} not found, using defaults",
                config_path.display()
            ))
        );
        Ok(Settings::default())
    }
}

/// The time identification for a pattern of the given period and
/// displacement. With `flip_y` the pattern is its own mirror image about the
/// horizontal midline of the region after each period.
fn period_transform(height: i32, period: i32, dx: i32, dy: i32, flip_y: bool) -> AffineTransform {
    if flip_y {
        AffineTransform::new(1, 0, 0, -1, dx, height - 1 + dy, period)
    } else {
        AffineTransform::translation(dx, dy, period)
    }
}

/// Assemble the search problem: one region over `period + 1` generations,
/// every cell identified with its image one period later, border cells
/// known dead so the pattern cannot leak off the field.
fn build_problem(
    settings: &Settings,
    period: i32,
    dx: i32,
    dy: i32,
    flip_y: bool,
) -> Result<SearchProblem> {
    anyhow::ensure!(period >= 1, "period must be at least 1, got {period}");

    let width = settings.search.width;
    let height = settings.search.height;
    let mut pattern = VariablePattern::grid(width, height, period);

    let group = pattern.add_time_symmetry(period_transform(height, period, dx, dy, flip_y));
    pattern.set_cell_group_where(group, |_| true);

    let bounds = pattern.bounds();
    pattern.set_known_where(false, |c| bounds.on_spatial_edge(c.position));

    let mut problem = SearchProblem::grid(width, height, period);
    problem.add_entry(pattern, |_| true);
    problem.build().context("failed to build search problem")?;
    Ok(problem)
}

fn solve_command(
    settings: Settings,
    period: i32,
    dx: i32,
    dy: i32,
    flip_y: bool,
    verbose: bool,
) -> Result<()> {
    let kind = match (period, dx, dy) {
        (1, 0, 0) => "still life",
        (_, 0, 0) if !flip_y => "oscillator",
        _ => "spaceship",
    };
    println!(
        "{}",
        ColorOutput::info(&format!(
            "Searching for a {kind}: {}x{} region, period {period}, displacement ({dx}, {dy}){}",
            settings.search.width,
            settings.search.height,
            if flip_y { ", glide-reflected" } else { "" }
        ))
    );

    let start = Instant::now();
    let problem = build_problem(&settings, period, dx, dy, flip_y)?;

    if verbose {
        println!("{}", problem.statistics());
    }

    let outcome = run_solver(&problem, &settings.solver, settings.search.require_activity)
        .context("search failed")?;
    let elapsed = format_duration(start.elapsed().as_millis());

    match outcome {
        SearchOutcome::Found(solution) => {
            println!(
                "{}",
                ColorOutput::success(&format!("Found a {kind} in {elapsed}"))
            );
            println!("\n{solution}");
            match settings.output.format {
                OutputFormat::Json => {
                    let path = settings.output.output_directory.join("solution.json");
                    solution.save_to_file(&path)?;
                    println!("Solution saved to {}", path.display());
                }
                OutputFormat::Text => {
                    let path = settings.output.output_directory.join("solution.txt");
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, solution.to_string())?;
                    println!("Solution saved to {}", path.display());
                }
            }
        }
        SearchOutcome::Unsatisfiable => {
            println!(
                "{}",
                ColorOutput::warning(&format!(
                    "No {kind} with this symmetry fits the region (proved in {elapsed})"
                ))
            );
        }
    }
    Ok(())
}

fn analyze_command(settings: Settings, period: i32, dx: i32, dy: i32, flip_y: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Building encoding..."));
    let start = Instant::now();
    let problem = build_problem(&settings, period, dx, dy, flip_y)?;
    let clauses = problem.clauses()?;
    let liveness = problem.liveness_clauses();

    println!("{}", problem.statistics());
    println!("  Transition clauses: {}", clauses.len());
    println!("  Liveness clauses: {}", liveness.len());
    println!("  Build time: {}", format_duration(start.elapsed().as_millis()));
    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up project structure..."));

    let config_dir = directory.join("config");
    std::fs::create_dir_all(&config_dir)
        .with_context(|| format!("failed to create directory {}", config_dir.display()))?;

    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        Settings::default()
            .to_file(&config_path)
            .context("failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    println!("\n{}", ColorOutput::success("Setup complete!"));
    println!("\nNext steps:");
    println!("1. Edit {}", config_path.display());
    println!("2. Run: cargo run -- solve --period 2 --dx 1 --flip-y");
    Ok(())
}

// Keep the classic spaceship search reachable from examples and tests.
#[allow(dead_code)]
fn lightweight_spaceship_problem() -> Result<SearchProblem> {
    let mut settings = Settings::default();
    settings.search.width = 8;
    settings.search.height = 7;
    build_problem(&settings, 2, 1, 0, true)
}
