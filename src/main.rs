//! Main CLI application for the Sudoku MIP solver

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use sudoku_exact_cover::{
    board::{create_example_puzzles, load_givens_from_file, Board},
    config::{CliOverrides, Settings, SolverBackend},
    error::SolveError,
    mip::PuzzleModel,
    puzzle::{SolutionValidator, SudokuProblem},
    solve_batch,
    utils::{ColorOutput, SolutionFormatter},
};

#[derive(Parser)]
#[command(name = "sudoku_exact_cover")]
#[command(about = "Sudoku exact-cover MIP solver")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve one or more puzzles
    Solve {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Puzzle file(s) (overrides config; several files solve in parallel)
        #[arg(short, long)]
        puzzle: Vec<PathBuf>,

        /// Puzzle rank (overrides config)
        #[arg(short, long)]
        rank: Option<usize>,

        /// Solver backend (overrides config)
        #[arg(short, long)]
        backend: Option<SolverBackend>,

        /// Output directory (overrides config)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Create example configuration and input files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },

    /// Check a candidate board against a puzzle
    Validate {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Puzzle file with the givens
        #[arg(short, long)]
        puzzle: PathBuf,

        /// Candidate board file (rows of '|'-separated symbols)
        #[arg(short, long)]
        board: PathBuf,
    },

    /// Show model statistics for a puzzle without solving it
    Analyze {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Puzzle file
        #[arg(short, long)]
        puzzle: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Solve {
            config,
            puzzle,
            rank,
            backend,
            output,
            verbose,
        } => solve_command(config, puzzle, rank, backend, output, verbose),
        Commands::Setup { directory, force } => setup_command(directory, force),
        Commands::Validate {
            config,
            puzzle,
            board,
        } => validate_command(config, puzzle, board),
        Commands::Analyze { config, puzzle } => analyze_command(config, puzzle),
    }
}

fn load_settings(config_path: &PathBuf) -> Result<Settings> {
    if config_path.exists() {
        Settings::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))
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

fn solve_command(
    config_path: PathBuf,
    puzzle_files: Vec<PathBuf>,
    rank: Option<usize>,
    backend: Option<SolverBackend>,
    output_dir: Option<PathBuf>,
    verbose: bool,
) -> Result<()> {
    println!("{}", ColorOutput::info("🧩 Sudoku Exact-Cover MIP Solver"));

    let mut settings = load_settings(&config_path)?;

    let cli_overrides = CliOverrides {
        rank,
        givens_file: puzzle_files.first().cloned(),
        backend,
        output_dir: output_dir.clone(),
    };
    settings.merge_with_cli(&cli_overrides);

    settings.validate().context("Configuration validation failed")?;

    if verbose {
        println!("Configuration:");
        println!("  Rank: {}", settings.puzzle.rank);
        println!("  Backend: {}", settings.solver.backend);
        println!("  Puzzle file: {}", settings.puzzle.givens_file.display());
        println!("  Output dir: {}", settings.output.output_directory.display());
        println!();
    }

    if puzzle_files.len() > 1 {
        return solve_many(&settings, &puzzle_files, verbose);
    }

    let problem = SudokuProblem::new(settings.clone()).context("Failed to create puzzle")?;

    if verbose {
        println!("{}", problem.encoding_statistics());
    }

    println!("{}", ColorOutput::info("🧮 Dispatching to MIP backend..."));

    let solution = match problem.solve() {
        Ok(solution) => solution,
        Err(e) if is_infeasible(&e) => {
            println!(
                "{}",
                ColorOutput::warning("❌ Puzzle is infeasible: the givens contradict each other")
            );
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    println!(
        "{}",
        ColorOutput::success(&format!(
            "✅ Solved in {:.3}s",
            solution.solve_time.as_secs_f64()
        ))
    );
    println!("\n{}", SolutionFormatter::format_solution(&solution, verbose));

    if settings.output.save_results {
        println!("{}", ColorOutput::info("💾 Saving solution..."));
        SolutionFormatter::save_solutions(
            std::slice::from_ref(&solution),
            &settings.output.output_directory,
            &settings.output.format,
        )
        .context("Failed to save solution")?;
        println!(
            "{}",
            ColorOutput::success(&format!(
                "Solution saved to {}",
                settings.output.output_directory.display()
            ))
        );
    }

    Ok(())
}

fn solve_many(settings: &Settings, puzzle_files: &[PathBuf], verbose: bool) -> Result<()> {
    println!(
        "{}",
        ColorOutput::info(&format!(
            "🧮 Solving {} puzzles in parallel...",
            puzzle_files.len()
        ))
    );

    let givens: Vec<String> = puzzle_files
        .iter()
        .map(load_givens_from_file)
        .collect::<Result<_>>()?;

    let results = solve_batch(settings, &givens);

    let mut solutions = Vec::new();
    for (path, result) in puzzle_files.iter().zip(results) {
        match result {
            Ok(solution) => {
                println!(
                    "{}",
                    ColorOutput::success(&format!(
                        "✅ {}: solved in {:.3}s",
                        path.display(),
                        solution.solve_time.as_secs_f64()
                    ))
                );
                if verbose {
                    println!("{}", SolutionFormatter::format_board_compact(&solution.board));
                }
                solutions.push(solution);
            }
            Err(e) if is_infeasible(&e) => {
                println!(
                    "{}",
                    ColorOutput::warning(&format!("❌ {}: infeasible", path.display()))
                );
            }
            Err(e) => {
                println!(
                    "{}",
                    ColorOutput::error(&format!("❌ {}: {e:#}", path.display()))
                );
            }
        }
    }

    if !solutions.is_empty() {
        println!("\n{}", SolutionFormatter::format_solution_summary(&solutions));

        if settings.output.save_results {
            SolutionFormatter::save_solutions(
                &solutions,
                &settings.output.output_directory,
                &settings.output.format,
            )
            .context("Failed to save solutions")?;
        }
    }

    Ok(())
}

fn is_infeasible(e: &anyhow::Error) -> bool {
    matches!(e.downcast_ref::<SolveError>(), Some(err) if err.is_infeasible())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("🛠️  Setting up project structure..."));

    let config_dir = directory.join("config");
    let input_dir = directory.join("input/puzzles");
    let output_dir = directory.join("output/solutions");

    for dir in [&config_dir, &input_dir, &output_dir] {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        let default_settings = Settings::default();
        default_settings
            .to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    create_example_puzzles(&input_dir).context("Failed to create example puzzles")?;
    println!("Created example puzzles in: {}", input_dir.display());

    // configuration variants for the bundled puzzles
    let examples_dir = config_dir.join("examples");
    std::fs::create_dir_all(&examples_dir)?;

    let mut escargot_config = Settings::default();
    escargot_config.puzzle.givens_file = PathBuf::from("input/puzzles/escargot.txt");
    escargot_config.to_file(&examples_dir.join("escargot.yaml"))?;

    let mut hexadoku_config = Settings::default();
    hexadoku_config.puzzle.rank = 4;
    hexadoku_config.puzzle.givens_file = PathBuf::from("input/puzzles/hexadoku_empty.txt");
    hexadoku_config.to_file(&examples_dir.join("hexadoku.yaml"))?;

    println!("Created example configurations in: {}", examples_dir.display());

    println!("\n{}", ColorOutput::success("✅ Setup complete!"));
    println!("\nNext steps:");
    println!("1. Edit configuration files in {}", config_dir.display());
    println!("2. Add your puzzles to {}", input_dir.display());
    println!("3. Run: cargo run -- solve --config config/default.yaml");

    Ok(())
}

fn validate_command(config_path: PathBuf, puzzle_path: PathBuf, board_path: PathBuf) -> Result<()> {
    println!("{}", ColorOutput::info("🔍 Validating board..."));

    let settings = load_settings(&config_path)?;

    let givens = load_givens_from_file(&puzzle_path)
        .with_context(|| format!("Failed to load puzzle from {}", puzzle_path.display()))?;
    let model = PuzzleModel::build(settings.puzzle.rank, &givens)?;

    let board_text = std::fs::read_to_string(&board_path)
        .with_context(|| format!("Failed to read board from {}", board_path.display()))?;
    let board = Board::from_text(&board_text)
        .with_context(|| format!("Failed to parse board from {}", board_path.display()))?;

    let result = SolutionValidator::new().validate(&model, &board);
    println!("{result}");

    if result.is_valid {
        println!("{}", ColorOutput::success("✅ Board is a valid completion!"));
    } else {
        println!("{}", ColorOutput::error("❌ Board is not a valid completion"));
    }

    Ok(())
}

fn analyze_command(config_path: PathBuf, puzzle_path: PathBuf) -> Result<()> {
    println!("{}", ColorOutput::info("🔬 Analyzing puzzle..."));

    let mut settings = load_settings(&config_path)?;
    settings.puzzle.givens_file = puzzle_path;

    let problem = SudokuProblem::new(settings).context("Failed to create puzzle")?;
    let model = problem.model();

    println!(
        "Puzzle ({}x{}):",
        model.side(),
        model.side()
    );
    println!(
        "{}",
        SolutionFormatter::format_board_pretty(&Board::from_givens(model), model.rank())
    );

    println!("Givens: {}", model.given_count());
    println!("Density: {:.1}%", model.given_density() * 100.0);
    println!();
    println!("{}", problem.encoding_statistics());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from([
            "sudoku_exact_cover",
            "solve",
            "--config",
            "test.yaml",
            "--rank",
            "4",
            "--backend",
            "microlp",
        ]);

        assert!(cli.is_ok());
    }

    #[test]
    fn test_cli_rejects_unknown_backend() {
        let cli = Cli::try_parse_from([
            "sudoku_exact_cover",
            "solve",
            "--backend",
            "gurobi",
        ]);

        assert!(cli.is_err());
    }

    #[test]
    fn test_setup_command() {
        let temp_dir = tempdir().unwrap();
        let result = setup_command(temp_dir.path().to_path_buf(), false);

        assert!(result.is_ok());
        assert!(temp_dir.path().join("config/default.yaml").exists());
        assert!(temp_dir.path().join("input/puzzles/escargot.txt").exists());
        assert!(temp_dir.path().join("config/examples/hexadoku.yaml").exists());
    }

    #[test]
    fn test_validate_command_flow() {
        let temp_dir = tempdir().unwrap();
        let puzzle_path = temp_dir.path().join("puzzle.txt");
        let board_path = temp_dir.path().join("board.txt");
        std::fs::write(&puzzle_path, "12..\n34..\n....\n....\n").unwrap();
        std::fs::write(&board_path, "1|2|3|4\n3|4|1|2\n2|1|4|3\n4|3|2|1\n").unwrap();

        // rank-2 settings for the 4x4 fixture
        let config_path = temp_dir.path().join("config.yaml");
        let mut settings = Settings::default();
        settings.puzzle.rank = 2;
        settings.to_file(&config_path).unwrap();

        let result = validate_command(config_path, puzzle_path, board_path);
        assert!(result.is_ok());
    }
}
