//! Display and output formatting utilities

use crate::board::{to_symbol, Board};
use crate::config::OutputFormat;
use crate::puzzle::Solution;
use anyhow::Result;
use std::path::Path;

/// Format solutions for display
pub struct SolutionFormatter;

impl SolutionFormatter {
    /// Format a single solution for console output
    pub fn format_solution(solution: &Solution, show_puzzle: bool) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "=== {}x{} puzzle, {} givens ===\n",
            solution.metadata.side, solution.metadata.side, solution.metadata.given_count
        ));
        output.push_str(&format!("Backend: {}\n", solution.backend));
        output.push_str(&format!(
            "Solve Time: {:.3}s\n",
            solution.solve_time.as_secs_f64()
        ));

        output.push('\n');

        if show_puzzle {
            output.push_str("Puzzle:\n");
            output.push_str(&Self::format_board_pretty(
                &solution.puzzle,
                solution.metadata.rank,
            ));
            output.push('\n');
        }

        output.push_str("Solution:\n");
        output.push_str(&Self::format_board_pretty(
            &solution.board,
            solution.metadata.rank,
        ));

        output
    }

    /// Format multiple solutions as a summary table
    pub fn format_solution_summary(solutions: &[Solution]) -> String {
        let mut output = String::new();

        output.push_str("Solutions Summary:\n");
        output.push_str("Board   | Givens | Time(ms) | Backend\n");
        output.push_str("--------|--------|----------|--------\n");

        for solution in solutions {
            output.push_str(&format!(
                "{:>3}x{:<3} | {:6} | {:8} | {}\n",
                solution.metadata.side,
                solution.metadata.side,
                solution.metadata.given_count,
                solution.solve_time.as_millis(),
                solution.backend
            ));
        }

        output
    }

    /// The plain render: `|`-separated symbols, one row per line
    pub fn format_board_compact(board: &Board) -> String {
        let mut output = board.to_string();
        output.push('\n');
        output
    }

    /// Render with block borders, the human-friendly view
    pub fn format_board_pretty(board: &Board, rank: usize) -> String {
        let side = board.side();
        let mut output = String::new();

        let border = {
            let mut line = String::from("+");
            for _ in 0..rank {
                line.push_str(&"-".repeat(2 * rank + 1));
                line.push('+');
            }
            line.push('\n');
            line
        };

        for row in 0..side {
            if row % rank == 0 {
                output.push_str(&border);
            }
            for col in 0..side {
                if col % rank == 0 {
                    output.push_str("| ");
                }
                output.push(to_symbol(board.get(row, col)));
                output.push(' ');
            }
            output.push_str("|\n");
        }
        output.push_str(&border);

        output
    }

    /// Save solutions to files based on output format
    pub fn save_solutions<P: AsRef<Path>>(
        solutions: &[Solution],
        output_dir: P,
        format: &OutputFormat,
    ) -> Result<()> {
        let output_dir = output_dir.as_ref();
        std::fs::create_dir_all(output_dir)?;

        match format {
            OutputFormat::Text => {
                for (i, solution) in solutions.iter().enumerate() {
                    let filepath = output_dir.join(format!("solution_{:03}.txt", i + 1));
                    std::fs::write(filepath, Self::format_board_compact(&solution.board))?;
                }
            }
            OutputFormat::Pretty => {
                for (i, solution) in solutions.iter().enumerate() {
                    let filepath = output_dir.join(format!("solution_{:03}.txt", i + 1));
                    std::fs::write(filepath, Self::format_solution(solution, true))?;
                }
            }
            OutputFormat::Json => {
                for (i, solution) in solutions.iter().enumerate() {
                    let filepath = output_dir.join(format!("solution_{:03}.json", i + 1));
                    solution.save_to_file(filepath)?;
                }

                let summary_path = output_dir.join("solutions_summary.json");
                let summaries: Vec<_> = solutions.iter().map(|s| s.summary()).collect();
                let summary_json = serde_json::to_string_pretty(&summaries)?;
                std::fs::write(summary_path, summary_json)?;
            }
        }

        Ok(())
    }
}

/// ANSI-colored console output
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    /// Check if terminal supports color
    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err()
            && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    /// Format success message
    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    /// Format error message
    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    /// Format warning message
    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    /// Format info message
    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(&self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Settings, SolverBackend};
    use crate::mip::PuzzleModel;
    use crate::puzzle::SudokuProblem;

    fn sample_solution() -> Solution {
        let mut settings = Settings::default();
        settings.puzzle.rank = 2;
        SudokuProblem::with_givens(settings, "1234")
            .unwrap()
            .solve()
            .unwrap()
    }

    #[test]
    fn test_format_board_pretty_shape() {
        let model = PuzzleModel::build(2, "1234").unwrap();
        let board = Board::from_givens(&model);
        let pretty = SolutionFormatter::format_board_pretty(&board, 2);

        // 4 cell rows + 3 borders
        assert_eq!(pretty.lines().count(), 7);
        assert!(pretty.starts_with("+-----+-----+\n| 1 2 | 3 4 |"));
    }

    #[test]
    fn test_format_solution_mentions_backend() {
        let solution = sample_solution();
        let text = SolutionFormatter::format_solution(&solution, false);
        assert!(text.contains("Backend: microlp"));
        assert!(text.contains("Solution:"));
    }

    #[test]
    fn test_summary_lists_each_solution() {
        let solution = sample_solution();
        let summary =
            SolutionFormatter::format_solution_summary(std::slice::from_ref(&solution));
        assert!(summary.contains("4x4"));
    }

    #[test]
    fn test_save_solutions_text_and_json() {
        let dir = tempfile::tempdir().unwrap();
        let solutions = vec![sample_solution()];

        SolutionFormatter::save_solutions(&solutions, dir.path(), &OutputFormat::Text).unwrap();
        assert!(dir.path().join("solution_001.txt").exists());

        SolutionFormatter::save_solutions(&solutions, dir.path(), &OutputFormat::Json).unwrap();
        assert!(dir.path().join("solution_001.json").exists());
        assert!(dir.path().join("solutions_summary.json").exists());
    }

    #[test]
    fn test_color_output() {
        let colored = ColorOutput::colored("test", Color::Red);
        assert!(colored.contains("test"));

        let success = ColorOutput::success("OK");
        assert!(success.contains("OK"));
    }

    #[test]
    fn test_backend_display_matches_config() {
        assert_eq!(SolverBackend::Microlp.to_string(), "microlp");
        assert_eq!(SolverBackend::Highs.to_string(), "highs");
    }
}
