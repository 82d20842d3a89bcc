//! Sudoku Exact-Cover MIP Solver
//!
//! This library formulates Sudoku (generalized to any rank up to 6) as a 0/1
//! exact-cover integer program and dispatches it to an external MIP backend.
//! No search is implemented here: the model builder produces the move
//! variables and equality constraints, a backend solves them, and the board
//! codec turns the flag assignment back into a grid.

pub mod board;
pub mod config;
pub mod error;
pub mod mip;
pub mod puzzle;
pub mod utils;

pub use config::Settings;
pub use error::SolveError;
pub use puzzle::{Solution, SudokuProblem};

use anyhow::Result;
use rayon::prelude::*;

/// Main entry point: solve the puzzle named by the settings
pub fn solve_puzzle(settings: Settings) -> Result<Solution> {
    let problem = SudokuProblem::new(settings)?;
    problem.solve()
}

/// Solve several independent puzzle instances concurrently.
///
/// Instances share nothing, so they run in parallel; a failure (including an
/// infeasible puzzle) is reported in that instance's slot without affecting
/// the others.
pub fn solve_batch(settings: &Settings, givens: &[String]) -> Vec<Result<Solution>> {
    givens
        .par_iter()
        .map(|g| SudokuProblem::with_givens(settings.clone(), g)?.solve())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solve_batch_isolates_failures() {
        let mut settings = Settings::default();
        settings.puzzle.rank = 2;

        let puzzles = vec![
            "1234".to_string(),
            // conflicting givens: infeasible
            "11".to_string(),
            String::new(),
        ];

        let results = solve_batch(&settings, &puzzles);
        assert_eq!(results.len(), 3);
        assert!(results[0].is_ok());
        assert!(results[2].is_ok());

        let err = results[1].as_ref().unwrap_err();
        let solve_err = err.downcast_ref::<SolveError>().expect("typed error");
        assert!(solve_err.is_infeasible());
    }
}
