//! Puzzle problem definition: build, solve, validate

use super::{Solution, SolutionValidator};
use crate::board::{load_givens_from_file, Board};
use crate::config::Settings;
use crate::error::SolveError;
use crate::mip::{EncodingStatistics, MipEncoder, PuzzleModel};
use anyhow::{Context, Result};
use std::time::Instant;

/// A single puzzle instance wired to a solver backend.
///
/// Each instance is immutable once built; solving is a pure pipeline from the
/// model to a validated board, so independent instances can run concurrently.
pub struct SudokuProblem {
    settings: Settings,
    givens: String,
    model: PuzzleModel,
    encoder: MipEncoder,
    validator: SolutionValidator,
}

impl SudokuProblem {
    /// Create a problem from settings, loading the givens file
    pub fn new(settings: Settings) -> Result<Self> {
        let givens = load_givens_from_file(&settings.puzzle.givens_file)
            .context("Failed to load puzzle file")?;

        Self::with_givens(settings, &givens)
    }

    /// Create a problem with an explicit givens string (useful for testing)
    pub fn with_givens(settings: Settings, givens: &str) -> Result<Self> {
        let model = PuzzleModel::build(settings.puzzle.rank, givens)?;
        let encoder = MipEncoder::new(settings.solver.backend);

        Ok(Self {
            settings,
            givens: givens.to_string(),
            model,
            encoder,
            validator: SolutionValidator::new(),
        })
    }

    /// Solve the puzzle and return the validated solution.
    ///
    /// Infeasible puzzles surface as `SolveError::Infeasible` (reachable via
    /// `Error::downcast_ref`), never as a partially filled board.
    pub fn solve(&self) -> Result<Solution> {
        let start = Instant::now();

        let mip = self.encoder.solve(&self.model)?;
        let board = Board::decode(&self.model, &mip.flags)?;

        // never trust the backend: re-check the board independently
        let check = self.validator.validate(&self.model, &board);
        if !check.is_valid {
            return Err(SolveError::Backend(format!(
                "backend returned an invalid assignment: {}",
                check.error_message.unwrap_or_default()
            ))
            .into());
        }

        Ok(Solution::new(
            Board::from_givens(&self.model),
            board,
            self.settings.solver.backend,
            start.elapsed(),
            &self.model,
        ))
    }

    /// The puzzle model
    pub fn model(&self) -> &PuzzleModel {
        &self.model
    }

    /// The flattened givens string
    pub fn givens(&self) -> &str {
        &self.givens
    }

    /// The problem settings
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Statistics about the encoded integer program
    pub fn encoding_statistics(&self) -> EncodingStatistics {
        self.encoder.statistics(&self.model)
    }
}
