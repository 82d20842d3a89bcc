//! Solution representation for solved puzzles

use crate::board::Board;
use crate::config::SolverBackend;
use crate::mip::PuzzleModel;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// A solved puzzle: the givens, the completed board, and solve metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Solution {
    /// The puzzle as given (empty cells unconstrained)
    pub puzzle: Board,
    /// The completed board
    pub board: Board,
    /// Backend that produced the assignment
    pub backend: SolverBackend,
    /// Time taken to solve
    #[serde(skip)]
    pub solve_time: Duration,
    /// Metadata about the instance
    pub metadata: SolutionMetadata,
}

/// Metadata about a solved instance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolutionMetadata {
    pub rank: usize,
    pub side: usize,
    /// Number of cells the givens constrained
    pub given_count: usize,
    /// Fraction of cells constrained by givens (0.0 to 1.0)
    pub given_density: f64,
    /// Binary variables in the encoded program
    pub variable_count: usize,
    /// Equality constraints in the encoded program
    pub constraint_count: usize,
}

/// Compact record for summary listings
#[derive(Debug, Clone, Serialize)]
pub struct SolutionSummary {
    pub side: usize,
    pub given_count: usize,
    pub backend: SolverBackend,
    pub solve_time_ms: u64,
}

impl SolutionMetadata {
    /// Derive metadata from a puzzle model
    pub fn from_model(model: &PuzzleModel) -> Self {
        Self {
            rank: model.rank(),
            side: model.side(),
            given_count: model.given_count(),
            given_density: model.given_density(),
            variable_count: model.num_moves(),
            constraint_count: model.constraint_count(),
        }
    }
}

impl Solution {
    /// Create a new solution record
    pub fn new(
        puzzle: Board,
        board: Board,
        backend: SolverBackend,
        solve_time: Duration,
        model: &PuzzleModel,
    ) -> Self {
        Self {
            puzzle,
            board,
            backend,
            solve_time,
            metadata: SolutionMetadata::from_model(model),
        }
    }

    /// The board render, the stable output contract
    pub fn board_text(&self) -> String {
        self.board.to_string()
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Save the solution record as JSON
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let json = self.to_json()?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Compact summary for listings
    pub fn summary(&self) -> SolutionSummary {
        SolutionSummary {
            side: self.metadata.side,
            given_count: self.metadata.given_count,
            backend: self.backend,
            solve_time_ms: self.solve_time.as_millis() as u64,
        }
    }
}
