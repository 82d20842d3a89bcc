//! Model construction: rank validation, givens parsing, imposed moves

use super::moves::{MoveGroup, MoveTable};
use crate::board::symbols::to_digit;
use crate::error::SolveError;

/// Largest supported rank: rank 6 yields a 36x36 board, which exhausts the
/// 36-symbol alphabet
pub const MAX_RANK: usize = 6;

/// A complete puzzle instance: the move arena, the parsed givens, and the
/// imposed moves those givens force
#[derive(Debug, Clone)]
pub struct PuzzleModel {
    moves: MoveTable,
    givens: Vec<Option<usize>>,
    imposed: Vec<usize>,
}

impl PuzzleModel {
    /// Build the model for a rank and a cell-indexed givens string.
    ///
    /// The string is read one character per cell, row-major. Characters
    /// outside the symbol alphabet mark unconstrained cells, as do symbols
    /// whose value does not fit the board (e.g. 'G' on a 9x9 board). Both are
    /// deliberate leniency, not errors. A string shorter than the board
    /// leaves the remaining cells unconstrained; extra characters are
    /// ignored.
    pub fn build(rank: usize, givens: &str) -> Result<Self, SolveError> {
        if rank == 0 {
            return Err(SolveError::Config("rank must be positive".to_string()));
        }
        if rank > MAX_RANK {
            return Err(SolveError::Config(format!(
                "rank {rank} is too large: the symbol alphabet supports at most rank {MAX_RANK}"
            )));
        }

        let moves = MoveTable::new(rank);
        let givens = parse_givens(moves.side(), givens);
        let imposed = givens
            .iter()
            .enumerate()
            .filter_map(|(cell, value)| value.map(|v| moves.move_id(cell, v)))
            .collect();

        Ok(Self {
            moves,
            givens,
            imposed,
        })
    }

    pub fn rank(&self) -> usize {
        self.moves.rank()
    }

    /// Board dimension N = rank * rank
    pub fn side(&self) -> usize {
        self.moves.side()
    }

    pub fn num_cells(&self) -> usize {
        self.moves.num_cells()
    }

    pub fn num_moves(&self) -> usize {
        self.moves.num_moves()
    }

    /// The move arena and grouping tables
    pub fn moves(&self) -> &MoveTable {
        &self.moves
    }

    /// Every exact-cover constraint group
    pub fn groups(&self) -> impl Iterator<Item = MoveGroup<'_>> {
        self.moves.groups()
    }

    /// Move ids forced true by the givens
    pub fn imposed(&self) -> &[usize] {
        &self.imposed
    }

    /// Parsed per-cell given values, row-major
    pub fn given_values(&self) -> &[Option<usize>] {
        &self.givens
    }

    /// Number of cells the givens effectively constrain
    pub fn given_count(&self) -> usize {
        self.imposed.len()
    }

    /// Fraction of cells constrained by givens
    pub fn given_density(&self) -> f64 {
        self.imposed.len() as f64 / self.num_cells() as f64
    }

    /// Total equality constraints: the four grouping families plus one per
    /// imposed move
    pub fn constraint_count(&self) -> usize {
        self.moves.group_count() + self.imposed.len()
    }
}

/// Map the givens string onto per-cell values, leniently
fn parse_givens(side: usize, givens: &str) -> Vec<Option<usize>> {
    let num_cells = side * side;
    let mut values = vec![None; num_cells];

    for (cell, symbol) in givens.chars().take(num_cells).enumerate() {
        values[cell] = to_digit(symbol).filter(|&value| value < side);
    }

    values
}
