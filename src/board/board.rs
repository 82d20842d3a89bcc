//! Board representation and the flag-assignment decoder

use super::symbols::{to_digit, to_symbol, EMPTY_SYMBOL};
use crate::mip::PuzzleModel;
use anyhow::Result;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An N x N grid of cell values; `None` marks an empty cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    side: usize,
    cells: Vec<Option<usize>>,
}

impl Board {
    /// Create an empty board
    pub fn empty(side: usize) -> Self {
        Self {
            side,
            cells: vec![None; side * side],
        }
    }

    /// Build a board showing only a model's givens
    pub fn from_givens(model: &PuzzleModel) -> Self {
        Self {
            side: model.side(),
            cells: model.given_values().to_vec(),
        }
    }

    /// Decode a flag assignment back into a board.
    ///
    /// For each cell the unique true move determines the value. A cell with no
    /// true move stays empty. If constraint violations ever leave a cell with
    /// several true moves, the lowest move id (hence the lowest value) wins;
    /// the tie-break is deterministic so renders are reproducible.
    pub fn decode(model: &PuzzleModel, flags: &[bool]) -> Result<Self> {
        if flags.len() != model.num_moves() {
            anyhow::bail!(
                "Flag assignment has {} entries, expected {}",
                flags.len(),
                model.num_moves()
            );
        }

        let side = model.side();
        let cells = (0..model.num_cells())
            .map(|cell| (0..side).find(|&value| flags[cell * side + value]))
            .collect();

        Ok(Self { side, cells })
    }

    /// Parse a board from its rendered form (rows of `|`-separated symbols)
    pub fn from_text(text: &str) -> Result<Self> {
        let lines: Vec<&str> = text
            .lines()
            .map(|line| line.trim())
            .filter(|line| !line.is_empty())
            .collect();

        if lines.is_empty() {
            anyhow::bail!("Board text is empty");
        }

        let side = lines.len();
        let mut cells = Vec::with_capacity(side * side);

        for (row, line) in lines.iter().enumerate() {
            let symbols: Vec<&str> = line.split('|').map(|s| s.trim()).collect();
            if symbols.len() != side {
                anyhow::bail!(
                    "Row {} has {} cells, expected {} (board must be square)",
                    row,
                    symbols.len(),
                    side
                );
            }

            for (col, token) in symbols.iter().enumerate() {
                let symbol = match token.chars().exactly_one() {
                    Ok(c) => c,
                    Err(_) => anyhow::bail!(
                        "Cell ({}, {}) holds '{}', expected a single symbol",
                        row,
                        col,
                        token
                    ),
                };

                if symbol == EMPTY_SYMBOL {
                    cells.push(None);
                    continue;
                }

                match to_digit(symbol) {
                    Some(value) if value < side => cells.push(Some(value)),
                    _ => anyhow::bail!(
                        "Cell ({}, {}) holds '{}', not a symbol of a {}x{} board",
                        row,
                        col,
                        symbol,
                        side,
                        side
                    ),
                }
            }
        }

        Ok(Self { side, cells })
    }

    /// Board dimension (N)
    pub fn side(&self) -> usize {
        self.side
    }

    /// Cell value at coordinates, `None` when empty or out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<usize> {
        if row < self.side && col < self.side {
            self.cells[row * self.side + col]
        } else {
            None
        }
    }

    /// Flat row-major cell values
    pub fn cells(&self) -> &[Option<usize>] {
        &self.cells
    }

    /// Iterate the board row by row
    pub fn rows(&self) -> impl Iterator<Item = &[Option<usize>]> {
        self.cells.chunks(self.side)
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// True when every cell holds a value
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }
}

impl fmt::Display for Board {
    /// Renders rows joined by newlines, symbols within a row joined by `|`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self
            .rows()
            .map(|row| row.iter().map(|&cell| to_symbol(cell)).join("|"))
            .join("\n");
        write!(f, "{text}")
    }
}
