//! Independent validation of decoded boards
//!
//! The backend is not trusted: every accepted assignment is re-checked
//! against the exact-cover structure (complete cells, no repeated symbol in
//! any row, column or block) and against the original givens.

use crate::board::{to_symbol, Board};
use crate::mip::PuzzleModel;

/// Validates completed boards against a puzzle model
pub struct SolutionValidator;

/// Result of board validation
#[derive(Debug, Clone)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub violations: Vec<ConstraintViolation>,
    pub error_message: Option<String>,
    pub metrics: ValidationMetrics,
}

/// One violated puzzle constraint
#[derive(Debug, Clone)]
pub struct ConstraintViolation {
    pub kind: ViolationKind,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    DimensionMismatch,
    IncompleteCell,
    DuplicateValue,
    ChangedGiven,
}

/// Bookkeeping about the validation pass
#[derive(Debug, Clone, Default)]
pub struct ValidationMetrics {
    pub cells_checked: usize,
    pub groups_checked: usize,
}

impl SolutionValidator {
    pub fn new() -> Self {
        Self
    }

    /// Check a board against the model it was decoded from
    pub fn validate(&self, model: &PuzzleModel, board: &Board) -> ValidationResult {
        let side = model.side();
        let mut violations = Vec::new();

        if board.side() != side {
            violations.push(ConstraintViolation {
                kind: ViolationKind::DimensionMismatch,
                description: format!(
                    "board is {}x{}, expected {}x{}",
                    board.side(),
                    board.side(),
                    side,
                    side
                ),
            });
            return Self::finish(violations, ValidationMetrics::default());
        }

        let mut metrics = ValidationMetrics {
            cells_checked: model.num_cells(),
            groups_checked: 0,
        };

        for row in 0..side {
            for col in 0..side {
                if board.get(row, col).is_none() {
                    violations.push(ConstraintViolation {
                        kind: ViolationKind::IncompleteCell,
                        description: format!("cell ({row}, {col}) is empty"),
                    });
                }
            }
        }

        Self::check_units(model, board, &mut violations, &mut metrics);

        for (cell, &given) in model.given_values().iter().enumerate() {
            let Some(value) = given else { continue };
            let (row, col) = (cell / side, cell % side);
            let actual = board.get(row, col);
            if actual != Some(value) {
                violations.push(ConstraintViolation {
                    kind: ViolationKind::ChangedGiven,
                    description: format!(
                        "cell ({row}, {col}) was given '{}' but holds '{}'",
                        to_symbol(Some(value)),
                        to_symbol(actual)
                    ),
                });
            }
        }

        Self::finish(violations, metrics)
    }

    /// Check each row, column and block for repeated values
    fn check_units(
        model: &PuzzleModel,
        board: &Board,
        violations: &mut Vec<ConstraintViolation>,
        metrics: &mut ValidationMetrics,
    ) {
        let side = model.side();
        let rank = model.rank();

        let units: [(&str, Box<dyn Fn(usize, usize) -> (usize, usize)>); 3] = [
            ("row", Box::new(move |unit, i| (unit, i))),
            ("column", Box::new(move |unit, i| (i, unit))),
            (
                "block",
                Box::new(move |unit, i| {
                    let (block_row, block_col) = (unit / rank, unit % rank);
                    (block_row * rank + i / rank, block_col * rank + i % rank)
                }),
            ),
        ];

        for (name, coords) in &units {
            for unit in 0..side {
                metrics.groups_checked += 1;
                let mut seen = vec![0usize; side];
                for i in 0..side {
                    let (row, col) = coords(unit, i);
                    if let Some(value) = board.get(row, col) {
                        seen[value] += 1;
                    }
                }
                for (value, &count) in seen.iter().enumerate() {
                    if count > 1 {
                        violations.push(ConstraintViolation {
                            kind: ViolationKind::DuplicateValue,
                            description: format!(
                                "{name} {unit} contains '{}' {count} times",
                                to_symbol(Some(value))
                            ),
                        });
                    }
                }
            }
        }
    }

    fn finish(violations: Vec<ConstraintViolation>, metrics: ValidationMetrics) -> ValidationResult {
        let error_message = violations.first().map(|first| {
            format!(
                "{} constraint violation(s), first: {}",
                violations.len(),
                first.description
            )
        });

        ValidationResult {
            is_valid: violations.is_empty(),
            violations,
            error_message,
            metrics,
        }
    }
}

impl Default for SolutionValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_valid {
            writeln!(f, "Board is valid")?;
        } else {
            writeln!(f, "Board is invalid:")?;
            for violation in &self.violations {
                writeln!(f, "  - {}", violation.description)?;
            }
        }
        write!(
            f,
            "Checked {} cells, {} units",
            self.metrics.cells_checked, self.metrics.groups_checked
        )
    }
}
