//! Puzzle problem definition and solution handling

pub mod problem;
pub mod solution;
pub mod validator;

pub use problem::SudokuProblem;
pub use solution::{Solution, SolutionMetadata, SolutionSummary};
pub use validator::{SolutionValidator, ValidationResult, ViolationKind};
