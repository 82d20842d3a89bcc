//! HiGHS backend, available when the `highs` feature is enabled

use super::constraints::PuzzleModel;
use super::solver::{maximize_with, MipSolution};
use crate::error::SolveError;

/// Backend bound to the HiGHS solver
pub struct HighsSolver;

impl HighsSolver {
    pub fn new() -> Self {
        Self
    }

    /// Solve the exact-cover program, maximizing the count of true flags
    pub fn maximize(&self, model: &PuzzleModel) -> Result<MipSolution, SolveError> {
        maximize_with(model, good_lp::solvers::highs::highs)
    }
}

impl Default for HighsSolver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_rank_2_board_is_solvable() {
        let model = PuzzleModel::build(2, "").unwrap();
        let solution = HighsSolver::new().maximize(&model).unwrap();
        assert_eq!(solution.objective, model.num_cells());
    }

    #[test]
    fn test_conflicting_givens_are_infeasible() {
        let model = PuzzleModel::build(2, "11").unwrap();
        let result = HighsSolver::new().maximize(&model);
        assert!(matches!(result, Err(SolveError::Infeasible)));
    }
}
