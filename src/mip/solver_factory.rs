//! Factory for creating MIP solver instances based on configuration

#[cfg(feature = "highs")]
use super::highs_solver::HighsSolver;
use super::constraints::PuzzleModel;
use super::solver::{MicrolpSolver, MipSolution};
use crate::config::SolverBackend;
use crate::error::SolveError;

/// Unified MIP solver interface that can use different backends
pub enum UnifiedMipSolver {
    Microlp(MicrolpSolver),
    #[cfg(feature = "highs")]
    Highs(HighsSolver),
}

impl UnifiedMipSolver {
    /// Create a new solver instance based on the specified backend
    pub fn new(backend: SolverBackend) -> Result<Self, SolveError> {
        match backend {
            SolverBackend::Microlp => Ok(UnifiedMipSolver::Microlp(MicrolpSolver::new())),
            #[cfg(feature = "highs")]
            SolverBackend::Highs => Ok(UnifiedMipSolver::Highs(HighsSolver::new())),
            #[cfg(not(feature = "highs"))]
            SolverBackend::Highs => Err(SolveError::Config(
                "this build does not include the HiGHS backend (enable the `highs` feature)"
                    .to_string(),
            )),
        }
    }

    /// Solve the exact-cover program for a model
    pub fn maximize(&self, model: &PuzzleModel) -> Result<MipSolution, SolveError> {
        match self {
            UnifiedMipSolver::Microlp(solver) => solver.maximize(model),
            #[cfg(feature = "highs")]
            UnifiedMipSolver::Highs(solver) => solver.maximize(model),
        }
    }

    /// Get the backend type being used
    pub fn backend(&self) -> SolverBackend {
        match self {
            UnifiedMipSolver::Microlp(_) => SolverBackend::Microlp,
            #[cfg(feature = "highs")]
            UnifiedMipSolver::Highs(_) => SolverBackend::Highs,
        }
    }
}

impl Default for UnifiedMipSolver {
    fn default() -> Self {
        UnifiedMipSolver::Microlp(MicrolpSolver::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_microlp_solver_creation() {
        let solver = UnifiedMipSolver::new(SolverBackend::Microlp).unwrap();
        assert_eq!(solver.backend(), SolverBackend::Microlp);
    }

    #[cfg(feature = "highs")]
    #[test]
    fn test_highs_solver_creation() {
        let solver = UnifiedMipSolver::new(SolverBackend::Highs).unwrap();
        assert_eq!(solver.backend(), SolverBackend::Highs);
    }

    #[cfg(not(feature = "highs"))]
    #[test]
    fn test_highs_backend_requires_feature() {
        let result = UnifiedMipSolver::new(SolverBackend::Highs);
        assert!(matches!(result, Err(SolveError::Config(_))));
    }

    #[test]
    fn test_solve_through_factory() {
        let model = PuzzleModel::build(2, "1234").unwrap();
        let solver = UnifiedMipSolver::new(SolverBackend::Microlp).unwrap();
        let solution = solver.maximize(&model).unwrap();
        assert_eq!(solution.objective, 16);
    }

    /// Two correct backends must agree on a puzzle with a unique completion
    #[cfg(feature = "highs")]
    #[test]
    fn test_backends_agree_on_forced_board() {
        use crate::board::Board;

        // a fully specified 4x4 board leaves the backends no freedom
        let model = PuzzleModel::build(2, "1234341221434321").unwrap();

        let microlp = UnifiedMipSolver::new(SolverBackend::Microlp)
            .unwrap()
            .maximize(&model)
            .unwrap();
        let highs = UnifiedMipSolver::new(SolverBackend::Highs)
            .unwrap()
            .maximize(&model)
            .unwrap();

        let board_a = Board::decode(&model, &microlp.flags).unwrap();
        let board_b = Board::decode(&model, &highs.flags).unwrap();
        assert_eq!(board_a, board_b);
    }
}
