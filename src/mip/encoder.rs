//! Encoding orchestration: model in, flag assignment out

use super::constraints::PuzzleModel;
use super::solver::MipSolution;
use super::solver_factory::UnifiedMipSolver;
use crate::config::SolverBackend;
use crate::error::SolveError;

/// Dispatches a puzzle model to the configured MIP backend
pub struct MipEncoder {
    backend: SolverBackend,
}

impl MipEncoder {
    pub fn new(backend: SolverBackend) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> SolverBackend {
        self.backend
    }

    /// Solve the model with the configured backend
    pub fn solve(&self, model: &PuzzleModel) -> Result<MipSolution, SolveError> {
        let solver = UnifiedMipSolver::new(self.backend)?;
        solver.maximize(model)
    }

    /// Get encoding statistics for a model
    pub fn statistics(&self, model: &PuzzleModel) -> EncodingStatistics {
        EncodingStatistics {
            rank: model.rank(),
            side: model.side(),
            variables: model.num_moves(),
            cover_constraints: model.moves().group_count(),
            imposed_constraints: model.imposed().len(),
            backend: self.backend,
        }
    }
}

/// Statistics about the encoded integer program
#[derive(Debug, Clone)]
pub struct EncodingStatistics {
    pub rank: usize,
    pub side: usize,
    pub variables: usize,
    pub cover_constraints: usize,
    pub imposed_constraints: usize,
    pub backend: SolverBackend,
}

impl std::fmt::Display for EncodingStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Encoding Statistics:")?;
        writeln!(f, "  Board: {}x{} (rank {})", self.side, self.side, self.rank)?;
        writeln!(f, "  Binary variables: {}", self.variables)?;
        writeln!(f, "  Exact-cover constraints: {}", self.cover_constraints)?;
        writeln!(f, "  Imposed-move constraints: {}", self.imposed_constraints)?;
        writeln!(f, "  Backend: {}", self.backend)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statistics_for_classic_board() {
        let model = PuzzleModel::build(3, "12").unwrap();
        let encoder = MipEncoder::new(SolverBackend::Microlp);

        let stats = encoder.statistics(&model);
        assert_eq!(stats.side, 9);
        assert_eq!(stats.variables, 729);
        assert_eq!(stats.cover_constraints, 324);
        assert_eq!(stats.imposed_constraints, 2);
    }

    #[test]
    fn test_solve_through_encoder() {
        let model = PuzzleModel::build(2, "").unwrap();
        let encoder = MipEncoder::new(SolverBackend::Microlp);
        let solution = encoder.solve(&model).unwrap();
        assert_eq!(solution.objective, 16);
    }
}
