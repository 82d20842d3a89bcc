//! MIP backend integration built on good_lp
//!
//! The translation is the same for every backend: one binary variable per
//! move, an equality constraint `sum(group) = 1` for each of the four
//! grouping families, an equality `flag = 1` per imposed move, and an
//! objective maximizing the count of true flags. Equalities rather than
//! `<= 1` inequalities force the backend to either complete the board or
//! report infeasibility; it can never hand back a partial best-effort fill.

use super::constraints::PuzzleModel;
use crate::error::SolveError;
use good_lp::{constraint, variable, variables, Expression, ResolutionError, Solution, Solver, SolverModel, Variable};
use std::time::{Duration, Instant};

/// A satisfying flag assignment returned by a backend
#[derive(Debug, Clone)]
pub struct MipSolution {
    /// One flag per move, indexed by move id
    pub flags: Vec<bool>,
    /// Number of true flags; equals the cell count for any feasible board
    pub objective: usize,
    pub solve_time: Duration,
}

/// Backend bound to the pure-Rust microlp solver
pub struct MicrolpSolver;

impl MicrolpSolver {
    pub fn new() -> Self {
        Self
    }

    /// Solve the exact-cover program, maximizing the count of true flags
    pub fn maximize(&self, model: &PuzzleModel) -> Result<MipSolution, SolveError> {
        maximize_with(model, good_lp::solvers::microlp::microlp)
    }
}

impl Default for MicrolpSolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Translate the model for any good_lp backend, run it, and read the flags
/// back out. Values are rounded against 0.5 since MIP backends report
/// binaries as floats.
pub(crate) fn maximize_with<S: Solver>(
    model: &PuzzleModel,
    solver: S,
) -> Result<MipSolution, SolveError>
where
    S::Model: SolverModel<Error = ResolutionError>,
{
    let start = Instant::now();

    let mut vars = variables!();
    let flags: Vec<Variable> = (0..model.num_moves())
        .map(|_| vars.add(variable().binary()))
        .collect();

    let objective: Expression = flags.iter().copied().sum();
    let mut problem = vars.maximise(objective).using(solver);

    for group in model.groups() {
        let total: Expression = group.moves.iter().map(|&id| flags[id]).sum();
        problem = problem.with(constraint!(total == 1.0));
    }

    for &id in model.imposed() {
        problem = problem.with(constraint!(flags[id] == 1.0));
    }

    let solution = match problem.solve() {
        Ok(solution) => solution,
        Err(ResolutionError::Infeasible) => return Err(SolveError::Infeasible),
        Err(other) => return Err(SolveError::Backend(other.to_string())),
    };

    let assignment: Vec<bool> = flags
        .iter()
        .map(|&flag| solution.value(flag) > 0.5)
        .collect();
    let objective = assignment.iter().filter(|&&set| set).count();

    Ok(MipSolution {
        flags: assignment,
        objective,
        solve_time: start.elapsed(),
    })
}

impl std::fmt::Display for MipSolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "MIP Solution:")?;
        writeln!(f, "  True flags: {}", self.objective)?;
        writeln!(f, "  Solve time: {:.3}s", self.solve_time.as_secs_f64())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trivial_rank_1_board() {
        let model = PuzzleModel::build(1, "").unwrap();
        let solution = MicrolpSolver::new().maximize(&model).unwrap();
        assert_eq!(solution.flags, vec![true]);
        assert_eq!(solution.objective, 1);
    }

    #[test]
    fn test_empty_rank_2_board_is_solvable() {
        let model = PuzzleModel::build(2, "").unwrap();
        let solution = MicrolpSolver::new().maximize(&model).unwrap();

        // a feasible board sets exactly one flag per cell
        assert_eq!(solution.objective, model.num_cells());

        // every constraint group is covered exactly once
        for group in model.groups() {
            let covered = group.moves.iter().filter(|&&id| solution.flags[id]).count();
            assert_eq!(covered, 1, "{:?} group {}", group.kind, group.index);
        }
    }

    #[test]
    fn test_imposed_moves_hold() {
        let model = PuzzleModel::build(2, "12344321").unwrap();
        let solution = MicrolpSolver::new().maximize(&model).unwrap();
        for &id in model.imposed() {
            assert!(solution.flags[id]);
        }
    }

    #[test]
    fn test_conflicting_givens_are_infeasible() {
        // the same value twice in one row
        let model = PuzzleModel::build(2, "11").unwrap();
        let result = MicrolpSolver::new().maximize(&model);
        assert!(matches!(result, Err(SolveError::Infeasible)));
    }

    #[test]
    fn test_conflicting_block_givens_are_infeasible() {
        // cells 0 and 4 share the top-left block on a 4x4 board
        let model = PuzzleModel::build(2, "1...1...........").unwrap();
        let result = MicrolpSolver::new().maximize(&model);
        assert!(matches!(result, Err(SolveError::Infeasible)));
    }
}
