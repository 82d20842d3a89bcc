//! Exact-cover MIP encoding and backend integration

pub mod constraints;
pub mod encoder;
#[cfg(feature = "highs")]
pub mod highs_solver;
pub mod moves;
pub mod solver;
pub mod solver_factory;

pub use constraints::{PuzzleModel, MAX_RANK};
pub use encoder::{EncodingStatistics, MipEncoder};
#[cfg(feature = "highs")]
pub use highs_solver::HighsSolver;
pub use moves::{GroupKind, Move, MoveGroup, MoveTable};
pub use solver::{MicrolpSolver, MipSolution};
pub use solver_factory::UnifiedMipSolver;
