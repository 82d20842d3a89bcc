//! Error types for the exact-cover solving pipeline

use thiserror::Error;

/// Errors reported by model construction and the MIP backends
#[derive(Debug, Error)]
pub enum SolveError {
    /// Invalid configuration (bad rank, unavailable backend, ...), caught
    /// before any model is constructed
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The equality-constrained system has no solution. The givens contradict
    /// each other or the exact-cover structure; no partial board is returned.
    #[error("puzzle is infeasible: the givens and exact-cover constraints cannot all hold")]
    Infeasible,

    /// The external solver backend failed (crashed, rejected the model,
    /// returned an unusable state). Never degraded into a wrong board.
    #[error("solver backend failure: {0}")]
    Backend(String),
}

impl SolveError {
    /// True when the error is an infeasibility report rather than a failure
    pub fn is_infeasible(&self) -> bool {
        matches!(self, SolveError::Infeasible)
    }
}
