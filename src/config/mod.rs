//! Configuration management for the Sudoku MIP solver

pub mod settings;

pub use settings::{
    CliOverrides, OutputConfig, OutputFormat, PuzzleConfig, Settings, SolverBackend, SolverConfig,
};
