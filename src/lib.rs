//! Monte Carlo move selection for Tic-Tac-Toe
//!
//! This crate provides:
//! - Complete Tic-Tac-Toe implementation with flexible board dimension
//! - Monte Carlo move selector driven by random playouts
//! - Baseline agents and an evaluation pipeline for comparing policies
//! - Statistical analysis of score grids and tie-break behavior

pub mod agents;
pub mod analysis;
pub mod cli;
pub mod error;
pub mod export;
pub mod montecarlo;
pub mod pipeline;
pub mod ports;
pub mod tictactoe;

pub use error::{Error, Result};
pub use montecarlo::{MonteCarloConfig, ScoreGrid, ScoreWeights, choose_move};
pub use tictactoe::{Board, Cell, Game, GameOutcome, Player};
