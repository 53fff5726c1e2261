//! CLI infrastructure for the carlo toolkit
//!
//! This module provides the command-line interface for playing against,
//! evaluating, and analyzing the Monte Carlo move selector.

pub mod commands;
pub mod output;
