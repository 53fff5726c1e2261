//! Tie-break fairness testing
//!
//! When several empty squares tie for the maximal score, the selector
//! breaks the tie uniformly at random. This module measures that claim:
//! it invokes the selector repeatedly on the same position, counts which
//! square each invocation picked, and runs a chi-square uniformity test
//! over the observed selections.

use rand::Rng;
use serde::{Deserialize, Serialize};
use statrs::distribution::{ChiSquared, ContinuousCDF};

use crate::{
    Result,
    montecarlo::{MonteCarloConfig, choose_move},
    tictactoe::{Board, Player},
};

/// Selection frequencies and the uniformity test over them
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FairnessReport {
    /// Number of selector invocations
    pub invocations: usize,
    /// Selection count per empty square, row-major order
    pub counts: Vec<((usize, usize), usize)>,
    /// Squares selected at least once
    pub selected_squares: usize,
    /// Chi-square statistic against uniform selection
    pub chi_square: f64,
    /// Degrees of freedom of the test
    pub degrees_of_freedom: usize,
    /// Upper-tail p-value; small values reject uniformity
    pub p_value: f64,
}

/// Invoke the selector `invocations` times on the same position and test
/// the selection frequencies for uniformity.
///
/// The test runs over the squares that were selected at least once: on a
/// symmetric position those are the tied squares, which is the case the
/// test is meant for. A position with a single dominant square yields one
/// category and a trivially uniform report (p-value 1.0).
///
/// # Errors
///
/// Returns error if the configuration is invalid, the board has no empty
/// squares, or `invocations` is zero.
pub fn selection_frequencies<R: Rng + ?Sized>(
    board: &Board,
    player: Player,
    config: &MonteCarloConfig,
    invocations: usize,
    rng: &mut R,
) -> Result<FairnessReport> {
    if invocations == 0 {
        return Err(crate::Error::InvalidConfiguration {
            message: "fairness test needs at least one selector invocation".to_string(),
        });
    }

    let empty = board.empty_squares();
    let mut counts = vec![0usize; empty.len()];
    for _ in 0..invocations {
        let chosen = choose_move(board, player, config, rng)?;
        let idx = empty
            .iter()
            .position(|&square| square == chosen)
            .ok_or_else(|| crate::Error::InvalidConfiguration {
                message: format!("selector returned occupied square {chosen:?}"),
            })?;
        counts[idx] += 1;
    }

    let observed: Vec<usize> = counts.iter().copied().filter(|&c| c > 0).collect();
    let (chi_square, degrees_of_freedom, p_value) = chi_square_uniform(&observed)?;

    Ok(FairnessReport {
        invocations,
        counts: empty.into_iter().zip(counts).collect(),
        selected_squares: observed.len(),
        chi_square,
        degrees_of_freedom,
        p_value,
    })
}

/// Chi-square test of the observed counts against a uniform distribution.
///
/// Returns the statistic, the degrees of freedom, and the upper-tail
/// p-value. Fewer than two categories make the test trivial: statistic 0
/// with p-value 1.0.
///
/// # Errors
///
/// Returns error if the total count is zero.
pub fn chi_square_uniform(observed: &[usize]) -> Result<(f64, usize, f64)> {
    let total: usize = observed.iter().sum();
    if total == 0 {
        return Err(crate::Error::InvalidConfiguration {
            message: "chi-square test needs a non-zero total count".to_string(),
        });
    }
    if observed.len() < 2 {
        return Ok((0.0, 0, 1.0));
    }

    let expected = total as f64 / observed.len() as f64;
    let statistic: f64 = observed
        .iter()
        .map(|&count| {
            let diff = count as f64 - expected;
            diff * diff / expected
        })
        .sum();

    let degrees = observed.len() - 1;
    let distribution =
        ChiSquared::new(degrees as f64).map_err(|e| crate::Error::InvalidConfiguration {
            message: format!("chi-square distribution with {degrees} degrees of freedom: {e}"),
        })?;
    let p_value = 1.0 - distribution.cdf(statistic);

    Ok((statistic, degrees, p_value))
}
