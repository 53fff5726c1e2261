//! Winning line analysis

use std::collections::HashSet;

use super::{Cell, Player};

/// Utility for analyzing the winning lines of an NxN board.
///
/// A board of dimension N has 2N + 2 winning lines: N rows, N columns,
/// and the two diagonals. Cell slices are row-major, as stored by
/// [`Board`](super::Board).
pub struct LineAnalyzer {
    dim: usize,
}

impl LineAnalyzer {
    pub fn new(dim: usize) -> Self {
        Self { dim }
    }

    /// Enumerate all winning lines as lists of row-major cell indices
    pub fn lines(&self) -> Vec<Vec<usize>> {
        let dim = self.dim;
        let mut lines = Vec::with_capacity(2 * dim + 2);

        for row in 0..dim {
            lines.push((0..dim).map(|col| row * dim + col).collect());
        }
        for col in 0..dim {
            lines.push((0..dim).map(|row| row * dim + col).collect());
        }
        lines.push((0..dim).map(|i| i * dim + i).collect());
        lines.push((0..dim).map(|i| i * dim + (dim - 1 - i)).collect());

        lines
    }

    /// Check if a player occupies a complete line
    pub fn has_won(&self, cells: &[Cell], player: Player) -> bool {
        let target = player.to_cell();
        self.lines()
            .iter()
            .any(|line| line.iter().all(|&idx| cells[idx] == target))
    }

    /// Find all squares that would immediately complete a line for the player
    pub fn winning_squares(&self, cells: &[Cell], player: Player) -> HashSet<(usize, usize)> {
        let mut squares = HashSet::new();
        for line in self.lines() {
            if let Some(idx) = self.winning_square_in_line(cells, player, &line) {
                squares.insert((idx / self.dim, idx % self.dim));
            }
        }
        squares
    }

    /// Find the completing square in a specific line, if one exists
    fn winning_square_in_line(
        &self,
        cells: &[Cell],
        player: Player,
        line: &[usize],
    ) -> Option<usize> {
        let target = player.to_cell();
        let mut count = 0;
        let mut empty_idx = None;

        for &idx in line {
            match cells[idx] {
                Cell::Empty => {
                    if empty_idx.is_some() {
                        // More than one empty cell, not a winning square
                        return None;
                    }
                    empty_idx = Some(idx);
                }
                c if c == target => count += 1,
                _ => return None, // Opponent piece in line
            }
        }

        if count + 1 == self.dim { empty_idx } else { None }
    }
}
