//! CSV export for score grids

use std::path::Path;

use serde::Serialize;

use crate::{Result, analysis::ScoreReport, montecarlo::ScoreGrid};

/// One row of the per-square CSV export
#[derive(Debug, Clone, Serialize)]
struct SquareRecord {
    row: usize,
    col: usize,
    cell: char,
    score: f64,
    is_max: bool,
    chosen: bool,
}

/// Write a score grid as a dim-by-dim CSV matrix.
///
/// # Errors
///
/// Returns error if the file cannot be written.
pub fn write_score_grid_csv<P: AsRef<Path>>(scores: &ScoreGrid, path: P) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for row in 0..scores.dim() {
        let record: Vec<String> = (0..scores.dim())
            .map(|col| scores.get(row, col).to_string())
            .collect();
        writer.write_record(&record)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write a score report as one CSV row per square, with the chosen and
/// tied squares flagged.
///
/// # Errors
///
/// Returns error if the file cannot be written.
pub fn write_square_scores_csv<P: AsRef<Path>>(report: &ScoreReport, path: P) -> Result<()> {
    let cells: Vec<char> = report.board.chars().collect();
    let mut writer = csv::Writer::from_path(path)?;

    for ((row, col), score) in report.scores.iter() {
        writer.serialize(SquareRecord {
            row,
            col,
            cell: cells[row * report.dim + col],
            score,
            is_max: report.tied.contains(&(row, col)),
            chosen: report.chosen == (row, col),
        })?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::{
        montecarlo::MonteCarloConfig,
        tictactoe::{Board, Player},
    };

    #[test]
    fn test_score_grid_csv_round_trips_values() {
        let mut scores = ScoreGrid::new(2).unwrap();
        scores.add(0, 1, 2.5);
        scores.add(1, 0, -1.0);

        let dir = std::env::temp_dir().join("carlo-test-grid-csv");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("grid.csv");
        write_score_grid_csv(&scores, &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "0,2.5");
        assert_eq!(lines[1], "-1,0");
    }

    #[test]
    fn test_square_scores_csv_has_header_and_rows() {
        let board = Board::from_string("XO. ... ...").unwrap();
        let mut rng = StdRng::seed_from_u64(4);
        let report =
            ScoreReport::generate(&board, Player::X, &MonteCarloConfig::new(10), &mut rng).unwrap();

        let dir = std::env::temp_dir().join("carlo-test-square-csv");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("squares.csv");
        write_square_scores_csv(&report, &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines[0], "row,col,cell,score,is_max,chosen");
        assert_eq!(lines.len(), 10);
    }
}
