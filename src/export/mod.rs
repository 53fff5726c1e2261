//! Data export in tabular formats

pub mod csv;

pub use csv::{write_score_grid_csv, write_square_scores_csv};
