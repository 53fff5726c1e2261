//! Observers for evaluation series
//!
//! Observers allow composable data collection during a series without
//! coupling the runner to specific output formats.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
    sync::{Arc, Mutex},
};

use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};

use crate::{
    Result,
    ports::Observer,
    tictactoe::{Board, GameOutcome, Player},
};

/// Progress bar observer - shows series progress
pub struct ProgressObserver {
    progress_bar: Option<ProgressBar>,
    agent_player: Player,
    wins: usize,
    draws: usize,
    losses: usize,
}

impl ProgressObserver {
    /// Create a new progress observer tallying for the given agent side
    pub fn new(agent_player: Player) -> Self {
        Self {
            progress_bar: None,
            agent_player,
            wins: 0,
            draws: 0,
            losses: 0,
        }
    }

    fn tally(&self) -> String {
        format!("{} D:{} L:{}", self.wins, self.draws, self.losses)
    }
}

impl Observer for ProgressObserver {
    fn on_series_start(&mut self, total_games: usize) -> Result<()> {
        let pb = ProgressBar::new(total_games as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games (W:{msg})")
                .map_err(|e| crate::Error::ProgressBarTemplate {
                    message: e.to_string(),
                })?
                .progress_chars("=>-"),
        );
        self.progress_bar = Some(pb);
        Ok(())
    }

    fn on_game_end(&mut self, game_num: usize, outcome: GameOutcome) -> Result<()> {
        match outcome {
            GameOutcome::Win(winner) if winner == self.agent_player => self.wins += 1,
            GameOutcome::Win(_) => self.losses += 1,
            GameOutcome::Draw => self.draws += 1,
        }

        if let Some(pb) = &self.progress_bar {
            pb.set_position(game_num as u64 + 1);
            pb.set_message(self.tally());
        }
        Ok(())
    }

    fn on_series_end(&mut self) -> Result<()> {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message(self.tally());
        }
        Ok(())
    }
}

#[derive(Debug, Default)]
struct MetricsTally {
    wins: usize,
    draws: usize,
    losses: usize,
    total_games: usize,
    total_moves: usize,
}

/// Read-side handle to a [`MetricsObserver`]'s tally.
///
/// The observer is moved into the series runner; the handle lets callers
/// read the collected metrics after the run.
#[derive(Clone)]
pub struct MetricsHandle {
    tally: Arc<Mutex<MetricsTally>>,
}

impl MetricsHandle {
    fn read(&self) -> std::sync::MutexGuard<'_, MetricsTally> {
        self.tally.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Win rate over the games observed so far
    pub fn win_rate(&self) -> f64 {
        let tally = self.read();
        if tally.total_games == 0 {
            0.0
        } else {
            tally.wins as f64 / tally.total_games as f64
        }
    }

    /// Average moves per game observed so far
    pub fn average_game_length(&self) -> f64 {
        let tally = self.read();
        if tally.total_games == 0 {
            0.0
        } else {
            tally.total_moves as f64 / tally.total_games as f64
        }
    }

    pub fn wins(&self) -> usize {
        self.read().wins
    }

    pub fn draws(&self) -> usize {
        self.read().draws
    }

    pub fn losses(&self) -> usize {
        self.read().losses
    }
}

/// Metrics observer - tracks outcome counts and game lengths
pub struct MetricsObserver {
    agent_player: Player,
    tally: Arc<Mutex<MetricsTally>>,
    current_moves: usize,
}

impl MetricsObserver {
    /// Create a new metrics observer tallying for the given agent side
    pub fn new(agent_player: Player) -> Self {
        Self {
            agent_player,
            tally: Arc::new(Mutex::new(MetricsTally::default())),
            current_moves: 0,
        }
    }

    /// A handle that stays readable after the observer is moved into a
    /// series runner
    pub fn handle(&self) -> MetricsHandle {
        MetricsHandle {
            tally: Arc::clone(&self.tally),
        }
    }
}

impl Observer for MetricsObserver {
    fn on_game_start(&mut self, _game_num: usize) -> Result<()> {
        self.current_moves = 0;
        Ok(())
    }

    fn on_move(
        &mut self,
        _game_num: usize,
        _step_num: usize,
        _board: &Board,
        _square: (usize, usize),
        _player: Player,
    ) -> Result<()> {
        self.current_moves += 1;
        Ok(())
    }

    fn on_game_end(&mut self, _game_num: usize, outcome: GameOutcome) -> Result<()> {
        let mut tally = self.tally.lock().map_err(|_| crate::Error::InvalidConfiguration {
            message: "metrics tally lock poisoned".to_string(),
        })?;
        match outcome {
            GameOutcome::Win(winner) if winner == self.agent_player => tally.wins += 1,
            GameOutcome::Win(_) => tally.losses += 1,
            GameOutcome::Draw => tally.draws += 1,
        }
        tally.total_games += 1;
        tally.total_moves += self.current_moves;
        Ok(())
    }
}

/// One game as recorded in the JSONL log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRecord {
    /// Game number within the series
    pub game_num: usize,
    /// Moves in play order
    pub moves: Vec<MoveRecord>,
    /// Final board, encoded row-major
    pub final_board: String,
    /// Final outcome
    pub outcome: GameOutcome,
}

/// One move as recorded in the JSONL log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveRecord {
    pub row: usize,
    pub col: usize,
    pub player: Player,
}

/// JSONL observer - writes one game record per line
pub struct JsonlObserver {
    writer: BufWriter<File>,
    current: Option<GameRecord>,
}

impl JsonlObserver {
    /// Create a JSONL observer writing to the given path.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be created.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::create(path.as_ref()).map_err(|source| crate::Error::Io {
            operation: format!("create game log '{}'", path.as_ref().display()),
            source,
        })?;
        Ok(Self {
            writer: BufWriter::new(file),
            current: None,
        })
    }
}

impl Observer for JsonlObserver {
    fn on_game_start(&mut self, game_num: usize) -> Result<()> {
        self.current = Some(GameRecord {
            game_num,
            moves: Vec::new(),
            final_board: String::new(),
            outcome: GameOutcome::Draw,
        });
        Ok(())
    }

    fn on_move(
        &mut self,
        _game_num: usize,
        _step_num: usize,
        board: &Board,
        square: (usize, usize),
        player: Player,
    ) -> Result<()> {
        if let Some(record) = &mut self.current {
            record.moves.push(MoveRecord {
                row: square.0,
                col: square.1,
                player,
            });
            record.final_board = board.encode();
        }
        Ok(())
    }

    fn on_game_end(&mut self, _game_num: usize, outcome: GameOutcome) -> Result<()> {
        if let Some(mut record) = self.current.take() {
            record.outcome = outcome;
            serde_json::to_writer(&mut self.writer, &record)?;
            self.writer.write_all(b"\n")?;
        }
        Ok(())
    }

    fn on_series_end(&mut self) -> Result<()> {
        self.writer.flush().map_err(crate::Error::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_observer_tallies() {
        let mut metrics = MetricsObserver::new(Player::X);
        let handle = metrics.handle();

        metrics.on_game_start(0).unwrap();
        metrics.on_game_end(0, GameOutcome::Win(Player::X)).unwrap();
        metrics.on_game_start(1).unwrap();
        metrics.on_game_end(1, GameOutcome::Win(Player::O)).unwrap();
        metrics.on_game_start(2).unwrap();
        metrics.on_game_end(2, GameOutcome::Draw).unwrap();

        assert_eq!(handle.wins(), 1);
        assert_eq!(handle.losses(), 1);
        assert_eq!(handle.draws(), 1);
        assert!((handle.win_rate() - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_metrics_handle_outlives_the_observer() {
        let board = Board::new(3).unwrap();
        let mut metrics = MetricsObserver::new(Player::X);
        let handle = metrics.handle();

        metrics.on_game_start(0).unwrap();
        for step in 0..5 {
            metrics
                .on_move(0, step, &board, (0, 0), Player::X)
                .unwrap();
        }
        metrics.on_game_end(0, GameOutcome::Win(Player::X)).unwrap();
        drop(metrics);

        assert_eq!(handle.average_game_length(), 5.0);
    }
}
