//! Series runner for agent evaluation

use serde::{Deserialize, Serialize};

use crate::{
    Result,
    ports::{Agent, Observer},
    tictactoe::{Game, GameOutcome, Player},
};

/// Series configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesConfig {
    /// Board dimension
    pub dim: usize,

    /// Number of games to play
    pub num_games: usize,

    /// Random seed
    pub seed: Option<u64>,

    /// Which player the agent under evaluation controls
    pub agent_player: Player,

    /// Which player opens each game
    pub first_player: Player,
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self {
            dim: 3,
            num_games: 100,
            seed: None,
            agent_player: Player::X,
            first_player: Player::X,
        }
    }
}

/// Result of an evaluation series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesResult {
    /// Total games played
    pub total_games: usize,

    /// Number of wins for the evaluated agent
    pub wins: usize,

    /// Number of draws
    pub draws: usize,

    /// Number of losses for the evaluated agent
    pub losses: usize,

    /// Win rate
    pub win_rate: f64,

    /// Draw rate
    pub draw_rate: f64,

    /// Loss rate
    pub loss_rate: f64,
}

impl SeriesResult {
    /// Create a new series result with derived rates
    pub fn new(total_games: usize, wins: usize, draws: usize, losses: usize) -> Self {
        let rate = |count: usize| {
            if total_games > 0 {
                count as f64 / total_games as f64
            } else {
                0.0
            }
        };

        Self {
            total_games,
            wins,
            draws,
            losses,
            win_rate: rate(wins),
            draw_rate: rate(draws),
            loss_rate: rate(losses),
        }
    }

    /// Save result to JSON file
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Load result from JSON file
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let result = serde_json::from_reader(file)?;
        Ok(result)
    }
}

/// Runs a series of games between an agent and an opponent
pub struct SeriesRunner {
    config: SeriesConfig,
    observers: Vec<Box<dyn Observer>>,
}

impl SeriesRunner {
    /// Create a new series runner
    pub fn new(config: SeriesConfig) -> Self {
        Self {
            config,
            observers: Vec::new(),
        }
    }

    /// Add an observer to the series
    pub fn with_observer(mut self, observer: Box<dyn Observer>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Play the configured series and tally outcomes from the agent's
    /// perspective.
    ///
    /// # Errors
    ///
    /// Returns error if an agent fails to produce a move or an observer
    /// fails.
    pub fn run(&mut self, agent: &mut dyn Agent, opponent: &mut dyn Agent) -> Result<SeriesResult> {
        self.seed_pair(agent, opponent)?;

        let mut wins = 0;
        let mut draws = 0;
        let mut losses = 0;

        for observer in &mut self.observers {
            observer.on_series_start(self.config.num_games)?;
        }

        for game_num in 0..self.config.num_games {
            let outcome = self.play_game(game_num, agent, opponent)?;

            match outcome {
                GameOutcome::Win(winner) if winner == self.config.agent_player => wins += 1,
                GameOutcome::Win(_) => losses += 1,
                GameOutcome::Draw => draws += 1,
            }

            for observer in &mut self.observers {
                observer.on_game_end(game_num, outcome)?;
            }
        }

        for observer in &mut self.observers {
            observer.on_series_end()?;
        }

        Ok(SeriesResult::new(self.config.num_games, wins, draws, losses))
    }

    fn seed_pair(&self, agent: &mut dyn Agent, opponent: &mut dyn Agent) -> Result<()> {
        if let Some(seed) = self.config.seed {
            agent.set_rng_seed(seed)?;
            opponent.set_rng_seed(seed.wrapping_add(1))?;
        }
        Ok(())
    }

    fn play_game(
        &mut self,
        game_num: usize,
        agent: &mut dyn Agent,
        opponent: &mut dyn Agent,
    ) -> Result<GameOutcome> {
        for observer in &mut self.observers {
            observer.on_game_start(game_num)?;
        }

        let mut game = Game::new(self.config.dim, self.config.first_player)?;
        let mut step_num = 0;

        while game.outcome().is_none() {
            let current = game.to_move();
            let mover: &mut dyn Agent = if current == self.config.agent_player {
                agent
            } else {
                opponent
            };

            let (row, col) = mover.select_move(game.board(), current)?;
            game.play(row, col)?;

            for observer in &mut self.observers {
                observer.on_move(game_num, step_num, game.board(), (row, col), current)?;
            }
            step_num += 1;
        }

        game.outcome().ok_or(crate::Error::InvalidConfiguration {
            message: "game loop exited without an outcome".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::RandomAgent;

    #[test]
    fn test_series_tallies_every_game() {
        let config = SeriesConfig {
            num_games: 10,
            seed: Some(42),
            ..SeriesConfig::default()
        };

        let mut runner = SeriesRunner::new(config);
        let mut agent = RandomAgent::new("Agent".to_string());
        let mut opponent = RandomAgent::new("Opponent".to_string());

        let result = runner.run(&mut agent, &mut opponent).unwrap();

        assert_eq!(result.total_games, 10);
        assert_eq!(result.wins + result.draws + result.losses, 10);
    }

    #[test]
    fn test_rates_sum_to_one() {
        let result = SeriesResult::new(20, 11, 5, 4);
        let sum = result.win_rate + result.draw_rate + result.loss_rate;
        assert!((sum - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_seeded_series_is_reproducible() {
        let config = SeriesConfig {
            num_games: 25,
            seed: Some(7),
            ..SeriesConfig::default()
        };

        let run = |config: &SeriesConfig| {
            let mut runner = SeriesRunner::new(config.clone());
            let mut agent = RandomAgent::new("Agent".to_string());
            let mut opponent = RandomAgent::new("Opponent".to_string());
            runner.run(&mut agent, &mut opponent).unwrap()
        };

        assert_eq!(run(&config), run(&config));
    }
}
