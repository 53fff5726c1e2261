//! Agent implementations
//!
//! Adapters of the [`Agent`](crate::ports::Agent) port:
//! - [`MonteCarloAgent`] - the random-playout move selector
//! - [`RandomAgent`] - uniform random baseline
//! - [`BlockingAgent`] - blocks immediate opponent wins, else random

pub mod blocking;
pub mod monte_carlo;
pub mod random;

pub use blocking::BlockingAgent;
pub use monte_carlo::MonteCarloAgent;
pub use random::RandomAgent;
