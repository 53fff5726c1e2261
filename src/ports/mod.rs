//! Ports (trait boundaries) for the evaluation pipeline.
//!
//! These traits separate the game loop from the policies that play it and
//! from the mechanisms that observe it.

pub mod agent;
pub mod observer;

pub use agent::Agent;
pub use observer::Observer;
