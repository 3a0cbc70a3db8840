pub mod agent;
pub mod genes;
pub mod score;
pub mod evolution;
pub mod negotiator;
pub mod strategy;
pub mod random;

pub use agent::{Agent, BuildAction, ThiefMove};
pub use genes::{GeneCategory, GeneError, GeneProfile, GeneWeights};
pub use random::RandomAgent;
pub use strategy::StrategyAgent;

#[cfg(test)]
mod tests;
