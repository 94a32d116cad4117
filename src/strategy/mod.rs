//! Trading signal derivation.

mod crossover;

pub use crossover::{CrossoverParams, StrategyError, StrategyFrame};
