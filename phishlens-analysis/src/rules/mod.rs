//! Rules engine: maps a feature record to a labelled, justified verdict.

pub mod evaluator;
pub mod explanation;
pub mod types;

pub use evaluator::{reason, RuleEngine};
pub use explanation::{describe, explain};
pub use types::*;
