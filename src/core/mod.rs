// Core algorithm exports
pub mod engine;
pub mod scoring;

pub use engine::{EngineError, Recommender, NEUTRAL_MATCH_SCORE, UNSET_PREFERENCES_REASON};
pub use scoring::{round1, score_area, BALANCED_REASON, MAX_REASONS};
