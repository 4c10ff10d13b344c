// Library root: the player analysis pipeline, the four advisors that read
// its output, and the recommendation engine that composes them.

pub mod advice;
pub mod analysis;
pub mod config;
pub mod match_log;
pub mod player;
pub mod recommend;
pub mod request;
pub mod team_fit;

pub use analysis::Analysis;
pub use config::EngineConfig;
pub use player::{GameState, MatchRecord, MatchResult, Player, Position, StatSheet};
pub use recommend::{Recommendation, RecommendationBundle, RecommendationEngine};
