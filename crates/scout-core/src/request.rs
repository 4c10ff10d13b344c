// Analysis requests: the JSON document a host hands the engine.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::player::{GameState, MatchRecord, Player};

#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    #[error("failed to read request {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("invalid request JSON in {path}: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },
}

/// A player plus the context the engine needs. Game state defaults to week 1
/// of season 1 and the match history to empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    pub player: Player,
    #[serde(default)]
    pub game_state: GameState,
    #[serde(default)]
    pub match_history: Vec<MatchRecord>,
}

pub fn parse_request(json: &str) -> Result<AnalysisRequest, serde_json::Error> {
    serde_json::from_str(json)
}

pub fn load_request(path: &Path) -> Result<AnalysisRequest, RequestError> {
    let content = std::fs::read_to_string(path).map_err(|e| RequestError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_request(&content).map_err(|e| RequestError::Json {
        path: path.display().to_string(),
        source: e,
    })
}
