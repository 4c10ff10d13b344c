// Match log import: chronological CSV exports from the host game.
//
// Expected columns are `result`, `performance_score`, `goals` and `assists`.
// Only `result` is required; extra columns are ignored.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::warn;

use crate::player::{MatchRecord, MatchResult};

#[derive(Debug, thiserror::Error)]
pub enum MatchLogError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("CSV error in {path}: {source}")]
    Csv { path: String, source: csv::Error },
}

/// One CSV row. Blank numeric fields deserialize to `None`.
#[derive(Debug, Deserialize)]
struct RawMatchRow {
    result: String,
    #[serde(default, alias = "performanceScore", alias = "score")]
    performance_score: Option<f64>,
    #[serde(default)]
    goals: Option<u32>,
    #[serde(default)]
    assists: Option<u32>,
}

fn load_match_log_from_reader<R: Read>(rdr: R) -> Result<Vec<MatchRecord>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(rdr);
    let mut records = Vec::new();

    for (index, row) in reader.deserialize::<RawMatchRow>().enumerate() {
        let line = index + 2;
        match row {
            Ok(raw) => {
                let Some(result) = MatchResult::from_str_result(&raw.result) else {
                    warn!("skipping match on line {}: unknown result '{}'", line, raw.result);
                    continue;
                };
                let score = match raw.performance_score {
                    Some(s) if !s.is_finite() => {
                        warn!("match on line {}: non-finite score, using default", line);
                        None
                    }
                    other => other,
                };
                records.push(
                    MatchRecord::new(result, score)
                        .with_contributions(raw.goals.unwrap_or(0), raw.assists.unwrap_or(0)),
                );
            }
            Err(e) => {
                warn!("skipping malformed match row: {}", e);
            }
        }
    }

    Ok(records)
}

/// Load a match log from a CSV file, oldest match first.
pub fn load_match_log(path: &Path) -> Result<Vec<MatchRecord>, MatchLogError> {
    let file = std::fs::File::open(path).map_err(|e| MatchLogError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    load_match_log_from_reader(file).map_err(|e| MatchLogError::Csv {
        path: path.display().to_string(),
        source: e,
    })
}
