// Player, match and game-state records supplied by the host game.
//
// These are read-only inputs to the engine. Optional fields fall back to
// explicit defaults instead of failing, so a partially filled save file
// still produces a full analysis.

use serde::de::{IgnoredAny, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use tracing::warn;

// ---------------------------------------------------------------------------
// Position
// ---------------------------------------------------------------------------

/// Playing position. Unknown strings are kept as `Unrecognized` rather than
/// rejected: rating falls back to midfielder weights and position-specific
/// advice is skipped.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Position {
    Forward,
    Midfielder,
    Defender,
    Goalkeeper,
    Unrecognized(String),
}

impl Position {
    /// Parse a position string.
    ///
    /// Case-insensitive. Accepts full names and the common abbreviations
    /// ("FW"/"ST", "MF"/"CM", "DF"/"CB", "GK").
    pub fn from_str_pos(s: &str) -> Self {
        match s.trim().to_uppercase().as_str() {
            "FORWARD" | "FW" | "ST" => Position::Forward,
            "MIDFIELDER" | "MF" | "CM" => Position::Midfielder,
            "DEFENDER" | "DF" | "CB" => Position::Defender,
            "GOALKEEPER" | "GK" => Position::Goalkeeper,
            _ => Position::Unrecognized(s.to_string()),
        }
    }

    /// Return the display string for this position.
    pub fn display_str(&self) -> &str {
        match self {
            Position::Forward => "Forward",
            Position::Midfielder => "Midfielder",
            Position::Defender => "Defender",
            Position::Goalkeeper => "Goalkeeper",
            Position::Unrecognized(raw) => raw,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Position::Unrecognized(_))
    }
}

impl From<String> for Position {
    fn from(s: String) -> Self {
        Position::from_str_pos(&s)
    }
}

impl From<Position> for String {
    fn from(pos: Position) -> Self {
        pos.display_str().to_string()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_str())
    }
}

// ---------------------------------------------------------------------------
// Stat sheet
// ---------------------------------------------------------------------------

/// Named player attributes in input order.
///
/// Order matters: strength/weakness lists and the training plan follow it.
/// Inserting an existing name replaces the value in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatSheet {
    entries: Vec<(String, f64)>,
}

impl StatSheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: f64) {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| *v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), *v))
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.entries.iter().map(|(_, v)| *v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for StatSheet {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        let mut sheet = StatSheet::new();
        for (name, value) in iter {
            sheet.insert(name, value);
        }
        sheet
    }
}

impl Serialize for StatSheet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// A stat value as it appears in the input. Anything that is not a number
/// is absorbed so one bad attribute does not reject the whole player.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawStat {
    Number(f64),
    Other(IgnoredAny),
}

struct StatSheetVisitor;

impl<'de> Visitor<'de> for StatSheetVisitor {
    type Value = StatSheet;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of attribute names to numbers")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut sheet = StatSheet::new();
        while let Some((name, raw)) = access.next_entry::<String, RawStat>()? {
            match raw {
                RawStat::Number(value) if value.is_finite() => sheet.insert(name, value),
                _ => warn!("skipping attribute '{}': value is not a finite number", name),
            }
        }
        Ok(sheet)
    }
}

impl<'de> Deserialize<'de> for StatSheet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(StatSheetVisitor)
    }
}

// ---------------------------------------------------------------------------
// Player
// ---------------------------------------------------------------------------

/// One entry in a player's injury history. Only the number of entries
/// feeds the risk model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InjuryRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weeks_out: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub position: Position,
    pub age: u32,
    #[serde(default)]
    pub stats: StatSheet,
    /// Development ceiling. `None` uses the configured default (85).
    #[serde(default)]
    pub potential: Option<u32>,
    #[serde(default)]
    pub market_value: f64,
    #[serde(default)]
    pub injuries: Vec<InjuryRecord>,
}

impl Player {
    pub fn new(position: Position, age: u32) -> Self {
        Player {
            name: None,
            position,
            age,
            stats: StatSheet::new(),
            potential: None,
            market_value: 0.0,
            injuries: Vec::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_stats<K: Into<String>>(mut self, stats: impl IntoIterator<Item = (K, f64)>) -> Self {
        self.stats = stats.into_iter().collect();
        self
    }

    pub fn with_potential(mut self, potential: u32) -> Self {
        self.potential = Some(potential);
        self
    }

    pub fn with_market_value(mut self, market_value: f64) -> Self {
        self.market_value = market_value;
        self
    }

    pub fn with_injuries(mut self, count: usize) -> Self {
        self.injuries = vec![InjuryRecord::default(); count];
        self
    }

    /// Name for log lines and reports.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("unnamed player")
    }
}

// ---------------------------------------------------------------------------
// Match records
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchResult {
    #[serde(alias = "win", alias = "WIN", alias = "W")]
    Win,
    #[serde(alias = "draw", alias = "DRAW", alias = "D")]
    Draw,
    #[serde(alias = "loss", alias = "LOSS", alias = "L")]
    Loss,
}

impl MatchResult {
    /// Parse a result string ("win", "W", "Loss", ...). Case-insensitive.
    pub fn from_str_result(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "WIN" | "W" => Some(MatchResult::Win),
            "DRAW" | "D" => Some(MatchResult::Draw),
            "LOSS" | "L" => Some(MatchResult::Loss),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerPerformance {
    #[serde(default)]
    pub goals: u32,
    #[serde(default)]
    pub assists: u32,
}

/// A single match from the player's history, oldest first in any list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRecord {
    pub result: MatchResult,
    #[serde(default)]
    pub performance_score: Option<f64>,
    #[serde(default)]
    pub player_performance: PlayerPerformance,
}

impl MatchRecord {
    pub fn new(result: MatchResult, performance_score: Option<f64>) -> Self {
        MatchRecord {
            result,
            performance_score,
            player_performance: PlayerPerformance::default(),
        }
    }

    pub fn with_contributions(mut self, goals: u32, assists: u32) -> Self {
        self.player_performance = PlayerPerformance { goals, assists };
        self
    }

    /// Performance score, or `default` when the match has none recorded.
    pub fn score_or(&self, default: f64) -> f64 {
        self.performance_score.unwrap_or(default)
    }

    pub fn is_win(&self) -> bool {
        self.result == MatchResult::Win
    }
}

// ---------------------------------------------------------------------------
// Game state
// ---------------------------------------------------------------------------

/// Calendar position of the save. Echoed into the analysis for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub current_week: u32,
    pub current_season: u32,
}

impl Default for GameState {
    fn default() -> Self {
        GameState {
            current_week: 1,
            current_season: 1,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
