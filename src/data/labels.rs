//! Statistic Label Module
//! Single lookup table between stat column codes and their display labels.

use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LabelError {
    #[error("Unknown stat code: {0}")]
    UnknownCode(String),
    #[error("Unknown stat label: {0}")]
    UnknownLabel(String),
}

/// Known statistic columns, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StatCode {
    Games,
    GamesStarted,
    MinutesPlayed,
    FieldGoals,
    FieldGoalAttempts,
    FieldGoalPct,
    ThreePointers,
    ThreePointAttempts,
    ThreePointPct,
    TwoPointers,
    TwoPointAttempts,
    TwoPointPct,
    EffectiveFieldGoalPct,
    FreeThrows,
    FreeThrowAttempts,
    FreeThrowPct,
    OffensiveRebounds,
    DefensiveRebounds,
    TotalRebounds,
    Assists,
    Steals,
    Blocks,
    Turnovers,
    PersonalFouls,
    Points,
    TripleDoubles,
}

/// (code, column key, display label). Each key and label appears exactly once.
const STAT_TABLE: [(StatCode, &str, &str); 26] = [
    (StatCode::Games, "G", "Games Played"),
    (StatCode::GamesStarted, "GS", "Games Started"),
    (StatCode::MinutesPlayed, "MP", "Minutes Played"),
    (StatCode::FieldGoals, "FG", "Field Goals Made"),
    (StatCode::FieldGoalAttempts, "FGA", "Field Goal Attempts"),
    (StatCode::FieldGoalPct, "FG%", "Field Goal %"),
    (StatCode::ThreePointers, "3P", "3-Pointers Made"),
    (StatCode::ThreePointAttempts, "3PA", "3-Point Attempts"),
    (StatCode::ThreePointPct, "3P%", "3-Point %"),
    (StatCode::TwoPointers, "2P", "2-Pointers Made"),
    (StatCode::TwoPointAttempts, "2PA", "2-Point Attempts"),
    (StatCode::TwoPointPct, "2P%", "2-Point %"),
    (StatCode::EffectiveFieldGoalPct, "eFG%", "Effective FG %"),
    (StatCode::FreeThrows, "FT", "Free Throws Made"),
    (StatCode::FreeThrowAttempts, "FTA", "Free Throw Attempts"),
    (StatCode::FreeThrowPct, "FT%", "Free Throw %"),
    (StatCode::OffensiveRebounds, "ORB", "Offensive Rebounds"),
    (StatCode::DefensiveRebounds, "DRB", "Defensive Rebounds"),
    (StatCode::TotalRebounds, "TRB", "Total Rebounds"),
    (StatCode::Assists, "AST", "Assists"),
    (StatCode::Steals, "STL", "Steals"),
    (StatCode::Blocks, "BLK", "Blocks"),
    (StatCode::Turnovers, "TOV", "Turnovers"),
    (StatCode::PersonalFouls, "PF", "Personal Fouls"),
    (StatCode::Points, "PTS", "Points"),
    (StatCode::TripleDoubles, "Trp-Dbl", "Triple-Doubles"),
];

impl StatCode {
    /// Every stat code in declaration order.
    pub const ALL: [StatCode; 26] = {
        let mut all = [StatCode::Games; 26];
        let mut i = 0;
        while i < STAT_TABLE.len() {
            all[i] = STAT_TABLE[i].0;
            i += 1;
        }
        all
    };

    fn entry(self) -> (StatCode, &'static str, &'static str) {
        // Table rows follow enum discriminant order.
        STAT_TABLE[self as usize]
    }

    /// Raw CSV column key, e.g. `"FG%"`.
    pub fn code(self) -> &'static str {
        self.entry().1
    }

    /// Human-readable name, e.g. `"Field Goal %"`.
    pub fn label(self) -> &'static str {
        self.entry().2
    }

    pub fn from_code(code: &str) -> Result<Self, LabelError> {
        STAT_TABLE
            .iter()
            .find(|(_, c, _)| *c == code)
            .map(|(stat, _, _)| *stat)
            .ok_or_else(|| LabelError::UnknownCode(code.to_string()))
    }

    pub fn from_label(label: &str) -> Result<Self, LabelError> {
        STAT_TABLE
            .iter()
            .find(|(_, _, l)| *l == label)
            .map(|(stat, _, _)| *stat)
            .ok_or_else(|| LabelError::UnknownLabel(label.to_string()))
    }
}

impl fmt::Display for StatCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Translate a column key into its display label.
pub fn to_label(code: &str) -> Result<&'static str, LabelError> {
    StatCode::from_code(code).map(StatCode::label)
}

/// Translate a display label back into its column key.
pub fn to_code(label: &str) -> Result<&'static str, LabelError> {
    StatCode::from_label(label).map(StatCode::code)
}

/// All display labels in declaration order (used to populate selectors).
pub fn list_labels() -> Vec<&'static str> {
    STAT_TABLE.iter().map(|(_, _, label)| *label).collect()
}
