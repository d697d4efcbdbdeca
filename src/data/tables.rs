//! Loaded Stat Tables
//! In-memory holder for the three dashboard tables plus typed column access.

use crate::data::StatCode;
use polars::prelude::*;

/// Key column of the per-season table.
pub const SEASON_COLUMN: &str = "Season";
/// Key column of the per-team table.
pub const TEAM_COLUMN: &str = "Team";

/// Which of the three input files a table came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    Seasons,
    Summary,
    Teams,
}

impl TableKind {
    pub fn name(self) -> &'static str {
        match self {
            TableKind::Seasons => "season",
            TableKind::Summary => "summary",
            TableKind::Teams => "per-team",
        }
    }

    /// Unique row key, if the table has one.
    pub fn key_column(self) -> Option<&'static str> {
        match self {
            TableKind::Seasons => Some(SEASON_COLUMN),
            TableKind::Summary => None,
            TableKind::Teams => Some(TEAM_COLUMN),
        }
    }
}

impl std::fmt::Display for TableKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The three validated tables. Immutable for the life of a session.
#[derive(Debug, Clone)]
pub struct StatTables {
    seasons: DataFrame,
    summary: DataFrame,
    teams: DataFrame,
}

impl StatTables {
    /// Assemble already validated tables. Use `DataLoader` to build from files.
    pub(crate) fn new(seasons: DataFrame, summary: DataFrame, teams: DataFrame) -> Self {
        Self {
            seasons,
            summary,
            teams,
        }
    }

    pub fn seasons(&self) -> &DataFrame {
        &self.seasons
    }

    pub fn summary(&self) -> &DataFrame {
        &self.summary
    }

    pub fn teams(&self) -> &DataFrame {
        &self.teams
    }
}

/// Check whether a column holds numbers.
pub fn is_numeric_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Float32
            | DataType::Float64
            | DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
    )
}

/// Read a column as text, whatever type polars inferred for it.
pub fn string_values(df: &DataFrame, column: &str) -> PolarsResult<Vec<Option<String>>> {
    let as_str = df.column(column)?.cast(&DataType::String)?;
    let ca = as_str.str()?;
    Ok(ca.into_iter().map(|v| v.map(|s| s.trim().to_string())).collect())
}

/// Read a stat column as floats. Unparseable cells become `None`.
pub fn stat_values(df: &DataFrame, stat: StatCode) -> PolarsResult<Vec<Option<f64>>> {
    let as_f64 = df.column(stat.code())?.cast(&DataType::Float64)?;
    let ca = as_f64.f64()?;
    Ok(ca.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_values_handle_non_string_keys() {
        let df = df!("Season" => [2004i64, 2005]).unwrap();
        let values = string_values(&df, "Season").unwrap();
        assert_eq!(values, vec![Some("2004".to_string()), Some("2005".to_string())]);
    }

    #[test]
    fn stat_values_cast_integers() {
        let df = df!("PTS" => [1654i64, 2175]).unwrap();
        let values = stat_values(&df, StatCode::Points).unwrap();
        assert_eq!(values, vec![Some(1654.0), Some(2175.0)]);
    }

    #[test]
    fn stat_values_fail_for_absent_column() {
        let df = df!("PTS" => [1.0f64]).unwrap();
        assert!(stat_values(&df, StatCode::Assists).is_err());
    }

    #[test]
    fn numeric_dtype_detection() {
        assert!(is_numeric_dtype(&DataType::Int64));
        assert!(is_numeric_dtype(&DataType::Float64));
        assert!(!is_numeric_dtype(&DataType::String));
    }
}
