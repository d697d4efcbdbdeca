//! CSV Data Loader Module
//! Loads and validates the season, summary and per-team tables using Polars.

use crate::data::tables::{string_values, StatTables, TableKind};
use crate::data::StatCode;
use polars::prelude::*;
use std::collections::HashSet;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Data file not found: {}", path.display())]
    MissingFile { path: PathBuf },
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse {table} CSV: {source}")]
    Csv {
        table: TableKind,
        source: PolarsError,
    },
    #[error("Malformed {table} table: {message}")]
    MalformedData { table: TableKind, message: String },
}

/// Paths of the three input files.
#[derive(Debug, Clone)]
pub struct DataPaths {
    pub seasons: PathBuf,
    pub summary: PathBuf,
    pub teams: PathBuf,
}

/// One-shot loader for the dashboard tables. Any failure is fatal.
pub struct DataLoader;

impl DataLoader {
    /// Load all three tables.
    pub fn load(paths: &DataPaths) -> Result<StatTables, LoaderError> {
        let seasons = Self::load_table(TableKind::Seasons, &paths.seasons)?;
        let summary = Self::load_table(TableKind::Summary, &paths.summary)?;
        let teams = Self::load_table(TableKind::Teams, &paths.teams)?;
        Ok(StatTables::new(seasons, summary, teams))
    }

    /// Load and validate a single table from disk.
    pub fn load_table(kind: TableKind, path: &Path) -> Result<DataFrame, LoaderError> {
        let bytes = std::fs::read(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                LoaderError::MissingFile {
                    path: path.to_path_buf(),
                }
            } else {
                LoaderError::Io {
                    path: path.to_path_buf(),
                    source: e,
                }
            }
        })?;

        let df = Self::load_table_from_bytes(kind, bytes)?;
        info!(
            table = kind.name(),
            path = %path.display(),
            rows = df.height(),
            columns = df.width(),
            "loaded table"
        );
        Ok(df)
    }

    /// Parse and validate a table from raw CSV bytes.
    pub fn load_table_from_bytes(kind: TableKind, bytes: Vec<u8>) -> Result<DataFrame, LoaderError> {
        let csv_err = |source: PolarsError| LoaderError::Csv {
            table: kind,
            source,
        };

        Self::check_record_widths(kind, &bytes)?;
        let mut df = CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(Some(10000))
            .into_reader_with_file_handle(Cursor::new(bytes))
            .finish()
            .map_err(csv_err)?;

        Self::trim_column_names(&mut df).map_err(csv_err)?;
        Self::validate(kind, &df)?;
        Ok(df)
    }

    /// Every record must have exactly as many fields as the header.
    fn check_record_widths(kind: TableKind, bytes: &[u8]) -> Result<(), LoaderError> {
        let malformed = |message: String| LoaderError::MalformedData {
            table: kind,
            message,
        };

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(bytes);
        let expected = reader
            .headers()
            .map_err(|e| malformed(format!("unreadable header: {}", e)))?
            .len();

        for (row, record) in reader.records().enumerate() {
            let record = record.map_err(|e| malformed(format!("row {}: {}", row + 1, e)))?;
            if record.len() != expected {
                return Err(malformed(format!(
                    "row {} has {} fields, header has {}",
                    row + 1,
                    record.len(),
                    expected
                )));
            }
        }
        Ok(())
    }

    /// Strip incidental whitespace around header names (`" PTS "` -> `"PTS"`).
    fn trim_column_names(df: &mut DataFrame) -> PolarsResult<()> {
        let trimmed: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|name| name.trim().to_string())
            .collect();
        df.set_column_names(trimmed)
    }

    /// Check key column, stat columns, key uniqueness and summary row count.
    fn validate(kind: TableKind, df: &DataFrame) -> Result<(), LoaderError> {
        let malformed = |message: String| LoaderError::MalformedData {
            table: kind,
            message,
        };

        let columns: HashSet<String> = df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect();

        if let Some(key) = kind.key_column() {
            if !columns.contains(key) {
                return Err(malformed(format!("missing key column `{}`", key)));
            }
        }

        let missing: Vec<&str> = StatCode::ALL
            .iter()
            .map(|stat| stat.code())
            .filter(|code| !columns.contains(*code))
            .collect();
        if !missing.is_empty() {
            return Err(malformed(format!(
                "missing stat columns: {}",
                missing.join(", ")
            )));
        }

        if kind == TableKind::Summary && df.height() != 1 {
            return Err(malformed(format!(
                "expected exactly one row, found {}",
                df.height()
            )));
        }

        if let Some(key) = kind.key_column() {
            let keys = string_values(df, key).map_err(|source| LoaderError::Csv {
                table: kind,
                source,
            })?;
            let mut seen = HashSet::new();
            for (row, value) in keys.into_iter().enumerate() {
                let Some(value) = value else {
                    return Err(malformed(format!("empty `{}` in row {}", key, row + 1)));
                };
                if !seen.insert(value.clone()) {
                    return Err(malformed(format!("duplicate `{}` value `{}`", key, value)));
                }
            }
        }

        debug!(table = kind.name(), "table shape validated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(key: Option<&str>) -> String {
        let mut cols: Vec<String> = key.into_iter().map(str::to_string).collect();
        cols.extend(StatCode::ALL.iter().map(|s| s.code().to_string()));
        cols.join(",")
    }

    fn row(key: Option<&str>, base: f64) -> String {
        let mut cells: Vec<String> = key.into_iter().map(str::to_string).collect();
        cells.extend((0..StatCode::ALL.len()).map(|i| format!("{}", base + i as f64)));
        cells.join(",")
    }

    fn csv(lines: &[String]) -> Vec<u8> {
        lines.join("\n").into_bytes()
    }

    #[test]
    fn loads_season_table_in_file_order() {
        let bytes = csv(&[
            header(Some("Season")),
            row(Some("2003-04"), 1.0),
            row(Some("2004-05"), 2.0),
        ]);
        let df = DataLoader::load_table_from_bytes(TableKind::Seasons, bytes).unwrap();
        assert_eq!(df.height(), 2);
        let seasons = string_values(&df, "Season").unwrap();
        assert_eq!(
            seasons,
            vec![Some("2003-04".to_string()), Some("2004-05".to_string())]
        );
    }

    #[test]
    fn team_headers_are_trimmed() {
        let spaced: Vec<String> = std::iter::once(" Team ".to_string())
            .chain(StatCode::ALL.iter().map(|s| format!(" {} ", s.code())))
            .collect();
        let bytes = csv(&[spaced.join(","), row(Some("CLE"), 10.0)]);
        let df = DataLoader::load_table_from_bytes(TableKind::Teams, bytes).unwrap();
        assert!(df.column("PTS").is_ok());
        assert!(df.column("Team").is_ok());
        assert!(df.column(" PTS ").is_err());
    }

    #[test]
    fn summary_with_no_rows_is_malformed() {
        let bytes = csv(&[header(None)]);
        let err = DataLoader::load_table_from_bytes(TableKind::Summary, bytes).unwrap_err();
        assert!(matches!(
            err,
            LoaderError::MalformedData {
                table: TableKind::Summary,
                ..
            }
        ));
    }

    #[test]
    fn summary_with_two_rows_is_malformed() {
        let bytes = csv(&[header(None), row(None, 1.0), row(None, 2.0)]);
        let err = DataLoader::load_table_from_bytes(TableKind::Summary, bytes).unwrap_err();
        match err {
            LoaderError::MalformedData { message, .. } => {
                assert!(message.contains("found 2"), "{}", message)
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn summary_with_one_row_loads() {
        let bytes = csv(&[header(None), row(None, 1.0)]);
        let df = DataLoader::load_table_from_bytes(TableKind::Summary, bytes).unwrap();
        assert_eq!(df.height(), 1);
    }

    #[test]
    fn missing_key_column_is_malformed() {
        let bytes = csv(&[header(None), row(None, 1.0)]);
        let err = DataLoader::load_table_from_bytes(TableKind::Teams, bytes).unwrap_err();
        assert!(err.to_string().contains("missing key column `Team`"));
    }

    #[test]
    fn missing_stat_column_is_malformed() {
        let bytes = csv(&["Season,PTS".to_string(), "2003-04,1654".to_string()]);
        let err = DataLoader::load_table_from_bytes(TableKind::Seasons, bytes).unwrap_err();
        assert!(err.to_string().contains("missing stat columns"));
        assert!(err.to_string().contains("FG%"));
    }

    #[test]
    fn short_row_is_rejected() {
        let short: Vec<String> = std::iter::once("2004-05".to_string())
            .chain((0..10).map(|i| i.to_string()))
            .collect();
        let bytes = csv(&[
            header(Some("Season")),
            row(Some("2003-04"), 0.0),
            short.join(","),
        ]);
        let err = DataLoader::load_table_from_bytes(TableKind::Seasons, bytes).unwrap_err();
        match err {
            LoaderError::MalformedData { table, message } => {
                assert_eq!(table, TableKind::Seasons);
                assert!(message.contains("row 2 has 11 fields, header has 27"), "{}", message);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn long_row_is_rejected() {
        let bytes = csv(&[
            header(Some("Team")),
            format!("{},99,100", row(Some("CLE"), 0.0)),
        ]);
        let err = DataLoader::load_table_from_bytes(TableKind::Teams, bytes).unwrap_err();
        assert!(err.to_string().contains("row 1 has 29 fields"));
    }

    #[test]
    fn duplicate_team_is_malformed() {
        let bytes = csv(&[
            header(Some("Team")),
            row(Some("CLE"), 1.0),
            row(Some("CLE"), 2.0),
        ]);
        let err = DataLoader::load_table_from_bytes(TableKind::Teams, bytes).unwrap_err();
        assert!(err.to_string().contains("duplicate `Team` value `CLE`"));
    }

    #[test]
    fn missing_file_is_reported() {
        let path = Path::new("definitely/not/here/summary.csv");
        let err = DataLoader::load_table(TableKind::Summary, path).unwrap_err();
        assert!(matches!(err, LoaderError::MissingFile { .. }));
    }

    #[test]
    fn load_reads_files_from_disk() {
        let dir = std::env::temp_dir().join(format!("courtside-loader-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let paths = DataPaths {
            seasons: dir.join("seasons.csv"),
            summary: dir.join("summary.csv"),
            teams: dir.join("teams.csv"),
        };
        std::fs::write(
            &paths.seasons,
            csv(&[header(Some("Season")), row(Some("2003-04"), 1.0)]),
        )
        .unwrap();
        std::fs::write(&paths.summary, csv(&[header(None), row(None, 5.0)])).unwrap();
        std::fs::write(
            &paths.teams,
            csv(&[header(Some("Team")), row(Some("LAL"), 3.0), row(Some("MIA"), 4.0)]),
        )
        .unwrap();

        let tables = DataLoader::load(&paths).unwrap();
        assert_eq!(tables.seasons().height(), 1);
        assert_eq!(tables.summary().height(), 1);
        assert_eq!(tables.teams().height(), 2);

        std::fs::remove_dir_all(&dir).ok();
    }
}
