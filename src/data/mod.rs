//! Data module - CSV loading, table access and stat labels

mod labels;
mod loader;
mod tables;

pub use labels::{list_labels, to_code, to_label, LabelError, StatCode};
pub use loader::{DataLoader, DataPaths, LoaderError};
pub use tables::{
    is_numeric_dtype, stat_values, string_values, StatTables, TableKind, SEASON_COLUMN,
    TEAM_COLUMN,
};
