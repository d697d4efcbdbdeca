//! Dashboard Projections Module
//! Pure views over the loaded tables: season trends, career metrics and team comparison.

use crate::data::{
    is_numeric_dtype, stat_values, string_values, StatCode, StatTables, SEASON_COLUMN,
    TEAM_COLUMN,
};
use crate::stats::format::{format_count, format_percent};
use polars::prelude::*;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum ProjectionError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
    #[error("Career value for {code} is not numeric")]
    Formatting { code: &'static str },
}

/// One line on the season trend chart.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendSeries {
    pub stat: StatCode,
    /// One entry per season; `None` leaves a gap.
    pub values: Vec<Option<f64>>,
}

/// Season-indexed subset of the season table.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendTable {
    pub seasons: Vec<String>,
    pub series: Vec<TrendSeries>,
}

/// Result of the season trend projection.
#[derive(Debug, Clone, PartialEq)]
pub enum SeasonTrend {
    /// Nothing selected: draw no chart.
    NoChart,
    Chart(TrendTable),
}

/// How a career metric is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricFormat {
    Count,
    Percent,
}

/// One formatted metric tile.
#[derive(Debug, Clone, PartialEq)]
pub struct CareerMetric {
    pub title: &'static str,
    pub stat: StatCode,
    pub display: String,
}

/// Career tiles, in display order (three rows of three).
pub const CAREER_METRICS: [(&str, StatCode, MetricFormat); 9] = [
    ("Total Points", StatCode::Points, MetricFormat::Count),
    ("Total Assists", StatCode::Assists, MetricFormat::Count),
    ("Total Rebounds", StatCode::TotalRebounds, MetricFormat::Count),
    ("Games Played", StatCode::Games, MetricFormat::Count),
    ("Field Goals Made", StatCode::FieldGoals, MetricFormat::Count),
    ("Free Throws Made", StatCode::FreeThrows, MetricFormat::Count),
    ("FG%", StatCode::FieldGoalPct, MetricFormat::Percent),
    ("3P%", StatCode::ThreePointPct, MetricFormat::Percent),
    ("FT%", StatCode::FreeThrowPct, MetricFormat::Percent),
];

/// Per-team values for one stat.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamComparison {
    pub stat: StatCode,
    /// Display label of the compared stat.
    pub title: String,
    /// `(team, value)` for every team in file order. `None` is an empty bar.
    pub bars: Vec<(String, Option<f64>)>,
}

impl TeamComparison {
    pub fn chart_title(&self) -> String {
        format!("{} by Team", self.title)
    }

    pub fn x_label(&self) -> &'static str {
        "Teams"
    }

    pub fn y_label(&self) -> &str {
        &self.title
    }
}

/// Stateless projections over `StatTables`.
pub struct Presenter;

impl Presenter {
    /// Season table indexed by `Season`, restricted to `selected` columns.
    pub fn season_trend(
        tables: &StatTables,
        selected: &[StatCode],
    ) -> Result<SeasonTrend, ProjectionError> {
        if selected.is_empty() {
            return Ok(SeasonTrend::NoChart);
        }

        let df = tables.seasons();
        let seasons = string_values(df, SEASON_COLUMN)?
            .into_iter()
            .map(Option::unwrap_or_default)
            .collect();

        let mut series: Vec<TrendSeries> = Vec::with_capacity(selected.len());
        for &stat in selected {
            if series.iter().any(|s| s.stat == stat) {
                continue;
            }
            series.push(TrendSeries {
                stat,
                values: stat_values(df, stat)?,
            });
        }

        debug!(stats = series.len(), "season trend projected");
        Ok(SeasonTrend::Chart(TrendTable { seasons, series }))
    }

    /// The nine formatted career tiles from the single summary row.
    pub fn career_metrics(tables: &StatTables) -> Result<Vec<CareerMetric>, ProjectionError> {
        let df = tables.summary();
        CAREER_METRICS
            .iter()
            .map(|&(title, stat, format)| {
                let value = Self::summary_value(df, stat)?;
                let display = match format {
                    MetricFormat::Count => format_count(value),
                    MetricFormat::Percent => format_percent(value),
                };
                Ok(CareerMetric {
                    title,
                    stat,
                    display,
                })
            })
            .collect()
    }

    /// Numeric value of `stat` in the first summary row.
    fn summary_value(df: &DataFrame, stat: StatCode) -> Result<f64, ProjectionError> {
        let formatting = || ProjectionError::Formatting { code: stat.code() };

        if !is_numeric_dtype(df.column(stat.code())?.dtype()) {
            return Err(formatting());
        }
        stat_values(df, stat)?
            .first()
            .copied()
            .flatten()
            .filter(|v| v.is_finite())
            .ok_or_else(formatting)
    }

    /// `(team, value)` pairs for one stat, titled with its label.
    pub fn team_comparison(
        tables: &StatTables,
        stat: StatCode,
    ) -> Result<TeamComparison, ProjectionError> {
        let df = tables.teams();
        let teams = string_values(df, TEAM_COLUMN)?;
        let values = stat_values(df, stat)?;

        let bars = teams
            .into_iter()
            .zip(values)
            .filter_map(|(team, value)| Some((team?, value.filter(|v| v.is_finite()))))
            .collect();

        Ok(TeamComparison {
            stat,
            title: stat.label().to_string(),
            bars,
        })
    }

    /// Career summary as `(Statistic, Value)` rows for the raw data panel.
    pub fn summary_transposed(tables: &StatTables) -> Result<Vec<(String, String)>, ProjectionError> {
        let df = tables.summary();
        let mut rows = Vec::with_capacity(df.width());
        for column in df.get_columns() {
            let value = column.get(0)?;
            let text = if value.is_null() {
                String::new()
            } else {
                value.to_string().trim_matches('"').to_string()
            };
            rows.push((column.name().to_string(), text));
        }
        Ok(rows)
    }
}
