//! Stats module - Dashboard projections and number formatting

mod format;
mod projections;

pub use format::{format_count, format_percent};
pub use projections::{
    CareerMetric, MetricFormat, Presenter, ProjectionError, SeasonTrend, TeamComparison,
    TrendSeries, TrendTable, CAREER_METRICS,
};
