//! Dashboard Session
//! Loaded tables plus the current user selections, passed explicitly into every projection.

use crate::data::{LabelError, StatCode, StatTables};
use crate::stats::{CareerMetric, Presenter, ProjectionError, SeasonTrend, TeamComparison};
use tracing::info;

/// Fixed season charts shown above the custom selection.
pub const FIXED_TRENDS: [(&str, &[StatCode]); 2] = [
    ("Field Goals Per Game Over Seasons", &[StatCode::FieldGoals]),
    (
        "Assists and Rebounds Per Game Over Seasons",
        &[StatCode::Assists, StatCode::TotalRebounds],
    ),
];

/// Current selector values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selections {
    /// Stats drawn on the custom season chart, in selection order.
    pub trend_stats: Vec<StatCode>,
    /// Stat compared across teams.
    pub team_stat: StatCode,
}

impl Default for Selections {
    fn default() -> Self {
        Self {
            trend_stats: vec![StatCode::FieldGoals],
            team_stat: StatCode::ALL[0],
        }
    }
}

/// One dashboard session over immutable tables.
pub struct Session {
    tables: StatTables,
    pub selections: Selections,
}

impl Session {
    pub fn new(tables: StatTables) -> Self {
        Self {
            tables,
            selections: Selections::default(),
        }
    }

    pub fn tables(&self) -> &StatTables {
        &self.tables
    }

    /// Whether `stat` is on the custom season chart.
    pub fn is_trend_selected(&self, stat: StatCode) -> bool {
        self.selections.trend_stats.contains(&stat)
    }

    /// Add or remove a stat from the custom season chart.
    pub fn set_trend_selected(&mut self, stat: StatCode, selected: bool) {
        let stats = &mut self.selections.trend_stats;
        match (selected, stats.contains(&stat)) {
            (true, false) => stats.push(stat),
            (false, true) => stats.retain(|s| *s != stat),
            _ => return,
        }
        info!(stat = stat.code(), selected, "season trend selection changed");
    }

    /// Pick the team comparison stat from its display label.
    pub fn select_team_label(&mut self, label: &str) -> Result<(), LabelError> {
        self.set_team_stat(StatCode::from_label(label)?);
        Ok(())
    }

    pub fn set_team_stat(&mut self, stat: StatCode) {
        if self.selections.team_stat != stat {
            info!(stat = stat.code(), "team comparison stat changed");
            self.selections.team_stat = stat;
        }
    }

    pub fn season_trend(&self) -> Result<SeasonTrend, ProjectionError> {
        Presenter::season_trend(&self.tables, &self.selections.trend_stats)
    }

    pub fn career_metrics(&self) -> Result<Vec<CareerMetric>, ProjectionError> {
        Presenter::career_metrics(&self.tables)
    }

    pub fn team_comparison(&self) -> Result<TeamComparison, ProjectionError> {
        Presenter::team_comparison(&self.tables, self.selections.team_stat)
    }

    pub fn summary_transposed(&self) -> Result<Vec<(String, String)>, ProjectionError> {
        Presenter::summary_transposed(&self.tables)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::*;

    fn session() -> Session {
        let seasons = df!(
            "Season" => ["2003-04", "2004-05"],
            "FG" => [532i64, 624],
            "AST" => [465i64, 577],
            "TRB" => [432i64, 588]
        )
        .unwrap();
        let teams = df!(
            "Team" => ["CLE", "MIA", "LAL"],
            "G" => [849i64, 294, 419],
            "PTS" => [23119i64, 7919, 7614]
        )
        .unwrap();
        Session::new(StatTables::new(seasons, DataFrame::empty(), teams))
    }

    #[test]
    fn defaults_match_initial_widgets() {
        let s = session();
        assert_eq!(s.selections.trend_stats, vec![StatCode::FieldGoals]);
        assert_eq!(s.selections.team_stat, StatCode::Games);
    }

    #[test]
    fn toggling_trend_stats() {
        let mut s = session();
        s.set_trend_selected(StatCode::Assists, true);
        s.set_trend_selected(StatCode::Assists, true);
        assert_eq!(
            s.selections.trend_stats,
            vec![StatCode::FieldGoals, StatCode::Assists]
        );
        s.set_trend_selected(StatCode::FieldGoals, false);
        assert!(!s.is_trend_selected(StatCode::FieldGoals));
        s.set_trend_selected(StatCode::Assists, false);
        assert_eq!(s.season_trend().unwrap(), SeasonTrend::NoChart);
    }

    #[test]
    fn team_label_translates_to_selection() {
        let mut s = session();
        s.select_team_label("Points").unwrap();
        let cmp = s.team_comparison().unwrap();
        assert_eq!(cmp.title, "Points");
        assert_eq!(cmp.bars[1], ("MIA".to_string(), Some(7919.0)));
    }

    #[test]
    fn unknown_label_leaves_selection_untouched() {
        let mut s = session();
        assert!(s.select_team_label("Dunks").is_err());
        assert_eq!(s.selections.team_stat, StatCode::Games);
    }

    #[test]
    fn fixed_trends_project() {
        let s = session();
        for (_, stats) in FIXED_TRENDS {
            let trend = Presenter::season_trend(s.tables(), stats).unwrap();
            assert!(matches!(trend, SeasonTrend::Chart(_)));
        }
    }
}
