//! Chart Plotter Module
//! Interactive season line charts and team bar charts using egui_plot.

use crate::stats::{TeamComparison, TrendTable};
use egui::Color32;
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoints, Points};

pub const PALETTE: [Color32; 10] = [
    Color32::from_rgb(52, 152, 219), // Blue
    Color32::from_rgb(231, 76, 60),  // Red
    Color32::from_rgb(46, 204, 113), // Green
    Color32::from_rgb(155, 89, 182), // Purple
    Color32::from_rgb(243, 156, 18), // Orange
    Color32::from_rgb(26, 188, 156), // Teal
    Color32::from_rgb(233, 30, 99),  // Pink
    Color32::from_rgb(0, 188, 212),  // Cyan
    Color32::from_rgb(255, 87, 34),  // Deep Orange
    Color32::from_rgb(121, 85, 72),  // Brown
];

/// Draws dashboard charts with egui_plot.
pub struct ChartPlotter;

impl ChartPlotter {
    pub fn series_color(index: usize) -> Color32 {
        PALETTE[index % PALETTE.len()]
    }

    /// Split a series into contiguous runs of present values (x = row index).
    pub fn segments(values: &[Option<f64>]) -> Vec<Vec<[f64; 2]>> {
        let mut segments = Vec::new();
        let mut current: Vec<[f64; 2]> = Vec::new();

        for (i, value) in values.iter().enumerate() {
            match value {
                Some(v) if v.is_finite() => current.push([i as f64, *v]),
                _ => {
                    if !current.is_empty() {
                        segments.push(std::mem::take(&mut current));
                    }
                }
            }
        }
        if !current.is_empty() {
            segments.push(current);
        }
        segments
    }

    /// Label for an axis mark that lands on a category index.
    pub fn category_label(labels: &[String], value: f64) -> String {
        let idx = value.round();
        if (value - idx).abs() > 1e-6 || idx < 0.0 {
            return String::new();
        }
        labels.get(idx as usize).cloned().unwrap_or_default()
    }

    /// Line chart with one line per selected stat, seasons along the x-axis.
    pub fn draw_trend_chart(ui: &mut egui::Ui, id: &str, table: &TrendTable, height: f32) {
        let seasons = table.seasons.clone();

        Plot::new(id)
            .height(height)
            .legend(Legend::default())
            .allow_scroll(false)
            .x_axis_label("Season")
            .x_axis_formatter(move |mark, _range| Self::category_label(&seasons, mark.value))
            .show(ui, |plot_ui| {
                for (i, series) in table.series.iter().enumerate() {
                    let color = Self::series_color(i);
                    let name = series.stat.label();

                    for segment in Self::segments(&series.values) {
                        plot_ui.line(
                            Line::new(PlotPoints::from(segment.clone()))
                                .color(color)
                                .width(2.0)
                                .name(name),
                        );
                        plot_ui.points(
                            Points::new(PlotPoints::from(segment))
                                .radius(2.5)
                                .color(color)
                                .name(name),
                        );
                    }
                }
            });
    }

    /// One bar per team, coloured per team. Teams without a value keep their slot.
    pub fn draw_team_bars(ui: &mut egui::Ui, comparison: &TeamComparison, height: f32) {
        let teams: Vec<String> = comparison.bars.iter().map(|(t, _)| t.clone()).collect();

        let bars: Vec<Bar> = comparison
            .bars
            .iter()
            .enumerate()
            .filter_map(|(i, (team, value))| {
                let value = (*value)?;
                Some(
                    Bar::new(i as f64, value)
                        .name(team)
                        .width(0.7)
                        .fill(Self::series_color(i)),
                )
            })
            .collect();

        Plot::new("team_comparison")
            .height(height)
            .allow_scroll(false)
            .allow_drag(false)
            .x_axis_label(comparison.x_label())
            .y_axis_label(comparison.y_label())
            .x_axis_formatter(move |mark, _range| Self::category_label(&teams, mark.value))
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new(bars).name(comparison.y_label()));
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_break_on_gaps() {
        let values = [Some(1.0), Some(2.0), None, Some(4.0), Some(f64::NAN)];
        let segments = ChartPlotter::segments(&values);
        assert_eq!(
            segments,
            vec![vec![[0.0, 1.0], [1.0, 2.0]], vec![[3.0, 4.0]]]
        );
    }

    #[test]
    fn segments_of_all_missing_is_empty() {
        assert!(ChartPlotter::segments(&[None, None]).is_empty());
    }

    #[test]
    fn category_labels_only_on_whole_indices() {
        let labels = vec!["2003-04".to_string(), "2004-05".to_string()];
        assert_eq!(ChartPlotter::category_label(&labels, 1.0), "2004-05");
        assert_eq!(ChartPlotter::category_label(&labels, 0.5), "");
        assert_eq!(ChartPlotter::category_label(&labels, 2.0), "");
        assert_eq!(ChartPlotter::category_label(&labels, -1.0), "");
    }

    #[test]
    fn colors_cycle() {
        assert_eq!(ChartPlotter::series_color(0), ChartPlotter::series_color(10));
    }
}
