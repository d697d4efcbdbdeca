//! Static Chart Renderer
//! Renders the team comparison as a PNG bar chart with plotters.
//!
//! Layout:
//! 1. Title: "{label} by Team" centered
//! 2. One coloured bar per team, team names along the x-axis
//! 3. Axis descriptions "Teams" and the stat label

use crate::stats::TeamComparison;
use plotters::prelude::*;
use std::path::Path;
use thiserror::Error;

const BAR_COLORS: [RGBColor; 8] = [
    RGBColor(91, 155, 213),
    RGBColor(237, 125, 49),
    RGBColor(112, 173, 71),
    RGBColor(155, 89, 182),
    RGBColor(255, 192, 0),
    RGBColor(26, 188, 156),
    RGBColor(233, 30, 99),
    RGBColor(121, 85, 72),
];

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Nothing to render: no team values for {0}")]
    Empty(String),
    #[error("Chart drawing failed: {0}")]
    Drawing(String),
}

pub struct StaticChartRenderer;

impl StaticChartRenderer {
    /// Y-axis range with headroom above the tallest bar; includes zero.
    pub fn value_range(comparison: &TeamComparison) -> (f64, f64) {
        let (min, max) = comparison
            .bars
            .iter()
            .filter_map(|(_, v)| *v)
            .fold((0.0f64, 0.0f64), |(lo, hi), v| (lo.min(v), hi.max(v)));
        let pad = ((max - min) * 0.1).max(1.0);
        (if min < 0.0 { min - pad } else { 0.0 }, max + pad)
    }

    /// Write the bar chart to `path` as a PNG of `width` x `height` pixels.
    pub fn render_team_chart(
        comparison: &TeamComparison,
        path: &Path,
        width: u32,
        height: u32,
    ) -> Result<(), RenderError> {
        if comparison.bars.iter().all(|(_, v)| v.is_none()) {
            return Err(RenderError::Empty(comparison.title.clone()));
        }
        Self::draw(comparison, path, width, height).map_err(|e| RenderError::Drawing(e.to_string()))
    }

    fn draw(
        comparison: &TeamComparison,
        path: &Path,
        width: u32,
        height: u32,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let teams: Vec<String> = comparison.bars.iter().map(|(t, _)| t.clone()).collect();
        let (y_min, y_max) = Self::value_range(comparison);

        let root = BitMapBackend::new(path, (width, height)).into_drawing_area();
        root.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(comparison.chart_title(), ("sans-serif", 28))
            .margin(20)
            .x_label_area_size(60)
            .y_label_area_size(80)
            .build_cartesian_2d((0..teams.len()).into_segmented(), y_min..y_max)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_desc(comparison.x_label())
            .y_desc(comparison.y_label())
            .x_labels(teams.len())
            .x_label_formatter(&|v| match v {
                SegmentValue::CenterOf(i) => teams.get(*i).cloned().unwrap_or_default(),
                _ => String::new(),
            })
            .draw()?;

        chart.draw_series(comparison.bars.iter().enumerate().filter_map(|(i, (_, value))| {
            let color = BAR_COLORS[i % BAR_COLORS.len()];
            Some(Rectangle::new(
                [
                    (SegmentValue::Exact(i), 0.0),
                    (SegmentValue::Exact(i + 1), (*value)?),
                ],
                color.filled(),
            ))
        }))?;

        root.present()?;
        Ok(())
    }
}
