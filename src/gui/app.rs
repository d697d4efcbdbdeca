//! Courtside Main Application
//! Single scrolling page: season stats, career summary and per-team comparison.

use crate::charts::{ChartPlotter, StaticChartRenderer};
use crate::gui::{ControlPanel, ControlPanelAction, TableView};
use crate::session::{Session, FIXED_TRENDS};
use crate::stats::{CareerMetric, Presenter, SeasonTrend};
use egui::{Color32, RichText, ScrollArea};
use tracing::{error, info, warn};

const CHART_HEIGHT: f32 = 260.0;
const EXPORT_SIZE: (u32, u32) = (1200, 600);

/// Main application window.
pub struct DashboardApp {
    session: Session,
    player_name: String,
    status: Option<(String, bool)>,
}

impl DashboardApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, session: Session, player_name: String) -> Self {
        Self {
            session,
            player_name,
            status: None,
        }
    }

    fn section_header(ui: &mut egui::Ui, text: &str) {
        ui.add_space(16.0);
        ui.label(RichText::new(text).size(22.0).strong());
        ui.separator();
    }

    fn subheader(ui: &mut egui::Ui, text: &str) {
        ui.add_space(8.0);
        ui.label(RichText::new(text).size(16.0).strong());
    }

    fn show_error(ui: &mut egui::Ui, message: impl std::fmt::Display) {
        ui.label(
            RichText::new(format!("Error: {}", message))
                .color(Color32::from_rgb(220, 53, 69)),
        );
    }

    /// Draw a trend projection, or nothing when no stats are selected.
    fn show_trend(ui: &mut egui::Ui, id: &str, trend: &SeasonTrend) {
        match trend {
            SeasonTrend::NoChart => {}
            SeasonTrend::Chart(table) => {
                ChartPlotter::draw_trend_chart(ui, id, table, CHART_HEIGHT)
            }
        }
    }

    fn show_season_section(&mut self, ui: &mut egui::Ui) {
        Self::section_header(ui, "📊 Overall Per-Regular Season Stats");
        TableView::show_dataframe(ui, "seasons", self.session.tables().seasons());

        for (i, (title, stats)) in FIXED_TRENDS.iter().enumerate() {
            Self::subheader(ui, title);
            match Presenter::season_trend(self.session.tables(), stats) {
                Ok(trend) => Self::show_trend(ui, &format!("fixed_trend_{}", i), &trend),
                Err(e) => Self::show_error(ui, e),
            }
        }

        ui.add_space(12.0);
        ControlPanel::show_trend_picker(ui, &mut self.session);
        match self.session.season_trend() {
            Ok(trend) => Self::show_trend(ui, "custom_trend", &trend),
            Err(e) => Self::show_error(ui, e),
        }
    }

    fn metric_tile(ui: &mut egui::Ui, metric: &CareerMetric) {
        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(6.0)
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(RichText::new(metric.title).size(13.0).color(Color32::GRAY));
                ui.label(RichText::new(&metric.display).size(28.0).strong());
            });
    }

    fn show_career_section(&mut self, ui: &mut egui::Ui) {
        Self::section_header(
            ui,
            &format!("📈 {}: Career Summary", self.player_name),
        );
        Self::subheader(ui, "🏆 All-Time Career Totals and Averages");

        match self.session.career_metrics() {
            Ok(metrics) => {
                for row in metrics.chunks(3) {
                    ui.columns(3, |cols| {
                        for (col, metric) in cols.iter_mut().zip(row) {
                            Self::metric_tile(col, metric);
                        }
                    });
                    ui.add_space(6.0);
                }
            }
            Err(e) => Self::show_error(ui, e),
        }

        egui::CollapsingHeader::new("📋 View Full Career Summary Data")
            .id_salt("career_summary_raw")
            .show(ui, |ui| match self.session.summary_transposed() {
                Ok(rows) => TableView::show_pairs(ui, "summary", &rows),
                Err(e) => Self::show_error(ui, e),
            });
    }

    fn show_team_section(&mut self, ui: &mut egui::Ui) {
        Self::section_header(ui, "🏟 Per-Team Comparison");

        let action = ControlPanel::show_team_picker(ui, &mut self.session);
        match self.session.team_comparison() {
            Ok(comparison) => {
                Self::subheader(ui, &comparison.chart_title());
                ChartPlotter::draw_team_bars(ui, &comparison, CHART_HEIGHT + 60.0);
            }
            Err(e) => Self::show_error(ui, e),
        }

        if action == ControlPanelAction::ExportPng {
            self.handle_export_png();
        }

        if let Some((message, is_error)) = &self.status {
            let color = if *is_error {
                Color32::from_rgb(220, 53, 69)
            } else {
                Color32::from_rgb(40, 167, 69)
            };
            ui.label(RichText::new(message).size(11.0).color(color));
        }

        ui.add_space(8.0);
        TableView::show_dataframe(ui, "teams", self.session.tables().teams());
    }

    /// Render the current team comparison to a PNG chosen by the user.
    fn handle_export_png(&mut self) {
        let comparison = match self.session.team_comparison() {
            Ok(c) => c,
            Err(e) => {
                self.status = Some((format!("Export failed: {}", e), true));
                return;
            }
        };

        let file_name = format!("{}_by_team.png", comparison.stat.code().replace('%', "pct"));
        let Some(path) = rfd::FileDialog::new()
            .add_filter("PNG Image", &["png"])
            .set_file_name(file_name)
            .save_file()
        else {
            return; // User cancelled
        };

        let (width, height) = EXPORT_SIZE;
        match StaticChartRenderer::render_team_chart(&comparison, &path, width, height) {
            Ok(()) => {
                info!(path = %path.display(), stat = comparison.stat.code(), "exported team chart");
                self.status = Some((format!("Saved {}", path.display()), false));
                if let Err(e) = open::that(&path) {
                    warn!("could not open exported chart: {}", e);
                }
            }
            Err(e) => {
                error!("team chart export failed: {}", e);
                self.status = Some((format!("Export failed: {}", e), true));
            }
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.label(
                            RichText::new(format!(
                                "🏀 {} Career Statistics Dashboard",
                                self.player_name
                            ))
                            .size(28.0)
                            .color(Color32::from_rgb(100, 149, 237)),
                        );
                    });

                    self.show_season_section(ui);
                    self.show_career_section(ui);
                    self.show_team_section(ui);
                    ui.add_space(20.0);
                });
        });
    }
}
