//! Control Panel Widgets
//! Stat selectors for the season chart and the team comparison.

use crate::data::{list_labels, StatCode};
use crate::session::Session;
use egui::{ComboBox, RichText, ScrollArea};
use tracing::warn;

/// Actions triggered by the controls
#[derive(Debug, Clone, PartialEq)]
pub enum ControlPanelAction {
    None,
    ExportPng,
}

pub struct ControlPanel;

impl ControlPanel {
    /// Multi-select of season stats, populated from the label table.
    pub fn show_trend_picker(ui: &mut egui::Ui, session: &mut Session) {
        let selected: Vec<&str> = session
            .selections
            .trend_stats
            .iter()
            .map(|s| s.label())
            .collect();
        let summary = if selected.is_empty() {
            "None selected".to_string()
        } else {
            selected.join(", ")
        };

        ui.label(RichText::new("Select Statistics to Visualize:").strong());
        ui.horizontal(|ui| {
            ComboBox::from_id_salt("trend_stats")
                .width(420.0)
                .selected_text(summary)
                .show_ui(ui, |ui| {
                    ScrollArea::vertical().max_height(300.0).show(ui, |ui| {
                        for label in list_labels() {
                            let stat = match StatCode::from_label(label) {
                                Ok(stat) => stat,
                                Err(e) => {
                                    warn!("{}", e);
                                    continue;
                                }
                            };
                            let mut checked = session.is_trend_selected(stat);
                            if ui.checkbox(&mut checked, label).changed() {
                                session.set_trend_selected(stat, checked);
                            }
                        }
                    });
                });

            if ui.small_button("Clear All").clicked() {
                session.selections.trend_stats.clear();
            }
        });
    }

    /// Single-select of the stat compared across teams, plus the export button.
    pub fn show_team_picker(ui: &mut egui::Ui, session: &mut Session) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;
        let current = session.selections.team_stat.label();

        ui.horizontal(|ui| {
            ui.label("Choose a stat to compare across teams:");
            ComboBox::from_id_salt("team_bar_metric")
                .width(220.0)
                .selected_text(current)
                .show_ui(ui, |ui| {
                    for label in list_labels() {
                        if ui.selectable_label(label == current, label).clicked() {
                            if let Err(e) = session.select_team_label(label) {
                                warn!("{}", e);
                            }
                        }
                    }
                });

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("🖼 Export PNG").clicked() {
                    action = ControlPanelAction::ExportPng;
                }
            });
        });

        action
    }
}
