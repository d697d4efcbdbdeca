//! Table View Widget
//! Raw table display for the full-data panels.

use egui::{RichText, ScrollArea};
use polars::prelude::*;

const MAX_TABLE_HEIGHT: f32 = 320.0;

/// Draws DataFrames and key/value pairs as striped grids.
pub struct TableView;

impl TableView {
    /// Text for one cell; nulls are blank and string quotes are dropped.
    pub fn cell_text(value: &AnyValue) -> String {
        if value.is_null() {
            String::new()
        } else {
            value.to_string().trim_matches('"').to_string()
        }
    }

    /// Show every row and column of `df` unmodified.
    pub fn show_dataframe(ui: &mut egui::Ui, id: &str, df: &DataFrame) {
        ScrollArea::both()
            .id_salt(id)
            .max_height(MAX_TABLE_HEIGHT)
            .auto_shrink([false, true])
            .show(ui, |ui| {
                egui::Grid::new(ui.make_persistent_id(format!("grid_{}", id)))
                    .striped(true)
                    .min_col_width(40.0)
                    .spacing([12.0, 4.0])
                    .show(ui, |ui| {
                        for name in df.get_column_names() {
                            ui.label(RichText::new(name.as_str()).strong().size(12.0));
                        }
                        ui.end_row();

                        for row in 0..df.height() {
                            for column in df.get_columns() {
                                let text = column
                                    .get(row)
                                    .map(|v| Self::cell_text(&v))
                                    .unwrap_or_default();
                                ui.label(RichText::new(text).size(12.0));
                            }
                            ui.end_row();
                        }
                    });
            });
    }

    /// Two-column `(Statistic, Value)` grid.
    pub fn show_pairs(ui: &mut egui::Ui, id: &str, rows: &[(String, String)]) {
        egui::Grid::new(ui.make_persistent_id(format!("pairs_{}", id)))
            .striped(true)
            .min_col_width(80.0)
            .spacing([12.0, 4.0])
            .show(ui, |ui| {
                ui.label(RichText::new("Statistic").strong().size(12.0));
                ui.label(RichText::new("Value").strong().size(12.0));
                ui.end_row();

                for (stat, value) in rows {
                    ui.label(RichText::new(stat).size(12.0));
                    ui.label(RichText::new(value).size(12.0));
                    ui.end_row();
                }
            });
    }
}
