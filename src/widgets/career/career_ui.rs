//! Career stats panel rendering.
//!
//! The stats payload is server-defined JSON; the panel renders whatever
//! object it finds as key/value rows and falls back to pretty-printed JSON
//! for anything else. Same three request states as the roster panel.

use eframe::egui;

use crate::core::query::QueryStatus;

/// Render the career panel for `name`. Returns true when the close button
/// was clicked.
pub fn render(
    ui: &mut egui::Ui,
    name: &str,
    status: &QueryStatus<serde_json::Value>,
) -> bool {
    let mut close = false;

    ui.horizontal(|ui| {
        ui.heading(name);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Close").clicked() {
                close = true;
            }
        });
    });
    ui.separator();

    match status {
        QueryStatus::Pending => {
            ui.vertical_centered(|ui| {
                ui.add_space(24.0);
                ui.spinner();
                ui.label("Loading career stats...");
            });
        }
        QueryStatus::Failed(msg) => {
            ui.add_space(8.0);
            ui.colored_label(ui.visuals().error_fg_color, msg);
        }
        QueryStatus::Ready(value) => {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    render_value(ui, value);
                });
        }
    }

    close
}

fn render_value(ui: &mut egui::Ui, value: &serde_json::Value) {
    // The endpoint wraps the payload as {player_name, career_stats: {...}};
    // unwrap that level when present so the grid shows the stats themselves.
    let stats = value.get("career_stats").unwrap_or(value);

    match stats {
        serde_json::Value::Object(map) => {
            egui::Grid::new("career_stats_grid")
                .num_columns(2)
                .striped(true)
                .show(ui, |ui| {
                    for (key, val) in map {
                        ui.monospace(key);
                        ui.label(scalar_text(val));
                        ui.end_row();
                    }
                });
        }
        other => {
            ui.monospace(
                serde_json::to_string_pretty(other).unwrap_or_else(|_| other.to_string()),
            );
        }
    }
}

fn scalar_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Null => "-".to_string(),
        other => other.to_string(),
    }
}
