//! Roster panel rendering.
//!
//! Renders exactly one of the three request states. Only the ready state
//! gets the header, the list and the pagination controls; pending and
//! failed states render their message and nothing else.

use eframe::egui;

use crate::api::PlayersPage;
use crate::core::query::QueryStatus;
use crate::widgets::roster::roster::{header_line, RosterAction, RosterActions, RosterState};

/// Render the roster panel for the current request status.
/// `selected` highlights the player whose stats panel is open.
pub fn render(
    ui: &mut egui::Ui,
    state: &RosterState,
    status: &QueryStatus<PlayersPage>,
    selected: Option<&str>,
) -> RosterActions {
    let mut actions = RosterActions::new();

    match status {
        QueryStatus::Pending => {
            ui.vertical_centered(|ui| {
                ui.add_space(24.0);
                ui.spinner();
                ui.label("Loading players...");
            });
        }
        QueryStatus::Failed(msg) => {
            ui.add_space(8.0);
            ui.colored_label(ui.visuals().error_fg_color, msg);
        }
        QueryStatus::Ready(page) => {
            ui.label(header_line(page));
            ui.separator();

            let list_height = (ui.available_height() - 32.0).max(0.0);
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .max_height(list_height)
                .show(ui, |ui| {
                    if page.players.is_empty() {
                        ui.add_space(20.0);
                        ui.vertical_centered(|ui| {
                            ui.colored_label(ui.visuals().weak_text_color(), "No players");
                        });
                        return;
                    }
                    // Server order, as delivered - no dedup, no sort
                    for name in &page.players {
                        let is_selected = selected == Some(name.as_str());
                        if ui.selectable_label(is_selected, name).clicked() {
                            actions.send(RosterAction::Select(name.clone()));
                        }
                    }
                });

            ui.separator();
            ui.horizontal(|ui| {
                if ui
                    .add_enabled(state.can_prev(), egui::Button::new("Previous"))
                    .clicked()
                {
                    actions.send(RosterAction::PrevPage);
                }
                if ui
                    .add_enabled(state.can_next(Some(page)), egui::Button::new("Next"))
                    .clicked()
                {
                    actions.send(RosterAction::NextPage);
                }
            });
        }
    }

    actions
}
