use eframe::egui;

use crate::api::PlayersPage;
use crate::core::query::{CacheStats, QueryStatus};
use crate::widgets::roster::RosterState;

/// Status bar component (server, page window, fetch state, cache counters)
pub struct StatusBar;

impl StatusBar {
    pub fn new() -> Self {
        Self
    }

    /// Render status bar at bottom of screen
    pub fn render(
        &self,
        ctx: &egui::Context,
        server: &str,
        roster: &RosterState,
        status: &QueryStatus<PlayersPage>,
        stats: &CacheStats,
    ) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.monospace(server);

                ui.separator();

                // Page window (1-based for display)
                match status {
                    QueryStatus::Pending => {
                        ui.monospace("loading...");
                    }
                    QueryStatus::Failed(_) => {
                        ui.monospace("error");
                    }
                    QueryStatus::Ready(page) => {
                        if page.count == 0 {
                            ui.monospace("0 of 0");
                        } else {
                            ui.monospace(format!(
                                "{}-{} of {}",
                                page.offset + 1,
                                page.offset + page.count,
                                page.total
                            ));
                        }
                    }
                }

                ui.separator();

                ui.monospace(format!("page size {}", roster.limit()));

                ui.separator();

                ui.monospace(format!(
                    "cache {}h/{}m ({:.0}%)",
                    stats.hits(),
                    stats.misses(),
                    stats.hit_rate() * 100.0
                ));
            });
        });
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}
