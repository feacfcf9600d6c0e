//! Roster panel widget
//!
//! Paginated list of player names with previous/next controls.

mod roster;
pub mod roster_ui;

pub use roster::{RosterAction, RosterActions, RosterState};
pub use roster_ui::render;
