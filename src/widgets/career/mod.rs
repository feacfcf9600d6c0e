//! Career stats panel widget
//!
//! Key/value view of a selected player's career totals and averages.

pub mod career_ui;

pub use career_ui::render;
