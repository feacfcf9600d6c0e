//! COURTSIDE - Basketball roster browser library
//!
//! Re-exports all modules for use by the binary target.

// Core engine (query cache, fetch thread)
pub mod core;

// App modules
pub mod api;
pub mod cli;
pub mod paths;
pub mod status_bar;
pub mod widgets;

// Re-export commonly used types
pub use api::{ApiError, Order, PlayersClient, PlayersPage, PlayersQuery};
pub use core::query::{PageKey, QueryClient, QueryConfig, QueryStatus};
pub use widgets::roster::{RosterAction, RosterState};
