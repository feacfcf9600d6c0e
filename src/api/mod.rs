//! HTTP boundary: typed client, wire types and error taxonomy for the
//! players REST API.

pub mod client;
pub mod error;
pub mod types;

pub use client::PlayersClient;
pub use error::ApiError;
pub use types::{Order, PlayersPage, PlayersQuery};
