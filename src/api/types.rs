//! Wire types for the players API.
//!
//! The page response is the only shape modeled as a typed struct; the
//! per-player stats endpoints return server-defined JSON that the UI treats
//! as opaque key/value data, so those stay `serde_json::Value` at the
//! boundary.

use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;

/// Sort order for the player collection, passed through to the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Order {
    Asc,
    Desc,
}

impl Order {
    /// Query-parameter representation ("asc" / "desc").
    pub fn as_str(self) -> &'static str {
        match self {
            Order::Asc => "asc",
            Order::Desc => "desc",
        }
    }
}

/// Query parameters for the player collection endpoint.
///
/// All fields are optional; absent fields are omitted from the query string
/// entirely rather than sent as empty values.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlayersQuery {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub order: Option<Order>,
}

/// One page of the player collection.
///
/// `count` is the size of this page, `total` the size of the full
/// collection; `offset` and `limit` echo the request. `players` is kept in
/// server order - no dedup, no client-side sort.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayersPage {
    pub players: Vec<String>,
    pub count: u32,
    pub total: u32,
    pub offset: u32,
    pub limit: Option<u32>,
}

impl PlayersPage {
    /// Consistency check applied at the client boundary: the advertised
    /// page size must match the number of names actually delivered.
    pub fn validate(self) -> Result<Self, ApiError> {
        if self.count as usize != self.players.len() {
            return Err(ApiError::Decode(format!(
                "page count {} does not match {} delivered players",
                self.count,
                self.players.len()
            )));
        }
        Ok(self)
    }
}
