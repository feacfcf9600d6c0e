//! Thin synchronous client for the players REST API.
//!
//! Each operation is a single GET against the base path; query parameters
//! are passed through unmodified and player names are percent-encoded in
//! path segments. No retry, no transformation - transport errors and
//! non-2xx statuses map straight to [`ApiError`] for the caller to handle.
//!
//! URL construction is split into dedicated builder methods so the exact
//! request shape can be unit-tested without a server.

use std::time::Duration;

use log::debug;

use crate::api::error::ApiError;
use crate::api::types::{PlayersPage, PlayersQuery};

/// Timeout for a whole request/response round-trip.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Synchronous client for the players API, safe to move to a worker thread.
///
/// Holds only the configured agent and a normalized base URL; carries no
/// mutable state between calls.
#[derive(Clone)]
pub struct PlayersClient {
    agent: ureq::Agent,
    base_url: String,
}

impl PlayersClient {
    /// `base_url` should include the API prefix, e.g.
    /// `http://127.0.0.1:8000/api/v1`. A trailing slash is stripped.
    pub fn new(base_url: &str) -> Self {
        // Non-2xx statuses come back as data, not Err - status
        // interpretation happens in `get()` so the body survives.
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(Some(REQUEST_TIMEOUT))
            .build()
            .new_agent();

        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `/players?limit=&offset=&order=` - one page of player names.
    ///
    /// The response is type-checked and validated (`count` must match the
    /// delivered names) before being returned.
    pub fn get_all_players(&self, query: &PlayersQuery) -> Result<PlayersPage, ApiError> {
        let body = self.get(&self.players_url(query))?;
        let page: PlayersPage =
            serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))?;
        page.validate()
    }

    /// GET `/players/{name}/stats[?season_id=]` - per-season stats for one
    /// player. The payload shape is server-defined and returned opaquely.
    pub fn get_player_stats(
        &self,
        name: &str,
        season_id: Option<u32>,
    ) -> Result<serde_json::Value, ApiError> {
        let body = self.get(&self.player_stats_url(name, season_id))?;
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// GET `/players/{name}/career_stats` - career totals and averages.
    pub fn get_player_career_stats(&self, name: &str) -> Result<serde_json::Value, ApiError> {
        let body = self.get(&self.player_career_stats_url(name))?;
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// GET `/players/{name}/seasons` - the seasons a player appeared in.
    pub fn get_player_seasons(&self, name: &str) -> Result<serde_json::Value, ApiError> {
        let body = self.get(&self.player_seasons_url(name))?;
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    // ---- URL builders ----

    fn players_url(&self, query: &PlayersQuery) -> String {
        let mut params: Vec<String> = Vec::new();
        if let Some(limit) = query.limit {
            params.push(format!("limit={limit}"));
        }
        if let Some(offset) = query.offset {
            params.push(format!("offset={offset}"));
        }
        if let Some(order) = query.order {
            params.push(format!("order={}", order.as_str()));
        }
        if params.is_empty() {
            format!("{}/players", self.base_url)
        } else {
            format!("{}/players?{}", self.base_url, params.join("&"))
        }
    }

    fn player_stats_url(&self, name: &str, season_id: Option<u32>) -> String {
        let mut url = format!(
            "{}/players/{}/stats",
            self.base_url,
            urlencoding::encode(name)
        );
        if let Some(season) = season_id {
            url.push_str(&format!("?season_id={season}"));
        }
        url
    }

    fn player_career_stats_url(&self, name: &str) -> String {
        format!(
            "{}/players/{}/career_stats",
            self.base_url,
            urlencoding::encode(name)
        )
    }

    fn player_seasons_url(&self, name: &str) -> String {
        format!(
            "{}/players/{}/seasons",
            self.base_url,
            urlencoding::encode(name)
        )
    }

    /// Execute a GET and return the body of a 2xx response.
    fn get(&self, url: &str) -> Result<String, ApiError> {
        debug!("GET {url}");
        let mut response = self
            .agent
            .get(url)
            .call()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !(200..300).contains(&status) {
            return Err(ApiError::Http { status, body });
        }
        Ok(body)
    }
}
