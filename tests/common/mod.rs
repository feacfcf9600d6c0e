#![allow(dead_code)]

//! In-process mock of the players API for integration tests.
//!
//! Serves the `/api/v1` surface on a random port and records every raw
//! request URL so tests can assert on encoding, parameters and request
//! counts. `fail_next(n)` makes the next `n` requests answer 500, which is
//! how the retry tests drive the failure paths.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use rouille::{Request, Response, Server};
use serde::Serialize;
use serde_json::json;

pub const PLAYERS: &[&str] = &[
    "Allen Iverson",
    "Charles Barkley",
    "Kareem Abdul-Jabbar",
    "Kevin Garnett",
    "Kobe Bryant",
    "Larry Bird",
    "Magic Johnson",
    "Michael Jordan",
    "Scottie Pippen",
    "Shaquille O'Neal",
    "Tim Duncan",
    "Vince Carter",
];

#[derive(Serialize)]
struct PageBody {
    players: Vec<String>,
    count: u32,
    total: u32,
    offset: u32,
    limit: Option<u32>,
}

pub struct MockApi {
    pub base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
    failures: Arc<AtomicUsize>,
    stop: Option<std::sync::mpsc::Sender<()>>,
    handle: Option<std::thread::JoinHandle<()>>,
}

impl MockApi {
    pub fn start() -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let failures = Arc::new(AtomicUsize::new(0));

        let request_log = Arc::clone(&requests);
        let fail_budget = Arc::clone(&failures);
        let server = Server::new("127.0.0.1:0", move |request| {
            handle(request, &request_log, &fail_budget)
        })
        .expect("failed to start mock server");

        let base_url = format!("http://{}/api/v1", server.server_addr());
        let (handle, stop) = server.stoppable();

        Self {
            base_url,
            requests,
            failures,
            stop: Some(stop),
            handle: Some(handle),
        }
    }

    /// Raw request URLs (path + query, percent-encoded as received), in
    /// arrival order.
    pub fn raw_requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Answer the next `n` requests with a 500 before serving normally.
    pub fn fail_next(&self, n: usize) {
        self.failures.store(n, Ordering::SeqCst);
    }
}

impl Drop for MockApi {
    fn drop(&mut self) {
        if let Some(stop) = self.stop.take() {
            let _ = stop.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

fn handle(request: &Request, log: &Mutex<Vec<String>>, failures: &AtomicUsize) -> Response {
    log.lock().unwrap().push(request.raw_url().to_string());

    let remaining = failures.load(Ordering::SeqCst);
    if remaining > 0 {
        failures.store(remaining - 1, Ordering::SeqCst);
        return Response::text("internal error").with_status_code(500);
    }

    let url = request.url();
    if url == "/api/v1/players" {
        return players_response(request);
    }
    if let Some(rest) = url.strip_prefix("/api/v1/players/") {
        if let Some(name) = rest.strip_suffix("/career_stats") {
            return Response::json(&json!({
                "player_name": name,
                "career_stats": {
                    "games": 1072,
                    "points": 25192,
                    "rebounds": 10541,
                    "ppg": 23.7,
                }
            }));
        }
        if let Some(name) = rest.strip_suffix("/stats") {
            let season = request.get_param("season_id");
            return Response::json(&json!({
                "player_name": name,
                "stats": [{"season_id": season, "pts": 1832, "reb": 803}],
                "count": 1,
            }));
        }
        if let Some(name) = rest.strip_suffix("/seasons") {
            return Response::json(&json!({
                "player_name": name,
                "seasons": ["1996-97", "1997-98", "1998-99"],
                "count": 3,
            }));
        }
    }
    Response::empty_404()
}

fn players_response(request: &Request) -> Response {
    let offset: u32 = request
        .get_param("offset")
        .and_then(|v| v.parse().ok())
        .unwrap_or(0);
    let limit: Option<u32> = request.get_param("limit").and_then(|v| v.parse().ok());
    let order = request.get_param("order").unwrap_or_else(|| "asc".to_string());

    let mut names: Vec<String> = PLAYERS.iter().map(|s| s.to_string()).collect();
    names.sort();
    if order == "desc" {
        names.reverse();
    }

    let total = names.len() as u32;
    let players: Vec<String> = match limit {
        Some(l) => names
            .into_iter()
            .skip(offset as usize)
            .take(l as usize)
            .collect(),
        None => names.into_iter().skip(offset as usize).collect(),
    };
    let count = players.len() as u32;

    Response::json(&PageBody {
        players,
        count,
        total,
        offset,
        limit,
    })
}
