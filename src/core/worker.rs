//! Background fetch thread.
//!
//! One named thread owns the HTTP client and drains a job channel; results
//! go back over a second channel, keyed by what was asked for, and a stored
//! repaint waker nudges the UI after each delivery. The render thread never
//! blocks - it only sends jobs and `try_recv`s results.
//!
//! Jobs carry the retry budget's worth of silent attempts here; the client
//! itself never retries.

use std::sync::{Arc, Mutex};
use std::thread;

use crossbeam_channel::{Receiver, Sender};
use log::{debug, trace};

use crate::api::{ApiError, PlayersClient, PlayersPage, PlayersQuery};
use crate::core::query::PageKey;

/// Repaint hook shared between the query layer and the fetch thread.
/// Set once the UI context exists; `None` until then (and in tests).
pub(crate) type SharedWaker = Arc<Mutex<Option<Box<dyn Fn() + Send + Sync + 'static>>>>;

/// Work item for the fetch thread.
#[derive(Debug, Clone)]
pub(crate) enum FetchJob {
    Page(PageKey),
    Career(String),
}

/// Completed fetch, keyed by its request identity.
#[derive(Debug)]
pub(crate) enum FetchDone {
    Page {
        key: PageKey,
        result: Result<PlayersPage, ApiError>,
    },
    Career {
        name: String,
        result: Result<serde_json::Value, ApiError>,
    },
}

/// Handle to the fetch thread. Dropping (or `shutdown`) closes the job
/// channel and joins the thread.
pub(crate) struct FetchWorker {
    jobs: Option<Sender<FetchJob>>,
    handle: Option<thread::JoinHandle<()>>,
}

impl FetchWorker {
    pub fn spawn(
        client: PlayersClient,
        retries: u32,
        order: Option<crate::api::Order>,
        results: Sender<FetchDone>,
        waker: SharedWaker,
    ) -> Self {
        let (jobs_tx, jobs_rx): (Sender<FetchJob>, Receiver<FetchJob>) =
            crossbeam_channel::unbounded();

        let handle = thread::Builder::new()
            .name("courtside-fetch".to_string())
            .spawn(move || {
                trace!("fetch thread started");
                while let Ok(job) = jobs_rx.recv() {
                    let done = match job {
                        FetchJob::Page(key) => {
                            let query = PlayersQuery {
                                limit: Some(key.limit),
                                offset: Some(key.offset),
                                order,
                            };
                            let result = with_retry(retries, || client.get_all_players(&query));
                            FetchDone::Page { key, result }
                        }
                        FetchJob::Career(name) => {
                            let result =
                                with_retry(retries, || client.get_player_career_stats(&name));
                            FetchDone::Career { name, result }
                        }
                    };
                    if results.send(done).is_err() {
                        break;
                    }
                    if let Some(wake) = waker.lock().unwrap_or_else(|e| e.into_inner()).as_ref() {
                        wake();
                    }
                }
                trace!("fetch thread stopped");
            })
            .expect("Failed to spawn fetch thread");

        Self {
            jobs: Some(jobs_tx),
            handle: Some(handle),
        }
    }

    /// Queue a job. Returns false once the worker has been shut down.
    pub fn submit(&self, job: FetchJob) -> bool {
        match &self.jobs {
            Some(tx) => tx.send(job).is_ok(),
            None => false,
        }
    }

    /// Close the job channel and wait for the thread to finish its current
    /// request. Idempotent.
    pub fn shutdown(&mut self) {
        self.jobs = None;
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
            debug!("fetch thread joined");
        }
    }
}

impl Drop for FetchWorker {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Run `f`, repeating up to `retries` extra times on error.
/// Retries are silent apart from a debug log line.
fn with_retry<T>(
    retries: u32,
    mut f: impl FnMut() -> Result<T, ApiError>,
) -> Result<T, ApiError> {
    let mut attempt = 0;
    loop {
        match f() {
            Ok(value) => return Ok(value),
            Err(e) if attempt < retries => {
                attempt += 1;
                debug!("fetch attempt {attempt} failed, retrying: {e}");
            }
            Err(e) => return Err(e),
        }
    }
}
