//! The debounce-and-cancellation pipeline behind a live search box.
//!
//! Every query change bumps a monotonic generation counter; the debounce
//! task and the completion handler both re-check that counter under the
//! session mutex before touching published state, so a slow response from a
//! superseded query can never clobber a newer one regardless of network
//! completion order.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use addrsearch_core::AddressModel;
use addrsearch_geocode::{GeocodeClient, GeocodeError};

use crate::state::{SessionPhase, SessionState};

/// The geocoding seam the session drives.
///
/// Implementations complete asynchronously and need no cancellation support
/// of their own: the session discards completions from superseded
/// generations.
#[async_trait]
pub trait Geocoder: Send + Sync + 'static {
    async fn search(&self, query: &str) -> Result<Vec<AddressModel>, GeocodeError>;
}

#[async_trait]
impl Geocoder for GeocodeClient {
    async fn search(&self, query: &str) -> Result<Vec<AddressModel>, GeocodeError> {
        GeocodeClient::search(self, query).await
    }
}

/// Generation counter and pending-work handle, mutated only under the mutex.
struct Inner {
    generation: u64,
    pending: Option<JoinHandle<()>>,
}

/// One screen's search session.
///
/// Owns the current query, the debounce timer, and the published
/// [`SessionState`]. Cheap to clone; clones share the same session.
/// [`SearchSession::on_query_changed`] spawns onto the ambient Tokio
/// runtime, so the session must be used from within one.
#[derive(Clone)]
pub struct SearchSession {
    geocoder: Arc<dyn Geocoder>,
    debounce: Duration,
    inner: Arc<Mutex<Inner>>,
    tx: Arc<watch::Sender<SessionState>>,
}

impl SearchSession {
    #[must_use]
    pub fn new(geocoder: Arc<dyn Geocoder>, debounce: Duration) -> Self {
        let (tx, _rx) = watch::channel(SessionState::empty());
        Self {
            geocoder,
            debounce,
            inner: Arc::new(Mutex::new(Inner {
                generation: 0,
                pending: None,
            })),
            tx: Arc::new(tx),
        }
    }

    /// Feed one keystroke's worth of query text into the session.
    ///
    /// Synchronously records the query, bumps the generation (logically
    /// cancelling any pending debounce and any in-flight request), and
    /// either resets the session (trimmed query empty) or arms a new
    /// debounce timer tied to the new generation.
    pub fn on_query_changed(&self, query: &str) {
        let trimmed = query.trim().to_owned();
        let mut inner = self.lock();

        inner.generation += 1;
        let generation = inner.generation;
        if let Some(handle) = inner.pending.take() {
            handle.abort();
        }

        if trimmed.is_empty() {
            self.tx.send_modify(|s| {
                s.current_query = query.to_owned();
                s.results.clear();
                s.is_loading = false;
                s.error = None;
                s.phase = SessionPhase::Idle;
            });
            return;
        }

        self.tx.send_modify(|s| {
            s.current_query = query.to_owned();
            // A superseded in-flight request is no longer loading anything
            // the user will see.
            s.is_loading = false;
            s.phase = SessionPhase::Debouncing;
        });

        let session = self.clone();
        inner.pending = Some(tokio::spawn(async move {
            session.debounce_and_fetch(generation, trimmed).await;
        }));
    }

    /// Clears the published error without touching any other field or the
    /// generation counter.
    pub fn clear_error(&self) {
        self.tx.send_modify(|s| s.error = None);
    }

    /// Subscribe to published state changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.tx.subscribe()
    }

    /// Snapshot of the current published state.
    #[must_use]
    pub fn state(&self) -> SessionState {
        self.tx.borrow().clone()
    }

    /// Runs inside the per-generation task: wait out the debounce window,
    /// then fetch and publish — each step gated on the generation still
    /// being current.
    async fn debounce_and_fetch(&self, generation: u64, query: String) {
        tokio::time::sleep(self.debounce).await;

        {
            let inner = self.lock();
            if inner.generation != generation {
                return;
            }
            self.tx.send_modify(|s| {
                s.is_loading = true;
                s.error = None;
                s.phase = SessionPhase::Loading;
            });
        }

        let outcome = self.geocoder.search(&query).await;

        // Check-and-publish happens under the same lock as the generation
        // bump in on_query_changed, so the check cannot race a query change.
        let inner = self.lock();
        if inner.generation != generation {
            tracing::debug!(generation, query = %query, "discarding stale geocode completion");
            return;
        }
        match outcome {
            Ok(results) => {
                tracing::debug!(generation, count = results.len(), "geocode resolved");
                self.tx.send_modify(|s| {
                    s.results = results;
                    s.is_loading = false;
                    s.phase = SessionPhase::Resolved;
                });
            }
            Err(e) => {
                tracing::warn!(generation, query = %query, error = %e, "geocode failed");
                self.tx.send_modify(|s| {
                    s.error = Some(e.to_string());
                    s.results.clear();
                    s.is_loading = false;
                    s.phase = SessionPhase::Failed;
                });
            }
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // A poisoned lock only means a panic mid-publish; the state is still
        // a coherent snapshot, so recover rather than propagate.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
