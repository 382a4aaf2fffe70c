//! Process-wide holder of the latest recommendation and its projections.
//!
//! One writer (the client), many passive readers. The raw response and the
//! view models derived from it always change together, under the same lock,
//! so no observer can see a raw update without the matching view models.

use std::sync::{Mutex, MutexGuard, PoisonError};

use log::debug;
use tokio::sync::broadcast;

use crate::model::RecommendationResponse;
use crate::normalizer::split_recommendation;
use crate::viewmodel::{ConseilsVM, PrescriptionVM};

/// Notifications broadcast on every state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoEvent {
    /// A fetch started
    Loading,
    /// A new raw response and its view models are in place
    Updated,
    /// The latest fetch failed
    Failed,
    /// The store went back to its initial state
    Cleared,
}

/// Proof that a completion belongs to a specific fetch.
///
/// Tokens are monotonic; a completion presenting anything but the latest
/// token is dropped, so overlapping fetches resolve last-issued-wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

#[derive(Debug, Default)]
struct RecoState {
    raw: Option<RecommendationResponse>,
    loading: bool,
    error: Option<String>,
    prescription: Option<PrescriptionVM>,
    conseils: Option<ConseilsVM>,
    generation: u64,
}

/// Cloned view of the store at one point in time
#[derive(Debug, Clone, Default)]
pub struct RecoSnapshot {
    pub raw: Option<RecommendationResponse>,
    pub loading: bool,
    pub error: Option<String>,
    pub prescription: Option<PrescriptionVM>,
    pub conseils: Option<ConseilsVM>,
}

/// Reactive recommendation state
pub struct RecoStore {
    state: Mutex<RecoState>,
    events: broadcast::Sender<RecoEvent>,
}

impl RecoStore {
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(16);
        RecoStore {
            state: Mutex::new(RecoState::default()),
            events,
        }
    }

    /// Subscribe to state-change notifications.
    ///
    /// Slow subscribers may observe a lagged receiver; the store never
    /// blocks on them.
    pub fn subscribe(&self) -> broadcast::Receiver<RecoEvent> {
        self.events.subscribe()
    }

    /// Current state, cloned. Raw response and view models in one snapshot
    /// are always consistent with each other.
    pub fn snapshot(&self) -> RecoSnapshot {
        let state = self.lock();
        RecoSnapshot {
            raw: state.raw.clone(),
            loading: state.loading,
            error: state.error.clone(),
            prescription: state.prescription.clone(),
            conseils: state.conseils.clone(),
        }
    }

    /// Mark a fetch as started and hand out the token its completion must
    /// present
    pub fn begin_request(&self) -> RequestToken {
        let mut state = self.lock();
        state.generation += 1;
        state.loading = true;
        state.error = None;
        let token = RequestToken(state.generation);
        drop(state);

        self.emit(RecoEvent::Loading);
        token
    }

    /// Finish the fetch identified by `token`.
    ///
    /// Returns `false` (leaving the state untouched) when a later fetch has
    /// been started since the token was issued.
    pub fn complete(
        &self,
        token: RequestToken,
        result: Result<RecommendationResponse, String>,
    ) -> bool {
        let mut state = self.lock();
        if token.0 != state.generation {
            debug!(
                "Dropping stale completion for request {} (latest is {})",
                token.0, state.generation
            );
            return false;
        }

        state.loading = false;
        let event = match result {
            Ok(raw) => {
                let split = split_recommendation(&raw);
                state.raw = Some(raw);
                state.prescription = Some(split.prescription);
                state.conseils = Some(split.conseils);
                state.error = None;
                RecoEvent::Updated
            }
            Err(message) => {
                state.error = Some(message);
                RecoEvent::Failed
            }
        };
        drop(state);

        self.emit(event);
        true
    }

    /// Reset to the initial state. The generation counter advances so
    /// completions of fetches started before the clear are dropped.
    pub fn clear(&self) {
        let mut state = self.lock();
        state.generation += 1;
        state.raw = None;
        state.loading = false;
        state.error = None;
        state.prescription = None;
        state.conseils = None;
        drop(state);

        self.emit(RecoEvent::Cleared);
    }

    fn emit(&self, event: RecoEvent) {
        // A send with no subscribers is fine
        let _ = self.events.send(event);
    }

    fn lock(&self) -> MutexGuard<'_, RecoState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for RecoStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::default_recommendation;

    #[test]
    fn starts_empty_and_idle() {
        let store = RecoStore::new();
        let snapshot = store.snapshot();
        assert!(snapshot.raw.is_none());
        assert!(!snapshot.loading);
        assert!(snapshot.error.is_none());
        assert!(snapshot.prescription.is_none());
        assert!(snapshot.conseils.is_none());
    }

    #[test]
    fn successful_completion_installs_raw_and_views_together() {
        let store = RecoStore::new();
        let token = store.begin_request();
        assert!(store.snapshot().loading);

        assert!(store.complete(token, Ok(default_recommendation())));

        let snapshot = store.snapshot();
        assert!(!snapshot.loading);
        assert!(snapshot.raw.is_some());
        assert!(snapshot.prescription.is_some());
        assert!(snapshot.conseils.is_some());
        assert!(snapshot.error.is_none());
    }

    #[test]
    fn failed_completion_records_the_message() {
        let store = RecoStore::new();
        let token = store.begin_request();
        assert!(store.complete(token, Err("HTTP 500".to_string())));

        let snapshot = store.snapshot();
        assert_eq!(snapshot.error.as_deref(), Some("HTTP 500"));
        assert!(snapshot.raw.is_none());
    }

    #[test]
    fn stale_token_is_dropped() {
        let store = RecoStore::new();
        let first = store.begin_request();
        let second = store.begin_request();

        assert!(!store.complete(first, Ok(default_recommendation())));
        assert!(store.snapshot().raw.is_none());

        assert!(store.complete(second, Ok(default_recommendation())));
        assert!(store.snapshot().raw.is_some());
    }

    #[test]
    fn clear_resets_and_invalidates_pending_fetches() {
        let store = RecoStore::new();
        let token = store.begin_request();
        store.complete(token, Ok(default_recommendation()));

        let pending = store.begin_request();
        store.clear();
        assert!(store.snapshot().raw.is_none());

        assert!(!store.complete(pending, Ok(default_recommendation())));
        assert!(store.snapshot().raw.is_none());
    }

    #[test]
    fn events_follow_state_transitions() {
        let store = RecoStore::new();
        let mut events = store.subscribe();

        let token = store.begin_request();
        store.complete(token, Ok(default_recommendation()));
        store.clear();

        assert!(matches!(events.try_recv(), Ok(RecoEvent::Loading)));
        assert!(matches!(events.try_recv(), Ok(RecoEvent::Updated)));
        assert!(matches!(events.try_recv(), Ok(RecoEvent::Cleared)));
        assert!(events.try_recv().is_err());
    }
}
