//! Concurrent multi-session ownership.
//!
//! Sessions are fully independent — each owns its ledger and shift
//! state; the only shared state is the `Arc`'d read-only reference
//! store. Concurrent access across sessions goes through a `DashMap`;
//! within a session everything stays single-writer.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tracing::info;

use dashmap::DashMap;

use geode_bank::ReferenceStore;
use geode_core::config::EngineConfig;
use geode_core::errors::{GeodeResult, ProtocolError};
use geode_core::signal::Signal;

use crate::action::Action;
use crate::controller::InterviewController;
use crate::session::SessionId;
use crate::snapshot::SessionSnapshot;

/// Default inactivity timeout before a session is considered stale: 1 hour.
pub const DEFAULT_INACTIVITY_TIMEOUT: Duration = Duration::hours(1);

/// Default max session age for cleanup: 7 days.
pub const DEFAULT_MAX_AGE: Duration = Duration::days(7);

/// Owns every live interview session in the process.
pub struct SessionManager {
    store: Arc<ReferenceStore>,
    sessions: DashMap<SessionId, InterviewController>,
}

impl SessionManager {
    pub fn new(store: Arc<ReferenceStore>) -> Self {
        Self {
            store,
            sessions: DashMap::new(),
        }
    }

    pub fn store(&self) -> &Arc<ReferenceStore> {
        &self.store
    }

    /// Start a new session and return its id.
    pub fn create_session(
        &self,
        config: EngineConfig,
        now: DateTime<Utc>,
    ) -> GeodeResult<SessionId> {
        let controller = InterviewController::new(Arc::clone(&self.store), config, now)?;
        let id = controller.session().id;
        self.sessions.insert(id, controller);
        Ok(id)
    }

    /// Next diagnostic action for a session.
    pub fn next_action(&self, id: &SessionId, now: DateTime<Utc>) -> GeodeResult<Action> {
        let mut entry = self.sessions.get_mut(id).ok_or_else(|| unknown(id))?;
        entry.next_action(now)
    }

    /// Absorb a signal into a session.
    pub fn absorb_signal(
        &self,
        id: &SessionId,
        signal: &Signal,
        now: DateTime<Utc>,
    ) -> GeodeResult<()> {
        let mut entry = self.sessions.get_mut(id).ok_or_else(|| unknown(id))?;
        entry.absorb_signal(signal, now)
    }

    /// Snapshot a session for reporting.
    pub fn snapshot(&self, id: &SessionId, now: DateTime<Utc>) -> GeodeResult<SessionSnapshot> {
        let entry = self.sessions.get(id).ok_or_else(|| unknown(id))?;
        Ok(entry.snapshot(now))
    }

    /// Abandon a session. Returns whether it existed. The partial
    /// ledger inside is consistent up to the last absorbed signal; no
    /// rollback is needed because state is append-only.
    pub fn remove_session(&self, id: &SessionId) -> bool {
        self.sessions.remove(id).is_some()
    }

    pub fn session_ids(&self) -> Vec<SessionId> {
        self.sessions.iter().map(|entry| *entry.key()).collect()
    }

    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    /// Remove sessions idle past `inactivity_timeout` or older than
    /// `max_age`. Returns the number removed.
    pub fn cleanup_stale(
        &self,
        inactivity_timeout: Duration,
        max_age: Duration,
        now: DateTime<Utc>,
    ) -> usize {
        let mut removed = 0;
        for id in self.session_ids() {
            let stale = self
                .sessions
                .get(&id)
                .map(|entry| {
                    let session = entry.session();
                    session.idle_duration(now) > inactivity_timeout
                        || session.session_duration(now) > max_age
                })
                .unwrap_or(false);

            if stale && self.remove_session(&id) {
                removed += 1;
            }
        }
        if removed > 0 {
            info!(removed, "stale sessions cleaned up");
        }
        removed
    }
}

fn unknown(id: &SessionId) -> geode_core::errors::GeodeError {
    ProtocolError::UnknownSession {
        session: id.to_string(),
    }
    .into()
}
