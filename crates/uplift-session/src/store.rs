//! Bounded, keyed conversation memory.
//!
//! Each session owns its own lock: the outer map mutex is held only long
//! enough to fetch the per-session handle, so exchanges against distinct
//! sessions never contend while the two-turn append stays atomic per key.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::Local;
use uuid::Uuid;

use uplift_core::types::Turn;

use crate::error::AnalysisError;

struct SessionState {
    history: Vec<Turn>,
    last_message_at: i64,
}

/// Keyed, bounded, append-only session store.
pub struct SessionStore {
    sessions: Mutex<HashMap<Uuid, Arc<Mutex<SessionState>>>>,
    /// Number of most-recent turns retained per session.
    context_turns: usize,
    /// Minutes of inactivity before a session is swept. 0 disables expiry.
    idle_timeout_minutes: u32,
}

impl SessionStore {
    pub fn new(context_turns: usize, idle_timeout_minutes: u32) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            context_turns,
            idle_timeout_minutes,
        }
    }

    /// Create a fresh session and return its id.
    pub fn start(&self) -> Uuid {
        self.sweep_expired();
        let id = Uuid::new_v4();
        let state = SessionState {
            history: Vec::new(),
            last_message_at: Local::now().timestamp(),
        };
        let mut sessions = match self.sessions.lock() {
            Ok(s) => s,
            Err(poisoned) => poisoned.into_inner(),
        };
        sessions.insert(id, Arc::new(Mutex::new(state)));
        tracing::debug!(session_id = %id, "Session started");
        id
    }

    /// Whether a session id is currently known.
    pub fn contains(&self, id: Uuid) -> bool {
        self.sessions
            .lock()
            .map(|s| s.contains_key(&id))
            .unwrap_or(false)
    }

    /// Append one user/assistant exchange atomically.
    ///
    /// Both turns land under the session's own lock, then the history is
    /// truncated FIFO to the configured window, so concurrent exchanges
    /// against the same id can never interleave turns or double-evict.
    pub fn append_exchange(
        &self,
        id: Uuid,
        user_text: &str,
        bot_text: &str,
    ) -> Result<(), AnalysisError> {
        let handle = self.handle(id)?;
        let mut state = match handle.lock() {
            Ok(s) => s,
            Err(poisoned) => poisoned.into_inner(),
        };
        state.history.push(Turn::user(user_text));
        state.history.push(Turn::assistant(bot_text));
        while state.history.len() > self.context_turns {
            state.history.remove(0);
        }
        state.last_message_at = Local::now().timestamp();
        Ok(())
    }

    /// Read the ordered turn history of a session.
    pub fn history(&self, id: Uuid) -> Result<Vec<Turn>, AnalysisError> {
        let handle = self.handle(id)?;
        let state = match handle.lock() {
            Ok(s) => s,
            Err(poisoned) => poisoned.into_inner(),
        };
        Ok(state.history.clone())
    }

    // -- Private helpers --

    fn handle(&self, id: Uuid) -> Result<Arc<Mutex<SessionState>>, AnalysisError> {
        self.sweep_expired();
        let sessions = match self.sessions.lock() {
            Ok(s) => s,
            Err(poisoned) => poisoned.into_inner(),
        };
        sessions
            .get(&id)
            .cloned()
            .ok_or(AnalysisError::SessionNotFound(id))
    }

    /// Drop sessions idle past the configured timeout. Runs lazily on each
    /// store access; there is no background task.
    fn sweep_expired(&self) {
        if self.idle_timeout_minutes == 0 {
            return;
        }
        let cutoff = Local::now().timestamp() - i64::from(self.idle_timeout_minutes) * 60;
        let mut sessions = match self.sessions.lock() {
            Ok(s) => s,
            Err(poisoned) => poisoned.into_inner(),
        };
        sessions.retain(|id, handle| {
            let keep = handle
                .lock()
                .map(|s| s.last_message_at >= cutoff)
                .unwrap_or(true);
            if !keep {
                tracing::debug!(session_id = %id, "Session expired");
            }
            keep
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uplift_core::types::Role;

    fn store() -> SessionStore {
        SessionStore::new(20, 0)
    }

    // ---- Lifecycle ----

    #[test]
    fn test_start_returns_distinct_ids() {
        let store = store();
        let a = store.start();
        let b = store.start();
        assert_ne!(a, b);
        assert!(store.contains(a));
        assert!(store.contains(b));
    }

    #[test]
    fn test_new_session_has_empty_history() {
        let store = store();
        let id = store.start();
        assert!(store.history(id).unwrap().is_empty());
    }

    #[test]
    fn test_unknown_id_is_not_found() {
        let store = store();
        let id = Uuid::new_v4();
        assert!(!store.contains(id));
        assert!(matches!(
            store.history(id),
            Err(AnalysisError::SessionNotFound(_))
        ));
        assert!(matches!(
            store.append_exchange(id, "hi", "hello"),
            Err(AnalysisError::SessionNotFound(_))
        ));
    }

    // ---- Appends ----

    #[test]
    fn test_exchange_appends_user_then_assistant() {
        let store = store();
        let id = store.start();
        store.append_exchange(id, "how are you", "doing fine").unwrap();

        let history = store.history(id).unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].role, Role::User);
        assert_eq!(history[0].content, "how are you");
        assert_eq!(history[1].role, Role::Assistant);
        assert_eq!(history[1].content, "doing fine");
    }

    #[test]
    fn test_exchanges_stay_ordered() {
        let store = store();
        let id = store.start();
        for i in 0..3 {
            store
                .append_exchange(id, &format!("q{}", i), &format!("a{}", i))
                .unwrap();
        }
        let history = store.history(id).unwrap();
        assert_eq!(history.len(), 6);
        assert_eq!(history[0].content, "q0");
        assert_eq!(history[5].content, "a2");
    }

    // ---- Truncation ----

    #[test]
    fn test_history_truncates_to_most_recent_twenty() {
        let store = store();
        let id = store.start();
        // 13 exchanges = 26 turns; only the most recent 20 survive.
        for i in 0..13 {
            store
                .append_exchange(id, &format!("q{}", i), &format!("a{}", i))
                .unwrap();
        }
        let history = store.history(id).unwrap();
        assert_eq!(history.len(), 20);
        // Oldest 6 turns (q0,a0,q1,a1,q2,a2) evicted; window starts at q3.
        assert_eq!(history[0].content, "q3");
        assert_eq!(history[19].content, "a12");
    }

    #[test]
    fn test_truncation_preserves_relative_order() {
        let store = store();
        let id = store.start();
        for i in 0..25 {
            store
                .append_exchange(id, &format!("u{}", i), &format!("b{}", i))
                .unwrap();
        }
        let history = store.history(id).unwrap();
        assert_eq!(history.len(), 20);
        for pair in history.chunks(2) {
            assert_eq!(pair[0].role, Role::User);
            assert_eq!(pair[1].role, Role::Assistant);
        }
    }

    #[test]
    fn test_exactly_at_window_no_eviction() {
        let store = store();
        let id = store.start();
        for i in 0..10 {
            store
                .append_exchange(id, &format!("q{}", i), &format!("a{}", i))
                .unwrap();
        }
        let history = store.history(id).unwrap();
        assert_eq!(history.len(), 20);
        assert_eq!(history[0].content, "q0");
    }

    // ---- Isolation ----

    #[test]
    fn test_sessions_are_isolated() {
        let store = store();
        let a = store.start();
        let b = store.start();
        store.append_exchange(a, "for a", "reply a").unwrap();
        assert_eq!(store.history(a).unwrap().len(), 2);
        assert!(store.history(b).unwrap().is_empty());
    }

    // ---- Expiry ----

    #[test]
    fn test_no_expiry_when_timeout_zero() {
        let store = SessionStore::new(20, 0);
        let id = store.start();
        store.start(); // triggers a sweep
        assert!(store.contains(id));
    }

    #[test]
    fn test_idle_session_swept() {
        let store = SessionStore::new(20, 30);
        let id = store.start();
        {
            let sessions = store.sessions.lock().unwrap();
            let handle = sessions.get(&id).unwrap();
            handle.lock().unwrap().last_message_at = Local::now().timestamp() - 31 * 60;
        }
        // Any store access sweeps.
        let other = store.start();
        assert!(!store.contains(id));
        assert!(store.contains(other));
    }

    #[test]
    fn test_active_session_survives_sweep() {
        let store = SessionStore::new(20, 30);
        let id = store.start();
        store.append_exchange(id, "hi", "hello").unwrap();
        store.start();
        assert!(store.contains(id));
    }

    // ---- Concurrency ----

    #[test]
    fn test_concurrent_exchanges_against_same_session() {
        use std::thread;

        let store = Arc::new(SessionStore::new(20, 0));
        let id = store.start();

        let mut handles = Vec::new();
        for i in 0..8 {
            let store = Arc::clone(&store);
            handles.push(thread::spawn(move || {
                store
                    .append_exchange(id, &format!("q{}", i), &format!("a{}", i))
                    .unwrap();
            }));
        }
        for h in handles {
            h.join().unwrap();
        }

        let history = store.history(id).unwrap();
        assert_eq!(history.len(), 16);
        // Exchanges are atomic: turns always alternate user/assistant.
        for pair in history.chunks(2) {
            assert_eq!(pair[0].role, Role::User);
            assert_eq!(pair[1].role, Role::Assistant);
        }
    }

    #[test]
    fn test_concurrent_distinct_sessions() {
        use std::thread;

        let store = Arc::new(SessionStore::new(20, 0));
        let ids: Vec<Uuid> = (0..8).map(|_| store.start()).collect();

        let mut handles = Vec::new();
        for id in ids.clone() {
            let store = Arc::clone(&store);
            handles.push(thread::spawn(move || {
                for i in 0..5 {
                    store
                        .append_exchange(id, &format!("q{}", i), &format!("a{}", i))
                        .unwrap();
                }
            }));
        }
        for h in handles {
            h.join().unwrap();
        }

        for id in ids {
            assert_eq!(store.history(id).unwrap().len(), 10);
        }
    }
}
