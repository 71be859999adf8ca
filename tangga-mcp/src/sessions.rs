//! Server-side store of live quiz sessions
//!
//! The store holds at most `capacity` sessions. Starting one more evicts the
//! oldest, so clients that never call `quiz_end` cannot grow it without bound.

use std::collections::BTreeMap;
use tangga_quiz::QuizSession;
use tracing::warn;
use crate::config::DEFAULT_MAX_SESSIONS;
use crate::error::ToolError;

const ID_PREFIX: &str = "quiz-";

/// Quiz sessions keyed by an opaque id handed to the client
#[derive(Debug)]
pub struct SessionStore {
    // Keyed by the numeric part of the id; ascending order is age order.
    sessions: BTreeMap<u64, QuizSession>,
    next_id: u64,
    capacity: usize,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_MAX_SESSIONS)
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store capped at `capacity` live sessions (at least one)
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            sessions: BTreeMap::new(),
            next_id: 0,
            capacity: capacity.max(1),
        }
    }

    /// Store a session and return its id, evicting the oldest when full
    pub fn insert(&mut self, session: QuizSession) -> String {
        while self.sessions.len() >= self.capacity {
            if let Some((oldest, evicted)) = self.sessions.pop_first() {
                warn!(session = %format!("{}{}", ID_PREFIX, oldest), score = evicted.score(), "evicted oldest quiz session");
            }
        }
        self.next_id += 1;
        self.sessions.insert(self.next_id, session);
        format!("{}{}", ID_PREFIX, self.next_id)
    }

    pub fn get(&self, id: &str) -> Result<&QuizSession, ToolError> {
        key(id)
            .and_then(|k| self.sessions.get(&k))
            .ok_or_else(|| ToolError::unknown_session(id))
    }

    pub fn get_mut(&mut self, id: &str) -> Result<&mut QuizSession, ToolError> {
        key(id)
            .and_then(|k| self.sessions.get_mut(&k))
            .ok_or_else(|| ToolError::unknown_session(id))
    }

    pub fn remove(&mut self, id: &str) -> Result<QuizSession, ToolError> {
        key(id)
            .and_then(|k| self.sessions.remove(&k))
            .ok_or_else(|| ToolError::unknown_session(id))
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

fn key(id: &str) -> Option<u64> {
    id.strip_prefix(ID_PREFIX)?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let mut store = SessionStore::new();
        let a = store.insert(QuizSession::new());
        let b = store.insert(QuizSession::new());
        assert_ne!(a, b);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_remove() {
        let mut store = SessionStore::new();
        let id = store.insert(QuizSession::new());
        assert!(store.remove(&id).is_ok());
        assert!(store.is_empty());
        assert_eq!(store.get(&id).unwrap_err().code, "UNKNOWN_SESSION");
    }

    #[test]
    fn test_malformed_id() {
        let store = SessionStore::new();
        assert_eq!(store.get("session-1").unwrap_err().code, "UNKNOWN_SESSION");
        assert_eq!(store.get("quiz-x").unwrap_err().code, "UNKNOWN_SESSION");
    }

    #[test]
    fn test_full_store_evicts_oldest() {
        let mut store = SessionStore::with_capacity(2);
        let a = store.insert(QuizSession::new());
        let b = store.insert(QuizSession::new());
        let c = store.insert(QuizSession::new());

        assert_eq!(store.len(), 2);
        assert!(store.get(&a).is_err());
        assert!(store.get(&b).is_ok());
        assert!(store.get(&c).is_ok());
    }

    #[test]
    fn test_zero_capacity_keeps_one() {
        let mut store = SessionStore::with_capacity(0);
        assert_eq!(store.capacity(), 1);
        store.insert(QuizSession::new());
        let id = store.insert(QuizSession::new());
        assert_eq!(store.len(), 1);
        assert!(store.get(&id).is_ok());
    }
}
