//! Session store: the only shared mutable resource in the engine.
//!
//! A read/write-locked map of session id to entry, where each entry
//! carries its own mutex. Store operations hold the outer lock just
//! long enough to find or insert the entry; command processing locks
//! only the one session it touches, so distinct sessions never block
//! each other. Idle sessions are evicted lazily: an expired id behaves
//! exactly like one that never existed.

use chrono::{DateTime, Duration, Utc};
use log::{debug, info};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};

use crate::map::model::MapModel;
use crate::world::types::GameInstance;

/// One live session: the game instance plus session-scoped rendering
/// state. Owned exclusively by the store; never shared across ids.
#[derive(Debug)]
pub struct SessionEntry {
    pub game: GameInstance,
    pub map: MapModel,
    /// Opaque display preferences, echoed back to the UI.
    pub display: serde_json::Value,
    pub started_at: DateTime<Utc>,
    pub last_activity: DateTime<Utc>,
}

impl SessionEntry {
    pub fn new(game: GameInstance, map: MapModel, display: serde_json::Value) -> Self {
        let now = Utc::now();
        SessionEntry {
            game,
            map,
            display,
            started_at: now,
            last_activity: now,
        }
    }

    /// Record activity, pushing eviction out.
    pub fn touch(&mut self) {
        self.last_activity = Utc::now();
    }
}

pub struct SessionStore {
    sessions: RwLock<HashMap<String, Arc<Mutex<SessionEntry>>>>,
    idle_timeout: Duration,
}

impl SessionStore {
    pub fn new(idle_timeout_minutes: u32) -> Self {
        SessionStore {
            sessions: RwLock::new(HashMap::new()),
            idle_timeout: Duration::minutes(idle_timeout_minutes as i64),
        }
    }

    pub fn insert(&self, session_id: &str, entry: SessionEntry) {
        let mut sessions = self.sessions.write().unwrap_or_else(|e| e.into_inner());
        sessions.insert(session_id.to_string(), Arc::new(Mutex::new(entry)));
        info!("session {} created ({} live)", session_id, sessions.len());
    }

    /// Fetch a live session. An entry idle past the timeout is removed
    /// on the spot and reported as absent.
    pub fn get(&self, session_id: &str) -> Option<Arc<Mutex<SessionEntry>>> {
        let entry = {
            let sessions = self.sessions.read().unwrap_or_else(|e| e.into_inner());
            sessions.get(session_id).cloned()
        }?;

        let expired = {
            let guard = entry.lock().unwrap_or_else(|e| e.into_inner());
            Utc::now() - guard.last_activity > self.idle_timeout
        };
        if expired {
            self.remove(session_id);
            debug!("session {} expired on access", session_id);
            return None;
        }
        Some(entry)
    }

    pub fn remove(&self, session_id: &str) -> bool {
        let mut sessions = self.sessions.write().unwrap_or_else(|e| e.into_inner());
        sessions.remove(session_id).is_some()
    }

    /// Sweep every idle entry out. Called opportunistically; correctness
    /// does not depend on it because [`get`](Self::get) re-checks.
    pub fn purge_expired(&self) -> usize {
        let now = Utc::now();
        let mut sessions = self.sessions.write().unwrap_or_else(|e| e.into_inner());
        let before = sessions.len();
        sessions.retain(|_, entry| {
            let guard = entry.lock().unwrap_or_else(|e| e.into_inner());
            now - guard.last_activity <= self.idle_timeout
        });
        let evicted = before - sessions.len();
        if evicted > 0 {
            info!("evicted {} idle session(s)", evicted);
        }
        evicted
    }

    pub fn len(&self) -> usize {
        self.sessions.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
