//! Session registry: one independent game per session id.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use tracing::{debug, info};

use gambit_core::RuleEngine;

use crate::error::ProtocolError;

/// Configuration knobs adjustable via `setoption`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Session used when a command names no game.
    pub default_session: String,
    /// Upper bound on live sessions.
    pub max_sessions: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            default_session: "default".to_string(),
            max_sessions: 64,
        }
    }
}

/// Shared handle to one game.
pub type GameHandle = Arc<Mutex<RuleEngine>>;

/// Registry of live games keyed by session id.
///
/// The map and each game sit behind their own lock, so work on one game never
/// holds the registry, and two callers on the same game are serialized.
#[derive(Debug)]
pub struct SessionStore {
    games: Mutex<HashMap<String, GameHandle>>,
    max_sessions: AtomicUsize,
}

impl SessionStore {
    /// Create an empty store holding at most `max_sessions` games.
    pub fn new(max_sessions: usize) -> Self {
        Self {
            games: Mutex::new(HashMap::new()),
            max_sessions: AtomicUsize::new(max_sessions),
        }
    }

    /// Current session limit.
    pub fn max_sessions(&self) -> usize {
        self.max_sessions.load(Ordering::Acquire)
    }

    /// Change the session limit. Existing sessions above the limit are kept.
    pub fn set_max_sessions(&self, limit: usize) {
        self.max_sessions.store(limit, Ordering::Release);
    }

    /// Return the game for `id`, creating it on first access.
    fn handle(&self, id: &str) -> Result<GameHandle, ProtocolError> {
        let mut games = self.games.lock().expect("session map mutex poisoned");
        if let Some(game) = games.get(id) {
            return Ok(Arc::clone(game));
        }
        let limit = self.max_sessions();
        if games.len() >= limit {
            return Err(ProtocolError::TooManySessions { limit });
        }
        let game = Arc::new(Mutex::new(RuleEngine::new()));
        games.insert(id.to_string(), Arc::clone(&game));
        info!(session = id, live = games.len(), "session created");
        Ok(game)
    }

    /// Run `f` with exclusive access to the game for `id`.
    ///
    /// A game that does not exist yet is created with the standard position.
    pub fn with_game<T>(
        &self,
        id: &str,
        f: impl FnOnce(&mut RuleEngine) -> T,
    ) -> Result<T, ProtocolError> {
        let game = self.handle(id)?;
        let mut engine = game.lock().expect("game mutex poisoned");
        Ok(f(&mut *engine))
    }

    /// Replace the game for `id` with a fresh one, creating it if absent.
    pub fn reset(&self, id: &str) -> Result<(), ProtocolError> {
        let mut games = self.games.lock().expect("session map mutex poisoned");
        let len = games.len();
        match games.entry(id.to_string()) {
            Entry::Occupied(entry) => {
                *entry.get().lock().expect("game mutex poisoned") = RuleEngine::new();
                debug!(session = id, "session reset");
            }
            Entry::Vacant(entry) => {
                let limit = self.max_sessions();
                if len >= limit {
                    return Err(ProtocolError::TooManySessions { limit });
                }
                entry.insert(Arc::new(Mutex::new(RuleEngine::new())));
                info!(session = id, live = len + 1, "session created");
            }
        }
        Ok(())
    }

    /// Discard the game for `id`. Returns `false` if there was none.
    pub fn remove(&self, id: &str) -> bool {
        let removed = self
            .games
            .lock()
            .expect("session map mutex poisoned")
            .remove(id)
            .is_some();
        if removed {
            info!(session = id, "session dropped");
        }
        removed
    }

    /// Number of live sessions.
    pub fn len(&self) -> usize {
        self.games.lock().expect("session map mutex poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, id: &str) -> bool {
        self.games
            .lock()
            .expect("session map mutex poisoned")
            .contains_key(id)
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(SessionConfig::default().max_sessions)
    }
}
