//! Per-client layout sessions for the web server.
//!
//! Each session owns an independent [`LayoutStore`], keyed by a random UUID.
//! Two sessions never share mutable state; they only share the immutable
//! seed through an `Arc`.
//!
//! Idle sessions are evicted lazily, whenever a new session is created.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, TimeDelta, Utc};
use thiserror::Error;
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::SessionConfig;
use crate::store::LayoutStore;

/// Errors produced by the session registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// No live session with this id.
    #[error("Session '{0}' not found")]
    NotFound(String),

    /// The registry is full even after evicting idle sessions.
    #[error("Session limit reached ({0} active sessions)")]
    LimitReached(usize),
}

/// A single client session.
#[derive(Debug)]
struct Session {
    /// Layout state for this client
    store: LayoutStore,
    /// Last time the session was touched
    last_active: DateTime<Utc>,
}

/// Registry of live sessions.
#[derive(Debug)]
pub struct SessionRegistry {
    /// All sessions indexed by ID.
    sessions: Mutex<HashMap<Uuid, Session>>,
    /// Maximum number of live sessions.
    max_sessions: usize,
    /// Sessions untouched for longer than this are evicted.
    idle_timeout: TimeDelta,
}

impl SessionRegistry {
    /// Creates an empty registry with the given limits.
    #[must_use]
    pub fn new(config: &SessionConfig) -> Self {
        let minutes = i64::try_from(config.idle_timeout_minutes).unwrap_or(i64::MAX);
        let idle_timeout = TimeDelta::try_minutes(minutes).unwrap_or(TimeDelta::MAX);

        Self {
            sessions: Mutex::new(HashMap::new()),
            max_sessions: config.max_sessions,
            idle_timeout,
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<Uuid, Session>> {
        // A panic inside a session closure cannot leave the map itself inconsistent.
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Registers a new session and returns its id.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::LimitReached`] when the registry is full after
    /// idle sessions have been evicted.
    pub fn create(&self, store: LayoutStore) -> Result<Uuid, SessionError> {
        self.create_at(store, Utc::now())
    }

    fn create_at(&self, store: LayoutStore, now: DateTime<Utc>) -> Result<Uuid, SessionError> {
        let mut sessions = self.lock();

        let evicted = Self::prune_idle(&mut sessions, now, self.idle_timeout);
        if evicted > 0 {
            info!("Evicted {} idle session(s)", evicted);
        }

        if sessions.len() >= self.max_sessions {
            return Err(SessionError::LimitReached(sessions.len()));
        }

        let id = Uuid::new_v4();
        sessions.insert(
            id,
            Session {
                store,
                last_active: now,
            },
        );

        info!("Created session {} ({} active)", id, sessions.len());
        Ok(id)
    }

    /// Runs `f` against a session's store and marks the session active.
    ///
    /// The registry lock is held for the duration of `f`, so one request
    /// mutates one session at a time.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotFound`] for unknown or malformed ids.
    pub fn with_session<T>(
        &self,
        id: &str,
        f: impl FnOnce(&mut LayoutStore) -> T,
    ) -> Result<T, SessionError> {
        let key = Uuid::parse_str(id).map_err(|_| SessionError::NotFound(id.to_string()))?;

        let mut sessions = self.lock();
        let session = sessions
            .get_mut(&key)
            .ok_or_else(|| SessionError::NotFound(id.to_string()))?;

        session.last_active = Utc::now();
        Ok(f(&mut session.store))
    }

    /// Removes a session.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotFound`] for unknown or malformed ids.
    pub fn remove(&self, id: &str) -> Result<(), SessionError> {
        let key = Uuid::parse_str(id).map_err(|_| SessionError::NotFound(id.to_string()))?;

        if self.lock().remove(&key).is_none() {
            return Err(SessionError::NotFound(id.to_string()));
        }

        debug!("Removed session {}", key);
        Ok(())
    }

    /// Number of live sessions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Checks if there are no live sessions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes sessions idle for longer than `timeout`, returning how many.
    fn prune_idle(
        sessions: &mut HashMap<Uuid, Session>,
        now: DateTime<Utc>,
        timeout: TimeDelta,
    ) -> usize {
        let before = sessions.len();
        sessions.retain(|_, session| now.signed_duration_since(session.last_active) <= timeout);
        before - sessions.len()
    }
}
