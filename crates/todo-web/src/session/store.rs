//! In-memory session store.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use todo_core::SessionState;
use tokio::sync::{Mutex, MutexGuard, RwLock};
use tokio::time::Instant;
use uuid::Uuid;

/// Opaque identifier carried in the session cookie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Creates a new random session ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for SessionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Handle to one session's state.
///
/// Cheap to clone. The state sits behind an async mutex; a handler holds
/// the guard for its whole read-modify-write, so concurrent requests in
/// the same session are serialized.
#[derive(Clone)]
pub struct Session {
    id: SessionId,
    state: Arc<Mutex<SessionState>>,
}

impl Session {
    /// The session's ID.
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Locks the session state.
    pub async fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().await
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session").field("id", &self.id).finish()
    }
}

struct Entry {
    state: Arc<Mutex<SessionState>>,
    last_seen: Instant,
}

/// Process-local session store with idle expiry.
///
/// Expired sessions are dropped lazily whenever the store is accessed;
/// there is no background sweeper.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    sessions: RwLock<HashMap<SessionId, Entry>>,
    idle_timeout: Duration,
}

impl SessionStore {
    /// Create a store whose sessions expire after `idle_timeout` without requests.
    pub fn new(idle_timeout: Duration) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                sessions: RwLock::new(HashMap::new()),
                idle_timeout,
            }),
        }
    }

    /// The configured idle timeout.
    pub fn idle_timeout(&self) -> Duration {
        self.inner.idle_timeout
    }

    /// Resolve `id` to a live session, or start a new empty one.
    ///
    /// Returns the session and whether it was newly created. A missing,
    /// unknown or expired ID always yields a new session.
    pub async fn load_or_create(&self, id: Option<SessionId>) -> (Session, bool) {
        let now = Instant::now();
        let mut sessions = self.inner.sessions.write().await;
        self.purge_expired(&mut sessions, now);

        if let Some(id) = id
            && let Some(entry) = sessions.get_mut(&id)
        {
            entry.last_seen = now;
            let session = Session {
                id,
                state: entry.state.clone(),
            };
            return (session, false);
        }

        let id = SessionId::new();
        let state = Arc::new(Mutex::new(SessionState::new()));
        sessions.insert(
            id,
            Entry {
                state: state.clone(),
                last_seen: now,
            },
        );
        tracing::debug!(session = %id, active = sessions.len(), "Started session");
        (Session { id, state }, true)
    }

    /// Number of sessions currently held, including not-yet-purged expired ones.
    pub async fn len(&self) -> usize {
        self.inner.sessions.read().await.len()
    }

    /// Returns `true` if the store holds no sessions.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    fn is_expired(&self, entry: &Entry, now: Instant) -> bool {
        now.duration_since(entry.last_seen) >= self.inner.idle_timeout
    }

    fn purge_expired(&self, sessions: &mut HashMap<SessionId, Entry>, now: Instant) {
        let before = sessions.len();
        sessions.retain(|_, entry| !self.is_expired(entry, now));
        let purged = before - sessions.len();
        if purged > 0 {
            tracing::debug!(purged, "Expired idle sessions");
        }
    }
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore")
            .field("idle_timeout", &self.inner.idle_timeout)
            .finish()
    }
}
