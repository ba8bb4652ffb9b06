//! Session-scoped recipe stores.
//!
//! Each browser session owns one [`RecipeStore`], created with the seed
//! recipes the first time the session is seen. Stores live only in memory.
//! The registry holds at most `max_sessions` stores and evicts the least
//! recently used one to make room.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use compass_core::RecipeStore;
use std::collections::HashMap;
use std::fmt;
use tokio::sync::Mutex;
use uuid::Uuid;

/// Name of the cookie carrying the session id.
pub const SESSION_COOKIE: &str = "compass_session";

/// Opaque session identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn parse(value: &str) -> Option<Self> {
        Uuid::parse_str(value).ok().map(Self)
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Read the session id from the cookie jar, issuing a new one if absent or malformed.
pub fn resolve(jar: CookieJar) -> (CookieJar, SessionId) {
    if let Some(id) = jar.get(SESSION_COOKIE).and_then(|c| SessionId::parse(c.value())) {
        return (jar, id);
    }

    let id = SessionId::new();
    let cookie = Cookie::build((SESSION_COOKIE, id.to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build();
    tracing::debug!(session = %id, "issued new session cookie");
    (jar.add(cookie), id)
}

struct Entry {
    store: RecipeStore,
    last_used: u64,
}

#[derive(Default)]
struct Inner {
    sessions: HashMap<SessionId, Entry>,
    tick: u64,
}

/// All live session stores.
pub struct SessionRegistry {
    inner: Mutex<Inner>,
    max_sessions: usize,
}

impl SessionRegistry {
    /// Create a registry holding at most `max_sessions` stores (minimum one).
    pub fn new(max_sessions: usize) -> Self {
        Self {
            inner: Mutex::new(Inner::default()),
            max_sessions: max_sessions.max(1),
        }
    }

    /// Run `f` against the session's store, creating a seeded store if needed.
    pub async fn with_store<R>(&self, id: SessionId, f: impl FnOnce(&mut RecipeStore) -> R) -> R {
        let mut inner = self.inner.lock().await;
        inner.tick += 1;
        let tick = inner.tick;

        let sessions = &mut inner.sessions;
        if !sessions.contains_key(&id) {
            if sessions.len() >= self.max_sessions {
                evict_least_recent(sessions);
            }
            tracing::debug!(session = %id, live = sessions.len() + 1, "creating session store");
        }

        let entry = sessions.entry(id).or_insert_with(|| Entry {
            store: RecipeStore::seeded(),
            last_used: tick,
        });
        entry.last_used = tick;
        f(&mut entry.store)
    }

    /// Number of live sessions.
    pub async fn len(&self) -> usize {
        self.inner.lock().await.sessions.len()
    }

    pub async fn contains(&self, id: SessionId) -> bool {
        self.inner.lock().await.sessions.contains_key(&id)
    }
}

fn evict_least_recent(sessions: &mut HashMap<SessionId, Entry>) {
    let oldest = sessions
        .iter()
        .min_by_key(|(_, entry)| entry.last_used)
        .map(|(id, _)| *id);
    if let Some(id) = oldest {
        sessions.remove(&id);
        tracing::info!(session = %id, "evicted least recently used session");
    }
}
