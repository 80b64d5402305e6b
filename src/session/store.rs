//! Persistent session store
//!
//! Holds the authenticated identity and bearer credential across page loads.
//! The persisted snapshot is readable synchronously so the first render never
//! flashes a logged-out UI, and every mutation is published on a watch
//! channel so concurrently open views observe logout immediately.

use std::sync::Arc;

use tokio::sync::watch;

use crate::api::Backend;
use crate::constants::{TOKEN_STORAGE_KEY, USER_STORAGE_KEY};
use crate::models::Session;

/// String key-value persistence behind the session store.
///
/// Implemented by browser localStorage on wasm32 and by an in-memory map in
/// tests. Values must survive a full page reload in the real backend.
pub trait StorageBackend: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Process-wide session store. Cheap to clone; clones share state.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    backend: Box<dyn StorageBackend>,
    sessions: watch::Sender<Option<Session>>,
}

impl SessionStore {
    /// Create a store over the given persistence backend
    pub fn new(backend: impl StorageBackend + 'static) -> Self {
        let initial = read_session(&backend);
        let (sessions, _) = watch::channel(initial);
        Self {
            inner: Arc::new(StoreInner {
                backend: Box::new(backend),
                sessions,
            }),
        }
    }

    /// Current session, read synchronously from the persisted snapshot.
    ///
    /// A credential without a readable identity record (or vice versa) reads
    /// as absent - the UI fails closed to its logged-out form.
    pub fn get(&self) -> Option<Session> {
        read_session(self.inner.backend.as_ref())
    }

    /// Raw bearer credential, if one is persisted.
    ///
    /// Unlike [`get`](Self::get) this does not require an identity record;
    /// it feeds the display-only payload inspection in [`crate::session::claims`].
    pub fn token(&self) -> Option<String> {
        self.inner.backend.get(TOKEN_STORAGE_KEY)
    }

    /// Persist a session. Credential and identity are written together;
    /// there is no representation where one is set without the other.
    pub fn set(&self, session: &Session) {
        match serde_json::to_string(&session.user) {
            Ok(user_json) => {
                self.inner.backend.set(TOKEN_STORAGE_KEY, &session.token);
                self.inner.backend.set(USER_STORAGE_KEY, &user_json);
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to serialize identity; session not persisted");
            }
        }
        self.publish();
    }

    /// Log out: clear both persisted keys and notify watchers
    pub fn clear(&self) {
        self.inner.backend.remove(TOKEN_STORAGE_KEY);
        self.inner.backend.remove(USER_STORAGE_KEY);
        self.publish();
    }

    /// Observe session changes. The receiver yields the current snapshot
    /// immediately and every subsequent mutation, including ones triggered
    /// by other views via [`sync_from_storage`](Self::sync_from_storage).
    pub fn watch(&self) -> watch::Receiver<Option<Session>> {
        self.inner.sessions.subscribe()
    }

    /// Re-read the persisted keys and notify watchers.
    ///
    /// The wasm storage-event bridge calls this when another view of the
    /// same storage scope mutates the session (cross-tab logout).
    pub fn sync_from_storage(&self) {
        self.publish();
    }

    /// Refresh the identity from the backend's "who am I" endpoint.
    ///
    /// On success, whichever of credential/identity the response carries is
    /// rewritten and watchers are notified. On any failure the store is left
    /// unchanged and a diagnostic is logged; this never errors to the caller.
    pub async fn refresh(&self, api: &dyn Backend) -> Option<Session> {
        self.token()?;

        match api.me().await {
            Ok(me) => {
                if let Some(token) = me.token {
                    self.inner.backend.set(TOKEN_STORAGE_KEY, &token);
                }
                if let Some(user) = me.user {
                    if let Ok(user_json) = serde_json::to_string(&user) {
                        self.inner.backend.set(USER_STORAGE_KEY, &user_json);
                    }
                }
                self.publish();
            }
            Err(err) => {
                tracing::warn!(error = %err, "session refresh failed; keeping stored session");
            }
        }

        self.get()
    }

    fn publish(&self) {
        self.inner.sessions.send_replace(self.get());
    }
}

fn read_session(backend: &dyn StorageBackend) -> Option<Session> {
    let token = backend.get(TOKEN_STORAGE_KEY)?;
    let user_json = backend.get(USER_STORAGE_KEY)?;
    let user = serde_json::from_str(&user_json).ok()?;
    Some(Session { user, token })
}
