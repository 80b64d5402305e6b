//! Browser glue (wasm32 only)
//!
//! The localStorage persistence backend and the `storage` event bridge that
//! lets one open view observe another view's session mutations.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::StorageEvent;

use crate::constants::{TOKEN_STORAGE_KEY, USER_STORAGE_KEY};
use crate::session::{SessionStore, StorageBackend};

/// Browser localStorage persistence.
///
/// Every call resolves the window's storage fresh; when storage is
/// unavailable (sandboxed frame, disabled cookies) reads are absent and
/// writes are dropped, which degrades the app to logged-out behavior.
pub struct LocalStorage;

fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}

impl StorageBackend for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = storage() {
            if let Err(err) = storage.set_item(key, value) {
                tracing::warn!(?err, key, "failed to persist to localStorage");
            }
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// Wire the window `storage` event to the session store, so a logout in one
/// tab is observed by every other tab of the same storage scope. The
/// listener is installed once and lives for the page's lifetime.
pub fn bridge_storage_events(store: &SessionStore) {
    let Some(window) = web_sys::window() else {
        return;
    };

    let store = store.clone();
    let callback = Closure::<dyn FnMut(StorageEvent)>::new(move |event: StorageEvent| {
        // A null key signals storage.clear(); otherwise only react to the
        // session's own keys.
        let key = event.key();
        if key.is_none()
            || key.as_deref() == Some(TOKEN_STORAGE_KEY)
            || key.as_deref() == Some(USER_STORAGE_KEY)
        {
            store.sync_from_storage();
        }
    });

    if window
        .add_event_listener_with_callback("storage", callback.as_ref().unchecked_ref())
        .is_err()
    {
        tracing::warn!("failed to attach storage event listener");
    }
    callback.forget();
}
