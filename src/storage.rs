//! Session Persistence
//!
//! The logged-in user is kept as JSON in one key-value slot so a reload does
//! not ask for credentials again.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::{ApiError, ApiResult};
use crate::models::Session;

pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> ApiResult<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> ApiResult<()>;
    fn remove_item(&self, key: &str) -> ApiResult<()>;
}

/// Browser `window.localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

#[cfg(target_arch = "wasm32")]
impl LocalStorage {
    fn storage() -> ApiResult<web_sys::Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or_else(|| ApiError::Storage("localStorage is unavailable".to_string()))
    }
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for LocalStorage {
    fn get_item(&self, key: &str) -> ApiResult<Option<String>> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| ApiError::Storage(format!("{:?}", e)))
    }

    fn set_item(&self, key: &str, value: &str) -> ApiResult<()> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| ApiError::Storage(format!("{:?}", e)))
    }

    fn remove_item(&self, key: &str) -> ApiResult<()> {
        Self::storage()?
            .remove_item(key)
            .map_err(|e| ApiError::Storage(format!("{:?}", e)))
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl KeyValueStore for LocalStorage {
    fn get_item(&self, _key: &str) -> ApiResult<Option<String>> {
        Ok(None)
    }

    fn set_item(&self, _key: &str, _value: &str) -> ApiResult<()> {
        Err(ApiError::Storage("localStorage is only available in the browser".to_string()))
    }

    fn remove_item(&self, _key: &str) -> ApiResult<()> {
        Ok(())
    }
}

/// In-process map, lost on reload
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    fn with_items<R>(&self, f: impl FnOnce(&mut HashMap<String, String>) -> R) -> ApiResult<R> {
        let mut items = self
            .items
            .lock()
            .map_err(|_| ApiError::Storage("memory storage lock poisoned".to_string()))?;
        Ok(f(&mut items))
    }
}

impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> ApiResult<Option<String>> {
        self.with_items(|items| items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> ApiResult<()> {
        self.with_items(|items| {
            items.insert(key.to_string(), value.to_string());
        })
    }

    fn remove_item(&self, key: &str) -> ApiResult<()> {
        self.with_items(|items| {
            items.remove(key);
        })
    }
}

/// Read the persisted session.
///
/// A value that does not parse is removed and treated as absent.
pub fn load_session(store: &impl KeyValueStore, key: &str) -> Option<Session> {
    let raw = match store.get_item(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(err) => {
            tracing::warn!(%err, "could not read saved session");
            return None;
        }
    };

    match serde_json::from_str::<Session>(&raw) {
        Ok(session) => Some(session),
        Err(err) => {
            tracing::warn!(%err, key, "discarding malformed saved session");
            if let Err(err) = store.remove_item(key) {
                tracing::warn!(%err, "could not remove malformed session");
            }
            None
        }
    }
}

pub fn save_session(store: &impl KeyValueStore, key: &str, session: &Session) -> ApiResult<()> {
    let raw = serde_json::to_string(session)?;
    store.set_item(key, &raw)
}

pub fn clear_session(store: &impl KeyValueStore, key: &str) -> ApiResult<()> {
    store.remove_item(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SESSION_KEY;

    fn session() -> Session {
        Session { name: "Superuser".into(), token: "t0k".into(), username: None }
    }

    #[test]
    fn test_save_then_load() {
        let store = MemoryStorage::default();
        save_session(&store, SESSION_KEY, &session()).unwrap();

        assert_eq!(load_session(&store, SESSION_KEY), Some(session()));
        assert!(store.get_item(SESSION_KEY).unwrap().unwrap().contains("\"token\":\"t0k\""));
    }

    #[test]
    fn test_missing_slot_is_none() {
        let store = MemoryStorage::default();
        assert_eq!(load_session(&store, SESSION_KEY), None);
    }

    #[test]
    fn test_malformed_value_is_discarded() {
        let store = MemoryStorage::default();
        store.set_item(SESSION_KEY, "{\"name\":\"half").unwrap();

        assert_eq!(load_session(&store, SESSION_KEY), None);
        assert_eq!(store.get_item(SESSION_KEY).unwrap(), None);
    }

    #[test]
    fn test_partial_session_is_rejected() {
        let store = MemoryStorage::default();
        store.set_item(SESSION_KEY, r#"{"name":"Superuser"}"#).unwrap();
        assert_eq!(load_session(&store, SESSION_KEY), None);
    }

    #[test]
    fn test_clear() {
        let store = MemoryStorage::default();
        save_session(&store, SESSION_KEY, &session()).unwrap();
        clear_session(&store, SESSION_KEY).unwrap();
        assert_eq!(load_session(&store, SESSION_KEY), None);
    }
}
