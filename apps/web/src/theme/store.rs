use std::collections::HashMap;

use axum::http::{HeaderMap, HeaderValue};
use thiserror::Error;

use crate::cookies::{is_cookie_safe, persistent_cookie, read_cookie};

/// One year; preference cookies outlive browser sessions.
pub const PREFERENCE_MAX_AGE_SECS: u64 = 365 * 24 * 60 * 60;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("value for '{key}' cannot be stored")]
    InvalidValue { key: String },

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Durable per-visitor key-value storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-process store. A store built with `unavailable()` fails every call.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    unavailable: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unavailable() -> Self {
        Self {
            entries: HashMap::new(),
            unavailable: true,
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        if self.unavailable {
            return Err(StoreError::Unavailable("memory store disabled".to_string()));
        }
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.unavailable {
            return Err(StoreError::Unavailable("memory store disabled".to_string()));
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store backed by the visitor's cookies: reads come from the request,
/// writes become `Set-Cookie` headers on the response.
#[derive(Debug, Default)]
pub struct CookieStore {
    incoming: HeaderMap,
    written: Vec<(String, String)>,
}

impl CookieStore {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        Self {
            incoming: headers.clone(),
            written: Vec::new(),
        }
    }

    /// `Set-Cookie` values for everything written during this request.
    pub fn set_cookie_headers(&self) -> Vec<HeaderValue> {
        self.written
            .iter()
            .filter_map(|(key, value)| {
                HeaderValue::from_str(&persistent_cookie(key, value, PREFERENCE_MAX_AGE_SECS)).ok()
            })
            .collect()
    }
}

impl KeyValueStore for CookieStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        if let Some((_, value)) = self.written.iter().rev().find(|(k, _)| k == key) {
            return Ok(Some(value.clone()));
        }
        Ok(read_cookie(&self.incoming, key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if !is_cookie_safe(key) || !is_cookie_safe(value) {
            return Err(StoreError::InvalidValue {
                key: key.to_string(),
            });
        }
        self.written.retain(|(k, _)| k != key);
        self.written.push((key.to_string(), value.to_string()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header;

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("k").unwrap(), None);
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn test_unavailable_store_fails() {
        let mut store = MemoryStore::unavailable();
        assert!(store.get("k").is_err());
        assert!(store.set("k", "v").is_err());
    }

    #[test]
    fn test_cookie_store_reads_request_then_own_writes() {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_static("onelink-theme=light"));
        let mut store = CookieStore::from_headers(&headers);

        assert_eq!(store.get("onelink-theme").unwrap().as_deref(), Some("light"));
        store.set("onelink-theme", "dark").unwrap();
        assert_eq!(store.get("onelink-theme").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn test_cookie_store_emits_persistent_cookie() {
        let mut store = CookieStore::default();
        store.set("onelink-theme", "light").unwrap();
        store.set("onelink-theme", "dark").unwrap();

        let headers = store.set_cookie_headers();
        assert_eq!(headers.len(), 1);
        assert_eq!(
            headers[0].to_str().unwrap(),
            "onelink-theme=dark; Path=/; Max-Age=31536000; SameSite=Lax"
        );
    }

    #[test]
    fn test_cookie_store_rejects_unsafe_value() {
        let mut store = CookieStore::default();
        assert!(matches!(
            store.set("onelink-theme", "dark; Domain=evil"),
            Err(StoreError::InvalidValue { .. })
        ));
        assert!(store.set_cookie_headers().is_empty());
    }
}
