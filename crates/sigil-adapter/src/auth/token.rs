/*
[INPUT]:  Session tokens from the authentication exchange
[OUTPUT]: Token retrieval, storage, and invalidation
[POS]:    Auth layer - token lifecycle storage
[UPDATE]: When adding new storage backends or changing the store contract
*/

use std::sync::{Arc, RwLock};

use async_trait::async_trait;

/// Trait for session token storage
///
/// Implement this for host environments that need persistence (browser
/// storage, keychains). Writes are last-write-wins; reads are not required
/// to be linearizable with concurrent writes.
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// Get the stored token, if any
    async fn get(&self) -> Option<String>;

    /// Store a token, replacing any previous value
    async fn set(&self, token: String);

    /// Remove the stored token
    async fn clear(&self);
}

/// In-process, memory-only token store
///
/// Holds at most one token and does not survive process restarts.
#[derive(Debug, Clone, Default)]
pub struct MemoryTokenStore {
    data: Arc<RwLock<Option<String>>>,
}

impl MemoryTokenStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TokenStore for MemoryTokenStore {
    async fn get(&self) -> Option<String> {
        self.data.read().unwrap().clone()
    }

    async fn set(&self, token: String) {
        *self.data.write().unwrap() = Some(token);
    }

    async fn clear(&self) {
        *self.data.write().unwrap() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_new_store_is_empty() {
        let store = MemoryTokenStore::new();
        assert!(store.get().await.is_none());
    }

    #[tokio::test]
    async fn test_set_and_get_token() {
        let store = MemoryTokenStore::new();
        store.set("session-token".to_string()).await;
        assert_eq!(store.get().await, Some("session-token".to_string()));
    }

    #[tokio::test]
    async fn test_last_write_wins() {
        let store = MemoryTokenStore::new();
        store.set("first".to_string()).await;
        store.set("second".to_string()).await;
        assert_eq!(store.get().await, Some("second".to_string()));
    }

    #[tokio::test]
    async fn test_clear_token() {
        let store = MemoryTokenStore::new();
        store.set("session-token".to_string()).await;
        store.clear().await;
        assert!(store.get().await.is_none());
    }
}
