use std::collections::HashMap;

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::Mutex;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("store backend error: {0}")]
    Backend(String),
}

/// Byte-oriented key-value persistence. Writes to the same key must be
/// serialized relative to each other; last write wins.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;
    async fn put(&self, key: &str, value: Vec<u8>) -> Result<(), StoreError>;
}

/// In-memory reference store. The map lock serializes writes per key.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.entries.lock().await.get(key).cloned())
    }

    async fn put(&self, key: &str, value: Vec<u8>) -> Result<(), StoreError> {
        self.entries.lock().await.insert(key.to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_key_reads_none() {
        let store = MemoryStore::new();
        assert_eq!(store.get("meal_plans").await.unwrap(), None);
    }

    #[tokio::test]
    async fn put_then_get_round_trips() {
        let store = MemoryStore::new();
        store.put("meal_plans", b"[]".to_vec()).await.unwrap();
        assert_eq!(store.get("meal_plans").await.unwrap(), Some(b"[]".to_vec()));
    }

    #[tokio::test]
    async fn last_write_wins() {
        let store = MemoryStore::new();
        store.put("meal_plans", b"old".to_vec()).await.unwrap();
        store.put("meal_plans", b"new".to_vec()).await.unwrap();
        assert_eq!(
            store.get("meal_plans").await.unwrap(),
            Some(b"new".to_vec())
        );
    }
}
