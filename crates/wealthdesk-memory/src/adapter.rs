// HashMap-backed Storage implementation. One JSON document per key, guarded
// by a tokio RwLock, with a configurable sleep before each operation to
// mimic the round trip of a remote row-store.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;

use wealthdesk_core::db::storage::{Storage, StorageError};

type Documents = HashMap<String, serde_json::Value>;

/// In-memory document store.
///
/// Data lives in an `Arc<RwLock<HashMap>>` and is lost on drop. Clones share
/// the same underlying map.
#[derive(Debug, Clone)]
pub struct MemoryStorage {
    documents: Arc<RwLock<Documents>>,
    latency: Duration,
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStorage {
    /// A store with the default simulated latency of 150 ms per operation.
    pub fn new() -> Self {
        Self::with_latency(Duration::from_millis(150))
    }

    /// A store with zero latency, for tests.
    pub fn instant() -> Self {
        Self::with_latency(Duration::ZERO)
    }

    pub fn with_latency(latency: Duration) -> Self {
        Self {
            documents: Arc::new(RwLock::new(HashMap::new())),
            latency,
        }
    }

    /// A store pre-populated with documents.
    pub fn with_documents(documents: Documents) -> Self {
        Self {
            documents: Arc::new(RwLock::new(documents)),
            latency: Duration::ZERO,
        }
    }

    /// Snapshot of every document, for debugging and tests.
    pub async fn snapshot(&self) -> Documents {
        self.documents.read().await.clone()
    }

    pub async fn clear(&self) {
        self.documents.write().await.clear();
    }

    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.documents.read().await.is_empty()
    }

    async fn simulate_round_trip(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn get(&self, key: &str) -> Result<Option<serde_json::Value>, StorageError> {
        self.simulate_round_trip().await;
        Ok(self.documents.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: serde_json::Value) -> Result<(), StorageError> {
        self.simulate_round_trip().await;
        self.documents.write().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.simulate_round_trip().await;
        self.documents.write().await.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[tokio::test]
    async fn test_get_missing_key() {
        let storage = MemoryStorage::instant();
        assert_eq!(storage.get("users").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_then_get() {
        let storage = MemoryStorage::instant();
        let doc = serde_json::json!([{"id": "ID:111111", "balance": 30.0}]);
        storage.set("users", doc.clone()).await.unwrap();
        assert_eq!(storage.get("users").await.unwrap(), Some(doc));
    }

    #[tokio::test]
    async fn test_set_overwrites_wholesale() {
        let storage = MemoryStorage::instant();
        storage.set("appName", serde_json::json!("A")).await.unwrap();
        storage.set("appName", serde_json::json!("B")).await.unwrap();
        assert_eq!(
            storage.get("appName").await.unwrap(),
            Some(serde_json::json!("B"))
        );
    }

    #[tokio::test]
    async fn test_remove_is_idempotent() {
        let storage = MemoryStorage::instant();
        storage.set("k", serde_json::json!(1)).await.unwrap();
        storage.remove("k").await.unwrap();
        storage.remove("k").await.unwrap();
        assert_eq!(storage.get("k").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_clones_share_documents() {
        let storage = MemoryStorage::instant();
        let other = storage.clone();
        storage.set("k", serde_json::json!(42)).await.unwrap();
        assert_eq!(other.get("k").await.unwrap(), Some(serde_json::json!(42)));
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Stamped {
        label: String,
        created_at: chrono::DateTime<chrono::Utc>,
    }

    #[tokio::test]
    async fn test_round_trip_preserves_dates() {
        let storage = MemoryStorage::instant();
        let original = Stamped {
            label: "activity".into(),
            created_at: chrono::Utc::now(),
        };
        let doc = serde_json::to_value(&original).unwrap();
        storage.set("activityLog", doc.clone()).await.unwrap();

        let fetched = storage.get("activityLog").await.unwrap().unwrap();
        // Deep-equal as JSON, and dates reconstruct from their ISO form
        assert_eq!(fetched, doc);
        let back: Stamped = serde_json::from_value(fetched).unwrap();
        assert_eq!(back, original);
    }

    #[tokio::test]
    async fn test_latency_is_simulated() {
        let storage = MemoryStorage::with_latency(Duration::from_millis(100));
        let before = std::time::Instant::now();
        storage.set("k", serde_json::json!(1)).await.unwrap();
        assert!(before.elapsed() >= Duration::from_millis(100));
    }
}
