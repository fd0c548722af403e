// The persistence seam. Every collection is read and written as one whole
// JSON document per key; implementations decide where the documents live
// (browser-local storage, a hosted row-store, plain memory).

use async_trait::async_trait;

/// A string-keyed JSON document store.
///
/// All operations are asynchronous; implementations are expected to simulate
/// or incur real round-trip latency. Values round-trip structurally: a value
/// written and re-read without an intervening `set` is deep-equal, with
/// date fields surviving as ISO-8601 strings.
#[async_trait]
pub trait Storage: Send + Sync + std::fmt::Debug {
    /// Fetch the document at `key`. `None` if the key was never written
    /// or has been removed.
    async fn get(&self, key: &str) -> Result<Option<serde_json::Value>, StorageError>;

    /// Overwrite the document at `key` wholesale.
    async fn set(&self, key: &str, value: serde_json::Value) -> Result<(), StorageError>;

    /// Remove the document at `key`. Removing an absent key is not an error.
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Errors from storage operations. The store layer logs these and falls
/// back to default values; they never reach a screen.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Storage operation failed: {0}")]
    OperationFailed(String),
}
