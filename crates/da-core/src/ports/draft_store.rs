use super::errors::DraftStoreError;

/// Draft store port - a durable string key-value slot.
///
/// Mirrors the semantics of a per-profile browser store: synchronous reads
/// and writes, full-value replacement, no transactions. The application
/// layer owns serialization; adapters only move raw strings.
pub trait DraftStorePort: Send + Sync {
    /// Read the value under `key`, `None` when nothing is stored.
    fn read(&self, key: &str) -> Result<Option<String>, DraftStoreError>;

    /// Replace the value under `key` in full.
    fn write(&self, key: &str, value: &str) -> Result<(), DraftStoreError>;

    /// Remove the value under `key`. Removing an absent key is a no-op.
    fn remove(&self, key: &str) -> Result<(), DraftStoreError>;
}
