use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use da_core::ports::{DraftStoreError, DraftStorePort};

/// In-memory draft store used by tests and the dev sandbox.
///
/// Optionally enforces a per-value size cap to mimic the quota errors a
/// browser profile store produces. Successful writes are counted so tests
/// can assert on debounce coalescing.
pub struct MemoryDraftStore {
    slots: Mutex<HashMap<String, String>>,
    max_value_bytes: Option<usize>,
    writes: AtomicUsize,
}

impl MemoryDraftStore {
    pub fn new() -> Self {
        Self {
            slots: Mutex::new(HashMap::new()),
            max_value_bytes: None,
            writes: AtomicUsize::new(0),
        }
    }

    /// A store that rejects values larger than `max_value_bytes` with
    /// [`DraftStoreError::QuotaExceeded`].
    pub fn with_value_limit(max_value_bytes: usize) -> Self {
        Self {
            max_value_bytes: Some(max_value_bytes),
            ..Self::new()
        }
    }

    /// Number of successful writes so far.
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Test inspection helper: current value under `key`.
    pub fn get(&self, key: &str) -> Option<String> {
        self.slots
            .lock()
            .map(|slots| slots.get(key).cloned())
            .unwrap_or(None)
    }

    pub fn len(&self) -> usize {
        self.slots.lock().map(|slots| slots.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for MemoryDraftStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DraftStorePort for MemoryDraftStore {
    fn read(&self, key: &str) -> Result<Option<String>, DraftStoreError> {
        let slots = self
            .slots
            .lock()
            .map_err(|_| DraftStoreError::Unavailable("draft store lock poisoned".into()))?;
        Ok(slots.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), DraftStoreError> {
        if let Some(limit) = self.max_value_bytes {
            if value.len() > limit {
                return Err(DraftStoreError::QuotaExceeded);
            }
        }
        let mut slots = self
            .slots
            .lock()
            .map_err(|_| DraftStoreError::Unavailable("draft store lock poisoned".into()))?;
        slots.insert(key.to_string(), value.to_string());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), DraftStoreError> {
        let mut slots = self
            .slots
            .lock()
            .map_err(|_| DraftStoreError::Unavailable("draft store lock poisoned".into()))?;
        slots.remove(key);
        Ok(())
    }
}
