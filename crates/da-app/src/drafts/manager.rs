//! Debounced draft persistence.
//! 表单草稿的防抖持久化。

use std::sync::{Arc, Mutex, MutexGuard};

use da_core::draft::FormDraft;
use da_core::ports::{ClockPort, DraftStorePort};
use da_core::requirements::PartialRequirements;
use tokio::task::AbortHandle;
use tokio::time::sleep;
use tracing::{debug, warn};

use super::config::DraftConfig;

/// Debounced draft persistence for the requirements wizard.
///
/// Owns the single draft slot in the injected store. Every public
/// operation has a total contract: storage and serialization failures are
/// logged and swallowed, so the wizard simply behaves as if no draft
/// existed (or as if the last keystroke was not saved).
///
/// At most one debounced save is pending at any moment; each
/// [`auto_save`](Self::auto_save) call replaces the previous one. The
/// manager does not cancel the pending save on drop — an owner that must
/// not leave a stray write behind calls
/// [`cancel_pending_save`](Self::cancel_pending_save) on teardown.
pub struct DraftManager {
    inner: Arc<Inner>,
    pending: Mutex<Option<AbortHandle>>,
}

struct Inner {
    store: Arc<dyn DraftStorePort>,
    clock: Arc<dyn ClockPort>,
    config: DraftConfig,
}

impl DraftManager {
    pub fn new(
        store: Arc<dyn DraftStorePort>,
        clock: Arc<dyn ClockPort>,
        config: DraftConfig,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                store,
                clock,
                config,
            }),
            pending: Mutex::new(None),
        }
    }

    /// Persist `data` at `step` immediately, replacing any stored draft in
    /// full. Synchronous; never fails from the caller's point of view.
    pub fn save(&self, step: u32, data: &PartialRequirements) {
        self.inner.save_now(step, data);
    }

    /// Schedule a save of exactly these arguments after the quiet period.
    ///
    /// A previously pending save is cancelled first, so a burst of calls
    /// produces a single write carrying the last call's arguments. Must be
    /// called from within a tokio runtime.
    pub fn auto_save(&self, step: u32, data: PartialRequirements) {
        let mut pending = self.pending();
        if let Some(prev) = pending.take() {
            prev.abort();
        }

        let inner = Arc::clone(&self.inner);
        let delay = self.inner.config.autosave_delay;
        let task = tokio::spawn(async move {
            sleep(delay).await;
            inner.save_now(step, &data);
        });
        *pending = Some(task.abort_handle());
        debug!(step, delay_ms = delay.as_millis() as u64, "auto-save scheduled");
    }

    /// Abort the pending debounced save, if any. Owners call this on
    /// teardown; it is a no-op when nothing is scheduled.
    pub fn cancel_pending_save(&self) {
        if let Some(task) = self.pending().take() {
            task.abort();
            debug!("pending auto-save cancelled");
        }
    }

    /// Load the stored draft.
    ///
    /// Returns `None` when nothing is stored, when the stored value does
    /// not parse (logged, left in place for the next save to overwrite),
    /// or when the draft has outlived the expiry window — in which case it
    /// is deleted as a side effect of this call.
    pub fn load(&self) -> Option<FormDraft> {
        let raw = match self.inner.store.read(&self.inner.config.storage_key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!(error = %e, "draft read failed");
                return None;
            }
        };

        let draft: FormDraft = match serde_json::from_str(&raw) {
            Ok(draft) => draft,
            Err(e) => {
                warn!(error = %e, "stored draft is not parseable, treating as absent");
                return None;
            }
        };

        if draft.is_expired(self.inner.clock.now_ms(), self.inner.config.expiry) {
            debug!(timestamp = draft.timestamp, "stored draft expired, removing");
            self.clear();
            return None;
        }

        Some(draft)
    }

    /// Remove the stored draft unconditionally. Idempotent.
    pub fn clear(&self) {
        match self.inner.store.remove(&self.inner.config.storage_key) {
            Ok(()) => debug!("draft cleared"),
            Err(e) => warn!(error = %e, "draft clear failed"),
        }
    }

    /// Whether [`load`](Self::load) would currently return a draft.
    /// Delegates to `load`, so an expired draft is removed here too.
    pub fn has_draft(&self) -> bool {
        self.load().is_some()
    }

    /// `YYYY/MM/DD HH:MM` rendering of the stored draft's write time, or
    /// `None` when no live draft exists.
    pub fn saved_at(&self) -> Option<String> {
        self.load().and_then(|draft| draft.saved_at_local())
    }

    fn pending(&self) -> MutexGuard<'_, Option<AbortHandle>> {
        self.pending.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Inner {
    fn save_now(&self, step: u32, data: &PartialRequirements) {
        let draft = FormDraft::new(step, data.clone(), self.clock.now_ms());

        let serialized = match serde_json::to_string(&draft) {
            Ok(serialized) => serialized,
            Err(e) => {
                warn!(error = %e, "draft serialization failed");
                return;
            }
        };

        match self.store.write(&self.config.storage_key, &serialized) {
            Ok(()) => debug!(step, timestamp = draft.timestamp, "draft saved"),
            Err(e) => warn!(error = %e, "draft save failed"),
        }
    }
}
