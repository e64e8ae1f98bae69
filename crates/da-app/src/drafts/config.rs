use std::time::Duration;

use da_core::draft::DRAFT_EXPIRY;

/// Storage key under which the wizard draft lives. The draft manager is the
/// single writer of this key.
pub const DEFAULT_DRAFT_KEY: &str = "project_requirements_draft";

/// Quiet period for debounced auto-saves.
pub const AUTO_SAVE_DELAY: Duration = Duration::from_millis(2000);

/// Configuration for a [`crate::drafts::DraftManager`] instance.
///
/// Key and windows are injected rather than hard-coded so tests can swap
/// the slot and shrink the timings.
#[derive(Debug, Clone)]
pub struct DraftConfig {
    pub storage_key: String,
    pub expiry: Duration,
    pub autosave_delay: Duration,
}

impl Default for DraftConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_DRAFT_KEY.to_string(),
            expiry: DRAFT_EXPIRY,
            autosave_delay: AUTO_SAVE_DELAY,
        }
    }
}
