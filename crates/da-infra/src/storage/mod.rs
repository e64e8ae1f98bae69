//! Draft store adapters.
mod file_store;
mod memory_store;

pub use file_store::FileDraftStore;
pub use memory_store::MemoryDraftStore;

use std::path::PathBuf;

/// Default location for draft files:
/// `<platform data dir>/dev-advisor/drafts`.
pub fn default_drafts_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("dev-advisor").join("drafts"))
}
