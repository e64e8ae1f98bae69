//! Draft persistence use cases.
mod config;
mod manager;

pub use config::{DraftConfig, AUTO_SAVE_DELAY, DEFAULT_DRAFT_KEY};
pub use manager::DraftManager;
