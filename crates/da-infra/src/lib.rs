//! # da-infra
//!
//! Infrastructure adapters for the dev-advisor requirements wizard: draft
//! store implementations and the system clock.

pub mod storage;
pub mod time;

pub use storage::{FileDraftStore, MemoryDraftStore};
pub use time::SystemClock;
