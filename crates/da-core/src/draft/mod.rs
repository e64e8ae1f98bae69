//! Form draft domain model.
mod model;

pub use model::{FormDraft, DRAFT_EXPIRY};
