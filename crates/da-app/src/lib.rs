//! # da-app
//!
//! Application layer for the dev-advisor requirements wizard: the debounced
//! draft manager and the wizard session use case that ties draft
//! persistence to the step state machine.

pub mod drafts;
pub mod wizard;

pub use drafts::{DraftConfig, DraftManager};
pub use wizard::WizardSession;
