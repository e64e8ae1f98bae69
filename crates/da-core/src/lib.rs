//! # da-core
//!
//! Core domain models and business logic for the dev-advisor requirements
//! wizard.
//!
//! This crate contains pure business logic without any infrastructure
//! dependencies.

// Public module exports
pub mod draft;
pub mod ports;
pub mod requirements;
pub mod wizard;

// Re-export commonly used types at the crate root
pub use draft::{FormDraft, DRAFT_EXPIRY};
pub use requirements::{Budget, PartialRequirements, ProjectRequirements};
pub use wizard::WizardState;
