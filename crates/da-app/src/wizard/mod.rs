//! Wizard session use case.
mod session;

pub use session::WizardSession;
