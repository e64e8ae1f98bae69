//! Wizard state machine.
//!
//! Pure state and transition logic only; persistence and the debounced
//! auto-save live in the application layer (da-app).
mod state;

pub use state::WizardState;
