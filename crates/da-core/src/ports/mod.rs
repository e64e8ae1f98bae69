//! Port interfaces for the application layer.
//!
//! Ports define the contract between use cases and infrastructure
//! implementations, keeping the domain logic independent of how drafts are
//! actually stored or how time is read.

mod clock;
mod draft_store;
pub mod errors;

pub use clock::ClockPort;
pub use draft_store::DraftStorePort;
pub use errors::DraftStoreError;
