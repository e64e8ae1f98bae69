//! Requirements domain models.
mod model;
pub mod validation;

pub use model::{Budget, PartialRequirements, ProjectRequirements};
