//! Serialization layer: validating request bodies into account drafts.

mod validation;
pub use validation::deserialize;
