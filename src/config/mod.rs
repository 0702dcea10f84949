//! Service configuration from environment variables.

mod settings;
pub use settings::*;
