//! Account REST API service: CRUD over a single Account resource backed by PostgreSQL.

pub mod account;
pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod migration;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use account::{Account, AccountDraft};
pub use config::{Settings, StoreBackend};
pub use error::{AppError, ConfigError};
pub use migration::{apply_migrations, ensure_database_exists};
pub use routes::{account_routes, app, common_routes};
pub use state::AppState;
pub use store::{AccountStore, MemoryAccountStore, PgAccountStore};
