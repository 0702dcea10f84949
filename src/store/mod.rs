//! Record store: persistence of Account rows behind an object-safe trait.

mod memory;
mod postgres;

pub use memory::MemoryAccountStore;
pub use postgres::PgAccountStore;

use crate::account::{Account, AccountDraft};
use crate::error::AppError;
use async_trait::async_trait;

/// Persistence operations over Account rows.
///
/// `find_by_id`, `update` and `delete` report an absent id as
/// [`AppError::NotFound`]; delete is not idempotent.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Assigns a fresh id and persists the draft.
    async fn create(&self, draft: AccountDraft) -> Result<Account, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Account, AppError>;

    /// Every record in id order.
    async fn list_all(&self) -> Result<Vec<Account>, AppError>;

    /// Overwrites the record in place. A draft without `date_joined` keeps the stored date.
    async fn update(&self, id: i64, draft: AccountDraft) -> Result<Account, AppError>;

    async fn delete(&self, id: i64) -> Result<(), AppError>;

    /// Cheap round trip to the backing store for readiness checks.
    async fn ping(&self) -> Result<(), AppError>;
}
