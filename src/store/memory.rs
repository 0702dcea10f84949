//! In-process account store for tests and local runs without PostgreSQL.

use super::AccountStore;
use crate::account::{today, Account, AccountDraft};
use crate::error::AppError;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Default)]
struct Inner {
    last_id: i64,
    rows: BTreeMap<i64, Account>,
}

/// Ids start at 1 and are never reused, matching a `BIGSERIAL` column.
#[derive(Default)]
pub struct MemoryAccountStore {
    inner: RwLock<Inner>,
}

impl MemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    // Rows are replaced whole, so a poisoned lock still guards a consistent map.
    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl AccountStore for MemoryAccountStore {
    async fn create(&self, draft: AccountDraft) -> Result<Account, AppError> {
        let mut inner = self.write();
        inner.last_id += 1;
        let account = Account::from_draft(inner.last_id, draft, today());
        inner.rows.insert(account.id, account.clone());
        Ok(account)
    }

    async fn find_by_id(&self, id: i64) -> Result<Account, AppError> {
        self.read()
            .rows
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::account_not_found(id))
    }

    async fn list_all(&self) -> Result<Vec<Account>, AppError> {
        Ok(self.read().rows.values().cloned().collect())
    }

    async fn update(&self, id: i64, draft: AccountDraft) -> Result<Account, AppError> {
        let mut inner = self.write();
        let row = inner
            .rows
            .get_mut(&id)
            .ok_or_else(|| AppError::account_not_found(id))?;
        *row = Account::from_draft(id, draft, row.date_joined);
        Ok(row.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.write()
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| AppError::account_not_found(id))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
