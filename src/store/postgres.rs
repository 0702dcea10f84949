//! PostgreSQL-backed account store.

use super::AccountStore;
use crate::account::{Account, AccountDraft};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

const COLUMNS: &str = "id, name, email, address, phone_number, date_joined";

#[derive(Clone)]
pub struct PgAccountStore {
    pool: PgPool,
}

impl PgAccountStore {
    pub fn new(pool: PgPool) -> Self {
        PgAccountStore { pool }
    }
}

#[async_trait]
impl AccountStore for PgAccountStore {
    async fn create(&self, draft: AccountDraft) -> Result<Account, AppError> {
        let sql = format!(
            "INSERT INTO accounts (name, email, address, phone_number, date_joined) \
             VALUES ($1, $2, $3, $4, COALESCE($5, CURRENT_DATE)) RETURNING {}",
            COLUMNS
        );
        tracing::debug!(sql = %sql, "query");
        let row = sqlx::query_as::<_, Account>(&sql)
            .bind(draft.name)
            .bind(draft.email)
            .bind(draft.address)
            .bind(draft.phone_number)
            .bind(draft.date_joined)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn find_by_id(&self, id: i64) -> Result<Account, AppError> {
        let sql = format!("SELECT {} FROM accounts WHERE id = $1", COLUMNS);
        tracing::debug!(sql = %sql, id, "query");
        sqlx::query_as::<_, Account>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::account_not_found(id))
    }

    async fn list_all(&self) -> Result<Vec<Account>, AppError> {
        let sql = format!("SELECT {} FROM accounts ORDER BY id", COLUMNS);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Account>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn update(&self, id: i64, draft: AccountDraft) -> Result<Account, AppError> {
        let sql = format!(
            "UPDATE accounts SET name = $1, email = $2, address = $3, phone_number = $4, \
             date_joined = COALESCE($5, date_joined) WHERE id = $6 RETURNING {}",
            COLUMNS
        );
        tracing::debug!(sql = %sql, id, "query");
        sqlx::query_as::<_, Account>(&sql)
            .bind(draft.name)
            .bind(draft.email)
            .bind(draft.address)
            .bind(draft.phone_number)
            .bind(draft.date_joined)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::account_not_found(id))
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let sql = "DELETE FROM accounts WHERE id = $1";
        tracing::debug!(sql = %sql, id, "query");
        let result = sqlx::query(sql).bind(id).execute(&self.pool).await?;
        if result.rows_affected() == 0 {
            return Err(AppError::account_not_found(id));
        }
        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}
