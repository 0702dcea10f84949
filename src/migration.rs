//! Schema bootstrap: create the target database and the `accounts` table when missing.

use crate::error::AppError;
use sqlx::postgres::{PgConnectOptions, PgConnection};
use sqlx::{ConnectOptions, PgPool};
use std::str::FromStr;

/// Column lengths here are the source of the limits enforced by request validation.
const ACCOUNTS_DDL: &str = r#"
    CREATE TABLE IF NOT EXISTS accounts (
        id BIGSERIAL PRIMARY KEY,
        name VARCHAR(64) NOT NULL,
        email VARCHAR(64) NOT NULL,
        address VARCHAR(256) NOT NULL,
        phone_number VARCHAR(32),
        date_joined DATE NOT NULL DEFAULT CURRENT_DATE
    )
"#;

/// Create the `accounts` table. Idempotent.
pub async fn apply_migrations(pool: &PgPool) -> Result<(), AppError> {
    tracing::debug!(sql = %ACCOUNTS_DDL, "migration");
    sqlx::query(ACCOUNTS_DDL).execute(pool).await?;
    Ok(())
}

/// Create the database named in `database_url` if it does not exist, connecting
/// through the `postgres` maintenance database on the same server.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin, db_name) = bootstrap_target(database_url)?;
    if db_name == "postgres" {
        return Ok(());
    }
    let mut conn: PgConnection = admin.connect().await?;
    let exists: (bool,) =
        sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
            .bind(&db_name)
            .fetch_one(&mut conn)
            .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

/// Maintenance connection options and the target database name. Without a
/// database in the URL, PostgreSQL uses the user name.
fn bootstrap_target(database_url: &str) -> Result<(PgConnectOptions, String), AppError> {
    let opts = PgConnectOptions::from_str(database_url)?;
    let db_name = opts
        .get_database()
        .unwrap_or_else(|| opts.get_username())
        .to_string();
    Ok((opts.database("postgres"), db_name))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
