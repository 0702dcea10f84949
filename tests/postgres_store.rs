//! PgAccountStore against a live database. Skipped unless `TEST_DATABASE_URL` is set.
//! The `accounts` table is emptied before the run.

use accounts_service::{apply_migrations, AccountDraft, AccountStore, AppError, PgAccountStore};
use chrono::NaiveDate;
use sqlx::postgres::PgPoolOptions;

fn draft(name: &str, date_joined: Option<NaiveDate>) -> AccountDraft {
    AccountDraft {
        name: name.into(),
        email: format!("{}@example.com", name.to_lowercase()),
        address: "1 Main St".into(),
        phone_number: Some("555-0100".into()),
        date_joined,
    }
}

#[tokio::test]
async fn postgres_store_lifecycle() {
    let Ok(url) = std::env::var("TEST_DATABASE_URL") else {
        return;
    };
    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&url)
        .await
        .unwrap();
    apply_migrations(&pool).await.unwrap();
    sqlx::query("DELETE FROM accounts").execute(&pool).await.unwrap();
    let store = PgAccountStore::new(pool);

    store.ping().await.unwrap();
    assert!(store.list_all().await.unwrap().is_empty());

    let joined = NaiveDate::from_ymd_opt(2024, 1, 1);
    let ada = store.create(draft("Ada", joined)).await.unwrap();
    assert_eq!(ada.name, "Ada");
    assert_eq!(Some(ada.date_joined), joined);
    assert_eq!(store.find_by_id(ada.id).await.unwrap(), ada);

    let grace = store.create(draft("Grace", None)).await.unwrap();
    assert!(grace.id > ada.id);
    assert_eq!(store.list_all().await.unwrap(), vec![ada.clone(), grace.clone()]);

    let updated = store.update(ada.id, draft("Georges", None)).await.unwrap();
    assert_eq!(updated.id, ada.id);
    assert_eq!(updated.name, "Georges");
    assert_eq!(updated.date_joined, ada.date_joined);

    store.delete(ada.id).await.unwrap();
    assert!(matches!(store.find_by_id(ada.id).await, Err(AppError::NotFound(_))));
    assert!(matches!(store.delete(ada.id).await, Err(AppError::NotFound(_))));
    assert!(matches!(
        store.update(ada.id, draft("Ada", None)).await,
        Err(AppError::NotFound(_))
    ));
    assert_eq!(store.list_all().await.unwrap(), vec![grace]);
}
