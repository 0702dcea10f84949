//! The Account record and its validated, id-less draft.

use chrono::NaiveDate;
use serde::Serialize;

/// A persisted Account row. Its `Serialize` impl is the wire format: a flat
/// object with every attribute.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Account {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub address: String,
    pub phone_number: Option<String>,
    /// Rendered as `YYYY-MM-DD` on the wire.
    pub date_joined: NaiveDate,
}

impl Account {
    /// Builds a record from a draft. A missing `date_joined` falls back to `default_date`.
    pub fn from_draft(id: i64, draft: AccountDraft, default_date: NaiveDate) -> Self {
        Account {
            id,
            name: draft.name,
            email: draft.email,
            address: draft.address,
            phone_number: draft.phone_number,
            date_joined: draft.date_joined.unwrap_or(default_date),
        }
    }
}

/// Validated request payload. Produced only by [`crate::service::deserialize`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccountDraft {
    pub name: String,
    pub email: String,
    pub address: String,
    pub phone_number: Option<String>,
    /// `None` means "server decides": today on create, unchanged on update.
    pub date_joined: Option<NaiveDate>,
}

/// Current date used for server-set `date_joined`.
pub fn today() -> NaiveDate {
    chrono::Utc::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> AccountDraft {
        AccountDraft {
            name: "Ada".into(),
            email: "ada@x.io".into(),
            address: "1 Infinite Loop".into(),
            phone_number: None,
            date_joined: None,
        }
    }

    #[test]
    fn serializes_iso_date_and_null_phone() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let account = Account::from_draft(3, draft(), date);
        let json = serde_json::to_value(&account).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["date_joined"], "2024-01-01");
        assert!(json["phone_number"].is_null());
        assert_eq!(json.as_object().unwrap().len(), 6);
    }

    #[test]
    fn from_draft_keeps_client_date() {
        let fallback = NaiveDate::from_ymd_opt(2030, 6, 1).unwrap();
        let mut d = draft();
        d.date_joined = NaiveDate::from_ymd_opt(2020, 2, 29);
        let account = Account::from_draft(1, d, fallback);
        assert_eq!(account.date_joined, NaiveDate::from_ymd_opt(2020, 2, 29).unwrap());
    }
}
