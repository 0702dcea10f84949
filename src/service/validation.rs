//! Request validation: untyped JSON body to a typed [`AccountDraft`].

use crate::account::AccountDraft;
use crate::error::AppError;
use chrono::NaiveDate;
use serde_json::{Map, Value};

/// Per-column rule. Lengths mirror the `accounts` table definition.
struct FieldRule {
    name: &'static str,
    max_length: usize,
}

const NAME: FieldRule = FieldRule {
    name: "name",
    max_length: 64,
};
const EMAIL: FieldRule = FieldRule {
    name: "email",
    max_length: 64,
};
const ADDRESS: FieldRule = FieldRule {
    name: "address",
    max_length: 256,
};
const PHONE_NUMBER: FieldRule = FieldRule {
    name: "phone_number",
    max_length: 32,
};

/// Map a JSON body onto an [`AccountDraft`]. Unknown keys (including `id`) are
/// ignored; the first failing field is reported.
pub fn deserialize(payload: &Value) -> Result<AccountDraft, AppError> {
    let body = payload
        .as_object()
        .ok_or_else(|| AppError::Validation("body must be a JSON object".into()))?;
    let name = required_string(body, &NAME)?;
    let email = required_string(body, &EMAIL)?;
    let address = required_string(body, &ADDRESS)?;
    let phone_number = string_field(body, &PHONE_NUMBER)?;
    let date_joined = date_field(body, "date_joined")?;
    Ok(AccountDraft {
        name,
        email,
        address,
        phone_number,
        date_joined,
    })
}

fn required_string(body: &Map<String, Value>, rule: &FieldRule) -> Result<String, AppError> {
    string_field(body, rule)?
        .ok_or_else(|| AppError::Validation(format!("{} is required", rule.name)))
}

/// Absent and `null` both read as `None`.
fn string_field(
    body: &Map<String, Value>,
    rule: &FieldRule,
) -> Result<Option<String>, AppError> {
    let s = match body.get(rule.name) {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::String(s)) => s,
        Some(_) => {
            return Err(AppError::Validation(format!("{} must be a string", rule.name)));
        }
    };
    if s.chars().count() > rule.max_length {
        return Err(AppError::Validation(format!(
            "{} must be at most {} characters",
            rule.name, rule.max_length
        )));
    }
    Ok(Some(s.clone()))
}

fn date_field(body: &Map<String, Value>, col: &str) -> Result<Option<NaiveDate>, AppError> {
    match body.get(col) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| AppError::Validation(format!("{} must be an ISO date (YYYY-MM-DD)", col))),
        Some(_) => Err(AppError::Validation(format!("{} must be a string", col))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn valid() -> Value {
        json!({
            "name": "Ada",
            "email": "ada@x.io",
            "address": "1 Infinite Loop",
            "phone_number": "555-0100",
            "date_joined": "2024-01-01"
        })
    }

    fn message(err: AppError) -> String {
        match err {
            AppError::Validation(m) => m,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn accepts_full_payload() {
        let draft = deserialize(&valid()).unwrap();
        assert_eq!(draft.name, "Ada");
        assert_eq!(draft.phone_number.as_deref(), Some("555-0100"));
        assert_eq!(draft.date_joined, NaiveDate::from_ymd_opt(2024, 1, 1));
    }

    #[test]
    fn optional_fields_may_be_absent_or_null() {
        let draft = deserialize(&json!({
            "name": "Ada",
            "email": "ada@x.io",
            "address": "here",
            "phone_number": null
        }))
        .unwrap();
        assert_eq!(draft.phone_number, None);
        assert_eq!(draft.date_joined, None);
    }

    #[test]
    fn unknown_keys_and_id_are_ignored() {
        let mut body = valid();
        body["id"] = json!(99);
        body["nickname"] = json!("countess");
        assert!(deserialize(&body).is_ok());
    }

    #[rstest]
    #[case("name", "name is required")]
    #[case("email", "email is required")]
    #[case("address", "address is required")]
    fn rejects_missing_required(#[case] field: &str, #[case] expected: &str) {
        let mut body = valid();
        body.as_object_mut().unwrap().remove(field);
        assert_eq!(message(deserialize(&body).unwrap_err()), expected);
    }

    #[rstest]
    #[case("name", json!(null), "name is required")]
    #[case("email", json!(42), "email must be a string")]
    #[case("phone_number", json!(5550100), "phone_number must be a string")]
    #[case("date_joined", json!("01/01/2024"), "date_joined must be an ISO date (YYYY-MM-DD)")]
    #[case("date_joined", json!(20240101), "date_joined must be a string")]
    #[case("name", json!("x".repeat(65)), "name must be at most 64 characters")]
    #[case("phone_number", json!("9".repeat(33)), "phone_number must be at most 32 characters")]
    fn rejects_bad_values(#[case] field: &str, #[case] value: Value, #[case] expected: &str) {
        let mut body = valid();
        body[field] = value;
        assert_eq!(message(deserialize(&body).unwrap_err()), expected);
    }

    #[rstest]
    #[case(json!([]))]
    #[case(json!("Ada"))]
    #[case(json!(null))]
    fn rejects_non_object(#[case] body: Value) {
        assert_eq!(message(deserialize(&body).unwrap_err()), "body must be a JSON object");
    }

    #[test]
    fn length_limit_counts_characters() {
        let mut body = valid();
        body["name"] = json!("é".repeat(64));
        assert!(deserialize(&body).is_ok());
    }
}
