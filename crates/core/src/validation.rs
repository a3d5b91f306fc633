//! Input checks applied before any store access.

use serde_json::Value;

use crate::error::CoreError;
use crate::resource::{Requirement, ResourceDescriptor};
use crate::types::{DbId, Fields};

/// Parse a path parameter the way `parseInt(raw, 10)` does.
///
/// Leading whitespace and a single sign are accepted, then the longest run
/// of ASCII digits is read and anything after it ignored (`"12abc"` is 12).
/// Returns `None` when no digit is found or the value does not fit in a
/// [`DbId`].
pub fn parse_id(raw: &str) -> Option<DbId> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    let magnitude: DbId = rest[..digits_len].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// JavaScript truthiness of a JSON value.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn is_non_blank(value: &Value) -> bool {
    value.as_str().is_some_and(|s| !s.trim().is_empty())
}

/// Check every required create field of `descriptor` against `fields`.
///
/// Fields that are not listed as required are never inspected.
pub fn check_required(descriptor: &ResourceDescriptor, fields: &Fields) -> Result<(), CoreError> {
    let missing: Vec<&str> = descriptor
        .required
        .iter()
        .filter(|field| {
            let Some(value) = fields.get(field.name) else {
                return true;
            };
            match field.requirement {
                Requirement::NonBlank => !is_non_blank(value),
                Requirement::Truthy => !is_truthy(value),
            }
        })
        .map(|field| field.name)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "{} data incomplete: {}",
            descriptor.entity,
            missing.join(", ")
        )))
    }
}

/// Reject a write payload that sets `id`. Ids are assigned by the store on
/// creation and never change.
pub fn ensure_no_id(descriptor: &ResourceDescriptor, fields: &Fields) -> Result<(), CoreError> {
    if fields.contains_key("id") {
        return Err(CoreError::Validation(format!(
            "{} id cannot be set by the client",
            descriptor.entity
        )));
    }
    Ok(())
}

/// Reject the zero id, which the numeric path parser lets through.
pub fn ensure_valid_id(entity: &'static str, id: DbId) -> Result<(), CoreError> {
    if id == 0 {
        return Err(CoreError::InvalidId { entity, id });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::{CHARACTERS, DEPARTEMENTS, SAVE_QUIZZ, USERS};
    use assert_matches::assert_matches;
    use serde_json::json;

    fn fields(value: Value) -> Fields {
        match value {
            Value::Object(map) => map,
            other => panic!("expected an object, got {other}"),
        }
    }

    #[test]
    fn parse_id_accepts_plain_integers() {
        assert_eq!(parse_id("42"), Some(42));
        assert_eq!(parse_id("0"), Some(0));
        assert_eq!(parse_id("-3"), Some(-3));
        assert_eq!(parse_id("+7"), Some(7));
    }

    #[test]
    fn parse_id_reads_leading_digits_only() {
        assert_eq!(parse_id("12abc"), Some(12));
        assert_eq!(parse_id("  9"), Some(9));
        assert_eq!(parse_id("1.5"), Some(1));
    }

    #[test]
    fn parse_id_rejects_non_numbers() {
        assert_eq!(parse_id("abc"), None);
        assert_eq!(parse_id(""), None);
        assert_eq!(parse_id("-"), None);
        assert_eq!(parse_id("x12"), None);
        assert_eq!(parse_id("99999999999999999999999"), None);
    }

    #[test]
    fn truthiness_follows_javascript() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!("")));
        assert!(is_truthy(&json!(1)));
        assert!(is_truthy(&json!("0")));
        assert!(is_truthy(&json!(" ")));
        assert!(is_truthy(&json!([])));
    }

    #[test]
    fn users_require_all_four_strings() {
        let ok = fields(json!({
            "username": "alice",
            "password": "secret",
            "password_kids": "1234",
            "email": "alice@example.com",
        }));
        assert!(check_required(&USERS, &ok).is_ok());

        let blank = fields(json!({
            "username": "   ",
            "password": "secret",
            "password_kids": "1234",
            "email": "alice@example.com",
        }));
        assert_matches!(
            check_required(&USERS, &blank),
            Err(CoreError::Validation(msg)) if msg.contains("username")
        );
    }

    #[test]
    fn non_string_value_is_not_non_blank() {
        let input = fields(json!({
            "username": 12,
            "password": "secret",
            "password_kids": "1234",
            "email": "alice@example.com",
        }));
        assert_matches!(check_required(&USERS, &input), Err(CoreError::Validation(_)));
    }

    #[test]
    fn character_needs_truthy_quiz_id() {
        let zero = fields(json!({"name": "Owl", "image_url": "/owl.png", "id_quiz": 0}));
        assert_matches!(
            check_required(&CHARACTERS, &zero),
            Err(CoreError::Validation(msg)) if msg.contains("id_quiz")
        );

        let ok = fields(json!({"name": "Owl", "image_url": "/owl.png", "id_quiz": 3}));
        assert!(check_required(&CHARACTERS, &ok).is_ok());
    }

    #[test]
    fn save_quizz_reports_every_missing_field() {
        let input = fields(json!({"id_user": 1}));
        assert_matches!(
            check_required(&SAVE_QUIZZ, &input),
            Err(CoreError::Validation(msg)) if msg.ends_with("id_quizz, id_character")
        );
    }

    #[test]
    fn resources_without_rules_accept_anything() {
        assert!(check_required(&DEPARTEMENTS, &Fields::new()).is_ok());
    }

    #[test]
    fn payload_id_is_rejected_even_when_null() {
        assert_matches!(
            ensure_no_id(&DEPARTEMENTS, &fields(json!({"id": 500}))),
            Err(CoreError::Validation(msg)) if msg.contains("Departement")
        );
        assert_matches!(
            ensure_no_id(&DEPARTEMENTS, &fields(json!({"id": null, "name": "Paris"}))),
            Err(CoreError::Validation(_))
        );
        assert!(ensure_no_id(&DEPARTEMENTS, &fields(json!({"name": "Paris"}))).is_ok());
    }

    #[test]
    fn zero_id_is_invalid() {
        assert_eq!(
            ensure_valid_id("User", 0),
            Err(CoreError::InvalidId { entity: "User", id: 0 })
        );
        assert!(ensure_valid_id("User", 5).is_ok());
    }
}
