//! Student domain models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// A student in the system.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Student {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Allison")]
    pub name: String,
}

/// Request body for creating or replacing a student.
///
/// A missing `name` deserializes to an empty string so that it is reported
/// through validation rather than as a malformed body. Any `id` in the body is
/// ignored: storage assigns ids on create, and the path parameter wins on update.
#[derive(Deserialize, Serialize, Debug, Clone, Default, ToSchema, Validate)]
pub struct StudentPayload {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    #[validate(length(min = 1, max = 255, message = "name must be between 1 and 255 characters"))]
    #[schema(example = "Ada")]
    pub name: String,
}

impl StudentPayload {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_validation() {
        assert!(StudentPayload::named("Ada").validate().is_ok());
    }

    #[test]
    fn test_payload_empty_name() {
        let errors = StudentPayload::named("").validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn test_payload_long_name() {
        assert!(StudentPayload::named("x".repeat(256)).validate().is_err());
        assert!(StudentPayload::named("x".repeat(255)).validate().is_ok());
    }

    #[test]
    fn test_payload_missing_name_defaults_to_empty() {
        let payload: StudentPayload = serde_json::from_str("{}").unwrap();
        assert_eq!(payload.name, "");
        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_payload_accepts_and_keeps_id() {
        let payload: StudentPayload =
            serde_json::from_str(r#"{"id": 99, "name": "Grace"}"#).unwrap();
        assert_eq!(payload.id, Some(99));
        assert_eq!(payload.name, "Grace");
    }
}
