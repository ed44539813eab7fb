//! Helpers for reporting `validator` failures.

use validator::ValidationErrors;

use crate::errors::FieldErrors;

/// Collects the message of every violated constraint, grouped by field.
///
/// Constraints declared without a `message` fall back to `"<field> is invalid"`.
pub fn field_errors(errors: &ValidationErrors) -> FieldErrors {
    errors
        .field_errors()
        .iter()
        .map(|(field, errors)| {
            let messages = errors
                .iter()
                .map(|error| {
                    error
                        .message
                        .as_ref()
                        .map(|msg| msg.to_string())
                        .unwrap_or_else(|| format!("{} is invalid", field))
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect()
}

/// Flattens [`field_errors`] into one comma separated sentence.
pub fn format_errors(errors: &ValidationErrors) -> String {
    field_errors(errors)
        .into_values()
        .flatten()
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Sample {
        #[validate(length(min = 1, message = "title must not be empty"))]
        title: String,
        #[validate(range(min = 1))]
        size: i64,
    }

    #[test]
    fn test_messages_and_fallback() {
        let errors = Sample {
            title: String::new(),
            size: 0,
        }
        .validate()
        .unwrap_err();

        let fields = field_errors(&errors);
        assert_eq!(fields.len(), 2);
        assert_eq!(fields["title"], vec!["title must not be empty".to_string()]);
        assert_eq!(fields["size"], vec!["size is invalid".to_string()]);
    }

    #[test]
    fn test_format_is_sorted_by_field() {
        let errors = Sample {
            title: String::new(),
            size: 0,
        }
        .validate()
        .unwrap_err();

        assert_eq!(
            format_errors(&errors),
            "size is invalid, title must not be empty"
        );
    }
}
