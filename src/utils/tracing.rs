//! Tracing helpers shared by services and the binary.

/// Log an audit event at INFO level
///
/// Use this for data modifications: student creation, updates, deletions.
///
/// # Example
/// ```ignore
/// audit_event!("delete", "student", student.id = id);
/// ```
#[macro_export]
macro_rules! audit_event {
    ($action:expr, $resource:expr, $($field:tt)*) => {
        tracing::info!(
            audit.action = $action,
            audit.resource = $resource,
            $($field)*
        )
    };
}

/// Trait extension for adding context to errors before logging
pub trait ErrorExt {
    /// Log the error and return it unchanged
    fn log_error(self, context: &str) -> Self;
}

impl<T, E: std::fmt::Display> ErrorExt for Result<T, E> {
    fn log_error(self, context: &str) -> Self {
        if let Err(ref e) = self {
            tracing::error!(error = %e, context = context, "Operation failed");
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::access_log::tests::capture;

    #[test]
    fn test_log_error_passes_result_through() {
        let (logs, _guard) = capture();

        let ok: Result<u8, String> = Ok(3);
        assert_eq!(ok.log_error("noop"), Ok(3));
        assert!(logs.contents().is_empty());

        let err: Result<u8, String> = Err("boom".to_string());
        assert_eq!(err.log_error("failing"), Err("boom".to_string()));

        let output = logs.contents();
        assert!(output.contains("ERROR"));
        assert!(output.contains("Operation failed"));
        assert!(output.contains("boom"));
        assert!(output.contains("failing"));
    }

    #[test]
    fn test_audit_event_fields() {
        let (logs, _guard) = capture();

        audit_event!("create", "student", student.id = 1);

        let output = logs.contents();
        assert!(output.contains("INFO"));
        assert!(output.contains("audit.action"));
        assert!(output.contains("create"));
        assert!(output.contains("audit.resource"));
        assert!(output.contains("student.id=1"));
    }
}
