//! Message templates.
//!
//! Pure formatting: no template inspects levels, policies or options.

/// Message logged once when sensitive data logging is found enabled.
pub const SENSITIVE_DATA_LOGGING_ENABLED: &str = "Sensitive data logging is enabled. Log entries \
and error messages may include sensitive application data; this mode should only be enabled \
during development.";

/// Message of a warning escalated to an error.
///
/// `qualified` is the qualified identity of the state (`Type.Value`) and
/// `discriminator` the key it was configured under.
#[must_use]
pub fn warning_as_error(qualified: &str, discriminator: &str, message: &str) -> String {
    format!(
        "Error generated for warning '{qualified}': {message} This error can be suppressed or \
logged by configuring '{discriminator}' as 'ignore' or 'log' in the warnings configuration."
    )
}

/// Message of a warning forwarded by the `log` behavior.
#[must_use]
pub fn warning_log(message: &str, qualified: &str, discriminator: &str) -> String {
    format!(
        "{message} (logged as warning '{qualified}'; configure '{discriminator}' as 'ignore' or \
'throw' in the warnings configuration to change this.)"
    )
}

#[cfg(test)]
mod tests {
    use super::{warning_as_error, warning_log};

    #[test]
    fn error_template_names_state_and_message() {
        let text = warning_as_error(
            "QueryEvent.ClientEvaluation",
            "QueryEvent",
            "query runs in memory",
        );
        assert!(text.starts_with("Error generated for warning 'QueryEvent.ClientEvaluation': "));
        assert!(text.contains("query runs in memory"));
        assert!(text.contains("configuring 'QueryEvent'"));
    }

    #[test]
    fn log_template_keeps_message_first() {
        let text = warning_log(
            "query runs in memory",
            "QueryEvent.ClientEvaluation",
            "QueryEvent",
        );
        assert!(text.starts_with("query runs in memory "));
        assert!(text.contains("'QueryEvent.ClientEvaluation'"));
        assert!(text.contains("configure 'QueryEvent'"));
    }
}
