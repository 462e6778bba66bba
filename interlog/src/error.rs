//! Error types.

use thiserror::Error;

use crate::strings;

/// A warning escalated to an error by [`WarningBehavior::Throw`](crate::WarningBehavior::Throw).
///
/// Returned from [`InterceptingLogger::log`](crate::InterceptingLogger::log) in
/// place of logging. The sink never sees an escalated event, so the caller
/// must propagate or handle this error itself.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{}", strings::warning_as_error(.state, .discriminator, .message))]
pub struct PolicyEscalation {
    discriminator: &'static str,
    state: String,
    message: String,
}

impl PolicyEscalation {
    pub(crate) fn new(discriminator: &'static str, state: String, message: String) -> Self {
        Self {
            discriminator,
            state,
            message,
        }
    }

    /// Discriminator the escalating behavior was configured under.
    #[must_use]
    pub fn discriminator(&self) -> &'static str {
        self.discriminator
    }

    /// Qualified identity (`Type.Value`) of the escalated state.
    #[must_use]
    pub fn state(&self) -> &str {
        &self.state
    }

    /// The rendered warning message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Failure to load a [`LoggingConfig`](crate::LoggingConfig).
#[cfg(feature = "serde")]
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document is not valid JSON or does not match the schema.
    #[error("invalid logging configuration: {0}")]
    Json(#[from] serde_json::Error),
}
