//! Logging options and their declarative configuration.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::{WarningBehavior, WarningsConfiguration};

/// Options consulted by an [`InterceptingLogger`](crate::InterceptingLogger).
///
/// Usually shared between loggers through an `Arc`, so the sensitive-data
/// warning is emitted once per options instance rather than once per logger.
#[derive(Debug, Default)]
pub struct LoggingOptions {
    warnings_configuration: Option<WarningsConfiguration>,
    sensitive_data_logging_enabled: bool,
    sensitive_data_logging_warned: AtomicBool,
}

impl LoggingOptions {
    /// Options without a policy table and with sensitive data logging disabled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the warning policy table.
    #[must_use]
    pub fn with_warnings(mut self, configuration: WarningsConfiguration) -> Self {
        self.warnings_configuration = Some(configuration);
        self
    }

    /// Enables or disables sensitive data logging.
    #[must_use]
    pub fn with_sensitive_data_logging(mut self, enabled: bool) -> Self {
        self.sensitive_data_logging_enabled = enabled;
        self
    }

    /// Marks the sensitive-data warning as already emitted, e.g. by another
    /// options instance describing the same application.
    #[must_use]
    pub fn with_sensitive_data_logging_warned(self, warned: bool) -> Self {
        self.sensitive_data_logging_warned.store(warned, Ordering::Relaxed);
        self
    }

    /// The warning policy table, if one is configured.
    #[must_use]
    pub fn warnings_configuration(&self) -> Option<&WarningsConfiguration> {
        self.warnings_configuration.as_ref()
    }

    /// Whether sensitive data may be included in log output.
    #[must_use]
    pub fn sensitive_data_logging_enabled(&self) -> bool {
        self.sensitive_data_logging_enabled
    }

    /// Whether the sensitive-data warning has been emitted.
    #[must_use]
    pub fn sensitive_data_logging_warned(&self) -> bool {
        self.sensitive_data_logging_warned.load(Ordering::Relaxed)
    }

    /// Records that the sensitive-data warning has been emitted.
    ///
    /// The flag only ever moves from false to true.
    pub fn mark_sensitive_data_logging_warned(&self) {
        self.sensitive_data_logging_warned.store(true, Ordering::Relaxed);
    }
}

impl From<LoggingConfig> for LoggingOptions {
    fn from(config: LoggingConfig) -> Self {
        let options =
            LoggingOptions::new().with_sensitive_data_logging(config.sensitive_data_logging);
        match config.warnings {
            Some(warnings) => options.with_warnings(warnings.into()),
            None => options,
        }
    }
}

/// Declarative form of [`LoggingOptions`].
///
/// With the `serde` feature this deserializes from documents such as:
///
/// ```json
/// {
///   "sensitive_data_logging": false,
///   "warnings": {
///     "default": "log",
///     "throw": ["QueryEvent"],
///     "ignore": ["MigrationEvent"]
///   }
/// }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct LoggingConfig {
    /// Enables sensitive data logging.
    pub sensitive_data_logging: bool,
    /// Warning policy; `None` disables policy handling entirely.
    pub warnings: Option<WarningsConfig>,
}

/// Declarative form of a [`WarningsConfiguration`].
///
/// Lists are applied in the order `log`, `ignore`, `throw`, so a
/// discriminator listed twice resolves to the stricter behavior.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct WarningsConfig {
    /// Behavior for discriminators not listed below.
    #[cfg_attr(feature = "serde", serde(rename = "default"))]
    pub default_behavior: WarningBehavior,
    /// Discriminators to log.
    pub log: Vec<String>,
    /// Discriminators to drop.
    pub ignore: Vec<String>,
    /// Discriminators to escalate to errors.
    pub throw: Vec<String>,
}

impl From<WarningsConfig> for WarningsConfiguration {
    fn from(config: WarningsConfig) -> Self {
        WarningsConfiguration::builder()
            .default_behavior(config.default_behavior)
            .log(config.log)
            .ignore(config.ignore)
            .throw(config.throw)
            .build()
    }
}

#[cfg(feature = "serde")]
impl LoggingConfig {
    /// Parses a JSON configuration document.
    pub fn from_json_str(input: &str) -> Result<Self, crate::ConfigError> {
        serde_json::from_str(input).map_err(crate::ConfigError::from)
    }
}
