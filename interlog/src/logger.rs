//! The interception layer.

use std::{fmt, marker::PhantomData, sync::Arc};

use crate::{
    qualified_name, strings, CoreEventId, ErrorRef, EventDefinition, EventId, LogLevel, LogState,
    LoggerCategory, LoggerFactory, LoggingOptions, PolicyEscalation, Sink, WarningBehavior,
};

/// A logger that applies warning policy before delegating to a [`Sink`].
///
/// The sink is created once, for the fixed category `C::NAME`. Without
/// [`LoggingOptions`], or when the options carry no policy table, every call
/// is forwarded to the sink when it has the level enabled.
///
/// Warning-level calls with a non-default state are looked up in the policy
/// table *before* the sink is consulted, so a `Throw` entry escalates even
/// when the sink filters warnings out.
///
/// ## Example
/// ```rust
/// use std::sync::Arc;
///
/// use interlog::{
///     EventId, InterceptingLogger, LogLevel, LogState, LoggingOptions, NullSink, Query,
///     WarningsConfiguration,
/// };
///
/// #[derive(LogState)]
/// enum QueryEvent {
///     ClientEvaluation,
/// }
///
/// let options = LoggingOptions::new()
///     .with_warnings(WarningsConfiguration::builder().throw_for::<QueryEvent>().build());
/// let factory = |_: &str| NullSink;
/// let logger = InterceptingLogger::<Query, _>::new(&factory, Some(Arc::new(options)));
///
/// let result = logger.log(
///     LogLevel::Warning,
///     EventId::new(20_500),
///     &QueryEvent::ClientEvaluation,
///     None,
///     |_, _| "query evaluated on the client".to_string(),
/// );
/// assert_eq!(result.unwrap_err().state(), "QueryEvent.ClientEvaluation");
/// ```
pub struct InterceptingLogger<C, S> {
    sink: S,
    options: Option<Arc<LoggingOptions>>,
    _category: PhantomData<fn() -> C>,
}

impl<C, S> InterceptingLogger<C, S>
where
    C: LoggerCategory,
    S: Sink,
{
    /// Creates a logger whose sink is obtained from `factory` for `C::NAME`.
    pub fn new<F>(factory: &F, options: Option<Arc<LoggingOptions>>) -> Self
    where
        F: LoggerFactory<Sink = S> + ?Sized,
    {
        Self {
            sink: factory.create_logger(C::NAME),
            options,
            _category: PhantomData,
        }
    }

    /// The options this logger consults, if any.
    pub fn options(&self) -> Option<&LoggingOptions> {
        self.options.as_deref()
    }

    /// The category name the sink was created for.
    pub fn category(&self) -> &'static str {
        C::NAME
    }

    /// The underlying sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Logs one event, applying warning policy.
    ///
    /// Returns `Err` only when a warning's state is configured with
    /// [`WarningBehavior::Throw`]. In that case `formatter` is invoked once to
    /// build the error message and the sink is not touched.
    pub fn log<T, F>(
        &self,
        level: LogLevel,
        event_id: EventId,
        state: &T,
        error: ErrorRef<'_>,
        formatter: F,
    ) -> Result<(), PolicyEscalation>
    where
        T: LogState + ?Sized,
        F: Fn(&T, ErrorRef<'_>) -> String,
    {
        let table = self
            .options
            .as_deref()
            .and_then(LoggingOptions::warnings_configuration);

        match table {
            Some(table) if level == LogLevel::Warning && !state.is_default() => {
                match table.behavior_for(state) {
                    WarningBehavior::Throw => Err(PolicyEscalation::new(
                        state.type_name(),
                        qualified_name(state),
                        formatter(state, error),
                    )),
                    WarningBehavior::Log => {
                        if self.sink.is_enabled(level) {
                            let qualified = qualified_name(state);
                            let discriminator = state.type_name();
                            self.sink.log(level, event_id, state, error, |s, e| {
                                strings::warning_log(&formatter(s, e), &qualified, discriminator)
                            });
                        }
                        Ok(())
                    }
                    WarningBehavior::Ignore => Ok(()),
                }
            }
            _ => {
                if self.sink.is_enabled(level) {
                    self.sink.log(level, event_id, state, error, formatter);
                }
                Ok(())
            }
        }
    }

    /// Logs a catalogue event with the event itself as the state.
    pub fn log_event<E, M>(
        &self,
        level: LogLevel,
        event: &E,
        message: M,
    ) -> Result<(), PolicyEscalation>
    where
        E: EventDefinition + ?Sized,
        M: Fn() -> String,
    {
        self.log(level, event.event_id(), event, None, |_, _| message())
    }

    /// Logs a catalogue event at [`LogLevel::Warning`].
    pub fn log_warning<E, M>(&self, event: &E, message: M) -> Result<(), PolicyEscalation>
    where
        E: EventDefinition + ?Sized,
        M: Fn() -> String,
    {
        self.log_event(LogLevel::Warning, event, message)
    }

    /// Logs a catalogue event at [`LogLevel::Information`].
    pub fn log_information<E, M>(&self, event: &E, message: M) -> Result<(), PolicyEscalation>
    where
        E: EventDefinition + ?Sized,
        M: Fn() -> String,
    {
        self.log_event(LogLevel::Information, event, message)
    }

    /// Logs a catalogue event at [`LogLevel::Debug`].
    pub fn log_debug<E, M>(&self, event: &E, message: M) -> Result<(), PolicyEscalation>
    where
        E: EventDefinition + ?Sized,
        M: Fn() -> String,
    {
        self.log_event(LogLevel::Debug, event, message)
    }

    /// Returns whether sensitive data may be logged.
    ///
    /// The first call that finds sensitive data logging enabled emits
    /// [`CoreEventId::SensitiveDataLoggingEnabledWarning`] through [`Self::log`],
    /// so the warning is itself subject to the policy table. If it escalates,
    /// the error is returned and the warning is not marked as emitted.
    ///
    /// ## Concurrency
    ///
    /// The emitted-flag check and update are separate relaxed operations.
    /// Threads racing on the first call may each emit the warning; the
    /// guarantee is at-most-once only for sequential callers.
    pub fn log_sensitive_data(&self) -> Result<bool, PolicyEscalation> {
        let Some(options) = self.options.as_deref() else {
            return Ok(false);
        };

        let enabled = options.sensitive_data_logging_enabled();
        if enabled && !options.sensitive_data_logging_warned() {
            self.log_warning(&CoreEventId::SensitiveDataLoggingEnabledWarning, || {
                strings::SENSITIVE_DATA_LOGGING_ENABLED.to_string()
            })?;
            options.mark_sensitive_data_logging_warned();
        }

        Ok(enabled)
    }

    /// Returns whether the sink has `level` enabled. Policy is not consulted.
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        self.sink.is_enabled(level)
    }

    /// Begins a scope on the sink. Policy is not consulted.
    pub fn begin_scope<T>(&self, state: &T) -> S::Scope
    where
        T: LogState + ?Sized,
    {
        self.sink.begin_scope(state)
    }
}

impl<C, S> fmt::Debug for InterceptingLogger<C, S>
where
    C: LoggerCategory,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InterceptingLogger")
            .field("category", &C::NAME)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
