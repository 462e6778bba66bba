//! Contracts of the underlying logger.
//!
//! The interception layer never emits anything itself. It delegates to a
//! [`Sink`] obtained once from a [`LoggerFactory`].

use std::error::Error;

use crate::{EventId, LogLevel, LogState};

/// Optional error attached to a log event.
pub type ErrorRef<'a> = Option<&'a (dyn Error + 'static)>;

/// The underlying structured logger.
///
/// Sinks are expected to tolerate concurrent `log` and `is_enabled` calls.
pub trait Sink {
    /// Guard returned by [`Sink::begin_scope`]; dropping it ends the scope.
    type Scope;

    /// Emits one event.
    ///
    /// `formatter` renders `state` and `error` to the human-readable message.
    /// Sinks call it only when they actually produce output.
    fn log<T, F>(
        &self,
        level: LogLevel,
        event_id: EventId,
        state: &T,
        error: ErrorRef<'_>,
        formatter: F,
    ) where
        T: LogState + ?Sized,
        F: Fn(&T, ErrorRef<'_>) -> String;

    /// Returns true when events at `level` would be emitted.
    fn is_enabled(&self, level: LogLevel) -> bool;

    /// Begins a logical scope described by `state`.
    fn begin_scope<T>(&self, state: &T) -> Self::Scope
    where
        T: LogState + ?Sized;
}

/// Produces sinks bound to a category name.
pub trait LoggerFactory {
    /// Sink type produced by this factory.
    type Sink: Sink;

    /// Creates a sink for `category`.
    fn create_logger(&self, category: &str) -> Self::Sink;
}

impl<S, F> LoggerFactory for F
where
    S: Sink,
    F: Fn(&str) -> S,
{
    type Sink = S;

    fn create_logger(&self, category: &str) -> S {
        self(category)
    }
}

/// A sink that is disabled for every level.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl Sink for NullSink {
    type Scope = ();

    fn log<T, F>(
        &self,
        _level: LogLevel,
        _event_id: EventId,
        _state: &T,
        _error: ErrorRef<'_>,
        _formatter: F,
    ) where
        T: LogState + ?Sized,
        F: Fn(&T, ErrorRef<'_>) -> String,
    {
    }

    fn is_enabled(&self, _level: LogLevel) -> bool {
        false
    }

    fn begin_scope<T>(&self, _state: &T) -> Self::Scope
    where
        T: LogState + ?Sized,
    {
    }
}

#[cfg(test)]
mod tests {
    use super::{LoggerFactory, NullSink, Sink};
    use crate::LogLevel;

    #[test]
    fn null_sink_is_never_enabled() {
        for level in LogLevel::EMITTABLE {
            assert!(!NullSink.is_enabled(level));
        }
    }

    #[test]
    fn closures_act_as_factories() {
        let factory = |category: &str| {
            assert_eq!(category, "App.Test");
            NullSink
        };
        let sink = factory.create_logger("App.Test");
        assert!(!sink.is_enabled(LogLevel::Critical));
    }
}
