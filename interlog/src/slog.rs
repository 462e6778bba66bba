//! A [`Sink`] backed by `slog`.
//!
//! This module connects the interception layer to a `slog::Logger`. It is
//! responsible for:
//! - mapping [`LogLevel`] onto `slog::Level` (`None` maps to nothing and is
//!   never enabled)
//! - combining a minimum level with the drain's own `is_enabled`
//! - attaching the event id, the qualified state, the error and the active
//!   scopes as key-value pairs
//!
//! It does not configure drains or formats; hand it a logger that is already
//! set up.
//!
//! ## Example
//! ```ignore
//! use interlog::{slog::SlogFactory, InterceptingLogger, Query};
//!
//! let factory = SlogFactory::new(root_logger).with_minimum_level(LogLevel::Information);
//! let logger = InterceptingLogger::<Query, _>::new(&factory, Some(options));
//! ```

use std::{
    cell::{Cell, RefCell},
    marker::PhantomData,
    rc::Rc,
};

use slog::{Drain, Level, Logger};

use crate::{qualified_name, ErrorRef, EventId, LogLevel, LogState, LoggerFactory, Sink, StateText};

thread_local! {
    static SCOPES: RefCell<Vec<(u64, String)>> = const { RefCell::new(Vec::new()) };
    static NEXT_SCOPE: Cell<u64> = const { Cell::new(0) };
}

/// Separator between nested scopes in the `scope` value.
pub const SCOPE_SEPARATOR: &str = " => ";

/// Maps a [`LogLevel`] to the `slog` level it is emitted at.
#[must_use]
pub fn to_slog_level(level: LogLevel) -> Option<Level> {
    match level {
        LogLevel::Trace => Some(Level::Trace),
        LogLevel::Debug => Some(Level::Debug),
        LogLevel::Information => Some(Level::Info),
        LogLevel::Warning => Some(Level::Warning),
        LogLevel::Error => Some(Level::Error),
        LogLevel::Critical => Some(Level::Critical),
        LogLevel::None => None,
    }
}

/// Creates [`SlogSink`]s as children of a root `slog::Logger`.
#[derive(Clone, Debug)]
pub struct SlogFactory {
    root: Logger,
    minimum: LogLevel,
}

impl SlogFactory {
    /// Wraps `root`; every level the drain accepts is enabled.
    #[must_use]
    pub fn new(root: Logger) -> Self {
        Self {
            root,
            minimum: LogLevel::Trace,
        }
    }

    /// Only enables `minimum` and above, on top of the drain's own filtering.
    #[must_use]
    pub fn with_minimum_level(mut self, minimum: LogLevel) -> Self {
        self.minimum = minimum;
        self
    }
}

impl LoggerFactory for SlogFactory {
    type Sink = SlogSink;

    fn create_logger(&self, category: &str) -> SlogSink {
        SlogSink {
            logger: self.root.new(slog::o!("category" => category.to_string())),
            minimum: self.minimum,
        }
    }
}

/// A [`Sink`] that emits through a `slog::Logger`.
#[derive(Clone, Debug)]
pub struct SlogSink {
    logger: Logger,
    minimum: LogLevel,
}

impl SlogSink {
    /// The category-bound child logger.
    #[must_use]
    pub fn logger(&self) -> &Logger {
        &self.logger
    }
}

macro_rules! emit {
    ($logger:expr, $level:expr, $message:expr; $($kv:tt)+) => {
        match $level {
            Level::Critical => ::slog::crit!($logger, "{}", $message; $($kv)+),
            Level::Error => ::slog::error!($logger, "{}", $message; $($kv)+),
            Level::Warning => ::slog::warn!($logger, "{}", $message; $($kv)+),
            Level::Info => ::slog::info!($logger, "{}", $message; $($kv)+),
            Level::Debug => ::slog::debug!($logger, "{}", $message; $($kv)+),
            Level::Trace => ::slog::trace!($logger, "{}", $message; $($kv)+),
        }
    };
}

impl Sink for SlogSink {
    type Scope = SlogScope;

    fn log<T, F>(
        &self,
        level: LogLevel,
        event_id: EventId,
        state: &T,
        error: ErrorRef<'_>,
        formatter: F,
    ) where
        T: LogState + ?Sized,
        F: Fn(&T, ErrorRef<'_>) -> String,
    {
        let Some(slog_level) = to_slog_level(level) else {
            return;
        };
        if !self.is_enabled(level) {
            return;
        }

        let message = formatter(state, error);
        let scope = current_scope();
        emit!(self.logger, slog_level, message;
            "event_id" => event_id.id(),
            "event_name" => event_id.name(),
            "state" => qualified_name(state),
            "error" => error.map(ToString::to_string),
            "scope" => scope
        );
    }

    fn is_enabled(&self, level: LogLevel) -> bool {
        level.passes(self.minimum)
            && to_slog_level(level).is_some_and(|slog_level| self.logger.is_enabled(slog_level))
    }

    fn begin_scope<T>(&self, state: &T) -> SlogScope
    where
        T: LogState + ?Sized,
    {
        let id = NEXT_SCOPE.with(|next| {
            let id = next.get();
            next.set(id.wrapping_add(1));
            id
        });
        SCOPES.with(|scopes| {
            scopes
                .borrow_mut()
                .push((id, StateText(state).to_string()));
        });
        SlogScope {
            id,
            _thread_bound: PhantomData,
        }
    }
}

/// Returns the scopes open on the current thread, joined by [`SCOPE_SEPARATOR`].
#[must_use]
pub fn current_scope() -> Option<String> {
    SCOPES.with(|scopes| {
        let scopes = scopes.borrow();
        if scopes.is_empty() {
            None
        } else {
            let texts: Vec<&str> = scopes.iter().map(|(_, text)| text.as_str()).collect();
            Some(texts.join(SCOPE_SEPARATOR))
        }
    })
}

/// Scope guard of a [`SlogSink`].
///
/// Scopes are tracked per thread, so the guard cannot leave the thread that
/// opened it. Dropping it closes the scope it opened, even when scopes
/// opened later are still active.
#[derive(Debug)]
#[must_use = "dropping the guard ends the scope immediately"]
pub struct SlogScope {
    id: u64,
    _thread_bound: PhantomData<Rc<()>>,
}

impl Drop for SlogScope {
    fn drop(&mut self) {
        SCOPES.with(|scopes| {
            let mut scopes = scopes.borrow_mut();
            if let Some(index) = scopes.iter().rposition(|(id, _)| *id == self.id) {
                scopes.remove(index);
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use slog::{o, Drain, Level, Logger, Never, OwnedKVList, Record};

    use super::{current_scope, to_slog_level, SlogFactory};
    use crate::{LogLevel, LoggerFactory, Sink};

    struct AcceptAll;

    impl Drain for AcceptAll {
        type Ok = ();
        type Err = Never;

        fn log(&self, _: &Record<'_>, _: &OwnedKVList) -> Result<(), Never> {
            Ok(())
        }

        fn is_enabled(&self, _: Level) -> bool {
            true
        }
    }

    fn root() -> Logger {
        Logger::root(AcceptAll, o!())
    }

    #[test]
    fn none_has_no_slog_level() {
        assert_eq!(to_slog_level(LogLevel::None), None);
        assert_eq!(to_slog_level(LogLevel::Information), Some(Level::Info));
        assert_eq!(to_slog_level(LogLevel::Critical), Some(Level::Critical));
    }

    #[test]
    fn minimum_level_filters_on_top_of_the_drain() {
        let factory = SlogFactory::new(root()).with_minimum_level(LogLevel::Error);
        let sink = factory.create_logger("Interlog.Query");
        assert!(!sink.is_enabled(LogLevel::Warning));
        assert!(sink.is_enabled(LogLevel::Error));
        assert!(!sink.is_enabled(LogLevel::None));
    }

    #[test]
    fn scopes_nest_per_thread() {
        let sink = SlogFactory::new(root()).create_logger("A");
        assert_eq!(current_scope(), None);
        let outer = sink.begin_scope("request 7");
        {
            let _inner = sink.begin_scope("user 3");
            assert_eq!(current_scope().as_deref(), Some("request 7 => user 3"));
            std::thread::spawn(|| assert_eq!(current_scope(), None))
                .join()
                .unwrap();
        }
        assert_eq!(current_scope().as_deref(), Some("request 7"));
        drop(outer);
        assert_eq!(current_scope(), None);
    }

    #[test]
    fn dropping_outer_scope_first_keeps_inner_open() {
        let sink = SlogFactory::new(root()).create_logger("A");
        let outer = sink.begin_scope("outer");
        let inner = sink.begin_scope("inner");

        drop(outer);
        assert_eq!(current_scope().as_deref(), Some("inner"));

        drop(inner);
        assert_eq!(current_scope(), None);
    }
}
