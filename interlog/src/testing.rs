//! Recording sinks for tests.
//!
//! [`RecordingFactory`] hands out [`RecordingSink`]s that share one event
//! store, so a test can build loggers through the factory and then inspect
//! everything that reached the sink layer.

use std::sync::{
    atomic::{AtomicU64, AtomicUsize, Ordering},
    Arc, Mutex, MutexGuard, PoisonError,
};

use crate::{qualified_name, ErrorRef, EventId, LogLevel, LogState, LoggerFactory, Sink};

/// One event as seen by a [`RecordingSink`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordedEvent {
    /// Category of the sink that received the event.
    pub category: String,
    /// Level the event was logged at.
    pub level: LogLevel,
    /// Event id passed through by the logger.
    pub event_id: EventId,
    /// Discriminator of the state.
    pub state_type: &'static str,
    /// Qualified identity of the state.
    pub state: String,
    /// Output of the formatter the sink was given.
    pub message: String,
    /// Display form of the attached error, if any.
    pub error: Option<String>,
}

#[derive(Debug)]
struct Shared {
    minimum: Mutex<LogLevel>,
    events: Mutex<Vec<RecordedEvent>>,
    scopes: Mutex<Vec<(u64, String)>>,
    next_scope: AtomicU64,
    calls: AtomicUsize,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Produces [`RecordingSink`]s sharing one event store.
#[derive(Clone, Debug)]
pub struct RecordingFactory {
    shared: Arc<Shared>,
}

impl Default for RecordingFactory {
    fn default() -> Self {
        Self::with_minimum_level(LogLevel::Trace)
    }
}

impl RecordingFactory {
    /// A factory whose sinks have every level enabled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A factory whose sinks have every level disabled.
    #[must_use]
    pub fn disabled() -> Self {
        Self::with_minimum_level(LogLevel::None)
    }

    /// A factory whose sinks enable `minimum` and above.
    #[must_use]
    pub fn with_minimum_level(minimum: LogLevel) -> Self {
        Self {
            shared: Arc::new(Shared {
                minimum: Mutex::new(minimum),
                events: Mutex::new(Vec::new()),
                scopes: Mutex::new(Vec::new()),
                next_scope: AtomicU64::new(0),
                calls: AtomicUsize::new(0),
            }),
        }
    }

    /// Changes the minimum level of every sink from this factory.
    pub fn set_minimum_level(&self, minimum: LogLevel) {
        *lock(&self.shared.minimum) = minimum;
    }

    /// Events recorded so far, in arrival order.
    #[must_use]
    pub fn events(&self) -> Vec<RecordedEvent> {
        lock(&self.shared.events).clone()
    }

    /// Removes and returns the recorded events.
    pub fn take_events(&self) -> Vec<RecordedEvent> {
        std::mem::take(&mut *lock(&self.shared.events))
    }

    /// Descriptions of the scopes currently open, outermost first.
    #[must_use]
    pub fn scopes(&self) -> Vec<String> {
        lock(&self.shared.scopes)
            .iter()
            .map(|(_, text)| text.clone())
            .collect()
    }

    /// Number of sink calls (`log`, `is_enabled` and `begin_scope`) made so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.shared.calls.load(Ordering::SeqCst)
    }
}

impl LoggerFactory for RecordingFactory {
    type Sink = RecordingSink;

    fn create_logger(&self, category: &str) -> RecordingSink {
        RecordingSink {
            category: category.to_string(),
            shared: Arc::clone(&self.shared),
        }
    }
}

/// A sink that records events into its factory's store.
#[derive(Clone, Debug)]
pub struct RecordingSink {
    category: String,
    shared: Arc<Shared>,
}

impl RecordingSink {
    /// Category this sink was created for.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }
}

impl Sink for RecordingSink {
    type Scope = RecordingScope;

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
        self.shared.calls.fetch_add(1, Ordering::SeqCst);
        let event = RecordedEvent {
            category: self.category.clone(),
            level,
            event_id,
            state_type: state.type_name(),
            state: qualified_name(state),
            message: formatter(state, error),
            error: error.map(ToString::to_string),
        };
        lock(&self.shared.events).push(event);
    }

    fn is_enabled(&self, level: LogLevel) -> bool {
        self.shared.calls.fetch_add(1, Ordering::SeqCst);
        level.passes(*lock(&self.shared.minimum))
    }

    fn begin_scope<T>(&self, state: &T) -> RecordingScope
    where
        T: LogState + ?Sized,
    {
        self.shared.calls.fetch_add(1, Ordering::SeqCst);
        let id = self.shared.next_scope.fetch_add(1, Ordering::Relaxed);
        lock(&self.shared.scopes).push((id, crate::StateText(state).to_string()));
        RecordingScope {
            id,
            shared: Arc::clone(&self.shared),
        }
    }
}

/// Scope guard of a [`RecordingSink`]; dropping it closes the scope it opened,
/// wherever that scope sits in the stack.
#[derive(Debug)]
#[must_use = "dropping the guard ends the scope immediately"]
pub struct RecordingScope {
    id: u64,
    shared: Arc<Shared>,
}

impl Drop for RecordingScope {
    fn drop(&mut self) {
        let mut scopes = lock(&self.shared.scopes);
        if let Some(index) = scopes.iter().rposition(|(id, _)| *id == self.id) {
            scopes.remove(index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::RecordingFactory;
    use crate::{EventId, LogLevel, LoggerFactory, Sink};

    #[test]
    fn sinks_share_the_factory_store() {
        let factory = RecordingFactory::new();
        let first = factory.create_logger("A");
        let second = factory.create_logger("B");

        first.log(LogLevel::Information, EventId::new(1), "one", None, |s, _| s.to_string());
        second.log(LogLevel::Error, EventId::new(2), "two", None, |s, _| s.to_string());

        let events = factory.take_events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].category, "A");
        assert_eq!(events[1].category, "B");
        assert_eq!(events[1].state, "String.two");
        assert!(factory.events().is_empty());
    }

    #[test]
    fn minimum_level_can_change_at_runtime() {
        let factory = RecordingFactory::new();
        let sink = factory.create_logger("A");
        assert!(sink.is_enabled(LogLevel::Trace));
        factory.set_minimum_level(LogLevel::Error);
        assert!(!sink.is_enabled(LogLevel::Warning));
        assert!(sink.is_enabled(LogLevel::Critical));
        assert!(!sink.is_enabled(LogLevel::None));
    }

    #[test]
    fn nested_scopes_close_innermost_first() {
        let factory = RecordingFactory::new();
        let sink = factory.create_logger("A");
        let outer = sink.begin_scope("outer");
        {
            let _inner = sink.begin_scope(&7_u32);
            assert_eq!(factory.scopes(), vec!["outer".to_string(), "7".to_string()]);
        }
        assert_eq!(factory.scopes(), vec!["outer".to_string()]);
        drop(outer);
        assert!(factory.scopes().is_empty());
        assert_eq!(factory.calls(), 2);
    }

    #[test]
    fn dropping_outer_scope_first_keeps_inner_open() {
        let factory = RecordingFactory::new();
        let sink = factory.create_logger("A");
        let outer = sink.begin_scope("outer");
        let inner = sink.begin_scope("inner");

        drop(outer);
        assert_eq!(factory.scopes(), vec!["inner".to_string()]);

        drop(inner);
        assert!(factory.scopes().is_empty());
    }

    #[test]
    fn equal_scope_texts_close_independently() {
        let factory = RecordingFactory::new();
        let sink = factory.create_logger("A");
        let first = sink.begin_scope("batch");
        let middle = sink.begin_scope("row");
        let second = sink.begin_scope("batch");

        drop(first);
        assert_eq!(factory.scopes(), vec!["row".to_string(), "batch".to_string()]);
        drop(second);
        assert_eq!(factory.scopes(), vec!["row".to_string()]);
        drop(middle);
    }
}
