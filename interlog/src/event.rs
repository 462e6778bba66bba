//! Event identities.
//!
//! An [`EventId`] correlates a log call with an entry in an event catalogue.
//! The interception layer passes it through to the sink untouched; policy is
//! keyed on the state payload, never on the id.

use std::fmt;

use crate::LogState;

/// Stable identity of a log event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct EventId {
    id: i32,
    name: Option<&'static str>,
}

impl EventId {
    /// Constructs an unnamed event id.
    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self { id, name: None }
    }

    /// Constructs a named event id.
    #[must_use]
    pub const fn named(id: i32, name: &'static str) -> Self {
        Self {
            id,
            name: Some(name),
        }
    }

    /// Numeric id.
    #[must_use]
    pub const fn id(&self) -> i32 {
        self.id
    }

    /// Symbolic name, if any.
    #[must_use]
    pub const fn name(&self) -> Option<&'static str> {
        self.name
    }
}

impl From<i32> for EventId {
    fn from(id: i32) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name {
            Some(name) => f.write_str(name),
            None => write!(f, "{}", self.id),
        }
    }
}

/// A state type that is also an entry in an event catalogue.
///
/// Catalogue enums log themselves as the state, so policy can be configured
/// per catalogue type.
pub trait EventDefinition: LogState {
    /// The id this event is logged under.
    fn event_id(&self) -> EventId;
}

/// Base id for events raised by the interception layer itself.
const CORE_BASE_ID: i32 = 10_000;

/// Events emitted by the interception layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, LogState)]
pub enum CoreEventId {
    /// Sensitive data logging was found enabled.
    SensitiveDataLoggingEnabledWarning,
}

impl EventDefinition for CoreEventId {
    fn event_id(&self) -> EventId {
        match self {
            CoreEventId::SensitiveDataLoggingEnabledWarning => EventId::named(
                CORE_BASE_ID + 100,
                "SensitiveDataLoggingEnabledWarning",
            ),
        }
    }
}
