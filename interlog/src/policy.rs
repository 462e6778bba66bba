//! Warning policies.
//!
//! A policy table maps state discriminators to a [`WarningBehavior`]. Tables
//! are pure data: they do not log, format, or decide which levels count as
//! warnings. That is the logger's job.

use std::{borrow::Cow, collections::HashMap};

use crate::{LogState, LogStateType};

/// What to do with a warning-level event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum WarningBehavior {
    /// Drop the event, whether or not the sink has warnings enabled.
    Ignore,
    /// Forward the event to the sink, noting the state that produced it.
    #[default]
    Log,
    /// Fail the current operation instead of logging.
    Throw,
}

/// The warning policy table.
///
/// Lookup misses resolve to the table's default behavior, which is
/// [`WarningBehavior::Log`] unless configured otherwise.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WarningsConfiguration {
    default_behavior: WarningBehavior,
    explicit: HashMap<Cow<'static, str>, WarningBehavior>,
}

impl WarningsConfiguration {
    /// Returns a builder for a new table.
    #[must_use]
    pub fn builder() -> WarningsConfigurationBuilder {
        WarningsConfigurationBuilder::default()
    }

    /// Behavior for discriminators without an explicit entry.
    #[must_use]
    pub fn default_behavior(&self) -> WarningBehavior {
        self.default_behavior
    }

    /// Returns the behavior configured for `state`'s discriminator.
    #[must_use]
    pub fn behavior_for<T>(&self, state: &T) -> WarningBehavior
    where
        T: LogState + ?Sized,
    {
        self.behavior_for_name(state.type_name())
    }

    /// Returns the behavior configured for a discriminator.
    #[must_use]
    pub fn behavior_for_name(&self, discriminator: &str) -> WarningBehavior {
        self.explicit
            .get(discriminator)
            .copied()
            .unwrap_or(self.default_behavior)
    }

    /// Returns the explicit entry for a discriminator, if any.
    #[must_use]
    pub fn explicit_behavior(&self, discriminator: &str) -> Option<WarningBehavior> {
        self.explicit.get(discriminator).copied()
    }

    /// Number of explicit entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.explicit.len()
    }

    /// Returns true when the table has no explicit entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.explicit.is_empty()
    }
}

/// Builds a [`WarningsConfiguration`].
///
/// Entries apply in call order; a discriminator configured twice keeps the
/// last behavior.
#[derive(Clone, Debug, Default)]
#[must_use]
pub struct WarningsConfigurationBuilder {
    table: WarningsConfiguration,
}

impl WarningsConfigurationBuilder {
    /// Sets the behavior for discriminators without an explicit entry.
    pub fn default_behavior(mut self, behavior: WarningBehavior) -> Self {
        self.table.default_behavior = behavior;
        self
    }

    /// Sets the behavior for each of `discriminators`.
    pub fn behavior<I, N>(mut self, behavior: WarningBehavior, discriminators: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Cow<'static, str>>,
    {
        for name in discriminators {
            self.table.explicit.insert(name.into(), behavior);
        }
        self
    }

    /// Escalates the listed discriminators to errors.
    pub fn throw<I, N>(self, discriminators: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Cow<'static, str>>,
    {
        self.behavior(WarningBehavior::Throw, discriminators)
    }

    /// Logs the listed discriminators.
    pub fn log<I, N>(self, discriminators: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Cow<'static, str>>,
    {
        self.behavior(WarningBehavior::Log, discriminators)
    }

    /// Drops the listed discriminators.
    pub fn ignore<I, N>(self, discriminators: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Cow<'static, str>>,
    {
        self.behavior(WarningBehavior::Ignore, discriminators)
    }

    /// Escalates warnings carrying a `T` state.
    pub fn throw_for<T: LogStateType + ?Sized>(self) -> Self {
        self.throw([T::NAME])
    }

    /// Logs warnings carrying a `T` state.
    pub fn log_for<T: LogStateType + ?Sized>(self) -> Self {
        self.log([T::NAME])
    }

    /// Drops warnings carrying a `T` state.
    pub fn ignore_for<T: LogStateType + ?Sized>(self) -> Self {
        self.ignore([T::NAME])
    }

    /// Finishes the table.
    #[must_use]
    pub fn build(self) -> WarningsConfiguration {
        self.table
    }
}
