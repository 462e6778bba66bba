//! The state payload contract.
//!
//! Every log call carries a typed state. The state explicitly names its
//! discriminator, the key the warning policy is looked up by, instead of the
//! logger inspecting types at runtime:
//!
//! | Item | Meaning |
//! |------|---------|
//! | [`LogState::type_name`] | Discriminator used for policy lookup |
//! | [`LogState::write_state`] | Textual form of the value |
//! | [`LogState::is_default`] | Zero/empty value; bypasses warning policy |
//! | [`qualified_name`] | `"{type_name}.{text}"`, used in messages |
//!
//! `#[derive(LogState)]` implements the contract for catalogue enums and
//! payload structs. Implementations for common std payloads are provided here.

use std::{borrow::Cow, fmt, rc::Rc, sync::Arc};

/// A log state payload with an explicit discriminator.
///
/// The trait is object safe; sinks that need to erase the payload type can
/// work with `&dyn LogState`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as a log state",
    label = "this type has no log state discriminator",
    note = "use `#[derive(LogState)]` on the type definition"
)]
pub trait LogState {
    /// Returns the discriminator used to select a warning behavior.
    fn type_name(&self) -> &'static str;

    /// Writes the textual form of the value.
    fn write_state(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;

    /// Returns true for the zero/empty value of the type.
    ///
    /// Default states are never subject to warning policy.
    fn is_default(&self) -> bool {
        false
    }
}

/// Static access to a state type's discriminator.
///
/// Lets policy tables be built from types (`throw_for::<MyEvent>()`) rather
/// than from string literals.
pub trait LogStateType {
    /// Discriminator shared by every value of the type.
    const NAME: &'static str;
}

/// `Display` adapter over [`LogState::write_state`].
pub struct StateText<'a, T: ?Sized>(pub &'a T);

impl<T> fmt::Display for StateText<'_, T>
where
    T: LogState + ?Sized,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.write_state(f)
    }
}

/// Returns the qualified identity `"{type_name}.{text}"` of a state.
#[must_use]
pub fn qualified_name<T>(state: &T) -> String
where
    T: LogState + ?Sized,
{
    format!("{}.{}", state.type_name(), StateText(state))
}

// =============================================================================
// LogState implementations for standard library types
// =============================================================================

impl LogState for () {
    fn type_name(&self) -> &'static str {
        "()"
    }

    fn write_state(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Ok(())
    }

    fn is_default(&self) -> bool {
        true
    }
}

impl LogStateType for () {
    const NAME: &'static str = "()";
}

// All text payloads share one discriminator.
const TEXT_STATE: &str = "String";

impl LogState for str {
    fn type_name(&self) -> &'static str {
        TEXT_STATE
    }

    fn write_state(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }

    fn is_default(&self) -> bool {
        self.is_empty()
    }
}

impl LogStateType for str {
    const NAME: &'static str = TEXT_STATE;
}

impl LogState for String {
    fn type_name(&self) -> &'static str {
        TEXT_STATE
    }

    fn write_state(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }

    fn is_default(&self) -> bool {
        self.is_empty()
    }
}

impl LogStateType for String {
    const NAME: &'static str = TEXT_STATE;
}

impl LogState for Cow<'_, str> {
    fn type_name(&self) -> &'static str {
        TEXT_STATE
    }

    fn write_state(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }

    fn is_default(&self) -> bool {
        self.is_empty()
    }
}

impl LogStateType for Cow<'_, str> {
    const NAME: &'static str = TEXT_STATE;
}

macro_rules! impl_log_state_scalar {
    ($ty:ty, $zero:expr) => {
        impl LogState for $ty {
            fn type_name(&self) -> &'static str {
                stringify!($ty)
            }

            fn write_state(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(self, f)
            }

            fn is_default(&self) -> bool {
                *self == $zero
            }
        }

        impl LogStateType for $ty {
            const NAME: &'static str = stringify!($ty);
        }
    };
}

impl_log_state_scalar!(bool, false);
impl_log_state_scalar!(i8, 0);
impl_log_state_scalar!(i16, 0);
impl_log_state_scalar!(i32, 0);
impl_log_state_scalar!(i64, 0);
impl_log_state_scalar!(isize, 0);
impl_log_state_scalar!(u8, 0);
impl_log_state_scalar!(u16, 0);
impl_log_state_scalar!(u32, 0);
impl_log_state_scalar!(u64, 0);
impl_log_state_scalar!(usize, 0);

impl<T> LogState for Option<T>
where
    T: LogState + LogStateType,
{
    fn type_name(&self) -> &'static str {
        T::NAME
    }

    fn write_state(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Some(value) => value.write_state(f),
            None => f.write_str("None"),
        }
    }

    fn is_default(&self) -> bool {
        self.as_ref().map_or(true, LogState::is_default)
    }
}

impl<T> LogStateType for Option<T>
where
    T: LogStateType,
{
    const NAME: &'static str = T::NAME;
}

macro_rules! impl_log_state_pointer {
    ($ptr:ident) => {
        impl<T> LogState for $ptr<T>
        where
            T: LogState + ?Sized,
        {
            fn type_name(&self) -> &'static str {
                (**self).type_name()
            }

            fn write_state(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                (**self).write_state(f)
            }

            fn is_default(&self) -> bool {
                (**self).is_default()
            }
        }

        impl<T> LogStateType for $ptr<T>
        where
            T: LogStateType + ?Sized,
        {
            const NAME: &'static str = T::NAME;
        }
    };
}

impl_log_state_pointer!(Box);
impl_log_state_pointer!(Rc);
impl_log_state_pointer!(Arc);

impl<T> LogState for &T
where
    T: LogState + ?Sized,
{
    fn type_name(&self) -> &'static str {
        (**self).type_name()
    }

    fn write_state(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).write_state(f)
    }

    fn is_default(&self) -> bool {
        (**self).is_default()
    }
}

impl<T> LogStateType for &T
where
    T: LogStateType + ?Sized,
{
    const NAME: &'static str = T::NAME;
}
