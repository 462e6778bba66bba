//! Logger categories.
//!
//! A category type names the logger an [`InterceptingLogger`](crate::InterceptingLogger)
//! is created for. The name is a constant, resolved once when the logger is
//! constructed.

/// A logger category identified by a fixed name.
pub trait LoggerCategory {
    /// Category name handed to the [`LoggerFactory`](crate::LoggerFactory).
    const NAME: &'static str;
}

/// Declares unit types implementing [`LoggerCategory`].
///
/// ```rust
/// interlog::logger_category! {
///     /// Connection lifecycle events.
///     pub Connection => "App.Connection";
/// }
///
/// use interlog::LoggerCategory;
/// assert_eq!(Connection::NAME, "App.Connection");
/// ```
#[macro_export]
macro_rules! logger_category {
    ($($(#[$meta:meta])* $vis:vis $name:ident => $category:literal;)+) => {
        $(
            $(#[$meta])*
            #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
            $vis struct $name;

            impl $crate::LoggerCategory for $name {
                const NAME: &'static str = $category;
            }
        )+
    };
}

logger_category! {
    /// Events about the logging infrastructure itself, such as the
    /// sensitive-data warning.
    pub Infrastructure => "Interlog.Infrastructure";
    /// Query compilation and execution events.
    pub Query => "Interlog.Query";
    /// Events raised while saving changes.
    pub Update => "Interlog.Update";
}
