//! Policy-driven interception of warning events in front of a structured logger.
//!
//! This crate separates:
//! - **State**: what a log event is about, identified by an explicit
//!   discriminator ([`LogState`]).
//! - **Policy**: what to do when that state is logged as a warning
//!   ([`WarningBehavior`], [`WarningsConfiguration`]).
//!
//! The [`InterceptingLogger`] sits in front of a [`Sink`] and applies the policy
//! on every warning-level call:
//! - `Ignore` drops the event.
//! - `Log` forwards it, noting which state produced it.
//! - `Throw` turns it into a [`PolicyEscalation`] error that the caller must
//!   propagate. The sink never sees the event.
//!
//! All other levels are forwarded verbatim when the sink has them enabled.
//!
//! The logger also owns the one-time "sensitive data logging is enabled"
//! warning (see [`InterceptingLogger::log_sensitive_data`]).
//!
//! What it does not do:
//! - transport, buffer, batch or sample log records
//! - fan out to several sinks
//!
//! Integrations live behind feature flags (`slog`, `serde`, `testing`).
//!
//! ## Running the test suite
//!
//! The integration tests record events through the `testing` module, so most of them
//! only build with that feature. Run the whole suite with:
//!
//! ```text
//! cargo test --all-features
//! ```
//!
//! A plain `cargo test` runs the unit tests and the compile-fail tests only.

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::doc_markdown,
    clippy::if_not_else,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::option_if_let_else
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub use interlog_derive::LogState;

#[allow(unused_extern_crates)]
extern crate self as interlog;

// Module declarations
mod category;
mod error;
mod event;
mod level;
mod logger;
mod options;
mod policy;
mod sink;
mod state;
pub mod strings;

#[cfg(feature = "slog")]
pub mod slog;
#[cfg(any(test, feature = "testing"))]
pub mod testing;

// Re-exports
pub use category::{Infrastructure, LoggerCategory, Query, Update};
#[cfg(feature = "serde")]
pub use error::ConfigError;
pub use error::PolicyEscalation;
pub use event::{CoreEventId, EventDefinition, EventId};
pub use level::{LogLevel, ParseLevelError};
pub use logger::InterceptingLogger;
pub use options::{LoggingConfig, LoggingOptions, WarningsConfig};
pub use policy::{WarningBehavior, WarningsConfiguration, WarningsConfigurationBuilder};
pub use sink::{ErrorRef, LoggerFactory, NullSink, Sink};
pub use state::{qualified_name, LogState, LogStateType, StateText};
