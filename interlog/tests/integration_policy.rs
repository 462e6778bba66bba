//! End-to-end policy behavior through the public API.
//!
//! These tests verify that:
//! - `Throw`, `Ignore` and unregistered discriminators behave independently in
//!   one table
//! - Options shared between loggers share the sensitive-data warning
//! - Concurrent callers see a consistent enabled flag

#![cfg(feature = "testing")]

use std::{sync::Arc, thread};

use interlog::{
    testing::RecordingFactory, CoreEventId, EventDefinition, EventId, Infrastructure,
    InterceptingLogger, LogLevel, LogState, LoggingOptions, Query, Update, WarningBehavior,
    WarningsConfiguration,
};

#[derive(LogState)]
enum QueryEvent {
    ClientEvaluation,
    MissingOrderBy,
}

#[derive(LogState)]
enum MigrationEvent {
    PendingChanges,
}

#[derive(LogState)]
#[log_state(name = "ChangeTracking")]
enum TrackingEvent {
    DetachedEntity(u32),
}

fn table() -> WarningsConfiguration {
    WarningsConfiguration::builder()
        .throw_for::<QueryEvent>()
        .ignore_for::<MigrationEvent>()
        .build()
}

fn text<T: ?Sized>(_: &T, _: interlog::ErrorRef<'_>) -> String {
    "event text".to_string()
}

#[test]
fn mixed_table_routes_each_discriminator() {
    let factory = RecordingFactory::new();
    let options = Arc::new(LoggingOptions::new().with_warnings(table()));
    let logger = InterceptingLogger::<Query, _>::new(&factory, Some(options));

    let escalated = logger.log(
        LogLevel::Warning,
        EventId::new(1),
        &QueryEvent::ClientEvaluation,
        None,
        text,
    );
    let ignored = logger.log(
        LogLevel::Warning,
        EventId::new(2),
        &MigrationEvent::PendingChanges,
        None,
        text,
    );
    let logged = logger.log(
        LogLevel::Warning,
        EventId::new(3),
        &TrackingEvent::DetachedEntity(4),
        None,
        text,
    );

    let err = escalated.unwrap_err();
    assert_eq!(err.state(), "QueryEvent.ClientEvaluation");
    assert!(ignored.is_ok());
    assert!(logged.is_ok());

    let events = factory.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].category, "Interlog.Query");
    assert_eq!(events[0].state, "ChangeTracking.DetachedEntity");
    assert!(events[0].message.starts_with("event text"));
    assert!(events[0].message.contains("'ChangeTracking'"));
}

#[test]
fn every_variant_of_a_discriminator_shares_its_behavior() {
    let factory = RecordingFactory::new();
    let options = Arc::new(LoggingOptions::new().with_warnings(table()));
    let logger = InterceptingLogger::<Query, _>::new(&factory, Some(options));

    for event in [QueryEvent::ClientEvaluation, QueryEvent::MissingOrderBy] {
        assert!(logger
            .log(LogLevel::Warning, EventId::new(1), &event, None, text)
            .is_err());
    }
    assert!(factory.events().is_empty());
}

#[test]
fn escalation_error_names_the_state_and_the_remedy() {
    let factory = RecordingFactory::new();
    let options = Arc::new(LoggingOptions::new().with_warnings(table()));
    let logger = InterceptingLogger::<Query, _>::new(&factory, Some(options));

    let err = logger
        .log(
            LogLevel::Warning,
            EventId::new(1),
            &QueryEvent::MissingOrderBy,
            None,
            |_, _| "rows may come back in any order".to_string(),
        )
        .unwrap_err();

    let rendered = err.to_string();
    assert!(rendered.contains("'QueryEvent.MissingOrderBy'"));
    assert!(rendered.contains("rows may come back in any order"));
    assert!(rendered.contains("'QueryEvent'"));
}

#[test]
fn strict_default_escalates_unlisted_discriminators() {
    let table = WarningsConfiguration::builder()
        .default_behavior(WarningBehavior::Throw)
        .log_for::<MigrationEvent>()
        .build();
    let factory = RecordingFactory::new();
    let options = Arc::new(LoggingOptions::new().with_warnings(table));
    let logger = InterceptingLogger::<Update, _>::new(&factory, Some(options));

    let tracking = TrackingEvent::DetachedEntity(1);
    assert!(logger
        .log(LogLevel::Warning, EventId::new(1), &tracking, None, text)
        .is_err());
    let migration = MigrationEvent::PendingChanges;
    assert!(logger
        .log(LogLevel::Warning, EventId::new(2), &migration, None, text)
        .is_ok());
    assert_eq!(factory.events().len(), 1);
}

#[test]
fn shared_options_warn_once_across_loggers() {
    let factory = RecordingFactory::new();
    let options = Arc::new(LoggingOptions::new().with_sensitive_data_logging(true));
    let query = InterceptingLogger::<Query, _>::new(&factory, Some(Arc::clone(&options)));
    let infrastructure =
        InterceptingLogger::<Infrastructure, _>::new(&factory, Some(Arc::clone(&options)));

    assert!(query.log_sensitive_data().unwrap());
    assert!(infrastructure.log_sensitive_data().unwrap());

    let events = factory.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].category, "Interlog.Query");
    assert_eq!(events[0].state_type, "CoreEventId");
}

#[test]
fn separate_options_warn_separately() {
    let factory = RecordingFactory::new();
    for _ in 0..2 {
        let options = Arc::new(LoggingOptions::new().with_sensitive_data_logging(true));
        let logger = InterceptingLogger::<Query, _>::new(&factory, Some(options));
        assert!(logger.log_sensitive_data().unwrap());
    }
    assert_eq!(factory.events().len(), 2);
}

#[test]
fn concurrent_first_calls_warn_at_least_once() {
    const THREADS: usize = 8;

    let factory = RecordingFactory::new();
    let options = Arc::new(LoggingOptions::new().with_sensitive_data_logging(true));
    let logger = Arc::new(InterceptingLogger::<Query, _>::new(&factory, Some(options)));

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || logger.log_sensitive_data().unwrap())
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap());
    }

    let warning_id = CoreEventId::SensitiveDataLoggingEnabledWarning.event_id();
    let emitted = factory
        .events()
        .iter()
        .filter(|event| event.event_id == warning_id)
        .count();
    assert!((1..=THREADS).contains(&emitted));

    assert!(logger.log_sensitive_data().unwrap());
    assert_eq!(factory.events().len(), emitted);
}
