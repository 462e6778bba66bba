//! Test: Logging a type that does not implement `LogState` should fail.
//!
//! The diagnostic should point at `#[derive(LogState)]`.

use interlog::{EventId, InterceptingLogger, LogLevel, NullSink, Query};

struct Payload {
    rows: u32,
}

fn main() {
    let factory = |_: &str| NullSink;
    let logger = InterceptingLogger::<Query, _>::new(&factory, None);
    let payload = Payload { rows: 3 };

    // ERROR: `Payload` cannot be used as a log state
    let _ = logger.log(LogLevel::Warning, EventId::new(1), &payload, None, |p, _| {
        p.rows.to_string()
    });
}
