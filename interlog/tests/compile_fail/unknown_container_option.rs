//! Test: Unknown `#[log_state(...)]` options should fail.
//!
//! Only `name = "..."` and `default` are accepted.

use interlog::LogState;

#[derive(LogState)]
// ERROR: `verbose` is not a container option
#[log_state(verbose)]
enum QueryEvent {
    Compiled,
}

fn main() {}
