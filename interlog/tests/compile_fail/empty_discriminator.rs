//! Test: An empty discriminator should fail.
//!
//! Policy tables are keyed on the discriminator, so it must not be empty.

use interlog::LogState;

#[derive(LogState)]
#[log_state(name = "")]
enum QueryEvent {
    Compiled,
}

fn main() {}
