//! Test: Deriving `LogState` for a union should fail.
//!
//! A union has no variant to name and no safe `Display`, so it has no textual
//! form.

use interlog::LogState;

#[derive(LogState)]
union Bits {
    word: u32,
    float: f32,
}

fn main() {}
