//! Compile-fail tests to ensure proper error messages for incorrect usage.
//!
//! These tests verify that the derive macro and the `LogState` bound produce
//! helpful compiler errors, such as:
//! - Deriving `LogState` for a union
//! - Passing an unknown option to `#[log_state(...)]`
//! - Logging a state type that does not implement `LogState`

#[test]
fn compile_fail_tests() {
    let t = trybuild::TestCases::new();
    t.compile_fail("tests/compile_fail/*.rs");
}
