//! Compile-time tests for the Fieldable and Class derives.
//!
//! These tests verify that:
//! - Valid derive usage compiles and links the generated fielders
//! - Invalid derive usage is rejected with an error at the offending token
//!
//! Run with: cargo nextest run --package jonty trybuild

#[test]
fn compile_pass() {
    let t = trybuild::TestCases::new();
    t.pass("tests/compile_pass/*.rs");
}

#[test]
fn compile_fail() {
    let t = trybuild::TestCases::new();
    t.compile_fail("tests/compile_fail/*.rs");
}
