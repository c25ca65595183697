//! UI tests for #[component]: happy path compiles, misuse fails with a span on user code.

#[test]
fn ui_component_happy_min_ok() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/happy_min.rs");
}

#[test]
fn ui_component_fn_with_args_fails() {
    let t = trybuild::TestCases::new();
    t.compile_fail("tests/ui/fn_with_args.rs");
}
