use super::*;

#[test]
fn exit_codes_are_distinct() {
    assert_ne!(EXIT_SUCCESS, EXIT_ISSUES_FOUND);
    assert_ne!(EXIT_SUCCESS, EXIT_CONFIG_ERROR);
    assert_ne!(EXIT_ISSUES_FOUND, EXIT_CONFIG_ERROR);
}

#[test]
fn pipeline_is_reachable_from_crate_root() {
    let validation = validator::Validator::new().validate("class Foo { int x; };\n");
    assert_eq!(validation.error_count(), 2);
}
