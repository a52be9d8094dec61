//! trybuild coverage for `#[derive(Flags)]` expansions that must compile.
//!
//! Covers crate path overrides for renamed dependencies and generic records
//! whose type parameters are bound through `FlagField`.

#[test]
fn derive_fixtures_compile() {
    let t = trybuild::TestCases::new();
    t.pass("tests/trybuild/crate_path_alias.rs");
    t.pass("tests/trybuild/generic_record.rs");
}
