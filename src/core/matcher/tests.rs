use super::*;

fn backend(name: &str, alias: &str) -> BackendConfig {
    BackendConfig {
        name: name.to_string(),
        alias: alias.to_string(),
        ..Default::default()
    }
}

#[test]
fn test_full_name_matches() {
    let poetry = backend("python-poetry", "");
    assert!(matches_language(&poetry, "python-poetry"));
}

#[test]
fn test_single_name_part_matches() {
    let poetry = backend("python-poetry", "");
    assert!(matches_language(&poetry, "python"));
    assert!(matches_language(&poetry, "poetry"));
}

#[test]
fn test_part_order_does_not_matter() {
    let poetry = backend("python-poetry", "");
    assert!(matches_language(&poetry, "poetry-python"));
}

#[test]
fn test_unknown_part_without_alias_does_not_match() {
    let poetry = backend("python-poetry", "");
    assert!(!matches_language(&poetry, "python3"));
}

#[test]
fn test_alias_part_matches() {
    let poetry = backend("python-poetry", "python-python3-poetry");
    assert!(matches_language(&poetry, "python3"));
}

#[test]
fn test_alias_multi_part_matches() {
    let poetry = backend("python-poetry", "python-python3-poetry");
    assert!(matches_language(&poetry, "python3-poetry"));
}

#[test]
fn test_parts_are_not_mixed_between_name_and_alias() {
    // "npm" only in name, "javascript" only in alias
    let npm = backend("nodejs-npm", "javascript-nodejs");
    assert!(!matches_language(&npm, "javascript-npm"));
}

#[test]
fn test_no_substring_or_prefix_matching() {
    let weird = backend("python321-poetry", "");
    assert!(!matches_language(&weird, "python3"));
    assert!(!matches_language(&weird, "poet"));
}

#[test]
fn test_case_sensitive() {
    let poetry = backend("python-poetry", "");
    assert!(!matches_language(&poetry, "Python"));
}

#[test]
fn test_other_language_does_not_match() {
    let poetry = backend("python3-poetry", "python-python3-poetry");
    assert!(!matches_language(&poetry, "python2"));
    assert!(!matches_language(&poetry, "ruby"));
}
