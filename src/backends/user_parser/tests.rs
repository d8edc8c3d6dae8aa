use super::*;

#[test]
fn test_parse_simple_backend() {
    let kdl = r#"
            backend "zig-zon" {
                alias "zig-ziglang"
                specfile "build.zig.zon"
                lockfile "build.zig.zon"
                patterns "*.zig"
                binary "zig"
            }
        "#;

    let backends = parse_backends(kdl).unwrap();
    assert_eq!(backends.len(), 1);

    let zig = &backends[0];
    assert_eq!(zig.name, "zig-zon");
    assert_eq!(zig.alias, "zig-ziglang");
    assert_eq!(zig.specfile, PathBuf::from("build.zig.zon"));
    assert_eq!(zig.lockfile, PathBuf::from("build.zig.zon"));
    assert_eq!(zig.filename_patterns, vec!["*.zig".to_string()]);
    assert_eq!(zig.binary, Some(BinarySpecifier::Single("zig".to_string())));
}

#[test]
fn test_parse_multiple_patterns_and_binaries() {
    let kdl = r#"
            backend "haskell-cabal" {
                specfile "project.cabal"
                lockfile "cabal.project.freeze"
                patterns "*.hs" "*.lhs"
                binary "cabal" "cabal-install"
            }
        "#;

    let backends = parse_backends(kdl).unwrap();
    let cabal = &backends[0];
    assert_eq!(cabal.alias, "");
    assert_eq!(
        cabal.filename_patterns,
        vec!["*.hs".to_string(), "*.lhs".to_string()]
    );
    assert_eq!(
        cabal.binary,
        Some(BinarySpecifier::Multiple(vec![
            "cabal".to_string(),
            "cabal-install".to_string()
        ]))
    );
}

#[test]
fn test_parse_keeps_file_order() {
    let kdl = r#"
            backend "b-one" {
                specfile "one.toml"
                lockfile "one.lock"
                patterns "*.one"
            }
            backend "a-two" {
                specfile "two.toml"
                lockfile "two.lock"
                patterns "*.two"
            }
        "#;

    let names: Vec<_> = parse_backends(kdl)
        .unwrap()
        .into_iter()
        .map(|b| b.name)
        .collect();
    assert_eq!(names, vec!["b-one", "a-two"]);
}

#[test]
fn test_binary_left_unset_when_missing() {
    let kdl = r#"
            backend "nim-nimble" {
                specfile "project.nimble"
                lockfile "nimble.lock"
                patterns "*.nim"
            }
        "#;

    let backends = parse_backends(kdl).unwrap();
    assert!(backends[0].binary.is_none());
}

#[test]
fn test_missing_name_is_error() {
    let kdl = r#"
            backend {
                specfile "x"
            }
        "#;

    let err = parse_backends(kdl).unwrap_err();
    assert!(err.to_string().contains("Backend name required"));
}

#[test]
fn test_field_without_value_is_error() {
    let kdl = r#"
            backend "nim-nimble" {
                specfile
            }
        "#;

    let err = parse_backends(kdl).unwrap_err();
    assert!(err.to_string().contains("'specfile' requires a string value"));
}

#[test]
fn test_empty_binary_is_error() {
    let kdl = r#"
            backend "nim-nimble" {
                binary
            }
        "#;

    assert!(parse_backends(kdl).is_err());
}

#[test]
fn test_unknown_top_level_node_is_error() {
    let kdl = r#"
            language "python"
        "#;

    let err = parse_backends(kdl).unwrap_err();
    assert!(err.to_string().contains("Unknown top-level node 'language'"));
}

#[test]
fn test_syntax_error_is_reported() {
    assert!(parse_backends("backend \"broken\" {").is_err());
}

#[test]
fn test_missing_file_yields_no_backends() {
    let dir = tempfile::tempdir().unwrap();
    let backends = load_user_backends(&dir.path().join("backends.kdl")).unwrap();
    assert!(backends.is_empty());
}

#[test]
fn test_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("backends.kdl");
    std::fs::write(
        &path,
        r#"backend "nodejs-npm" {
    specfile "package.json"
    lockfile "npm-shrinkwrap.json"
    patterns "*.js"
}
"#,
    )
    .unwrap();

    let backends = load_user_backends(&path).unwrap();
    assert_eq!(backends[0].lockfile, PathBuf::from("npm-shrinkwrap.json"));
}
