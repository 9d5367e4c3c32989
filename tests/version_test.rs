use scaffoldext::error::Error;
use scaffoldext::version::{parse, requirement_bounds, requirement_for};

#[test]
fn test_parse_release_version() {
    let version = parse("4.1.0").unwrap();
    assert_eq!((version.major, version.minor, version.patch), (4, 1, 0));
    assert!(!version.is_prerelease());
}

#[test]
fn test_parse_prerelease_version() {
    let version = parse("4.0a2").unwrap();
    assert_eq!((version.major, version.minor), (4, 0));
    assert_eq!(version.pre, Some(("a".to_string(), 2)));
    assert!(version.is_prerelease());
}

#[test]
fn test_parse_release_candidate() {
    let version = parse("3.12.1rc1").unwrap();
    assert_eq!((version.major, version.minor, version.patch), (3, 12, 1));
    assert_eq!(version.pre, Some(("rc".to_string(), 1)));
}

#[test]
fn test_parse_invalid_version() {
    for bad in ["", "abc", "4", "4.x", "4.0.0.0"] {
        match parse(bad) {
            Err(Error::InvalidVersion { .. }) => (),
            other => panic!("Expected InvalidVersion for '{}', got {:?}", bad, other),
        }
    }
}

#[test]
fn test_release_bounds() {
    let version = parse("4.1.0").unwrap();
    assert_eq!(requirement_bounds(&version), ">=4.1,<5.0");
}

#[test]
fn test_prerelease_bounds() {
    let version = parse("4.0a2").unwrap();
    assert_eq!(requirement_bounds(&version), ">=4.0a0,<5.0a0");
}

#[test]
fn test_requirement_for_names_the_host_tool() {
    assert_eq!(requirement_for("4.1.0").unwrap(), "pyscaffold>=4.1,<5.0");
    assert_eq!(requirement_for("4.0a2").unwrap(), "pyscaffold>=4.0a0,<5.0a0");
}
