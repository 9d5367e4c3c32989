use std::io;

use scaffoldext::error::Error;

#[test]
fn test_error_conversion() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let err: Error = io_err.into();

    match err {
        Error::IoError(_) => (),
        _ => panic!("Expected IoError variant"),
    }
}

#[test]
fn test_error_display() {
    let err = Error::ActionNotFound { name: "define_structure".to_string() };
    assert_eq!(err.to_string(), "Action 'define_structure' not found in the pipeline.");

    let err = Error::MissingStructure { path: "project/setup.cfg".to_string() };
    assert_eq!(
        err.to_string(),
        "Expected 'project/setup.cfg' to be part of the project structure."
    );
}

#[test]
fn test_naming_error_mentions_the_convention() {
    let err = Error::InvalidProjectName { name: "my_extension".to_string() };
    let message = err.to_string();

    assert!(message.contains("pyscaffoldext-"));
    assert!(message.contains("--force"));
}

#[test]
fn test_namespace_error_mentions_the_reserved_namespace() {
    let err = Error::NamespaceConflict { namespace: "custom.ns".to_string() };
    let message = err.to_string();

    assert!(message.contains("custom.ns"));
    assert!(message.contains("pyscaffoldext"));
}
