/*!
 * Tests for error types and conversions
 */

use assmerge::errors::{AppError, CliError, SchemaError, SubtitleError};

#[test]
fn test_schemaError_unmappedField_shouldNameBothSides() {
    let error = SchemaError::UnmappedField {
        external: "OutlineColour".to_string(),
        canonical: "outline_color".to_string(),
    };
    let display = format!("{}", error);
    assert!(display.contains("OutlineColour"));
    assert!(display.contains("outline_color"));
}

#[test]
fn test_schemaError_kindMismatch_shouldDisplayKinds() {
    let error = SchemaError::KindMismatch {
        field: "layer",
        expected: "integer",
        found: "text",
    };
    let display = format!("{}", error);
    assert!(display.contains("layer"));
    assert!(display.contains("integer"));
    assert!(display.contains("text"));
}

#[test]
fn test_subtitleError_malformedLine_shouldDisplayLineNumber() {
    let error = SubtitleError::MalformedLine {
        line: 42,
        message: "expected 10 columns".to_string(),
    };
    let display = format!("{}", error);
    assert!(display.contains("42"));
    assert!(display.contains("expected 10 columns"));
}

#[test]
fn test_subtitleError_fromIoError_shouldWrapAsWrite() {
    let io_error = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
    let error: SubtitleError = io_error.into();
    assert!(matches!(error, SubtitleError::Write(_)));
    assert!(error.to_string().contains("pipe closed"));
}

#[test]
fn test_cliError_variants_shouldDisplayCorrectly() {
    assert_eq!(
        CliError::MissingValue { flag: "-g".to_string() }.to_string(),
        "Missing value after '-g'"
    );
    assert_eq!(CliError::UnknownFlag("-x".to_string()).to_string(), "Unknown flag: '-x'");
    assert_eq!(
        CliError::InvalidNumber {
            flag: "-s".to_string(),
            value: "soon".to_string()
        }
        .to_string(),
        "Invalid number for '-s': 'soon'"
    );
    assert_eq!(CliError::NoInputFiles.to_string(), "No input files given");
}

#[test]
fn test_appError_fromSchemaError_shouldWrapCorrectly() {
    let schema = SchemaError::UnmappedField {
        external: "Foo".to_string(),
        canonical: "foo".to_string(),
    };
    let error: AppError = schema.clone().into();

    match error {
        AppError::Schema(inner) => assert_eq!(inner, schema),
        other => panic!("expected schema error, got {:?}", other),
    }
}

#[test]
fn test_appError_fromCliError_shouldPrefixMessage() {
    let error: AppError = CliError::NoInputFiles.into();
    assert_eq!(error.to_string(), "Command line error: No input files given");
}

#[test]
fn test_appError_fromAnyhow_shouldBecomeUnknown() {
    let error: AppError = anyhow::anyhow!("something odd").into();
    assert!(matches!(error, AppError::Unknown(ref message) if message == "something odd"));
}

#[test]
fn test_appError_fromAnyhowWithContext_shouldKeepChain() {
    let error = anyhow::anyhow!("file not found").context("Failed to read subtitle file: a.ass");
    let app_error: AppError = error.into();

    let display = app_error.to_string();
    assert!(display.contains("Failed to read subtitle file: a.ass"));
    assert!(display.contains("file not found"));
}

#[test]
fn test_appError_fromIoError_shouldBecomeFileError() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
    let error: AppError = io_error.into();
    assert!(error.to_string().starts_with("File error"));
}
