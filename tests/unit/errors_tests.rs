/*!
 * Tests for error types and conversions
 */

use ddtss_wordlist::errors::{AppError, ClientError, WordlistError};

#[test]
fn test_wordlistError_unknownSortOrder_shouldNameAllowedValues() {
    let error = WordlistError::UnknownSortOrder("random".to_string());
    assert_eq!(
        error.to_string(),
        "Unknown type of sorting[random]. Allowed values are: desc or asc"
    );
}

#[test]
fn test_wordlistError_malformedLine_shouldDisplayLineNumber() {
    let error = WordlistError::MalformedLine {
        line: 12,
        content: "no tab here".to_string(),
    };
    let display = format!("{}", error);
    assert!(display.contains("12"));
    assert!(display.contains("no tab here"));
}

#[test]
fn test_clientError_apiError_shouldDisplayStatusAndMessage() {
    let error = ClientError::ApiError {
        status_code: 422,
        message: "word or translation rejected".to_string(),
    };
    let display = format!("{}", error);
    assert!(display.contains("422"));
    assert!(display.contains("word or translation rejected"));
}

#[test]
fn test_clientError_fromWordlistError_shouldWrapCorrectly() {
    let error: ClientError = WordlistError::EmptyWord.into();
    assert!(matches!(error, ClientError::Wordlist(WordlistError::EmptyWord)));
    assert!(error.to_string().contains("must not be empty"));
}

#[test]
fn test_appError_fromClientError_shouldWrapCorrectly() {
    let error: AppError = ClientError::NotFound("kernel".to_string()).into();
    assert!(matches!(error, AppError::Client(_)));
    assert!(error.to_string().contains("kernel"));
}

#[test]
fn test_appError_fromIoError_shouldBecomeFileError() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.json");
    let error: AppError = io_error.into();
    assert!(matches!(error, AppError::File(msg) if msg.contains("missing.json")));
}

#[test]
fn test_appError_fromAnyhow_shouldBecomeUnknown() {
    let error: AppError = anyhow::anyhow!("something odd").into();
    assert!(matches!(error, AppError::Unknown(msg) if msg == "something odd"));
}
