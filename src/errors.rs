/*!
 * Error types for the ddtss-wordlist application.
 *
 * This module contains custom error types for the different layers of the
 * application, using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors raised at the wordlist boundary: parsing, validation, import and export
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WordlistError {
    /// The wordlist document is not a JSON object of strings
    #[error("Invalid wordlist document: {0}")]
    InvalidDocument(String),

    /// A term is empty or only whitespace
    #[error("Wordlist term must not be empty")]
    EmptyWord,

    /// A term has an empty translation
    #[error("Wordlist term '{0}' has an empty translation")]
    EmptyTranslation(String),

    /// A translation value is not a string
    #[error("Wordlist term '{word}' has a non-string translation: {found}")]
    InvalidTranslation {
        /// Offending term
        word: String,
        /// JSON type found instead of a string
        found: String,
    },

    /// Sort order other than `asc` or `desc`
    #[error("Unknown type of sorting[{0}]. Allowed values are: desc or asc")]
    UnknownSortOrder(String),

    /// A words file line has no tab separator
    #[error("Malformed wordlist line {line}: '{content}'")]
    MalformedLine {
        /// 1-based line number
        line: usize,
        /// Line content after trimming
        content: String,
    },

    /// CSV serialization failed
    #[error("CSV export failed: {0}")]
    Csv(String),
}

/// Errors that can occur when talking to the DDTSS wordlist endpoints
#[derive(Error, Debug)]
pub enum ClientError {
    /// Error when making a request fails
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Error when the response body cannot be used
    #[error("Failed to parse wordlist response: {0}")]
    ParseError(String),

    /// Error returned by the server with no more specific meaning
    #[error("Server responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message
        message: String,
    },

    /// Error establishing or maintaining a connection, including timeouts
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// The session is not allowed to change the wordlist
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Language unknown to the server or not enabled
    #[error("Unknown language: {0}")]
    UnknownLanguage(String),

    /// Add requested for a word that already exists
    #[error("Word already exists in wordlist: {0}")]
    AlreadyExists(String),

    /// Edit or delete requested for a word that does not exist
    #[error("Word not found in wordlist: {0}")]
    NotFound(String),

    /// Request rejected before it was sent
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Server sent a wordlist that fails validation
    #[error("Wordlist error: {0}")]
    Wordlist(#[from] WordlistError),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from the wordlist layer
    #[error("Wordlist error: {0}")]
    Wordlist(#[from] WordlistError),

    /// Error from the remote wordlist service
    #[error("Client error: {0}")]
    Client(#[from] ClientError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() || error.is_connect() {
            Self::ConnectionError(error.to_string())
        } else if error.is_decode() {
            Self::ParseError(error.to_string())
        } else {
            Self::RequestFailed(error.to_string())
        }
    }
}
