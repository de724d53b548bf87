/*!
 * Access to the DDTSS wordlist endpoints.
 *
 * - `http`: reqwest client for a running server
 * - `mock`: in-memory server with the same status semantics, for tests
 */

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::Debug;

use crate::errors::ClientError;
use crate::wordlist::Wordlist;

pub mod http;
pub mod mock;

pub use http::HttpWordlistClient;
pub use mock::MockWordlistSource;

/// Minimum translation length accepted by the manage endpoint.
pub const MIN_TRANSLATION_CHARS: usize = 3;

/// Change requested on a single wordlist entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordlistAction {
    Add,
    Edit,
    Delete,
}

impl fmt::Display for WordlistAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add => write!(f, "add"),
            Self::Edit => write!(f, "edit"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// Body of a manage request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManageRequest {
    pub action: WordlistAction,
    pub word: String,
    pub translation: String,
}

impl ManageRequest {
    /// Build a request, rejecting what the server would answer with 422.
    ///
    /// The server wants a translation even for `delete`.
    pub fn new(
        action: WordlistAction,
        word: impl Into<String>,
        translation: impl Into<String>,
    ) -> Result<Self, ClientError> {
        let word = word.into();
        let translation = translation.into();

        if word.is_empty() {
            return Err(ClientError::InvalidRequest("word must not be empty".to_string()));
        }
        if translation.chars().count() < MIN_TRANSLATION_CHARS {
            return Err(ClientError::InvalidRequest(format!(
                "translation must be at least {} characters long",
                MIN_TRANSLATION_CHARS
            )));
        }

        Ok(Self {
            action,
            word,
            translation,
        })
    }
}

/// Successful result of a manage request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManageOutcome {
    Created,
    Updated,
    Deleted,
}

impl fmt::Display for ManageOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created => write!(f, "created"),
            Self::Updated => write!(f, "updated"),
            Self::Deleted => write!(f, "deleted"),
        }
    }
}

/// Interpret the status code returned for `request`.
pub fn outcome_for_status(
    request: &ManageRequest,
    language: &str,
    status: u16,
) -> Result<ManageOutcome, ClientError> {
    match (request.action, status) {
        (WordlistAction::Add, 201) => Ok(ManageOutcome::Created),
        (WordlistAction::Add, 409) => Err(ClientError::AlreadyExists(request.word.clone())),
        (WordlistAction::Edit, 200) => Ok(ManageOutcome::Updated),
        (WordlistAction::Edit, 409) => Err(ClientError::NotFound(request.word.clone())),
        (WordlistAction::Delete, 204) => Ok(ManageOutcome::Deleted),
        (WordlistAction::Delete, 410) => Err(ClientError::NotFound(request.word.clone())),
        (_, 403) => Err(ClientError::Forbidden(
            "only language coordinators can change the wordlist".to_string(),
        )),
        (_, 404) => Err(ClientError::UnknownLanguage(language.to_string())),
        (_, 405) => Err(ClientError::ApiError {
            status_code: status,
            message: "method not allowed".to_string(),
        }),
        (_, 412) => Err(ClientError::ApiError {
            status_code: status,
            message: "request body is not valid JSON".to_string(),
        }),
        (_, 422) => Err(ClientError::ApiError {
            status_code: status,
            message: "word or translation rejected".to_string(),
        }),
        (action, status) => Err(ClientError::ApiError {
            status_code: status,
            message: format!("unexpected status for {}", action),
        }),
    }
}

/// Language path segment accepted by the server routes (`\w+`).
pub fn validate_language_segment(language: &str) -> Result<(), ClientError> {
    if !language.is_empty()
        && language
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        Ok(())
    } else {
        Err(ClientError::InvalidRequest(format!(
            "invalid language segment: '{}'",
            language
        )))
    }
}

/// Anything that can serve and modify a language's wordlist.
#[async_trait]
pub trait WordlistSource: Send + Sync + Debug {
    /// Retrieve the full wordlist for `language`.
    async fn fetch(&self, language: &str) -> Result<Wordlist, ClientError>;

    /// Submit an add, edit or delete for `language`.
    async fn manage(
        &self,
        language: &str,
        request: &ManageRequest,
    ) -> Result<ManageOutcome, ClientError>;
}
