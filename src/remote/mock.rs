/*!
 * In-memory wordlist server for testing.
 *
 * - `MockWordlistSource::new(..)` - serves and mutates the given wordlists
 * - `MockWordlistSource::failing()` - every request fails with a connection error
 * - `.read_only()` - behaves like a session without coordinator rights
 */

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::errors::ClientError;
use crate::remote::{outcome_for_status, ManageOutcome, ManageRequest, WordlistAction, WordlistSource};
use crate::wordlist::Wordlist;

/// Behavior mode for the mock source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockBehavior {
    /// Serves and updates the stored wordlists
    Working,
    /// Answers every manage request with 403
    ReadOnly,
    /// Always fails with a connection error
    Failing,
}

/// Mock source holding one wordlist per language
#[derive(Debug, Clone)]
pub struct MockWordlistSource {
    behavior: MockBehavior,
    languages: Arc<Mutex<HashMap<String, Wordlist>>>,
    request_count: Arc<AtomicUsize>,
}

impl MockWordlistSource {
    /// Serve the given `(language, wordlist)` pairs.
    pub fn new<I>(languages: I) -> Self
    where
        I: IntoIterator<Item = (String, Wordlist)>,
    {
        Self {
            behavior: MockBehavior::Working,
            languages: Arc::new(Mutex::new(languages.into_iter().collect())),
            request_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Serve a single language.
    pub fn with_language(language: &str, wordlist: Wordlist) -> Self {
        Self::new([(language.to_string(), wordlist)])
    }

    pub fn failing() -> Self {
        Self {
            behavior: MockBehavior::Failing,
            ..Self::new(std::iter::empty())
        }
    }

    pub fn read_only(mut self) -> Self {
        self.behavior = MockBehavior::ReadOnly;
        self
    }

    /// Number of requests received so far
    pub fn request_count(&self) -> usize {
        self.request_count.load(Ordering::SeqCst)
    }

    /// Current wordlist of `language`, if served.
    pub fn snapshot(&self, language: &str) -> Option<Wordlist> {
        self.languages.lock().get(language).cloned()
    }

    /// Status code a DDTSS server would answer `request` with.
    fn apply(&self, language: &str, request: &ManageRequest) -> u16 {
        if self.behavior == MockBehavior::ReadOnly {
            return 403;
        }

        let mut languages = self.languages.lock();
        let Some(wordlist) = languages.get_mut(language) else {
            return 404;
        };

        let exists = wordlist.contains(&request.word);
        match request.action {
            WordlistAction::Add if exists => 409,
            WordlistAction::Add => match wordlist.insert(request.word.clone(), request.translation.clone()) {
                Ok(_) => 201,
                Err(_) => 422,
            },
            WordlistAction::Edit if !exists => 409,
            WordlistAction::Edit => match wordlist.insert(request.word.clone(), request.translation.clone()) {
                Ok(_) => 200,
                Err(_) => 422,
            },
            WordlistAction::Delete if !exists => 410,
            WordlistAction::Delete => {
                wordlist.remove(&request.word);
                204
            }
        }
    }
}

#[async_trait]
impl WordlistSource for MockWordlistSource {
    async fn fetch(&self, language: &str) -> Result<Wordlist, ClientError> {
        self.request_count.fetch_add(1, Ordering::SeqCst);

        if self.behavior == MockBehavior::Failing {
            return Err(ClientError::ConnectionError("mock source is failing".to_string()));
        }

        self.languages
            .lock()
            .get(language)
            .cloned()
            .ok_or_else(|| ClientError::UnknownLanguage(language.to_string()))
    }

    async fn manage(
        &self,
        language: &str,
        request: &ManageRequest,
    ) -> Result<ManageOutcome, ClientError> {
        self.request_count.fetch_add(1, Ordering::SeqCst);

        if self.behavior == MockBehavior::Failing {
            return Err(ClientError::ConnectionError("mock source is failing".to_string()));
        }

        let status = self.apply(language, request);
        outcome_for_status(request, language, status)
    }
}
