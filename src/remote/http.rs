use async_trait::async_trait;
use log::{debug, info};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, COOKIE};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use url::Url;

use crate::errors::ClientError;
use crate::remote::{
    outcome_for_status, validate_language_segment, ManageOutcome, ManageRequest, WordlistSource,
};
use crate::wordlist::Wordlist;

/// Header the manage endpoint uses to recognize AJAX submissions.
const REQUESTED_WITH: &str = "X-Requested-With";

/// Client for a DDTSS server's wordlist endpoints
#[derive(Debug, Clone)]
pub struct HttpWordlistClient {
    /// Base URL of the DDTSS application, always ending in `/`
    base_url: Url,
    /// HTTP client for making requests
    client: Client,
}

impl HttpWordlistClient {
    /// Create a client for `base_url` with the given request timeout.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        Self::with_session(base_url, timeout, None)
    }

    /// Create a client that forwards an existing session cookie with every request.
    pub fn with_session(
        base_url: &str,
        timeout: Duration,
        session_cookie: Option<&str>,
    ) -> Result<Self, ClientError> {
        let base_url = parse_base_url(base_url)?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(cookie) = session_cookie {
            let value = HeaderValue::from_str(cookie)
                .map_err(|e| ClientError::InvalidRequest(format!("invalid session cookie: {}", e)))?;
            headers.insert(COOKIE, value);
        }

        let client = Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| ClientError::ConnectionError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { base_url, client })
    }

    /// `GET` endpoint returning the wordlist of `language`.
    pub fn wordlist_url(&self, language: &str) -> Result<Url, ClientError> {
        self.join(&format!("{}/wordlist", language), language)
    }

    /// `POST` endpoint accepting add, edit and delete requests.
    pub fn manage_url(&self, language: &str) -> Result<Url, ClientError> {
        self.join(&format!("{}/wordlist/manage", language), language)
    }

    fn join(&self, path: &str, language: &str) -> Result<Url, ClientError> {
        validate_language_segment(language)?;
        self.base_url
            .join(path)
            .map_err(|e| ClientError::InvalidRequest(format!("cannot build URL: {}", e)))
    }
}

fn parse_base_url(base_url: &str) -> Result<Url, ClientError> {
    // without the trailing slash, joining would replace the last path segment
    let normalized = if base_url.ends_with('/') {
        base_url.to_string()
    } else {
        format!("{}/", base_url)
    };
    Url::parse(&normalized)
        .map_err(|e| ClientError::InvalidRequest(format!("invalid base URL '{}': {}", base_url, e)))
}

#[async_trait]
impl WordlistSource for HttpWordlistClient {
    async fn fetch(&self, language: &str) -> Result<Wordlist, ClientError> {
        let url = self.wordlist_url(language)?;
        debug!("Retrieving wordlist from {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(ClientError::UnknownLanguage(language.to_string()));
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ClientError::ApiError {
                status_code: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let wordlist = Wordlist::from_json(&body)?;
        info!("Retrieved {} wordlist entries for '{}'", wordlist.len(), language);
        Ok(wordlist)
    }

    async fn manage(
        &self,
        language: &str,
        request: &ManageRequest,
    ) -> Result<ManageOutcome, ClientError> {
        let url = self.manage_url(language)?;
        debug!("Submitting {} for '{}' to {}", request.action, request.word, url);

        let response = self
            .client
            .post(url)
            .header(REQUESTED_WITH, "XMLHttpRequest")
            .json(request)
            .send()
            .await?;

        let outcome = outcome_for_status(request, language, response.status().as_u16())?;
        info!("Wordlist entry '{}' {} for '{}'", request.word, outcome, language);
        Ok(outcome)
    }
}
