use anyhow::{Context, Result};
use chrono::NaiveDate;
use log::{debug, error, info};
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use crate::file_utils::FileManager;
use crate::highlight::{Description, HighlightedDescription, Highlighter};
use crate::remote::{HttpWordlistClient, ManageOutcome, ManageRequest, WordlistAction, WordlistSource};
use crate::wordlist::{parse_words_file, to_csv, ImportReport, Wordlist};

// @module: Application controller for wordlist operations

/// Shown when the wordlist cannot be retrieved; nothing is highlighted afterwards.
pub const RETRIEVE_FAILURE_MESSAGE: &str =
    "An error occurred in retrieving wordlist - Please contact webmaster";

/// Main application controller for wordlist highlighting and maintenance
pub struct Controller {
    // @field: App configuration
    config: Config,
    // @field: Wordlist server
    source: Box<dyn WordlistSource>,
}

impl Controller {
    // @method: Create a new controller talking to the configured server
    pub fn with_config(config: Config) -> Result<Self> {
        let client = HttpWordlistClient::with_session(
            &config.server.base_url,
            config.server.timeout(),
            config.server.session_cookie.as_deref(),
        )
        .context("Failed to create wordlist client")?;

        Ok(Self::with_source(config, Box::new(client)))
    }

    /// Create a controller backed by any wordlist source
    pub fn with_source(config: Config, source: Box<dyn WordlistSource>) -> Self {
        Self { config, source }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Load the wordlist from a local JSON file, or from the server when no file is given
    pub async fn load_wordlist(&self, wordlist_file: Option<&Path>) -> Result<Wordlist> {
        let loaded = match wordlist_file {
            Some(path) => {
                debug!("Loading wordlist from {:?}", path);
                FileManager::read_to_string(path)
                    .and_then(|json| Wordlist::from_json(&json).map_err(anyhow::Error::from))
                    .with_context(|| format!("Failed to load wordlist file: {:?}", path))
            }
            None => self
                .source
                .fetch(&self.config.language)
                .await
                .with_context(|| format!("Failed to retrieve wordlist for '{}'", self.config.language)),
        };

        loaded.inspect_err(|e| error!("{} ({:#})", RETRIEVE_FAILURE_MESSAGE, e))
    }

    /// Build a highlighter with the configured options
    pub fn highlighter(&self, wordlist: &Wordlist) -> Highlighter {
        Highlighter::with_options(wordlist, self.config.highlight)
    }

    /// Highlight the short and long halves of a package description
    pub fn highlight_description(
        &self,
        wordlist: &Wordlist,
        description: &Description,
    ) -> HighlightedDescription {
        self.highlighter(wordlist).highlight_description(description)
    }

    /// Highlight a single block of text
    pub fn highlight_text(&self, wordlist: &Wordlist, text: &str) -> String {
        self.highlighter(wordlist).highlight(text)
    }

    /// Write the wordlist as CSV into `output_dir`, returning the file path
    pub fn export_csv(&self, wordlist: &Wordlist, output_dir: &Path, date: NaiveDate) -> Result<PathBuf> {
        let path = FileManager::generate_export_path(output_dir, &self.config.language, date);
        let csv = to_csv(wordlist)?;
        FileManager::write_to_file(&path, &csv)?;

        info!("Exported {} wordlist entries to {:?}", wordlist.len(), path);
        Ok(path)
    }

    /// Import a tab-separated words file
    pub fn import_words(&self, path: &Path) -> Result<ImportReport> {
        let content = FileManager::read_to_string(path)?;
        let report = parse_words_file(&content)
            .with_context(|| format!("Failed to import words file: {:?}", path))?;

        info!(
            "Imported {} words from {:?} ({} duplicates skipped)",
            report.wordlist.len(),
            path,
            report.skipped_duplicates.len()
        );
        Ok(report)
    }

    /// Add, edit or delete one entry on the server
    pub async fn manage(
        &self,
        action: WordlistAction,
        word: &str,
        translation: &str,
    ) -> Result<ManageOutcome> {
        let request = ManageRequest::new(action, word, translation)?;
        let outcome = self
            .source
            .manage(&self.config.language, &request)
            .await
            .with_context(|| format!("Failed to {} wordlist entry '{}'", action, word))?;
        Ok(outcome)
    }
}
