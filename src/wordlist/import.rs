/*!
 * Import of tab-separated words files.
 *
 * One entry per line, `word<TAB>translation`. Words are lowercased and the
 * first occurrence of a word wins.
 */

use log::{debug, warn};

use crate::errors::WordlistError;
use crate::wordlist::Wordlist;

/// Result of importing a words file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    /// Imported entries
    pub wordlist: Wordlist,

    /// Words skipped because they were already imported
    pub skipped_duplicates: Vec<String>,
}

/// Parse the contents of a words file.
pub fn parse_words_file(content: &str) -> Result<ImportReport, WordlistError> {
    let mut report = ImportReport::default();

    for (index, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let Some((word, translation)) = line.split_once('\t') else {
            return Err(WordlistError::MalformedLine {
                line: index + 1,
                content: line.to_string(),
            });
        };

        let word = word.to_lowercase();
        if report.wordlist.contains(&word) {
            warn!("Skipping duplicate '{}'", word);
            report.skipped_duplicates.push(word);
            continue;
        }

        report.wordlist.insert(word, translation)?;
    }

    debug!(
        "Parsed words file: {} entries, {} duplicates",
        report.wordlist.len(),
        report.skipped_duplicates.len()
    );
    Ok(report)
}
