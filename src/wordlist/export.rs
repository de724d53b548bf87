/*!
 * CSV export of a wordlist.
 *
 * Output follows RFC 4180: comma separated, CRLF terminated, every field
 * quoted and embedded double quotes doubled.
 */

use chrono::NaiveDate;
use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::errors::WordlistError;
use crate::wordlist::Wordlist;

/// Render the wordlist as CSV with a `"Word","Translation"` header, rows ordered by word.
pub fn to_csv(wordlist: &Wordlist) -> Result<String, WordlistError> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::CRLF)
        .from_writer(Vec::new());

    writer
        .write_record(["Word", "Translation"])
        .map_err(|e| WordlistError::Csv(e.to_string()))?;
    for (word, translation) in wordlist.iter() {
        writer
            .write_record([word, translation])
            .map_err(|e| WordlistError::Csv(e.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| WordlistError::Csv(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| WordlistError::Csv(e.to_string()))
}

/// File name for an export: `wordlist-<language>_<YYYYMMDD>.csv`.
pub fn export_filename(language: &str, date: NaiveDate) -> String {
    format!("wordlist-{}_{}.csv", language, date.format("%Y%m%d"))
}
