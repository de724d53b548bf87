/*!
 * Wordlist highlighting for untranslated descriptions.
 *
 * Every occurrence of a wordlist term in a text is wrapped in a tooltip span
 * carrying its translation. Terms are applied longest first and every span
 * produced is opaque to the terms that follow, so when "lorem ipsum" and
 * "ipsum" are both in the wordlist the phrase wins and "ipsum" is not wrapped
 * a second time inside it.
 *
 * The input text is not HTML-escaped; callers pass plain or already
 * sanitized text and must not feed highlighted output back in.
 */

use log::{debug, warn};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::wordlist::{SortOrder, Wordlist};

pub mod markup;
pub mod pattern;

pub use markup::Segment;

/// Which gaps between the words of a term may span a line break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WhitespaceMatching {
    /// Only the gap after the first word (page script behavior)
    #[default]
    FirstBoundary,
    /// Every gap
    AllBoundaries,
}

/// How a translation is escaped inside the `tooltip-text` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuoteEscaping {
    /// First double quote becomes `\"`, the rest is left alone (page script behavior)
    #[default]
    LegacyFirstQuote,
    /// `&`, `<`, `>` and every `"` become entities
    HtmlEntities,
}

/// Matching and markup options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HighlightOptions {
    #[serde(default)]
    pub whitespace: WhitespaceMatching,

    #[serde(default)]
    pub quote_escaping: QuoteEscaping,
}

#[derive(Debug, Clone)]
struct TermRule {
    pattern: Regex,
    tooltip: String,
}

/// Precompiled highlighter for one wordlist.
///
/// Building compiles one pattern per term; `highlight` can then be called
/// on any number of texts, from any number of threads.
#[derive(Debug, Clone)]
pub struct Highlighter {
    rules: Vec<TermRule>,
}

impl Highlighter {
    /// Build with the legacy-compatible default options.
    pub fn new(wordlist: &Wordlist) -> Self {
        Self::with_options(wordlist, HighlightOptions::default())
    }

    pub fn with_options(wordlist: &Wordlist, options: HighlightOptions) -> Self {
        let mut rules = Vec::with_capacity(wordlist.len());

        for entry in wordlist.sorted_entries(SortOrder::Descending) {
            match pattern::compile(&entry.word, options.whitespace) {
                Ok(pattern) => rules.push(TermRule {
                    pattern,
                    tooltip: markup::escape_tooltip(&entry.translation, options.quote_escaping),
                }),
                Err(e) => warn!("Skipping wordlist term '{}': {}", entry.word, e),
            }
        }

        debug!("Highlighter ready with {} term patterns", rules.len());
        Self { rules }
    }

    /// Number of usable term patterns.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Produce the annotated HTML for `text`.
    pub fn highlight(&self, text: &str) -> String {
        markup::join(&self.segments(text))
    }

    /// Segment sequence after every term has been applied.
    pub fn segments(&self, text: &str) -> Vec<Segment> {
        let mut segments = vec![Segment::Plain(text.to_string())];
        for rule in &self.rules {
            segments = apply_rule(segments, rule);
        }
        segments
    }

    /// Highlight both halves of a package description.
    pub fn highlight_description(&self, description: &Description) -> HighlightedDescription {
        HighlightedDescription {
            short: self.highlight(&description.short),
            long: self.highlight(&description.long),
        }
    }
}

/// Split every plain segment containing a match into text and spans.
fn apply_rule(segments: Vec<Segment>, rule: &TermRule) -> Vec<Segment> {
    let mut out = Vec::with_capacity(segments.len());

    for segment in segments {
        let text = match segment {
            Segment::Plain(text) if rule.pattern.is_match(&text) => text,
            other => {
                out.push(other);
                continue;
            }
        };

        let mut last = 0;
        for found in rule.pattern.find_iter(&text) {
            out.push(Segment::Plain(text[last..found.start()].to_string()));
            out.push(Segment::Markup(markup::tooltip_span(&rule.tooltip, found.as_str())));
            last = found.end();
        }
        out.push(Segment::Plain(text[last..].to_string()));
    }

    out
}

/// Highlight `text` with every term of `wordlist`, using default options.
pub fn highlight(wordlist: &Wordlist, text: &str) -> String {
    if wordlist.is_empty() || text.is_empty() {
        return text.to_string();
    }
    Highlighter::new(wordlist).highlight(text)
}

/// A Debian package description: synopsis line plus extended description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Description {
    pub short: String,
    pub long: String,
}

impl Description {
    /// First line is the short description, the remaining lines the long one.
    pub fn parse(text: &str) -> Self {
        match text.split_once('\n') {
            Some((short, long)) => Self {
                short: short.trim_end_matches('\r').to_string(),
                long: long.to_string(),
            },
            None => Self {
                short: text.to_string(),
                long: String::new(),
            },
        }
    }
}

/// Highlighted HTML for both halves of a description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightedDescription {
    pub short: String,
    pub long: String,
}
