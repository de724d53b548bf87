/*!
 * Tooltip markup and the segment sequence of a highlight pass.
 */

use super::QuoteEscaping;

/// One fragment of the text being highlighted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Original text not yet claimed by any term
    Plain(String),
    /// Produced tooltip span, opaque to later terms
    Markup(String),
}

impl Segment {
    pub fn as_str(&self) -> &str {
        match self {
            Segment::Plain(text) | Segment::Markup(text) => text,
        }
    }
}

/// Concatenate segments in order, skipping empty ones.
pub fn join(segments: &[Segment]) -> String {
    let mut html = String::with_capacity(segments.iter().map(|s| s.as_str().len()).sum());
    for segment in segments.iter().filter(|s| !s.as_str().is_empty()) {
        html.push_str(segment.as_str());
    }
    html
}

/// Prepare a translation for the `tooltip-text` attribute.
pub fn escape_tooltip(translation: &str, escaping: QuoteEscaping) -> String {
    match escaping {
        // only the first quote, as the page script always did
        QuoteEscaping::LegacyFirstQuote => translation.replacen('"', "\\\"", 1),
        QuoteEscaping::HtmlEntities => {
            let mut escaped = String::with_capacity(translation.len());
            for ch in translation.chars() {
                match ch {
                    '&' => escaped.push_str("&amp;"),
                    '<' => escaped.push_str("&lt;"),
                    '>' => escaped.push_str("&gt;"),
                    '"' => escaped.push_str("&quot;"),
                    _ => escaped.push(ch),
                }
            }
            escaped
        }
    }
}

/// Wrap a matched term. `tooltip` must already be escaped.
pub fn tooltip_span(tooltip: &str, matched: &str) -> String {
    format!(
        "<span class=\"box-wordlist\"><span class=\"tooltip-wordlist\" tooltip-text=\"{}\"></span><span class=\"wordlist\">{}</span></span>",
        tooltip, matched
    )
}
