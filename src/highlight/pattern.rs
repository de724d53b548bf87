/*!
 * Term pattern construction.
 *
 * A term is matched literally and case-insensitively, except that the
 * whitespace between its words may be spread over a line break when a
 * description is wrapped.
 */

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

use super::WhitespaceMatching;

/// Matches one or more of: space, tab, newline, CR+LF.
pub const FLEXIBLE_WHITESPACE: &str = r"(?: |\t|\n|\r\n)+";

static TAB_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\t+").expect("valid tab pattern"));
static SPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r" +").expect("valid space pattern"));

/// Regex source for `term`.
///
/// Metacharacters are escaped, tab runs and then space runs collapse to a
/// single space, and the space(s) selected by `whitespace` become
/// `FLEXIBLE_WHITESPACE`.
pub fn pattern_source(term: &str, whitespace: WhitespaceMatching) -> String {
    let escaped = regex::escape(term);
    let collapsed = TAB_RUN.replace_all(&escaped, " ");
    let collapsed = SPACE_RUN.replace_all(&collapsed, " ");

    match whitespace {
        WhitespaceMatching::FirstBoundary => collapsed.replacen(' ', FLEXIBLE_WHITESPACE, 1),
        WhitespaceMatching::AllBoundaries => collapsed.replace(' ', FLEXIBLE_WHITESPACE),
    }
}

/// Compile the case-insensitive, multi-line matcher for `term`.
pub fn compile(term: &str, whitespace: WhitespaceMatching) -> Result<Regex, regex::Error> {
    RegexBuilder::new(&pattern_source(term, whitespace))
        .case_insensitive(true)
        .multi_line(true)
        .build()
}
