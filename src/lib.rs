/*!
 * # ddtss-wordlist - Wordlist tooling for the Debian Description Translation Server
 *
 * A Rust library for working with DDTSS wordlists: the per-language
 * glossaries translators consult while translating package descriptions.
 *
 * ## Features
 *
 * - Highlight wordlist terms in untranslated descriptions as tooltip HTML
 * - Retrieve a language's wordlist from the DDTSS JSON endpoint
 * - Add, edit and delete wordlist entries on the server
 * - Import tab-separated words files
 * - Export a wordlist as RFC 4180 CSV
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `highlight`: term highlighting:
 *   - `highlight::pattern`: term regex construction
 *   - `highlight::markup`: tooltip spans and the segment sequence
 * - `wordlist`: wordlist model, length sorting, import and CSV export
 * - `remote`: DDTSS wordlist endpoints:
 *   - `remote::http`: reqwest client
 *   - `remote::mock`: in-memory server for tests
 * - `app_config`: Configuration management
 * - `app_controller`: Main application controller
 * - `file_utils`: File system operations
 * - `language_utils`: DDTSS language code utilities
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the GNU General Public License, version 2 or later
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod file_utils;
pub mod highlight;
pub mod language_utils;
pub mod remote;
pub mod wordlist;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::Controller;
pub use errors::{AppError, ClientError, WordlistError};
pub use highlight::{highlight, Description, HighlightOptions, Highlighter};
pub use remote::{ManageOutcome, WordlistAction, WordlistSource};
pub use wordlist::{SortOrder, Wordlist, WordlistEntry};
