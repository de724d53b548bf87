/*!
 * Common test utilities for the ddtss-wordlist test suite
 */

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use ddtss_wordlist::remote::MockWordlistSource;
use ddtss_wordlist::{Config, Controller, Wordlist};

/// Route library logs through env_logger; safe to call from every test
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Small Italian wordlist used across tests
pub fn sample_wordlist() -> Wordlist {
    Wordlist::from_json(
        r#"{
            "library": "libreria",
            "shared library": "libreria condivisa",
            "daemon": "demone",
            "web server": "server web"
        }"#,
    )
    .expect("sample wordlist is valid")
}

/// Sample package description: synopsis plus wrapped extended description
pub fn sample_description() -> &'static str {
    "shared library for the foo daemon\n This shared\n library is used by the daemon and by the web\n server module.\n"
}

/// Controller for `it` backed by an in-memory server
pub fn mock_controller(wordlist: Wordlist) -> (Controller, MockWordlistSource) {
    let source = MockWordlistSource::with_language("it", wordlist);
    let controller = Controller::with_source(Config::default(), Box::new(source.clone()));
    (controller, source)
}
