/*!
 * Tests for application configuration functionality
 */

use anyhow::Result;
use ddtss_wordlist::app_config::{Config, LogLevel};
use crate::common;

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    assert_eq!(config.language, "it");
    assert_eq!(config.server.base_url, "https://ddtp.debian.org/ddtss/index.cgi");
    assert_eq!(config.server.timeout_secs, 400);
    assert_eq!(config.server.timeout().as_millis(), 400_000);
    assert_eq!(config.log_level, LogLevel::Info);
}

/// Test configuration validation
#[test]
fn test_config_validation_withVariousConfigs_shouldValidateCorrectly() {
    let mut config = Config::default();
    assert!(config.validate().is_ok());

    // Region variants are accepted
    config.language = "pt_BR".to_string();
    assert!(config.validate().is_ok());

    // Invalid language
    config.language = "english".to_string();
    assert!(config.validate().is_err());
    config.language = "it".to_string();

    // Invalid base URL
    config.server.base_url = "not a url".to_string();
    assert!(config.validate().is_err());
    config.server.base_url = "http://localhost:8000/ddtss".to_string();

    // Zero timeout
    config.server.timeout_secs = 0;
    assert!(config.validate().is_err());
}

/// Missing config file is created with defaults
#[test]
fn test_loadOrCreate_withMissingFile_shouldWriteDefault() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("conf.json");

    let config = Config::load_or_create(&path)?;

    assert_eq!(config, Config::default());
    assert!(path.exists());
    Ok(())
}

/// Existing config file is read back
#[test]
fn test_loadOrCreate_withExistingFile_shouldLoadIt() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(
        temp_dir.path(),
        "conf.json",
        r#"{"language": "de", "server": {"base_url": "http://localhost:8000/ddtss", "session_cookie": "sessionid=abc"}, "log_level": "debug"}"#,
    )?;

    let config = Config::load_or_create(&path)?;

    assert_eq!(config.language, "de");
    assert_eq!(config.server.base_url, "http://localhost:8000/ddtss");
    assert_eq!(config.server.timeout_secs, 400);
    assert_eq!(config.server.session_cookie.as_deref(), Some("sessionid=abc"));
    assert_eq!(config.log_level, LogLevel::Debug);
    Ok(())
}

/// Malformed config file is an error, not a silent default
#[test]
fn test_loadOrCreate_withMalformedFile_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "conf.json", "{ not json")?;

    assert!(Config::load_or_create(&path).is_err());
    Ok(())
}

/// Saved config round-trips through the file
#[test]
fn test_save_thenLoad_shouldPreserveValues() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("conf.json");

    let mut config = Config::default();
    config.language = "zh_CN".to_string();
    config.log_level = LogLevel::Warn;
    config.save(&path)?;

    assert_eq!(Config::load_or_create(&path)?, config);
    Ok(())
}
