use anyhow::{anyhow, Result};
use isolang::Language;

/// Language utilities for DDTSS language codes
///
/// DDTSS names its teams with an ISO 639 code, optionally followed by an
/// underscore and an uppercase region: `it`, `de`, `pt_BR`, `zh_CN`.
/// Split a DDTSS code into its language and optional region parts
pub fn split_ddtss_language(code: &str) -> (&str, Option<&str>) {
    match code.split_once('_') {
        Some((language, region)) => (language, Some(region)),
        None => (code, None),
    }
}

/// Validate a DDTSS language code
pub fn validate_ddtss_language(code: &str) -> Result<()> {
    let (language, region) = split_ddtss_language(code);

    let known = match language.len() {
        2 => Language::from_639_1(language).is_some(),
        3 => Language::from_639_3(language).is_some(),
        _ => false,
    };
    if !known || language.chars().any(|c| !c.is_ascii_lowercase()) {
        return Err(anyhow!("Invalid language code: {}", code));
    }

    if let Some(region) = region {
        if region.len() != 2 || !region.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(anyhow!("Invalid region in language code: {}", code));
        }
    }

    Ok(())
}

/// Get the English language name for a DDTSS code
pub fn get_language_name(code: &str) -> Result<String> {
    validate_ddtss_language(code)?;
    let (language, region) = split_ddtss_language(code);

    let lang = match language.len() {
        2 => Language::from_639_1(language),
        _ => Language::from_639_3(language),
    }
    .ok_or_else(|| anyhow!("Failed to get language from code: {}", code))?;

    Ok(match region {
        Some(region) => format!("{} ({})", lang.to_name(), region),
        None => lang.to_name().to_string(),
    })
}
