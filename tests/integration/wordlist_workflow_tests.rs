/*!
 * Import, export and highlighting on real files
 */

use anyhow::Result;
use chrono::NaiveDate;
use ddtss_wordlist::file_utils::FileManager;
use ddtss_wordlist::highlight::markup::tooltip_span;
use ddtss_wordlist::Wordlist;
use crate::common;

#[tokio::test]
async fn test_loadWordlist_fromLocalFile_shouldNotContactServer() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "it.json", r#"{"kernel": "nucleo"}"#)?;
    let (controller, source) = common::mock_controller(common::sample_wordlist());

    let wordlist = controller.load_wordlist(Some(path.as_path())).await?;

    assert_eq!(wordlist.get("kernel"), Some("nucleo"));
    assert_eq!(source.request_count(), 0);
    Ok(())
}

#[tokio::test]
async fn test_loadWordlist_fromInvalidFile_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "it.json", r#"{"kernel": ["nucleo"]}"#)?;
    let (controller, _source) = common::mock_controller(Wordlist::new());

    let err = controller.load_wordlist(Some(path.as_path())).await.unwrap_err();
    assert!(format!("{:#}", err).contains("non-string translation"));
    Ok(())
}

#[test]
fn test_importWords_thenHighlight_shouldUseImportedTerms() -> Result<()> {
    common::init_logging();
    let temp_dir = common::create_temp_dir()?;
    let words = common::create_test_file(
        temp_dir.path(),
        "words.tsv",
        "Package\tpacchetto\n\nPackage\tpacco\nupstream\tsviluppatore originale\n",
    )?;
    let (controller, _source) = common::mock_controller(Wordlist::new());

    let report = controller.import_words(&words)?;

    assert_eq!(report.wordlist.len(), 2);
    assert_eq!(report.skipped_duplicates, vec!["package".to_string()]);

    let html = controller.highlight_text(&report.wordlist, "This Package tracks upstream.");
    assert_eq!(
        html,
        format!(
            "This {} tracks {}.",
            tooltip_span("pacchetto", "Package"),
            tooltip_span("sviluppatore originale", "upstream")
        )
    );
    Ok(())
}

#[test]
fn test_importWords_withMalformedLine_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let words = common::create_test_file(temp_dir.path(), "words.tsv", "good\tbuono\nbad line\n")?;
    let (controller, _source) = common::mock_controller(Wordlist::new());

    let err = controller.import_words(&words).unwrap_err();
    assert!(format!("{:#}", err).contains("line 2"));
    Ok(())
}

#[test]
fn test_exportCsv_shouldWriteDatedFileInOutputDir() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let (controller, _source) = common::mock_controller(Wordlist::new());
    let wordlist = Wordlist::from_json(r#"{"daemon": "demone \"servizio\"", "apt": "apt"}"#)?;
    let date = NaiveDate::from_ymd_opt(2014, 6, 21).unwrap();

    let path = controller.export_csv(&wordlist, &temp_dir.path().join("exports"), date)?;

    assert_eq!(path.file_name().unwrap(), "wordlist-it_20140621.csv");
    assert_eq!(
        FileManager::read_to_string(&path)?,
        "\"Word\",\"Translation\"\r\n\"apt\",\"apt\"\r\n\"daemon\",\"demone \"\"servizio\"\"\"\r\n"
    );
    Ok(())
}
