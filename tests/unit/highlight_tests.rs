/*!
 * Tests for the wordlist highlighter through the public API
 */

use ddtss_wordlist::highlight::markup::tooltip_span;
use ddtss_wordlist::{highlight, Highlighter, Wordlist};

fn wordlist(json: &str) -> Wordlist {
    Wordlist::from_json(json).expect("valid wordlist")
}

#[test]
fn test_highlight_emptyWordlist_shouldReturnTextForAnyInput() {
    let empty = Wordlist::new();
    for text in ["", "plain", "multi\nline\r\ntext", "<p>markup & stuff</p>", "ümlaut ñ 漢字"] {
        assert_eq!(highlight(&empty, text), text);
    }
}

#[test]
fn test_highlight_emptyText_shouldReturnEmptyForAnyWordlist() {
    for json in [r#"{"a": "b"}"#, r#"{"lorem ipsum": "T2", "ipsum": "T1"}"#, r#"{"c++": "cpp"}"#] {
        assert_eq!(highlight(&wordlist(json), ""), "");
    }
}

#[test]
fn test_highlight_loremIpsum_shouldWrapLongerPhraseOnly() {
    let html = highlight(&wordlist(r#"{"ipsum": "T1", "lorem ipsum": "T2"}"#), "Lorem ipsum dolor");

    assert!(html.starts_with(&tooltip_span("T2", "Lorem ipsum")));
    assert!(html.ends_with(" dolor"));
    assert_eq!(html.matches("box-wordlist").count(), 1);
    assert!(!html.contains("tooltip-text=\"T1\""));
}

#[test]
fn test_highlight_cat_shouldPreserveSurroundingText() {
    let html = highlight(&wordlist(r#"{"cat": "gato"}"#), "The cat sat");

    assert_eq!(html, format!("The {} sat", tooltip_span("gato", "cat")));
    assert_eq!(html.matches("tooltip-text=\"gato\"").count(), 1);
}

#[test]
fn test_highlight_cPlusPlus_shouldMatchLiteralSubstring() {
    let html = highlight(&wordlist(r#"{"c++": "c plus plus"}"#), "I love c++");
    assert_eq!(html, format!("I love {}", tooltip_span("c plus plus", "c++")));
}

#[test]
fn test_highlight_quotedTranslation_shouldNeutralizeFirstQuoteOnly() {
    let html = highlight(&wordlist(r#"{"x": "say \"hi\""}"#), "x");
    assert!(html.contains(r#"tooltip-text="say \"hi"""#));
}

#[test]
fn test_highlighter_reuse_shouldGiveSameResultAsOneShot() {
    let list = wordlist(r#"{"library": "libreria", "shared library": "libreria condivisa"}"#);
    let highlighter = Highlighter::new(&list);

    for text in ["a shared library", "library\nand shared\nlibrary", "nothing here"] {
        assert_eq!(highlighter.highlight(text), highlight(&list, text));
    }
}

#[test]
fn test_highlighter_shouldBeUsableFromSeveralThreads() {
    let list = wordlist(r#"{"daemon": "demone"}"#);
    let highlighter = std::sync::Arc::new(Highlighter::new(&list));

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let highlighter = highlighter.clone();
            std::thread::spawn(move || highlighter.highlight(&format!("daemon {}", i)))
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let html = handle.join().expect("thread finished");
        assert_eq!(html, format!("{} {}", tooltip_span("demone", "daemon"), i));
    }
}

#[test]
fn test_highlight_unicodeCaseInsensitive_shouldMatch() {
    let html = highlight(&wordlist(r#"{"über": "over"}"#), "ÜBER alles");
    assert_eq!(html, format!("{} alles", tooltip_span("over", "ÜBER")));
}
