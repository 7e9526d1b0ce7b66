use coinword::config::SourceParams;
use coinword::corpus::Corpus;
use coinword::error::CoinWordError;
use std::fs::File;
use std::io::{Cursor, Write};
use std::sync::Arc;

#[test]
fn test_corpus_deduplicates_raw_words() {
    let corpus = Corpus::from_pairs([
        ("ngerman", "Bar"),
        ("ngerman", "Rab"),
        ("swiss", "Bar"),
        ("swiss", "BAR"),
    ]);

    let words: Vec<(&str, &str)> = corpus
        .iter()
        .map(|c| (&*c.tag, &*c.word))
        .collect();
    assert_eq!(
        words,
        vec![("ngerman", "Bar"), ("ngerman", "Rab"), ("swiss", "BAR")]
    );
}

#[test]
fn test_corpus_from_reader() {
    let corpus = Corpus::from_reader("en", Cursor::new("one\ntwo\n\none\n")).unwrap();
    assert_eq!(corpus.len(), 2);
    assert!(corpus.iter().all(|c| &*c.tag == "en"));
}

#[test]
fn test_corpus_load_reads_every_language() {
    let dir = tempfile::tempdir().unwrap();

    let mut german = File::create(dir.path().join("ngerman")).unwrap();
    writeln!(german, "Ärger\nBar").unwrap();
    let mut english = File::create(dir.path().join("british-english")).unwrap();
    writeln!(english, "bar\nBar\ncolour").unwrap();

    let sources = SourceParams {
        dict_dir: dir.path().to_path_buf(),
        languages: "ngerman, british-english".to_string(),
    };
    let corpus = Corpus::load(&sources).unwrap();

    let words: Vec<&str> = corpus.iter().map(|c| &*c.word).collect();
    assert_eq!(words, vec!["Ärger", "Bar", "bar", "colour"]);
    assert_eq!(&*corpus.iter().nth(2).unwrap().tag, "british-english");
}

#[test]
fn test_corpus_missing_list_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let sources = SourceParams {
        dict_dir: dir.path().to_path_buf(),
        languages: "klingon".to_string(),
    };
    assert!(matches!(
        Corpus::load(&sources),
        Err(CoinWordError::Config(_))
    ));
}

#[test]
fn test_corpus_requires_a_language() {
    let sources = SourceParams {
        dict_dir: std::env::temp_dir(),
        languages: " , ".to_string(),
    };
    assert!(Corpus::load(&sources).is_err());
}

#[test]
fn test_corpus_shares_word_storage() {
    let mut corpus = Corpus::new();
    assert!(corpus.push(Arc::from("de"), "Bar"));
    assert!(!corpus.push(Arc::from("en"), "Bar"));

    // The dedup set holds the only other reference to the word.
    let candidate = corpus.iter().next().unwrap();
    assert_eq!(Arc::strong_count(&candidate.word), 2);
    assert_eq!(corpus.len(), 1);
}
