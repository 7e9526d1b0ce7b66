use coinword::catalog::LetterCatalog;
use coinword::error::CoinWordError;
use coinword::glyphs::{fold_char, GlyphRule, GlyphTable, Normalizer};
use rstest::rstest;

fn alphabet() -> LetterCatalog {
    let pairs: Vec<(char, u32)> = ('A'..='Z').map(|c| (c, 1)).collect();
    LetterCatalog::from_pairs(&pairs).unwrap()
}

#[test]
fn test_plain_word_counts_each_letter() {
    let catalog = LetterCatalog::from_pairs(&[('A', 1), ('B', 2), ('R', 1)]).unwrap();
    let table = GlyphTable::default();
    let normalizer = Normalizer::new(&catalog, &table);

    let n = normalizer.normalize("BAR").unwrap();
    assert_eq!(n.counts.get(&catalog, 'A'), 1);
    assert_eq!(n.counts.get(&catalog, 'B'), 1);
    assert_eq!(n.counts.get(&catalog, 'R'), 1);
    assert_eq!(n.raw_len, 3);
    assert_eq!(n.surplus, 0);
    assert_eq!(n.ignored, 0);
}

#[test]
fn test_umlaut_expands_to_base_vowel_and_e() {
    let catalog =
        LetterCatalog::from_pairs(&[('A', 1), ('E', 1), ('R', 1), ('G', 2)]).unwrap();
    let table = GlyphTable::default();
    let normalizer = Normalizer::new(&catalog, &table);

    let n = normalizer.normalize("ÄRGER").unwrap();
    assert_eq!(n.counts.get(&catalog, 'A'), 1);
    assert_eq!(n.counts.get(&catalog, 'E'), 2);
    assert_eq!(n.counts.get(&catalog, 'R'), 2);
    assert_eq!(n.counts.get(&catalog, 'G'), 1);

    // 5 raw characters == 6 letters - 1 surplus + 0 ignored
    assert_eq!(n.raw_len, 5);
    assert_eq!(n.counts.total(), 6);
    assert_eq!(n.surplus, 1);
    assert!(n.is_balanced());
}

#[rstest]
#[case("straße", &[('S', 3), ('T', 1), ('R', 1), ('A', 1), ('E', 1)], 1)]
#[case("STRASSE", &[('S', 3), ('T', 1), ('R', 1), ('A', 1), ('E', 1)], 0)]
#[case("Öl", &[('O', 1), ('E', 1), ('L', 1)], 1)]
#[case("über", &[('U', 1), ('E', 2), ('B', 1), ('R', 1)], 1)]
#[case("café", &[('C', 1), ('A', 1), ('F', 1), ('E', 1)], 0)]
#[case("Façade", &[('F', 1), ('A', 2), ('C', 1), ('D', 1), ('E', 1)], 0)]
#[case("señor", &[('S', 1), ('E', 1), ('N', 1), ('O', 1), ('R', 1)], 0)]
#[case("Crème", &[('C', 1), ('R', 1), ('E', 2), ('M', 1)], 0)]
fn test_glyph_expansions(
    #[case] word: &str,
    #[case] expected: &[(char, u32)],
    #[case] surplus: usize,
) {
    let catalog = alphabet();
    let table = GlyphTable::default();
    let normalizer = Normalizer::new(&catalog, &table);

    let n = normalizer.normalize(word).unwrap();
    for &(letter, count) in expected {
        assert_eq!(
            n.counts.get(&catalog, letter),
            count,
            "count of {} in {}",
            letter,
            word
        );
    }
    let expected_total: u32 = expected.iter().map(|(_, c)| c).sum();
    assert_eq!(n.counts.total(), expected_total as u64);
    assert_eq!(n.surplus, surplus);
    assert!(n.is_balanced());
}

#[test]
fn test_apostrophes_are_ignored_but_accounted() {
    let catalog = alphabet();
    let table = GlyphTable::default();
    let normalizer = Normalizer::new(&catalog, &table);

    let n = normalizer.normalize("O'Neil’s").unwrap();
    assert_eq!(n.raw_len, 8);
    assert_eq!(n.ignored, 2);
    assert_eq!(n.counts.total(), 6);
    assert_eq!(n.letter_len(), 6);
    assert!(n.is_balanced());
}

#[test]
fn test_case_folding_is_transparent() {
    let catalog = alphabet();
    let table = GlyphTable::default();
    let normalizer = Normalizer::new(&catalog, &table);

    let lower = normalizer.normalize("ärger").unwrap();
    let upper = normalizer.normalize("ÄRGER").unwrap();
    assert_eq!(lower, upper);
}

#[test]
fn test_unknown_glyph_is_fatal() {
    let catalog = alphabet();
    let table = GlyphTable::default();
    let normalizer = Normalizer::new(&catalog, &table);

    let err = normalizer.normalize("AB-C").unwrap_err();
    match err {
        CoinWordError::UnhandledGlyphs { words } => {
            assert_eq!(words.len(), 1);
            assert_eq!(words[0].0, "AB-C");
            assert_eq!(words[0].1, vec!['-']);
        }
        other => panic!("Unexpected error: {}", other),
    }
}

#[test]
fn test_unhandled_word_is_named_in_message() {
    let catalog = alphabet();
    let table = GlyphTable::default();
    let normalizer = Normalizer::new(&catalog, &table);

    let msg = normalizer.normalize("Æsir").unwrap_err().to_string();
    assert!(msg.contains("Æsir"), "message was: {}", msg);
}

#[test]
fn test_rule_targeting_missing_letter_fails_only_when_used() {
    // No E in this catalog: Ä cannot be expanded.
    let catalog = LetterCatalog::from_pairs(&[('A', 1), ('R', 1), ('G', 1)]).unwrap();
    let table = GlyphTable::default();
    let normalizer = Normalizer::new(&catalog, &table);

    assert!(normalizer.normalize("RAG").is_ok());
    assert!(matches!(
        normalizer.normalize("RÄG"),
        Err(CoinWordError::UnhandledGlyphs { .. })
    ));
}

#[test]
fn test_letter_outside_catalog_is_fatal() {
    let catalog = LetterCatalog::from_pairs(&[('A', 1), ('B', 2), ('R', 1)]).unwrap();
    let table = GlyphTable::default();
    let normalizer = Normalizer::new(&catalog, &table);

    assert!(normalizer.normalize("BARN").is_err());
}

#[test]
fn test_normalize_is_deterministic() {
    let catalog = alphabet();
    let table = GlyphTable::default();
    let normalizer = Normalizer::new(&catalog, &table);

    let a = normalizer.normalize("Fußgängerübergänge").unwrap();
    let b = normalizer.normalize("Fußgängerübergänge").unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_custom_rules_extend_the_table() {
    let catalog = alphabet();
    let table = GlyphTable::default().with_rule('Æ', "AE").with_rule('-', "");
    let normalizer = Normalizer::new(&catalog, &table);

    let n = normalizer.normalize("Æ-X").unwrap();
    assert_eq!(n.counts.get(&catalog, 'A'), 1);
    assert_eq!(n.counts.get(&catalog, 'E'), 1);
    assert_eq!(n.counts.get(&catalog, 'X'), 1);
    assert_eq!(n.ignored, 1);
    assert_eq!(n.surplus, 1);
}

#[test]
fn test_json_overrides() {
    let mut table = GlyphTable::default();
    table.merge_json(r#"{"ø": "O", "Ä": "A"}"#).unwrap();

    assert_eq!(table.rule('Ø'), Some(&GlyphRule::Expand(vec!['O'])));
    // Overrides replace the defaults.
    assert_eq!(table.rule('Ä'), Some(&GlyphRule::Expand(vec!['A'])));
}

#[test]
fn test_json_override_key_must_be_single_char() {
    let mut table = GlyphTable::default();
    let res = table.merge_json(r#"{"ae": "AE"}"#);
    assert!(matches!(res, Err(CoinWordError::Config(_))));
}

#[test]
fn test_fold_char_keeps_sharp_s() {
    assert_eq!(fold_char('a'), 'A');
    assert_eq!(fold_char('ä'), 'Ä');
    assert_eq!(fold_char('ß'), 'ß');
    assert_eq!(fold_char('\''), '\'');
}

#[test]
fn test_length_policy_helpers() {
    let catalog = alphabet();
    let table = GlyphTable::default();
    let normalizer = Normalizer::new(&catalog, &table);

    assert!(normalizer.is_ignored('\''));
    assert!(!normalizer.is_ignored('a'));
    assert!(!normalizer.is_ignored('ä'));
}

#[test]
fn test_catalog_letter_takes_precedence_over_glyph_rule() {
    let catalog =
        LetterCatalog::from_pairs(&[('A', 1), ('E', 1), ('R', 1), ('Ä', 50)]).unwrap();
    let table = GlyphTable::default();
    let normalizer = Normalizer::new(&catalog, &table);

    let n = normalizer.normalize("är").unwrap();
    assert_eq!(n.counts.get(&catalog, 'Ä'), 1);
    assert_eq!(n.counts.get(&catalog, 'A'), 0);
    assert_eq!(n.counts.get(&catalog, 'E'), 0);
    assert_eq!(n.counts.get(&catalog, 'R'), 1);
    assert_eq!(n.surplus, 0);
    assert_eq!(n.counts.weighted_sum(&catalog), 51);
}
