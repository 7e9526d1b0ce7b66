use crate::catalog::{LetterCatalog, LetterCounts};
use crate::error::{CoinWordError, CwResult};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;
use tracing::debug;

/// What a single (case-folded) glyph contributes to a word's letter counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GlyphRule {
    /// Counts as the listed canonical letters, e.g. `Ä` -> `['A', 'E']`.
    Expand(Vec<char>),
    /// Contributes nothing, but still accounts for one raw character.
    Ignore,
}

impl GlyphRule {
    fn from_letters(letters: &str) -> Self {
        if letters.is_empty() {
            GlyphRule::Ignore
        } else {
            GlyphRule::Expand(letters.chars().map(fold_char).collect())
        }
    }
}

/// Upper-cases a character when its upper-case form is a single character.
/// `ß` stays `ß` so the glyph table decides what it is worth.
pub fn fold_char(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

const DEFAULT_RULES: &[(char, &str)] = &[
    // Umlauts spell out as base vowel + E.
    ('Ä', "AE"),
    ('Ö', "OE"),
    ('Ü', "UE"),
    // Sharp s, both the lower form (never folded) and the capital.
    ('ß', "SS"),
    ('ẞ', "SS"),
    ('À', "A"),
    ('Á', "A"),
    ('Â', "A"),
    ('Ã', "A"),
    ('Å', "A"),
    ('Ç', "C"),
    ('È', "E"),
    ('É', "E"),
    ('Ê', "E"),
    ('Ë', "E"),
    ('Ì', "I"),
    ('Í', "I"),
    ('Î', "I"),
    ('Ï', "I"),
    ('Ñ', "N"),
    ('Ò', "O"),
    ('Ó', "O"),
    ('Ô', "O"),
    ('Õ', "O"),
    ('Ù', "U"),
    ('Ú', "U"),
    ('Û', "U"),
    ('Ÿ', "Y"),
    ('\'', ""),
    ('\u{2019}', ""),
];

/// Data-driven mapping from special glyphs to canonical letters. Glyphs not
/// listed here count as themselves if the catalog knows them.
#[derive(Debug, Clone)]
pub struct GlyphTable {
    rules: HashMap<char, GlyphRule>,
}

impl Default for GlyphTable {
    fn default() -> Self {
        let mut table = Self::empty();
        for &(glyph, letters) in DEFAULT_RULES {
            table.set(glyph, GlyphRule::from_letters(letters));
        }
        table
    }
}

impl GlyphTable {
    pub fn empty() -> Self {
        Self {
            rules: HashMap::new(),
        }
    }

    /// Adds or replaces the rule for a glyph.
    pub fn set(&mut self, glyph: char, rule: GlyphRule) {
        self.rules.insert(fold_char(glyph), rule);
    }

    pub fn with_rule(mut self, glyph: char, letters: &str) -> Self {
        self.set(glyph, GlyphRule::from_letters(letters));
        self
    }

    pub fn rule(&self, glyph: char) -> Option<&GlyphRule> {
        self.rules.get(&glyph)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Applies overrides from a JSON object such as `{"Æ": "AE", "-": ""}`.
    /// An empty string marks the glyph as ignored.
    pub fn merge_json(&mut self, json: &str) -> CwResult<()> {
        let overrides: BTreeMap<String, String> = serde_json::from_str(json)?;
        for (key, letters) in overrides {
            let mut chars = key.chars();
            let glyph = match (chars.next(), chars.next()) {
                (Some(g), None) => g,
                _ => {
                    return Err(CoinWordError::Config(format!(
                        "Glyph override key '{}' must be a single character",
                        key
                    )))
                }
            };
            self.set(glyph, GlyphRule::from_letters(&letters));
        }
        Ok(())
    }

    pub fn load_overrides<P: AsRef<Path>>(&mut self, path: P) -> CwResult<()> {
        let content = fs::read_to_string(path)?;
        self.merge_json(&content)
    }
}

/// Result of normalizing one raw word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    pub counts: LetterCounts,
    /// Characters in the raw word.
    pub raw_len: usize,
    /// Characters that were deliberately ignored (apostrophes).
    pub ignored: usize,
    /// Extra letters produced by multi-letter expansions (`Ä` adds one).
    pub surplus: usize,
    /// Characters nobody knew what to do with.
    pub unhandled: Vec<char>,
}

impl Normalized {
    /// `raw_len == Σcounts − surplus + ignored`. Any unhandled glyph breaks it.
    pub fn is_balanced(&self) -> bool {
        let letters = self.counts.total() as i128;
        letters - self.surplus as i128 + self.ignored as i128 == self.raw_len as i128
    }

    /// Raw length minus the ignored glyphs.
    pub fn letter_len(&self) -> usize {
        self.raw_len - self.ignored
    }
}

/// Maps raw words to letter counts over a catalog's letter domain.
///
/// Rule targets are resolved to catalog ordinals once. A rule naming a letter
/// the catalog lacks stays dormant; a word that uses its glyph fails the
/// accounting check like any other unhandled glyph. Rules for glyphs the
/// catalog itself lists are skipped.
#[derive(Debug, Clone)]
pub struct Normalizer<'a> {
    catalog: &'a LetterCatalog,
    resolved: HashMap<char, Resolved>,
}

#[derive(Debug, Clone)]
enum Resolved {
    Letters(Vec<usize>),
    Ignore,
    Missing,
}

impl<'a> Normalizer<'a> {
    pub fn new(catalog: &'a LetterCatalog, table: &GlyphTable) -> Self {
        let mut resolved = HashMap::with_capacity(table.len());

        for (&glyph, rule) in &table.rules {
            // A glyph that is a coin letter of its own counts as itself.
            if catalog.contains(glyph) {
                debug!("Glyph rule for '{}' shadowed by the catalog letter", glyph);
                continue;
            }
            let entry = match rule {
                GlyphRule::Ignore => Resolved::Ignore,
                GlyphRule::Expand(letters) if letters.is_empty() => Resolved::Ignore,
                GlyphRule::Expand(letters) => {
                    match letters
                        .iter()
                        .map(|&letter| catalog.ordinal(letter))
                        .collect::<Option<Vec<_>>>()
                    {
                        Some(ordinals) => Resolved::Letters(ordinals),
                        None => {
                            debug!("Glyph rule for '{}' names letters outside the catalog", glyph);
                            Resolved::Missing
                        }
                    }
                }
            };
            resolved.insert(glyph, entry);
        }

        debug!(
            "Normalizer ready: {} letters, {} glyph rules",
            catalog.len(),
            resolved.len()
        );
        Self { catalog, resolved }
    }

    pub fn catalog(&self) -> &LetterCatalog {
        self.catalog
    }

    pub fn is_ignored(&self, c: char) -> bool {
        matches!(self.resolved.get(&fold_char(c)), Some(Resolved::Ignore))
    }

    /// Counts the letters of a word without judging the result.
    pub fn analyze(&self, word: &str) -> Normalized {
        let mut counts = self.catalog.empty_counts();
        let mut raw_len = 0;
        let mut ignored = 0;
        let mut surplus = 0;
        let mut unhandled = Vec::new();

        for c in word.chars().map(fold_char) {
            raw_len += 1;
            match self.resolved.get(&c) {
                Some(Resolved::Ignore) => ignored += 1,
                Some(Resolved::Missing) => unhandled.push(c),
                Some(Resolved::Letters(ordinals)) => {
                    for &ordinal in ordinals {
                        counts.add(ordinal, 1);
                    }
                    surplus += ordinals.len() - 1;
                }
                None => match self.catalog.ordinal(c) {
                    Some(ordinal) => counts.add(ordinal, 1),
                    None => unhandled.push(c),
                },
            }
        }

        Normalized {
            counts,
            raw_len,
            ignored,
            surplus,
            unhandled,
        }
    }

    /// Normalizes a word and enforces the accounting invariant.
    pub fn normalize(&self, word: &str) -> CwResult<Normalized> {
        let normalized = self.analyze(word);
        if !normalized.is_balanced() {
            return Err(CoinWordError::UnhandledGlyphs {
                words: vec![(word.to_string(), normalized.unhandled)],
            });
        }
        Ok(normalized)
    }
}
