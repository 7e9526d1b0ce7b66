use crate::error::{CoinWordError, CwResult};
use crate::glyphs::fold_char;
use crate::loader::{CatalogRecord, WalletRecord};
use std::collections::HashMap;
use tracing::debug;

/// Immutable mapping from canonical letter to coin value.
///
/// Letters are stored in catalog order; every per-letter vector in the crate
/// (inventory, word counts) is indexed by the position of the letter here.
#[derive(Debug, Clone)]
pub struct LetterCatalog {
    letters: Vec<char>,
    values: Vec<u32>,
    index: HashMap<char, usize>,
}

impl LetterCatalog {
    pub fn from_records<I>(records: I) -> CwResult<Self>
    where
        I: IntoIterator<Item = CatalogRecord>,
    {
        let mut letters = Vec::new();
        let mut values = Vec::new();
        let mut index = HashMap::new();

        for rec in records {
            let letter = fold_char(rec.letter);
            if rec.value == 0 {
                return Err(CoinWordError::NonPositiveValue(letter));
            }
            if index.insert(letter, letters.len()).is_some() {
                return Err(CoinWordError::DuplicateLetter(letter));
            }
            letters.push(letter);
            values.push(rec.value);
        }

        debug!("Catalog holds {} letters", letters.len());
        Ok(Self {
            letters,
            values,
            index,
        })
    }

    /// Shorthand for tests and benches: `[('A', 1), ('B', 2)]`.
    pub fn from_pairs(pairs: &[(char, u32)]) -> CwResult<Self> {
        Self::from_records(pairs.iter().map(|&(letter, value)| CatalogRecord {
            letter,
            name: String::new(),
            value,
        }))
    }

    #[inline]
    pub fn ordinal(&self, letter: char) -> Option<usize> {
        self.index.get(&letter).copied()
    }

    pub fn contains(&self, letter: char) -> bool {
        self.index.contains_key(&letter)
    }

    pub fn value_of(&self, letter: char) -> Option<u32> {
        self.ordinal(letter).map(|i| self.values[i])
    }

    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    pub fn values(&self) -> &[u32] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn empty_counts(&self) -> LetterCounts {
        LetterCounts(vec![0; self.letters.len()])
    }
}

/// Occurrence count per canonical letter, aligned with a [`LetterCatalog`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LetterCounts(Vec<u32>);

impl LetterCounts {
    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    #[inline]
    pub fn add(&mut self, ordinal: usize, n: u32) {
        self.0[ordinal] += n;
    }

    /// Like [`add`](Self::add), but leaves the entry untouched and returns
    /// `None` if the sum does not fit a `u32`.
    pub fn checked_add(&mut self, ordinal: usize, n: u32) -> Option<u32> {
        let sum = self.0[ordinal].checked_add(n)?;
        self.0[ordinal] = sum;
        Some(sum)
    }

    pub fn get(&self, catalog: &LetterCatalog, letter: char) -> u32 {
        catalog.ordinal(letter).map_or(0, |i| self.0[i])
    }

    pub fn total(&self) -> u64 {
        self.0.iter().map(|&c| c as u64).sum()
    }

    /// Componentwise `self <= other`.
    pub fn fits_within(&self, other: &LetterCounts) -> bool {
        self.0.iter().zip(other.0.iter()).all(|(need, have)| need <= have)
    }

    /// Σ count × value. Accumulated in u64 so a long word over a catalog of
    /// large values cannot silently wrap.
    pub fn weighted_sum(&self, catalog: &LetterCatalog) -> u64 {
        self.0
            .iter()
            .zip(catalog.values())
            .map(|(&count, &value)| count as u64 * value as u64)
            .sum()
    }

    /// Non-zero entries as `(letter, count)`, in catalog order.
    pub fn entries<'a>(&'a self, catalog: &'a LetterCatalog) -> impl Iterator<Item = (char, u32)> + 'a {
        catalog
            .letters()
            .iter()
            .zip(self.0.iter())
            .filter(|&(_, &count)| count > 0)
            .map(|(&letter, &count)| (letter, count))
    }
}

/// Number of coins available per canonical letter.
#[derive(Debug, Clone)]
pub struct Inventory {
    counts: LetterCounts,
}

fn add_coins(counts: &mut LetterCounts, ordinal: usize, letter: char, n: u32) -> CwResult<()> {
    counts.checked_add(ordinal, n).map(|_| ()).ok_or_else(|| {
        CoinWordError::Validation(format!(
            "Wallet holds more than {} coins for letter '{}'",
            u32::MAX,
            letter
        ))
    })
}

impl Inventory {
    /// Builds the inventory and cross-checks every wallet record against the
    /// catalog. A mismatch between the two sources is fatal.
    pub fn from_records<I>(catalog: &LetterCatalog, records: I) -> CwResult<Self>
    where
        I: IntoIterator<Item = WalletRecord>,
    {
        let mut counts = catalog.empty_counts();

        for rec in records {
            let letter = fold_char(rec.letter);
            let ordinal = catalog
                .ordinal(letter)
                .ok_or_else(|| CoinWordError::UnknownLetter {
                    letter,
                    context: format!("wallet entry '{}'", rec.name),
                })?;

            if rec.count == 0 {
                return Err(CoinWordError::Validation(format!(
                    "Wallet entry '{}' ({}) has a coin count of zero",
                    rec.name, letter
                )));
            }

            let catalog_value = catalog.values()[ordinal];
            if rec.total_value != rec.count as u64 * catalog_value as u64 {
                return Err(CoinWordError::ValueMismatch {
                    letter,
                    catalog_value,
                    declared_total: rec.total_value,
                    count: rec.count,
                });
            }

            add_coins(&mut counts, ordinal, letter, rec.count)?;
        }

        Ok(Self { counts })
    }

    /// Shorthand for tests and benches; no cross-check is possible without
    /// declared values, so this trusts the catalog.
    pub fn from_pairs(catalog: &LetterCatalog, pairs: &[(char, u32)]) -> CwResult<Self> {
        let mut counts = catalog.empty_counts();
        for &(letter, count) in pairs {
            let letter = fold_char(letter);
            let ordinal = catalog
                .ordinal(letter)
                .ok_or_else(|| CoinWordError::UnknownLetter {
                    letter,
                    context: "inventory".to_string(),
                })?;
            add_coins(&mut counts, ordinal, letter, count)?;
        }
        Ok(Self { counts })
    }

    pub fn counts(&self) -> &LetterCounts {
        &self.counts
    }

    pub fn count_of(&self, catalog: &LetterCatalog, letter: char) -> u32 {
        self.counts.get(catalog, letter)
    }

    pub fn coin_count(&self) -> u64 {
        self.counts.total()
    }

    pub fn total_value(&self, catalog: &LetterCatalog) -> u64 {
        self.counts.weighted_sum(catalog)
    }

    /// Fatal pre-check run before any word is scanned.
    pub fn ensure_covers(&self, catalog: &LetterCatalog, target: u64) -> CwResult<u64> {
        let available = self.total_value(catalog);
        if available < target {
            return Err(CoinWordError::InsufficientFunds { available, target });
        }
        Ok(available)
    }
}
