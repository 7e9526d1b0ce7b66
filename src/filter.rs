use crate::catalog::{Inventory, LetterCounts};
use crate::config::{FilterParams, LengthPolicy};
use crate::corpus::{Candidate, Corpus};
use crate::error::CwResult;
use crate::glyphs::Normalizer;
use crate::progress::ProgressSink;
use std::sync::Arc;
use tracing::{debug, info};

/// Inclusive range a word's value must fall into: `[min, max]`, or
/// `[min, ∞)` when no upper bound is configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueBand {
    pub min: u64,
    pub max: Option<u64>,
}

impl ValueBand {
    pub fn new(target: u64, tolerance: Option<u64>) -> Self {
        Self {
            min: target,
            max: tolerance.map(|t| target.saturating_add(t)),
        }
    }

    pub fn from_params(params: &FilterParams) -> Self {
        Self::new(params.value, params.tolerance)
    }

    #[inline]
    pub fn contains(&self, value: u64) -> bool {
        value >= self.min && self.max.map_or(true, |max| value <= max)
    }
}

/// A word that survived every filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredWord {
    pub word: String,
    pub tag: Arc<str>,
    pub counts: LetterCounts,
    pub value: u64,
}

/// Why a candidate was turned away. Rejections are normal outcomes, not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    TooShort,
    Unavailable,
    OutOfBand,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScanStats {
    pub scanned: usize,
    pub too_short: usize,
    pub unavailable: usize,
    pub out_of_band: usize,
    pub admitted: usize,
}

impl ScanStats {
    fn record(&mut self, outcome: &Result<ScoredWord, Rejection>) {
        self.scanned += 1;
        match outcome {
            Ok(_) => self.admitted += 1,
            Err(Rejection::TooShort) => self.too_short += 1,
            Err(Rejection::Unavailable) => self.unavailable += 1,
            Err(Rejection::OutOfBand) => self.out_of_band += 1,
        }
    }
}

/// Feasibility and value filter over a shared, read-only catalog and inventory.
pub struct WordFilter<'a> {
    normalizer: Normalizer<'a>,
    inventory: &'a Inventory,
    band: ValueBand,
    min_letters: usize,
    length_policy: LengthPolicy,
}

impl<'a> WordFilter<'a> {
    pub fn new(normalizer: Normalizer<'a>, inventory: &'a Inventory, params: &FilterParams) -> Self {
        Self {
            normalizer,
            inventory,
            band: ValueBand::from_params(params),
            min_letters: params.min_letters,
            length_policy: params.length_policy,
        }
    }

    pub fn band(&self) -> ValueBand {
        self.band
    }

    fn length_of(&self, word: &str) -> usize {
        match self.length_policy {
            LengthPolicy::AllChars => word.chars().count(),
            LengthPolicy::LettersOnly => word
                .chars()
                .filter(|&c| !self.normalizer.is_ignored(c))
                .count(),
        }
    }

    /// Runs every check on one candidate. The outer `Err` is fatal for the
    /// whole run (unhandled glyph); the inner one is an ordinary rejection.
    pub fn classify(&self, candidate: &Candidate) -> CwResult<Result<ScoredWord, Rejection>> {
        if self.length_of(&candidate.word) < self.min_letters {
            return Ok(Err(Rejection::TooShort));
        }

        let normalized = self.normalizer.normalize(&candidate.word)?;

        if !normalized.counts.fits_within(self.inventory.counts()) {
            return Ok(Err(Rejection::Unavailable));
        }

        let value = normalized.counts.weighted_sum(self.normalizer.catalog());
        if !self.band.contains(value) {
            return Ok(Err(Rejection::OutOfBand));
        }

        Ok(Ok(ScoredWord {
            word: candidate.word.to_string(),
            tag: Arc::clone(&candidate.tag),
            counts: normalized.counts,
            value,
        }))
    }

    pub fn evaluate(&self, candidate: &Candidate) -> CwResult<Option<ScoredWord>> {
        Ok(self.classify(candidate)?.ok())
    }

    /// Scans the corpus in order and returns the admitted words, still in
    /// corpus order. Stops at the first unhandled glyph.
    pub fn scan(&self, corpus: &Corpus, progress: &mut dyn ProgressSink) -> CwResult<Vec<ScoredWord>> {
        let (admitted, _) = self.scan_with_stats(corpus, progress)?;
        Ok(admitted)
    }

    pub fn scan_with_stats(
        &self,
        corpus: &Corpus,
        progress: &mut dyn ProgressSink,
    ) -> CwResult<(Vec<ScoredWord>, ScanStats)> {
        let total = corpus.len();
        let mut stats = ScanStats::default();
        let mut admitted = Vec::new();

        for (index, candidate) in corpus.iter().enumerate() {
            progress.report(index, total);
            let outcome = self.classify(candidate)?;
            stats.record(&outcome);
            if let Ok(scored) = outcome {
                admitted.push(scored);
            }
        }
        progress.report(total, total);

        debug!(
            "Rejected: {} too short, {} unavailable, {} out of band",
            stats.too_short, stats.unavailable, stats.out_of_band
        );
        info!("{} of {} words can be built", stats.admitted, stats.scanned);
        Ok((admitted, stats))
    }
}

/// Stable ascending sort by value; equal values keep their corpus order.
pub fn rank(mut words: Vec<ScoredWord>) -> Vec<ScoredWord> {
    words.sort_by_key(|w| w.value);
    words
}
