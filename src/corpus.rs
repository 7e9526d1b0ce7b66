use crate::config::SourceParams;
use crate::error::{CoinWordError, CwResult};
use crate::loader::load_word_list;
use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::sync::Arc;
use tracing::{debug, info};

/// A word as read from a word list, tagged with the list it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub tag: Arc<str>,
    pub word: Arc<str>,
}

/// Deduplicated words in the order they were first seen. The lookup set and
/// the candidate list share one allocation per word.
#[derive(Debug, Default, Clone)]
pub struct Corpus {
    candidates: Vec<Candidate>,
    seen: HashSet<Arc<str>>,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads every configured word list from the dictionary directory.
    pub fn load(sources: &SourceParams) -> CwResult<Self> {
        let mut corpus = Self::new();
        let languages = sources.language_list();
        if languages.is_empty() {
            return Err(CoinWordError::Config(
                "No word lists configured (--languages is empty)".to_string(),
            ));
        }

        for language in languages {
            let path = sources.dict_dir.join(&language);
            info!("📚 Loading word list: {:?}", path);
            let file = File::open(&path).map_err(|e| {
                CoinWordError::Config(format!("Could not open word list at {:?}: {}", path, e))
            })?;
            let added = corpus.extend_from_reader(&language, file)?;
            debug!("   -> {} new words from '{}'", added, language);
        }

        info!("Corpus holds {} distinct words", corpus.len());
        Ok(corpus)
    }

    pub fn from_reader<R: Read>(tag: &str, reader: R) -> CwResult<Self> {
        let mut corpus = Self::new();
        corpus.extend_from_reader(tag, reader)?;
        Ok(corpus)
    }

    pub fn from_pairs<'s, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'s str, &'s str)>,
    {
        let mut corpus = Self::new();
        for (tag, word) in pairs {
            corpus.push(Arc::from(tag), word);
        }
        corpus
    }

    /// Returns how many words were new.
    pub fn extend_from_reader<R: Read>(&mut self, tag: &str, reader: R) -> CwResult<usize> {
        let tag: Arc<str> = Arc::from(tag);
        let mut added = 0;
        for word in load_word_list(reader)? {
            if self.push(Arc::clone(&tag), &word) {
                added += 1;
            }
        }
        Ok(added)
    }

    /// Adds a word unless the same raw word is already present; the first
    /// occurrence keeps its tag.
    pub fn push(&mut self, tag: Arc<str>, word: &str) -> bool {
        if self.seen.contains(word) {
            return false;
        }
        let word: Arc<str> = Arc::from(word);
        self.seen.insert(Arc::clone(&word));
        self.candidates.push(Candidate { tag, word });
        true
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Candidate> {
        self.candidates.iter()
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a Candidate;
    type IntoIter = std::slice::Iter<'a, Candidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.candidates.iter()
    }
}
