use crate::error::{CoinWordError, CwResult};
use regex::Regex;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use tracing::debug;

const CATALOG_LINE: &str = r"^(\p{L})\s+(.*?)\s+([0-9]+)$";
const WALLET_LINE: &str = r"^([0-9]+)x([\p{L} ]+?)\s*(\p{L})\s+\(([0-9]+)\)$";

/// One line of the coin-value catalog: `A Apfel 3`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogRecord {
    pub letter: char,
    pub name: String,
    pub value: u32,
}

/// One line of the wallet: `4x Apfel A (12)`. The parenthesised number is the
/// value of all `count` coins together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletRecord {
    pub count: u32,
    pub name: String,
    pub letter: char,
    pub total_value: u64,
}

fn compile(pattern: &str) -> CwResult<Regex> {
    Regex::new(pattern).map_err(|e| CoinWordError::Config(format!("Bad line pattern: {}", e)))
}

fn parse_number<T: std::str::FromStr>(raw: &str, line_no: usize, what: &str) -> CwResult<T> {
    raw.parse().map_err(|_| {
        CoinWordError::Config(format!("Line {}: {} '{}' is not a number", line_no, what, raw))
    })
}

fn first_char(raw: &str) -> char {
    raw.chars().next().unwrap_or_default()
}

/// Reads the trimmed, non-empty lines of a reader along with their 1-based
/// line numbers.
fn content_lines<R: Read>(reader: R) -> impl Iterator<Item = CwResult<(usize, String)>> {
    BufReader::new(reader)
        .lines()
        .enumerate()
        .filter_map(|(idx, line)| match line {
            Ok(l) => {
                let trimmed = l.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(Ok((idx + 1, trimmed.to_string())))
                }
            }
            Err(e) => Some(Err(e.into())),
        })
}

pub fn load_catalog<R: Read>(reader: R) -> CwResult<Vec<CatalogRecord>> {
    let re = compile(CATALOG_LINE)?;
    let mut records = Vec::new();

    for line in content_lines(reader) {
        let (line_no, text) = line?;
        let caps = re.captures(&text).ok_or_else(|| {
            CoinWordError::Config(format!(
                "Catalog line {} is not '<letter> <name> <value>': '{}'",
                line_no, text
            ))
        })?;

        records.push(CatalogRecord {
            letter: first_char(&caps[1]),
            name: caps[2].trim().to_string(),
            value: parse_number(&caps[3], line_no, "coin value")?,
        });
    }

    debug!("Parsed {} catalog records", records.len());
    Ok(records)
}

pub fn load_wallet<R: Read>(reader: R) -> CwResult<Vec<WalletRecord>> {
    let re = compile(WALLET_LINE)?;
    let mut records = Vec::new();

    for line in content_lines(reader) {
        let (line_no, text) = line?;
        let caps = re.captures(&text).ok_or_else(|| {
            CoinWordError::Config(format!(
                "Wallet line {} is not '<count>x <name> <letter> (<value>)': '{}'",
                line_no, text
            ))
        })?;

        records.push(WalletRecord {
            count: parse_number(&caps[1], line_no, "coin count")?,
            name: caps[2].trim().to_string(),
            letter: first_char(&caps[3]),
            total_value: parse_number(&caps[4], line_no, "wallet value")?,
        });
    }

    debug!("Parsed {} wallet records", records.len());
    Ok(records)
}

pub fn load_catalog_file<P: AsRef<Path>>(path: P) -> CwResult<Vec<CatalogRecord>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        CoinWordError::Config(format!("Could not open coin catalog at {:?}: {}", path, e))
    })?;
    load_catalog(file)
}

pub fn load_wallet_file<P: AsRef<Path>>(path: P) -> CwResult<Vec<WalletRecord>> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| CoinWordError::Config(format!("Could not open wallet at {:?}: {}", path, e)))?;
    load_wallet(file)
}

/// Reads a word list: one word per line, blank lines skipped.
pub fn load_word_list<R: Read>(reader: R) -> CwResult<Vec<String>> {
    content_lines(reader)
        .map(|line| line.map(|(_, word)| word))
        .collect()
}

