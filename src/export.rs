use crate::error::CwResult;
use crate::filter::ScoredWord;
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use tracing::info;

#[derive(Debug, Serialize)]
struct ExportRow<'a> {
    rank: usize,
    word: &'a str,
    language: &'a str,
    value: u64,
}

pub fn write_csv<W: Write>(writer: W, words: &[ScoredWord]) -> CwResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for (rank, w) in words.iter().enumerate() {
        wtr.serialize(ExportRow {
            rank,
            word: &w.word,
            language: &w.tag,
            value: w.value,
        })?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_csv_file<P: AsRef<Path>>(path: P, words: &[ScoredWord]) -> CwResult<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let file = std::fs::File::create(path)?;
    write_csv(file, words)?;
    info!("💾 Wrote {} words to {:?}", words.len(), path);
    Ok(())
}
