use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoinWordError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Data Validation Error: {0}")]
    Validation(String),

    #[error("Catalog lists letter '{0}' more than once")]
    DuplicateLetter(char),

    #[error("Catalog value for letter '{0}' must be positive")]
    NonPositiveValue(char),

    #[error("Unknown letter '{letter}' in {context}: not part of the coin catalog")]
    UnknownLetter { letter: char, context: String },

    #[error(
        "Wallet does not match the coin catalog: {count}x '{letter}' declared worth {declared_total}, \
         but the catalog value is {catalog_value} per coin"
    )]
    ValueMismatch {
        letter: char,
        catalog_value: u32,
        declared_total: u64,
        count: u32,
    },

    #[error("You do not have enough money ({available} < {target})")]
    InsufficientFunds { available: u64, target: u64 },

    #[error("Unhandled glyphs, extend the glyph table: {}", format_glyph_words(.words))]
    UnhandledGlyphs { words: Vec<(String, Vec<char>)> },
}

fn format_glyph_words(words: &[(String, Vec<char>)]) -> String {
    words
        .iter()
        .map(|(word, glyphs)| {
            let glyphs: String = glyphs.iter().collect();
            format!("'{}' [{}]", word, glyphs)
        })
        .collect::<Vec<_>>()
        .join(", ")
}

pub type CwResult<T> = Result<T, CoinWordError>;
