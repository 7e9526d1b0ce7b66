use crate::error::CwResult;
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use strum_macros::{Display, EnumIter, EnumString};

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[command(flatten)]
    #[serde(default)]
    pub filter: FilterParams,
    #[command(flatten)]
    #[serde(default)]
    pub sources: SourceParams,
}

/// How the minimum-length filter counts the characters of a raw word.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, EnumIter, EnumString, Display, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum LengthPolicy {
    /// Every character counts, apostrophes included.
    #[default]
    AllChars,
    /// Ignored glyphs (apostrophes) do not count towards the length.
    LettersOnly,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterParams {
    /// Value to create from the given coins.
    #[arg(long, default_value_t = 500)]
    pub value: u64,

    /// Maximum amount a word may exceed the target value by. Unbounded if absent.
    #[arg(long)]
    pub tolerance: Option<u64>,

    /// Minimum number of letters a word needs to have.
    #[arg(long, default_value_t = 3)]
    pub min_letters: usize,

    #[arg(long, default_value_t = LengthPolicy::AllChars)]
    pub length_policy: LengthPolicy,
}

impl Default for FilterParams {
    fn default() -> Self {
        Self {
            value: 500,
            tolerance: None,
            min_letters: 3,
            length_policy: LengthPolicy::AllChars,
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceParams {
    /// Directory holding the word-list files.
    #[arg(long, default_value = "/usr/share/dict")]
    pub dict_dir: PathBuf,

    /// Comma-separated word-list file names, e.g. "ngerman,british-english".
    #[arg(long, default_value = "ngerman")]
    pub languages: String,
}

impl Default for SourceParams {
    fn default() -> Self {
        Self {
            dict_dir: PathBuf::from("/usr/share/dict"),
            languages: "ngerman".to_string(),
        }
    }
}

impl SourceParams {
    pub fn language_list(&self) -> Vec<String> {
        self.languages
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> CwResult<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Copies every argument the user typed explicitly on the command line
    /// over the values loaded from a config file.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($group:ident . $field:ident, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    self.$group.$field = cli.$group.$field.clone();
                }
            };
        }

        update_if_present!(filter.value, "value");
        update_if_present!(filter.tolerance, "tolerance");
        update_if_present!(filter.min_letters, "min_letters");
        update_if_present!(filter.length_policy, "length_policy");

        update_if_present!(sources.dict_dir, "dict_dir");
        update_if_present!(sources.languages, "languages");
    }
}
