use super::LoadedWallet;
use crate::reports;
use clap::Args;
use coinword::config::Config;
use coinword::corpus::Corpus;
use coinword::error::CwResult;
use coinword::export::write_csv_file;
use coinword::filter::{rank, WordFilter};
use coinword::glyphs::{GlyphTable, Normalizer};
use coinword::progress::TimedProgress;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    #[command(flatten)]
    pub config: Config,

    /// Where the ranked words are written as CSV.
    #[arg(short, long, default_value = "data/output.csv")]
    pub output: String,

    /// Number of rows shown in the result table.
    #[arg(short, long, default_value_t = 50)]
    pub limit: usize,
}

pub fn run(args: &SearchArgs, config: &Config, wallet: &LoadedWallet, glyphs: &GlyphTable) -> CwResult<()> {
    let filter_params = &config.filter;

    // Nothing can reach the target if the whole wallet cannot.
    let worth = wallet
        .inventory
        .ensure_covers(&wallet.catalog, filter_params.value)?;
    info!("💰 Your wallet is worth {} Barr.", worth);

    let band = match filter_params.tolerance {
        Some(t) => format!("{}..={}", filter_params.value, filter_params.value.saturating_add(t)),
        None => format!("{}..", filter_params.value),
    };
    info!(
        "🔎 Looking for words worth {} with at least {} letters ({})",
        band, filter_params.min_letters, filter_params.length_policy
    );

    let corpus = Corpus::load(&config.sources)?;
    let normalizer = Normalizer::new(&wallet.catalog, glyphs);
    let filter = WordFilter::new(normalizer, &wallet.inventory, filter_params);

    let mut progress = TimedProgress::default();
    let admitted = filter.scan(&corpus, &mut progress)?;
    let ranked = rank(admitted);

    reports::print_results(&ranked, args.limit);
    write_csv_file(&args.output, &ranked)?;
    Ok(())
}
