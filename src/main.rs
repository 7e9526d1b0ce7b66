use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use coinword::config::Config;
use coinword::error::CwResult;
use coinword::glyphs::GlyphTable;
use std::process;
use tracing::{error, info, warn, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Coin catalog: one `<letter> <name> <value>` per line.
    #[arg(global = true, long, default_value = "data/values.txt")]
    values: String,

    /// Wallet: one `<count>x <name> <letter> (<value>)` per line.
    #[arg(global = true, long, default_value = "data/coins.txt")]
    coins: String,

    /// JSON file with filter and word-list settings.
    #[arg(global = true, long)]
    config: Option<String>,

    /// JSON object of extra glyph rules, e.g. {"Æ": "AE"}.
    #[arg(global = true, long)]
    glyphs: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Find every word the wallet can pay for.
    Search(cmd::search::SearchArgs),
    /// Check the wallet against the catalog and show what it holds.
    Wallet(cmd::wallet::WalletArgs),
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    tracing_subscriber::fmt()
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::INFO })
        .init();

    info!("🚀 Initializing CoinWord...");

    if let Err(e) = run(&cli, &matches) {
        error!("❌ {}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli, matches: &clap::ArgMatches) -> CwResult<()> {
    let wallet = cmd::LoadedWallet::load(&cli.values, &cli.coins)?;

    match &cli.command {
        Commands::Search(args) => {
            let config = resolve_config(cli, args, matches)?;
            let glyphs = resolve_glyphs(cli)?;
            cmd::search::run(args, &config, &wallet, &glyphs)
        }
        Commands::Wallet(args) => cmd::wallet::run(args, &wallet),
    }
}

/// A config file is the base; anything typed on the command line wins.
fn resolve_config(
    cli: &Cli,
    args: &cmd::search::SearchArgs,
    matches: &clap::ArgMatches,
) -> CwResult<Config> {
    let Some(path) = &cli.config else {
        return Ok(args.config.clone());
    };

    info!("⚙️  Loading config from: {}", path);
    let mut config = Config::load_from_file(path)?;
    match matches.subcommand_matches("search") {
        Some(sub_matches) => config.merge_from_cli(&args.config, sub_matches),
        None => warn!("⚠️  No search arguments found to merge."),
    }
    Ok(config)
}

fn resolve_glyphs(cli: &Cli) -> CwResult<GlyphTable> {
    let mut table = GlyphTable::default();
    if let Some(path) = &cli.glyphs {
        info!("🔤 Loading glyph rules from: {}", path);
        table.load_overrides(path)?;
    }
    Ok(table)
}
