use super::LoadedWallet;
use crate::reports;
use clap::Args;
use coinword::error::CwResult;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct WalletArgs {
    /// Also fail if the wallet is worth less than this.
    #[arg(long)]
    pub at_least: Option<u64>,
}

pub fn run(args: &WalletArgs, wallet: &LoadedWallet) -> CwResult<()> {
    reports::print_wallet(wallet);

    let worth = match args.at_least {
        Some(target) => wallet.inventory.ensure_covers(&wallet.catalog, target)?,
        None => wallet.inventory.total_value(&wallet.catalog),
    };
    info!(
        "✅ Wallet matches the catalog: {} coins worth {} Barr.",
        wallet.inventory.coin_count(),
        worth
    );
    Ok(())
}
