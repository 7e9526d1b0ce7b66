pub mod search;
pub mod wallet;

use coinword::catalog::{Inventory, LetterCatalog};
use coinword::error::CwResult;
use coinword::loader::{load_catalog_file, load_wallet_file, WalletRecord};
use tracing::info;

/// Catalog and inventory, cross-checked against each other.
pub struct LoadedWallet {
    pub catalog: LetterCatalog,
    pub inventory: Inventory,
    pub records: Vec<WalletRecord>,
}

impl LoadedWallet {
    pub fn load(values_path: &str, coins_path: &str) -> CwResult<Self> {
        info!("📂 Loading coin catalog: {}", values_path);
        let catalog = LetterCatalog::from_records(load_catalog_file(values_path)?)?;

        info!("👛 Loading wallet: {}", coins_path);
        let records = load_wallet_file(coins_path)?;
        let inventory = Inventory::from_records(&catalog, records.iter().cloned())?;

        Ok(Self {
            catalog,
            inventory,
            records,
        })
    }
}
