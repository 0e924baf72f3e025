//! `stockroom` entry point: loads the catalog and prints the main screen's
//! tables as JSON.

use anyhow::Context;

use stockroom_desktop::{DesktopConfig, MainScreen, demo};
use stockroom_inventory::Inventory;

fn main() -> anyhow::Result<()> {
    let config = DesktopConfig::from_env().context("invalid configuration")?;
    stockroom_observability::init(config.log_format);

    let mut inventory = Inventory::new();
    if config.seed_demo {
        demo::seed(&mut inventory);
    } else {
        tracing::info!("starting with an empty catalog");
    }

    let snapshot = MainScreen::new().snapshot(&inventory);
    println!(
        "{}",
        serde_json::to_string_pretty(&snapshot).context("failed to serialize catalog")?
    );

    tracing::info!(
        parts = snapshot.parts.len(),
        products = snapshot.products.len(),
        "catalog printed"
    );
    Ok(())
}
