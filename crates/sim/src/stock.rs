//! Stock lists: the built-in shop and JSON fixtures.

use std::path::{Path, PathBuf};

use gildedrose_inventory::{Inventory, Item};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StockError {
    #[error("failed to read fixture {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid fixture: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The shop's opening stock, one or more items per category.
pub fn default_stock() -> Inventory {
    Inventory::new(vec![
        Item::standard("+5 Dexterity Vest", 10, 20),
        Item::appreciating("Aged Brie", 2, 0),
        Item::standard("Elixir of the Mongoose", 5, 7),
        Item::permanent("Sulfuras, Hand of Ragnaros", 0, 80),
        Item::permanent("Sulfuras, Hand of Ragnaros", -1, 80),
        Item::timed_event("Backstage passes to a TAFKAL80ETC concert", 15, 20),
        Item::timed_event("Backstage passes to a TAFKAL80ETC concert", 10, 49),
        Item::timed_event("Backstage passes to a TAFKAL80ETC concert", 5, 49),
        Item::accelerated("Conjured Mana Cake", 3, 6),
    ])
}

/// Parse a JSON array of items.
pub fn parse_fixture(json: &str) -> Result<Inventory, StockError> {
    let items: Vec<Item> = serde_json::from_str(json)?;
    Ok(Inventory::new(items))
}

/// Read and parse a JSON fixture file.
pub fn load_fixture(path: &Path) -> Result<Inventory, StockError> {
    let json = std::fs::read_to_string(path).map_err(|source| StockError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_fixture(&json)
}
