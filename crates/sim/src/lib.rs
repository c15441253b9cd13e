//! Day-by-day simulator for the shop's stock.
//!
//! Loads a stock list (built-in or JSON fixture), advances it one day at a
//! time and prints the state of every item for each day.

pub mod config;
pub mod report;
pub mod stock;

pub use config::{ConfigError, SimConfig};
pub use report::run;
pub use stock::{StockError, default_stock, load_fixture, parse_fixture};
