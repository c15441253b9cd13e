//! Inventory domain module.
//!
//! This crate contains the per-category daily update rules for the shop's
//! stock, implemented purely as deterministic domain logic (no IO, no
//! storage).

pub mod category;
pub mod inventory;
pub mod item;

pub use category::Category;
pub use inventory::{Inventory, advance_one_day};
pub use item::Item;
