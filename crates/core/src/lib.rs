//! `gildedrose-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the inventory rules
//! (no infrastructure concerns).

pub mod error;
pub mod quality;

pub use error::DomainError;
pub use quality::{QUALITY_MAX, QUALITY_MIN, lower_quality, raise_quality};
