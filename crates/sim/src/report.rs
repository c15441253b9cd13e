//! Per-day stock reports.

use std::io::{self, Write};

use gildedrose_inventory::Inventory;
use tracing::debug;

/// Write the day-`day` report for `inventory`.
pub fn write_day<W: Write>(out: &mut W, day: u32, inventory: &Inventory) -> io::Result<()> {
    writeln!(out, "-------- day {day} --------")?;
    writeln!(out, "name, days_to_sell, quality")?;
    write!(out, "{inventory}")?;
    writeln!(out)
}

/// Report day 0, then advance and report once per day up to `days`.
pub fn run<W: Write>(out: &mut W, inventory: &mut Inventory, days: u32) -> io::Result<()> {
    for day in 0..=days {
        if day > 0 {
            inventory.advance_one_day();
        }
        debug!(day, items = inventory.len(), "day simulated");
        write_day(out, day, inventory)?;
    }
    Ok(())
}
