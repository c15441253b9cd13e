use anyhow::Context;

use gildedrose_sim::{SimConfig, default_stock, load_fixture, run};

fn main() -> anyhow::Result<()> {
    let config = SimConfig::from_env()?;
    gildedrose_observability::init(config.log_format);

    let mut inventory = match &config.fixture {
        Some(path) => load_fixture(path)
            .with_context(|| format!("loading stock from {}", path.display()))?,
        None => default_stock(),
    };

    tracing::info!(
        days = config.days,
        items = inventory.len(),
        fixture = ?config.fixture,
        "simulation started"
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run(&mut out, &mut inventory, config.days).context("writing report")?;

    tracing::info!(days = config.days, "simulation finished");
    Ok(())
}
