//! Print the design system catalog as JSON
//!
//! Usage: `design-showcase [config.json]`

use anyhow::Context;
use design_system::{Catalog, DesignSystem, DesignSystemConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn,design_system=info"))
        .context("invalid log filter")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => DesignSystemConfig::from_path(&path)
            .with_context(|| format!("failed to load config from {}", path))?,
        None => DesignSystemConfig::default(),
    };

    let system = DesignSystem::from_config(&config).context("failed to build design system")?;
    let catalog = Catalog::collect(&system)?;
    info!("Catalog has {} component kinds", catalog.components.len());

    println!("{}", serde_json::to_string_pretty(&catalog)?);
    Ok(())
}
