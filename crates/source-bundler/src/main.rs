mod bootstrap;

use anyhow::{Context, Result};
use bundler_core::settings::Settings;
use bundler_data::aggregator::Aggregator;

fn main() -> Result<()> {
    let settings = Settings::load();

    bootstrap::setup_logging(&settings.log_level)?;

    tracing::info!("Source bundler v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::debug!("Settings: {:?}", settings);

    let aggregator = Aggregator::from_settings(&settings)?;
    let report = aggregator
        .aggregate(&settings.source_dir, &settings.output)
        .with_context(|| {
            format!(
                "aggregating {} into {}",
                settings.source_dir.display(),
                settings.output.display()
            )
        })?;

    println!(
        "All .{} files aggregated into {}",
        aggregator.profile().extension,
        settings.output.display()
    );

    if settings.json {
        println!("{}", report.to_json_pretty()?);
    }

    Ok(())
}
