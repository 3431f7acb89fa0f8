use mbti_data::csv_processor::run_conversion;
use mbti_data::utils::{config::DEFAULT_CONFIG_FILE, init_tracing, AppConfig};

fn main() -> anyhow::Result<()> {
    let config = AppConfig::load_or_default(Some(DEFAULT_CONFIG_FILE));
    init_tracing(&config.logging)?;

    // Per-file failures are already logged and counted by the batch.
    if let Err(e) = run_conversion(&config.paths, &config.converter) {
        tracing::error!("Error preparing conversion batch: {}", e);
    }

    Ok(())
}
