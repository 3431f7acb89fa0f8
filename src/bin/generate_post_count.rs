use mbti_data::analysis::run_post_count;
use mbti_data::utils::{config::DEFAULT_CONFIG_FILE, init_tracing, AppConfig};
use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    let config = AppConfig::load_or_default(Some(DEFAULT_CONFIG_FILE));
    init_tracing(&config.logging)?;

    match run_post_count(&config) {
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            tracing::error!("Error processing MBTI post data: {}", e);
            Ok(ExitCode::FAILURE)
        }
    }
}
