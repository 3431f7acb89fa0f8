use mbti_data::analysis::{run_word_counts, LanguageResources};
use mbti_data::utils::{config::DEFAULT_CONFIG_FILE, init_tracing, AppConfig};
use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    let config = AppConfig::load_or_default(Some(DEFAULT_CONFIG_FILE));
    init_tracing(&config.logging)?;

    let resources =
        match LanguageResources::ensure_available(config.analysis.stopwords_path.as_deref()) {
            Ok(resources) => resources,
            Err(e) => {
                tracing::error!("Error loading language resources: {}", e);
                return Ok(ExitCode::FAILURE);
            }
        };

    match run_word_counts(&config, &resources) {
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            tracing::error!("Error processing MBTI posts: {}", e);
            Ok(ExitCode::FAILURE)
        }
    }
}
