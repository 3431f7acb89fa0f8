use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub paths: PathsConfig,
    pub converter: ConverterConfig,
    pub analysis: AnalysisConfig,
    pub logging: LoggingConfig,
}

/// Data directories, relative to the working directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub raw_dir: PathBuf,
    pub raw_json_dir: PathBuf,
    pub processed_dir: PathBuf,
    pub posts_json: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    /// File names under `paths.raw_dir`, converted in this order.
    pub known_files: Vec<String>,
    /// Subdirectory of `paths.raw_dir` scanned for per-type files.
    pub split_dir: String,
    pub split_suffix: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub top_n: usize,
    pub min_word_len: usize,
    pub stopwords_path: Option<PathBuf>,
    pub post_count_file: String,
    pub word_counts_file: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            raw_dir: PathBuf::from("data/raw"),
            raw_json_dir: PathBuf::from("data/rawJson"),
            processed_dir: PathBuf::from("data/processedJson"),
            posts_json: PathBuf::from("data/rawJson/post/mbtiPost.json"),
        }
    }
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            known_files: vec![
                "famousMbti.csv".to_string(),
                "mbtiPost.csv".to_string(),
                "mbtiMusicCombined.csv".to_string(),
            ],
            split_dir: "Music_split_mbti".to_string(),
            split_suffix: "_df.csv".to_string(),
        }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            top_n: 20,
            min_word_len: 3,
            stopwords_path: None,
            post_count_file: "postCount.json".to_string(),
            word_counts_file: "mbti_word_counts.json".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
        }
    }
}

impl AppConfig {
    pub fn load_from_file(path: &str) -> crate::utils::errors::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| crate::utils::errors::MbtiDataError::ConfigError(e.to_string()))?;
        toml::from_str(&content)
            .map_err(|e| crate::utils::errors::MbtiDataError::ConfigError(e.to_string()))
    }

    /// Falls back to defaults when the file is absent. A file that exists but
    /// does not parse is reported on stderr, since logging is not set up yet.
    pub fn load_or_default(path: Option<&str>) -> Self {
        let Some(p) = path else {
            return Self::default();
        };
        if !std::path::Path::new(p).exists() {
            return Self::default();
        }
        match Self::load_from_file(p) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Warning: ignoring {}: {}", p, e);
                Self::default()
            }
        }
    }

    pub fn post_count_output(&self) -> PathBuf {
        self.paths.processed_dir.join(&self.analysis.post_count_file)
    }

    pub fn word_counts_output(&self) -> PathBuf {
        self.paths.processed_dir.join(&self.analysis.word_counts_file)
    }
}
