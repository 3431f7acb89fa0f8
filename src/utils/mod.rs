pub mod config;
pub mod errors;
pub mod logging;

pub use config::{AnalysisConfig, AppConfig, ConverterConfig, LoggingConfig, PathsConfig};
pub use errors::{MbtiDataError, Result};
pub use logging::init_tracing;
