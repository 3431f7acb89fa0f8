pub mod analysis;
pub mod csv_processor;
pub mod json_output;
pub mod records;
pub mod utils;

pub use analysis::{
    run_post_count, run_word_counts, FrequencyEntry, LanguageResources, TypeWordReport,
    WordFrequencyEntry,
};
pub use csv_processor::{convert_csv_to_json, parse_scalar, run_conversion, BatchReport, ScalarValue};
pub use json_output::JsonStyle;
pub use records::{Field, Record};
pub use utils::{AppConfig, MbtiDataError, Result};
