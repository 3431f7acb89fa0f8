use crate::analysis::counter::OrderedCounter;
use crate::analysis::label::Label;
use crate::json_output::{write_json_file, JsonStyle};
use crate::records::{load_records, Record};
use crate::utils::{AppConfig, Result};
use serde::Serialize;
use tracing::info;

pub const TYPE_FIELD: &str = "type";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrequencyEntry {
    #[serde(rename = "type")]
    pub label: Label,
    pub count: usize,
}

/// Counts records per `type`. Records whose `type` is absent or falsy are
/// skipped rather than counted under an empty label.
pub fn count_types(records: &[Record]) -> Result<Vec<FrequencyEntry>> {
    let mut counter = OrderedCounter::new();
    for (index, record) in records.iter().enumerate() {
        let field = record.field(TYPE_FIELD);
        if !field.is_truthy() {
            continue;
        }
        let value = field.require(index, TYPE_FIELD)?;
        counter.add(Label::from_value(value, index, TYPE_FIELD)?);
    }

    Ok(counter
        .most_common(None)
        .into_iter()
        .map(|(label, count)| FrequencyEntry { label, count })
        .collect())
}

/// Builds `postCount.json` from the post records. Fails as a whole; the
/// output file is only written once the full table exists.
pub fn run_post_count(config: &AppConfig) -> Result<Vec<FrequencyEntry>> {
    info!("Processing MBTI post data...");

    let output_dir = &config.paths.processed_dir;
    if !output_dir.exists() {
        std::fs::create_dir_all(output_dir)?;
        info!("Created directory: {}", output_dir.display());
    }

    let records = load_records(&config.paths.posts_json)?;
    info!("Loaded {} MBTI post entries", records.len());

    let table = count_types(&records)?;

    let output_file = config.post_count_output();
    write_json_file(&output_file, &table, JsonStyle::AsciiEscaped)?;

    info!("Successfully generated {}", output_file.display());
    info!("Found {} MBTI types with the following counts:", table.len());
    for entry in &table {
        info!("  {}: {} posts", entry.label, entry.count);
    }

    Ok(table)
}
