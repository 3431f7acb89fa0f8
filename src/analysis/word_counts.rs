use crate::analysis::counter::OrderedCounter;
use crate::analysis::label::Label;
use crate::analysis::stopwords::LanguageResources;
use crate::analysis::text::{clean_text, word_tokenize};
use crate::json_output::{write_json_file, JsonStyle};
use crate::records::{load_records, Record};
use crate::utils::{AnalysisConfig, AppConfig, MbtiDataError, Result};
use serde::Serialize;
use std::collections::HashMap;
use tracing::info;

pub const TYPE_FIELD: &str = "type";
pub const POSTS_FIELD: &str = "posts";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordCountOptions {
    pub top_n: usize,
    /// Tokens shorter than this are discarded.
    pub min_word_len: usize,
}

impl Default for WordCountOptions {
    fn default() -> Self {
        Self {
            top_n: 20,
            min_word_len: 3,
        }
    }
}

impl From<&AnalysisConfig> for WordCountOptions {
    fn from(config: &AnalysisConfig) -> Self {
        Self {
            top_n: config.top_n,
            min_word_len: config.min_word_len,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordFrequencyEntry {
    pub word: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeWordReport {
    #[serde(rename = "mbti_type")]
    pub type_label: Label,
    pub word_counts: Vec<WordFrequencyEntry>,
}

/// Groups `posts` by `type`, labels in first-seen order. Both fields are
/// required on every record.
pub fn group_posts(records: &[Record]) -> Result<Vec<(Label, Vec<&str>)>> {
    let mut groups: Vec<(Label, Vec<&str>)> = Vec::new();
    let mut positions: HashMap<Label, usize> = HashMap::new();

    for (index, record) in records.iter().enumerate() {
        let raw_label = record.field(TYPE_FIELD).require(index, TYPE_FIELD)?;
        let label = Label::from_value(raw_label, index, TYPE_FIELD)?;
        let post = record
            .field(POSTS_FIELD)
            .require(index, POSTS_FIELD)?
            .as_str()
            .ok_or_else(|| MbtiDataError::InvalidField {
                index,
                field: POSTS_FIELD.to_string(),
                expected: "a string",
            })?;

        match positions.get(&label) {
            Some(&i) => groups[i].1.push(post),
            None => {
                positions.insert(label.clone(), groups.len());
                groups.push((label, vec![post]));
            }
        }
    }

    Ok(groups)
}

/// Top words across all posts of one group. Posts are joined with a space
/// before cleaning, so the ranking sees one continuous text.
pub fn top_words(
    posts: &[&str],
    resources: &LanguageResources,
    options: WordCountOptions,
) -> Vec<WordFrequencyEntry> {
    let cleaned = clean_text(&posts.join(" "));

    let mut counter = OrderedCounter::new();
    counter.extend(
        word_tokenize(&cleaned)
            .into_iter()
            .filter(|w| !resources.is_stop_word(w) && w.chars().count() >= options.min_word_len),
    );

    counter
        .most_common(Some(options.top_n))
        .into_iter()
        .map(|(word, count)| WordFrequencyEntry {
            word: word.to_string(),
            count,
        })
        .collect()
}

pub fn build_word_reports(
    records: &[Record],
    resources: &LanguageResources,
    options: WordCountOptions,
) -> Result<Vec<TypeWordReport>> {
    let groups = group_posts(records)?;

    info!("Found {} different MBTI types", groups.len());
    for (label, posts) in &groups {
        info!("  - {}: {} posts", label, posts.len());
    }

    Ok(groups
        .into_iter()
        .map(|(label, posts)| {
            info!("Processing {}...", label);
            TypeWordReport {
                word_counts: top_words(&posts, resources, options),
                type_label: label,
            }
        })
        .collect())
}

/// Builds `mbti_word_counts.json`. Any failure aborts the run before the
/// output file is touched.
pub fn run_word_counts(
    config: &AppConfig,
    resources: &LanguageResources,
) -> Result<Vec<TypeWordReport>> {
    let input = &config.paths.posts_json;
    let output = config.word_counts_output();
    info!("Starting to process MBTI posts from {}", input.display());

    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let records = load_records(input)?;
    info!("Loaded {} entries from JSON file", records.len());

    let options = WordCountOptions::from(&config.analysis);
    let reports = build_word_reports(&records, resources, options)?;
    write_json_file(&output, &reports, JsonStyle::AsciiEscaped)?;

    info!(
        "Word count analysis complete. Results saved to {}",
        output.display()
    );
    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value as JsonValue};

    fn records(value: JsonValue) -> Vec<Record> {
        serde_json::from_value(value).unwrap()
    }

    fn words(entries: &[WordFrequencyEntry]) -> Vec<(&str, usize)> {
        entries.iter().map(|e| (e.word.as_str(), e.count)).collect()
    }

    #[test]
    fn equal_counts_rank_by_first_appearance() {
        let resources = LanguageResources::from_words(["and", "the"]);
        let top = top_words(
            &["I love cats and cats love me"],
            &resources,
            WordCountOptions::default(),
        );
        assert_eq!(words(&top), vec![("love", 2), ("cats", 2)]);
    }

    #[test]
    fn stop_words_short_words_and_noise_are_excluded() {
        let top = top_words(
            &[
                "The cats are great! Visit https://cats.example.com <br> 123 cats",
                "Dogs? dogs are great too",
            ],
            &LanguageResources::builtin(),
            WordCountOptions::default(),
        );
        assert_eq!(
            words(&top),
            vec![("cats", 2), ("great", 2), ("dogs", 2), ("visit", 1)]
        );
    }

    #[test]
    fn top_n_cuts_the_ranking() {
        let top = top_words(
            &["alpha beta beta gamma gamma gamma delta"],
            &LanguageResources::builtin(),
            WordCountOptions {
                top_n: 2,
                min_word_len: 3,
            },
        );
        assert_eq!(words(&top), vec![("gamma", 3), ("beta", 2)]);
    }

    #[test]
    fn groups_in_first_seen_order() {
        let recs = records(json!([
            {"type": "INTP", "posts": "one"},
            {"type": "ENFJ", "posts": "two"},
            {"type": "INTP", "posts": "three"}
        ]));
        let groups = group_posts(&recs).unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, Label::from("INTP"));
        assert_eq!(groups[0].1, vec!["one", "three"]);
        assert_eq!(groups[1].1, vec!["two"]);
    }

    #[test]
    fn missing_fields_are_fatal() {
        let err = group_posts(&records(json!([
            {"type": "INTP", "posts": "fine"},
            {"type": "ENFJ"}
        ])))
        .unwrap_err();
        assert!(matches!(
            err,
            MbtiDataError::MissingField { index: 1, ref field } if field == "posts"
        ));

        let err = group_posts(&records(json!([{"posts": "orphan"}]))).unwrap_err();
        assert!(matches!(
            err,
            MbtiDataError::MissingField { index: 0, ref field } if field == "type"
        ));

        let err = group_posts(&records(json!([{"type": "INTP", "posts": 5}]))).unwrap_err();
        assert!(matches!(err, MbtiDataError::InvalidField { index: 0, .. }));
    }

    #[test]
    fn reports_serialize_with_type_key() {
        let recs = records(json!([
            {"type": "INFJ", "posts": "quiet quiet thinking"},
            {"type": "ESTP", "posts": "action"}
        ]));
        let reports =
            build_word_reports(&recs, &LanguageResources::builtin(), WordCountOptions::default())
                .unwrap();
        assert_eq!(
            serde_json::to_value(&reports).unwrap(),
            json!([
                {"mbti_type": "INFJ", "word_counts": [
                    {"word": "quiet", "count": 2},
                    {"word": "thinking", "count": 1}
                ]},
                {"mbti_type": "ESTP", "word_counts": [{"word": "action", "count": 1}]}
            ])
        );
    }

    #[test]
    fn failed_run_leaves_no_output() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = AppConfig::default();
        config.paths.posts_json = dir.path().join("mbtiPost.json");
        config.paths.processed_dir = dir.path().join("processed");
        std::fs::write(&config.paths.posts_json, r#"[{"type": "INTJ"}]"#).unwrap();

        assert!(run_word_counts(&config, &LanguageResources::builtin()).is_err());
        assert!(!config.word_counts_output().exists());
    }
}
