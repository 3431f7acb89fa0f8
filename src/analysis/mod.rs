pub mod counter;
pub mod label;
pub mod stopwords;
pub mod text;
pub mod type_counts;
pub mod word_counts;

pub use counter::OrderedCounter;
pub use label::Label;
pub use stopwords::{LanguageResources, ENGLISH_STOP_WORDS};
pub use text::{clean_text, word_tokenize};
pub use type_counts::{count_types, run_post_count, FrequencyEntry};
pub use word_counts::{
    build_word_reports, group_posts, run_word_counts, top_words, TypeWordReport, WordCountOptions,
    WordFrequencyEntry,
};
