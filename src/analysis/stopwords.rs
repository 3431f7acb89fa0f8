use crate::utils::Result;
use std::collections::HashSet;
use std::path::Path;
use tracing::info;

/// Standard English stop-word list.
pub const ENGLISH_STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan",
    "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
    "wouldn", "wouldn't",
];

/// Language data the word counter needs, loaded once before any text is
/// processed and passed to it explicitly.
#[derive(Debug, Clone)]
pub struct LanguageResources {
    stop_words: HashSet<String>,
}

impl LanguageResources {
    pub fn builtin() -> Self {
        Self::from_words(ENGLISH_STOP_WORDS.iter().copied())
    }

    pub fn from_words<'a>(words: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            stop_words: words.into_iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Without a path the built-in list is used. With a path, an existing
    /// list (one word per line) is loaded; a missing one is installed there
    /// from the built-in list first. Calling this again is a no-op install.
    pub fn ensure_available(stopwords_path: Option<&Path>) -> Result<Self> {
        let Some(path) = stopwords_path else {
            return Ok(Self::builtin());
        };

        if !path.exists() {
            info!("Installing stop-word list to {}", path.display());
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            let mut content = ENGLISH_STOP_WORDS.join("\n");
            content.push('\n');
            std::fs::write(path, content)?;
        }

        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_words(
            content.lines().map(str::trim).filter(|l| !l.is_empty()),
        ))
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

impl Default for LanguageResources {
    fn default() -> Self {
        Self::builtin()
    }
}
