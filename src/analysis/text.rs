use once_cell::sync::Lazy;
use regex::Regex;

static URL_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"https?://\S+|www\.\S+").unwrap());
static TAG_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"<.*?>").unwrap());
static NON_ALPHA_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-zA-Z\s]").unwrap());
static WHITESPACE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Contractions a Treebank-style English tokenizer splits into two tokens,
/// with the split offset.
const CONTRACTIONS: &[(&str, usize)] = &[
    ("cannot", 3),
    ("gimme", 3),
    ("gonna", 3),
    ("gotta", 3),
    ("lemme", 3),
    ("wanna", 3),
];

/// URLs, then tags, then everything but ASCII letters and whitespace are
/// removed; the rest is lowercased with whitespace runs collapsed.
pub fn clean_text(text: &str) -> String {
    let text = URL_REGEX.replace_all(text, "");
    let text = TAG_REGEX.replace_all(&text, "");
    let text = NON_ALPHA_REGEX.replace_all(&text, "");
    let text = text.to_lowercase();
    WHITESPACE_REGEX.replace_all(&text, " ").trim().to_string()
}

/// Word tokenizer for cleaned text. Cleaning leaves no punctuation, so word
/// boundaries are whitespace plus the fixed contraction splits.
pub fn word_tokenize(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    for word in text.split_whitespace() {
        match CONTRACTIONS
            .iter()
            .find(|(whole, _)| word.eq_ignore_ascii_case(whole))
        {
            Some(&(_, at)) => {
                let (head, tail) = word.split_at(at);
                tokens.push(head);
                tokens.push(tail);
            }
            None => tokens.push(word),
        }
    }
    tokens
}
