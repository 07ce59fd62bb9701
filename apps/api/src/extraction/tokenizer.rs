//! Word tokenizer shared by skill extraction and text similarity.
//!
//! Lowercases, then splits on every character that is not alphanumeric, `+`, `#` or `_`,
//! so `C++`, `C#` and `node_js` survive as single tokens.

use std::collections::HashSet;
use std::sync::LazyLock;

static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "a", "about", "above", "after", "again", "all", "am", "an", "and", "any", "are", "as",
        "at", "be", "been", "before", "being", "below", "between", "both", "but", "by", "can",
        "did", "do", "does", "doing", "down", "during", "each", "few", "for", "from", "further",
        "had", "has", "have", "having", "he", "her", "here", "hers", "him", "his", "how", "i",
        "if", "in", "into", "is", "it", "its", "just", "me", "more", "most", "my", "no", "nor",
        "not", "now", "of", "off", "on", "once", "only", "or", "other", "our", "ours", "out",
        "over", "own", "same", "she", "should", "so", "some", "such", "than", "that", "the",
        "their", "them", "then", "there", "these", "they", "this", "those", "through", "to",
        "too", "under", "until", "up", "very", "was", "we", "were", "what", "when", "where",
        "which", "while", "who", "whom", "why", "will", "with", "would", "you", "your",
    ]
    .into_iter()
    .collect()
});

pub fn is_token_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '+' | '#' | '_')
}

/// All tokens of `text`, lowercased, in document order.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !is_token_char(c))
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}

/// Tokens with English stop words removed; the term stream fed to TF-IDF.
pub fn content_terms(text: &str) -> Vec<String> {
    tokenize(text)
        .into_iter()
        .filter(|t| !is_stop_word(t))
        .collect()
}

pub fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.contains(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_lowercases_and_splits() {
        assert_eq!(
            tokenize("Built REST APIs in Node.js, Python/Django."),
            vec!["built", "rest", "apis", "in", "node", "js", "python", "django"]
        );
    }

    #[test]
    fn test_symbol_languages_stay_whole() {
        let tokens = tokenize("Fluent in C++, C# and F#");
        assert!(tokens.contains(&"c++".to_string()));
        assert!(tokens.contains(&"c#".to_string()));
        assert!(tokens.contains(&"f#".to_string()));
    }

    #[test]
    fn test_empty_and_punctuation_only() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" -- / ... ").is_empty());
    }

    #[test]
    fn test_content_terms_drop_stop_words() {
        let terms = content_terms("The engineer and the team shipped it");
        assert_eq!(terms, vec!["engineer", "team", "shipped"]);
    }
}
