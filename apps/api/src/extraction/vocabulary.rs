use crate::extraction::tokenizer::is_token_char;

/// Reference vocabulary of skill terms recognised in resume text. Lowercase.
pub const SKILL_VOCABULARY: &[&str] = &[
    // Languages and web
    "javascript", "typescript", "react", "node", "express", "mongodb", "sql", "nosql",
    "html", "css", "angular", "vue", "python", "java", "c++", "c#", "php", "ruby",
    // Cloud and delivery
    "aws", "azure", "gcp", "docker", "kubernetes", "jenkins", "git", "ci/cd",
    // Process and design tools
    "agile", "scrum", "jira", "figma", "adobe", "photoshop", "illustrator",
    // Soft skills
    "communication", "leadership", "teamwork", "problem-solving", "analytical",
    // Data
    "machine learning", "ai", "data science", "data analysis", "big data",
];

/// How a vocabulary term is located in resume text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermMatch {
    /// Must equal a whole token (`java` never matches inside `javascript`).
    Token,
    /// Contains a separator (`machine learning`, `ci/cd`); matched as a contiguous
    /// substring of the lowercased text.
    Phrase,
}

pub fn term_match(term: &str) -> TermMatch {
    if term.chars().all(is_token_char) {
        TermMatch::Token
    } else {
        TermMatch::Phrase
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_vocabulary_is_lowercase_and_unique() {
        let unique: HashSet<_> = SKILL_VOCABULARY.iter().collect();
        assert_eq!(unique.len(), SKILL_VOCABULARY.len());
        for term in SKILL_VOCABULARY {
            assert_eq!(*term, term.to_lowercase(), "{term} is not lowercase");
        }
    }

    #[test]
    fn test_match_kind_classification() {
        assert_eq!(term_match("python"), TermMatch::Token);
        assert_eq!(term_match("c++"), TermMatch::Token);
        assert_eq!(term_match("machine learning"), TermMatch::Phrase);
        assert_eq!(term_match("ci/cd"), TermMatch::Phrase);
        assert_eq!(term_match("problem-solving"), TermMatch::Phrase);
    }

    /// Token terms that are prefixes of other terms must stay whole-token matches,
    /// otherwise substring search would report both.
    #[test]
    fn test_prefix_overlaps_are_token_matched() {
        let overlaps: Vec<(&str, &str)> = SKILL_VOCABULARY
            .iter()
            .flat_map(|a| SKILL_VOCABULARY.iter().map(move |b| (*a, *b)))
            .filter(|(a, b)| a != b && b.contains(a))
            .collect();

        assert!(overlaps.contains(&("java", "javascript")));
        assert!(overlaps.contains(&("sql", "nosql")));
        for (inner, outer) in overlaps {
            assert_eq!(
                term_match(inner),
                TermMatch::Token,
                "{inner} overlaps {outer} but is substring-matched"
            );
        }
    }
}
