//! Feature Extractor: derives skills, education and experience from resume text.
//!
//! Pure function of the text; never fails on a valid `&str`.

use std::collections::BTreeSet;

use tracing::debug;

use crate::extraction::sections::{extract_education, extract_experience};
use crate::extraction::tokenizer::tokenize;
use crate::extraction::vocabulary::{term_match, TermMatch, SKILL_VOCABULARY};
use crate::models::ExtractedProfile;

/// Builds the full profile for a resume's text.
pub fn extract_features(text: &str) -> ExtractedProfile {
    let profile = ExtractedProfile {
        raw_text: text.to_string(),
        skills: extract_skills(text),
        education: extract_education(text),
        experience: extract_experience(text),
    };

    debug!(
        skills = profile.skills.len(),
        education_lines = profile.education.len(),
        experience_lines = profile.experience.len(),
        "Extracted resume features"
    );
    profile
}

/// Vocabulary terms present in `text`. Presence only, no weighting.
pub fn extract_skills(text: &str) -> BTreeSet<String> {
    let lower = text.to_lowercase();
    let tokens: BTreeSet<String> = tokenize(&lower).into_iter().collect();

    SKILL_VOCABULARY
        .iter()
        .filter(|term| match term_match(term) {
            TermMatch::Token => tokens.contains(**term),
            TermMatch::Phrase => lower.contains(**term),
        })
        .map(|term| term.to_string())
        .collect()
}
