use std::collections::BTreeSet;

pub use crate::matching::tfidf::text_similarity;

/// Credit given when any education line was found. Coarse by intent: presence, not relevance.
pub const EDUCATION_PRESENT_SCORE: f64 = 0.7;

/// Jaccard similarity `|A ∩ B| / |A ∪ B|` over case-insensitive skill sets.
/// Two empty sets score 0.
pub fn jaccard_similarity<'a, A, B>(a: A, b: B) -> f64
where
    A: IntoIterator<Item = &'a String>,
    B: IntoIterator<Item = &'a String>,
{
    let a = normalize(a);
    let b = normalize(b);

    let union = a.union(&b).count();
    if union == 0 {
        return 0.0;
    }
    let intersection = a.intersection(&b).count();
    intersection as f64 / union as f64
}

/// `0.7` when the education sequence is non-empty, `0` otherwise.
pub fn education_score(education: &[String]) -> f64 {
    if education.is_empty() {
        0.0
    } else {
        EDUCATION_PRESENT_SCORE
    }
}

fn normalize<'a>(items: impl IntoIterator<Item = &'a String>) -> BTreeSet<String> {
    items
        .into_iter()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}
