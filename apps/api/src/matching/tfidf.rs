//! Two-document TF-IDF overlap between a resume and a job description.
//!
//! Corpus = [resume, job description], stop words removed.
//! - `tf(t, d)  = count(t, d) / |d|`
//! - `idf(t)    = 1 + ln(N / (1 + df(t)))`, `N = 2`
//! - score      = Σ over unique resume terms of `tfidf(t, resume) · tfidf(t, job)`,
//!   divided by the number of terms that produced a finite weight.
//!
//! A term contributes a non-zero product only when it occurs in both documents, where
//! `df = 2` and `idf = 1 + ln(2/3) < 1`; with `tf ≤ 1` every product is below 1, so the
//! mean stays in `[0, 1)`. Terms are visited in sorted order so the float sum is
//! reproducible.

use std::collections::BTreeMap;

use crate::extraction::tokenizer::content_terms;

const CORPUS_SIZE: f64 = 2.0;

/// Term counts for one document.
#[derive(Debug, Default)]
struct TermCounts {
    counts: BTreeMap<String, usize>,
    total: usize,
}

impl TermCounts {
    fn from_text(text: &str) -> Self {
        let mut doc = TermCounts::default();
        for term in content_terms(text) {
            *doc.counts.entry(term).or_insert(0) += 1;
            doc.total += 1;
        }
        doc
    }

    fn contains(&self, term: &str) -> bool {
        self.counts.contains_key(term)
    }

    fn tf(&self, term: &str) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.counts.get(term).copied().unwrap_or(0) as f64 / self.total as f64
    }
}

struct Corpus {
    candidate: TermCounts,
    job: TermCounts,
}

impl Corpus {
    fn idf(&self, term: &str) -> f64 {
        let df = [&self.candidate, &self.job]
            .iter()
            .filter(|doc| doc.contains(term))
            .count() as f64;
        1.0 + (CORPUS_SIZE / (1.0 + df)).ln()
    }
}

/// TF-IDF weighted overlap of `candidate_text` with `job_description`, in `[0, 1)`.
pub fn text_similarity(candidate_text: &str, job_description: &str) -> f64 {
    let corpus = Corpus {
        candidate: TermCounts::from_text(candidate_text),
        job: TermCounts::from_text(job_description),
    };

    let mut total = 0.0_f64;
    let mut contributing = 0_usize;

    for term in corpus.candidate.counts.keys() {
        let idf = corpus.idf(term);
        let product = corpus.candidate.tf(term) * idf * corpus.job.tf(term) * idf;
        if product.is_finite() {
            total += product;
            contributing += 1;
        }
    }

    if contributing == 0 {
        0.0
    } else {
        total / contributing as f64
    }
}
