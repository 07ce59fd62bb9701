//! Education / experience section extraction.
//!
//! Two independent single-pass scans over the same lines, one per section. Each scan is a
//! two-state machine (`Outside` / `Inside`) driven by keyword containment on the
//! lowercased, trimmed line.

pub const EDUCATION_KEYWORDS: &[&str] = &[
    "education",
    "degree",
    "university",
    "college",
    "school",
    "bachelor",
    "master",
    "phd",
    "diploma",
];

pub const EXPERIENCE_KEYWORDS: &[&str] = &[
    "experience",
    "work",
    "employment",
    "job",
    "career",
    "position",
    "role",
];

pub const SKILLS_INDICATORS: &[&str] = &[
    "skills",
    "abilities",
    "competencies",
    "proficiencies",
    "expertise",
    "technologies",
];

/// Lines need more than this many non-whitespace characters to be kept.
const MIN_CONTENT_CHARS: usize = 5;

/// Words that, alongside the section keywords, make up headings such as
/// "Professional Experience:" or "Education & Training".
const HEADING_WORDS: &[&str] = &[
    "professional",
    "academic",
    "educational",
    "history",
    "background",
    "summary",
    "relevant",
    "technical",
    "core",
    "training",
    "qualifications",
    "certifications",
    "certificates",
    "courses",
    "experiences",
    "degrees",
    "my",
    "and",
    "&",
];

#[derive(Debug, Clone, Copy)]
struct SectionRules {
    enter: &'static [&'static str],
    exit: &'static [&'static str],
}

const EDUCATION: SectionRules = SectionRules {
    enter: EDUCATION_KEYWORDS,
    exit: EXPERIENCE_KEYWORDS,
};

const EXPERIENCE: SectionRules = SectionRules {
    enter: EXPERIENCE_KEYWORDS,
    exit: SKILLS_INDICATORS,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Outside,
    Inside,
}

/// Lines belonging to the education section, trimmed, in document order.
pub fn extract_education(text: &str) -> Vec<String> {
    scan_section(text, EDUCATION)
}

/// Lines belonging to the experience section, trimmed, in document order.
pub fn extract_experience(text: &str) -> Vec<String> {
    scan_section(text, EXPERIENCE)
}

fn scan_section(text: &str, rules: SectionRules) -> Vec<String> {
    let mut state = ScanState::Outside;
    let mut lines = Vec::new();

    for line in text.lines() {
        let trimmed = line.trim();
        let lower = trimmed.to_lowercase();

        match state {
            ScanState::Outside => {
                // A line naming both sections ("Skills & Frameworks") heads the next one.
                if contains_any(&lower, rules.enter) && !contains_any(&lower, rules.exit) {
                    state = ScanState::Inside;
                    if !is_bare_heading(&lower) && has_content(trimmed) {
                        lines.push(trimmed.to_string());
                    }
                }
            }
            ScanState::Inside => {
                if contains_any(&lower, rules.exit) {
                    state = ScanState::Outside;
                } else if has_content(trimmed) {
                    lines.push(trimmed.to_string());
                }
            }
        }
    }

    lines
}

fn contains_any(lower_line: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| lower_line.contains(k))
}

fn has_content(line: &str) -> bool {
    line.chars().filter(|c| !c.is_whitespace()).count() > MIN_CONTENT_CHARS
}

/// True when every word of the lowercased line is section or heading vocabulary.
fn is_bare_heading(lower_line: &str) -> bool {
    lower_line
        .split_whitespace()
        .map(|word| word.trim_matches(|c: char| !c.is_alphanumeric() && c != '&'))
        .filter(|word| !word.is_empty())
        .all(is_heading_word)
}

fn is_heading_word(word: &str) -> bool {
    [EDUCATION_KEYWORDS, EXPERIENCE_KEYWORDS, SKILLS_INDICATORS, HEADING_WORDS]
        .iter()
        .any(|list| list.contains(&word))
}
