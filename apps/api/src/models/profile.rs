use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Structured features derived from one resume. Immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedProfile {
    pub raw_text: String,
    /// Lowercased, deduplicated skill terms.
    #[serde(default)]
    pub skills: BTreeSet<String>,
    #[serde(default)]
    pub education: Vec<String>,
    #[serde(default)]
    pub experience: Vec<String>,
}
