use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::profile::ExtractedProfile;

/// The parts of a job posting the matcher reads. Never mutated by the engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobRequirement {
    #[serde(default)]
    pub required_skills: BTreeSet<String>,
    #[serde(default)]
    pub description: String,
}

/// A job record as handed in by the surrounding application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: Uuid,
    #[serde(flatten)]
    pub requirement: JobRequirement,
}

/// A candidate record as handed in by the surrounding application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateEntry {
    pub id: Uuid,
    pub profile: ExtractedProfile,
}
