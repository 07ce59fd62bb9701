//! Match Aggregator: folds the three sub-scores into one 0–100 integer.
//!
//! `score = round((0.6·skills + 0.3·text + 0.1·education) · 100)`
//!
//! Each sub-score is contracted to `[0, 1]` and the weights sum to 1, so the result is
//! bounded without clamping. A sub-score outside its contract is rejected rather than
//! silently clamped.

use serde::{Deserialize, Serialize};

use crate::errors::EngineError;
use crate::matching::similarity::{education_score, jaccard_similarity, text_similarity};
use crate::models::{ExtractedProfile, JobRequirement, MatchScore, ScoreBreakdown, SubScores};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchWeights {
    pub skills: f64,
    pub text: f64,
    pub education: f64,
}

impl MatchWeights {
    pub const DEFAULT: MatchWeights = MatchWeights {
        skills: 0.6,
        text: 0.3,
        education: 0.1,
    };
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Computes the three raw signals for a pair.
pub fn sub_scores(profile: &ExtractedProfile, requirement: &JobRequirement) -> SubScores {
    SubScores {
        skills: jaccard_similarity(&profile.skills, &requirement.required_skills),
        text: text_similarity(&profile.raw_text, &requirement.description),
        education: education_score(&profile.education),
    }
}

/// Weights and rounds pre-computed sub-scores.
pub fn aggregate(sub: SubScores) -> Result<MatchScore, EngineError> {
    let skills = checked("skills", sub.skills)?;
    let text = checked("text", sub.text)?;
    let education = checked("education", sub.education)?;

    let w = MatchWeights::DEFAULT;
    let breakdown = ScoreBreakdown {
        skills: skills * w.skills,
        text: text * w.text,
        education: education * w.education,
    };
    let weighted = breakdown.skills + breakdown.text + breakdown.education;

    Ok(MatchScore {
        score: (weighted * 100.0).round() as u8,
        breakdown,
    })
}

/// `(ExtractedProfile, JobRequirement) -> score in [0, 100]`.
pub fn score(
    profile: &ExtractedProfile,
    requirement: &JobRequirement,
) -> Result<MatchScore, EngineError> {
    aggregate(sub_scores(profile, requirement))
}

fn checked(component: &'static str, value: f64) -> Result<f64, EngineError> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(EngineError::InvalidScoreInput { component, value })
    }
}
