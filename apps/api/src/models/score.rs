use serde::{Deserialize, Serialize};

/// The three raw similarity signals for one (candidate, job) pair, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SubScores {
    pub skills: f64,
    pub text: f64,
    pub education: f64,
}

/// Weighted contribution of each signal to the final score (sub-score × weight).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub skills: f64,
    pub text: f64,
    pub education: f64,
}

/// Compatibility of one candidate with one job.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchScore {
    /// 0 – 100
    pub score: u8,
    pub breakdown: ScoreBreakdown,
}

impl MatchScore {
    /// Score given to a pair that could not be scored.
    pub fn zero() -> Self {
        Self::default()
    }
}

/// One entry of a ranked batch result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedMatch<I> {
    pub id: I,
    pub score: MatchScore,
}
