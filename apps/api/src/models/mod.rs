pub mod job;
pub mod profile;
pub mod score;

pub use job::{CandidateEntry, JobPosting, JobRequirement};
pub use profile::ExtractedProfile;
pub use score::{MatchScore, RankedMatch, ScoreBreakdown, SubScores};
