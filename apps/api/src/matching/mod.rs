// Candidate-job matching: three bounded similarity signals, a fixed-weight aggregate,
// and ranked batch scoring. Pure and synchronous; no I/O, no shared mutable state.

pub mod aggregator;
pub mod batch;
pub mod handlers;
pub mod similarity;
pub mod tfidf;

pub use aggregator::{score, MatchWeights};
pub use batch::{match_many_to_one, match_one_to_many};
