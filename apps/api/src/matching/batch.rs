//! Batch Matcher: one candidate against N jobs, or one job against N candidates.
//!
//! Pairs are independent, so large batches are split into contiguous chunks and scored
//! on scoped worker threads (one per available core). Chunk results are concatenated in
//! input order before a stable descending sort, so equal scores keep their input order.

use std::num::NonZeroUsize;
use std::thread;

use tracing::{info, warn};

use crate::matching::aggregator::score;
use crate::models::{ExtractedProfile, JobRequirement, MatchScore, RankedMatch};

/// Below this many pairs the batch is scored on the calling thread.
const PARALLEL_THRESHOLD: usize = 64;

/// Scores `profile` against every job and ranks the results.
pub fn match_one_to_many<I>(
    profile: &ExtractedProfile,
    jobs: &[(I, JobRequirement)],
) -> Vec<RankedMatch<I>>
where
    I: Clone + Send + Sync,
{
    let ranked = rank(jobs, |(id, requirement)| RankedMatch {
        id: id.clone(),
        score: score_or_zero(profile, requirement),
    });
    info!(jobs = jobs.len(), "Matched candidate against jobs");
    ranked
}

/// Scores every candidate against `requirement` and ranks the results.
pub fn match_many_to_one<I>(
    requirement: &JobRequirement,
    candidates: &[(I, ExtractedProfile)],
) -> Vec<RankedMatch<I>>
where
    I: Clone + Send + Sync,
{
    let ranked = rank(candidates, |(id, profile)| RankedMatch {
        id: id.clone(),
        score: score_or_zero(profile, requirement),
    });
    info!(
        candidates = candidates.len(),
        "Matched job against candidates"
    );
    ranked
}

/// A pair that cannot be scored gets 0 instead of failing the whole batch.
fn score_or_zero(profile: &ExtractedProfile, requirement: &JobRequirement) -> MatchScore {
    match score(profile, requirement) {
        Ok(result) => result,
        Err(e) => {
            if cfg!(debug_assertions) {
                panic!("sub-score contract violated: {e}");
            }
            warn!("Scoring pair as zero: {e}");
            MatchScore::zero()
        }
    }
}

fn rank<T, I, F>(items: &[T], score_one: F) -> Vec<RankedMatch<I>>
where
    T: Sync,
    I: Send,
    F: Fn(&T) -> RankedMatch<I> + Sync,
{
    let mut ranked = score_all(items, &score_one);
    // `sort_by` is stable: ties keep input order.
    ranked.sort_by(|a, b| b.score.score.cmp(&a.score.score));
    ranked
}

fn score_all<T, R, F>(items: &[T], score_one: &F) -> Vec<R>
where
    T: Sync,
    R: Send,
    F: Fn(&T) -> R + Sync,
{
    let workers = thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1);

    if items.len() < PARALLEL_THRESHOLD || workers == 1 {
        return items.iter().map(score_one).collect();
    }

    let chunk_size = items.len().div_ceil(workers);
    thread::scope(|scope| {
        let handles: Vec<_> = items
            .chunks(chunk_size)
            .map(|chunk| scope.spawn(move || chunk.iter().map(score_one).collect::<Vec<R>>()))
            .collect();

        handles
            .into_iter()
            .flat_map(|handle| match handle.join() {
                Ok(results) => results,
                Err(payload) => std::panic::resume_unwind(payload),
            })
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn skills(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn profile(skill_list: &[&str]) -> ExtractedProfile {
        ExtractedProfile {
            raw_text: String::new(),
            skills: skills(skill_list),
            education: vec![],
            experience: vec![],
        }
    }

    fn job(skill_list: &[&str]) -> JobRequirement {
        JobRequirement {
            required_skills: skills(skill_list),
            description: String::new(),
        }
    }

    #[test]
    fn test_one_to_many_sorted_descending() {
        let candidate = profile(&["python", "react", "sql"]);
        let jobs = vec![
            ("low", job(&["java"])),
            ("high", job(&["python", "react", "sql"])),
            ("mid", job(&["python", "react", "docker"])),
        ];

        let ranked = match_one_to_many(&candidate, &jobs);
        let order: Vec<(&str, u8)> = ranked.iter().map(|r| (r.id, r.score.score)).collect();
        assert_eq!(order, vec![("high", 60), ("mid", 30), ("low", 0)]);
    }

    #[test]
    fn test_many_to_one_sorted_descending() {
        let requirement = job(&["python", "docker"]);
        let candidates = vec![
            (1_u32, profile(&["docker"])),
            (2, profile(&["python", "docker"])),
            (3, profile(&[])),
        ];

        let ranked = match_many_to_one(&requirement, &candidates);
        let ids: Vec<u32> = ranked.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
        assert_eq!(ranked[2].score.score, 0);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let candidate = profile(&["python"]);
        let jobs: Vec<(usize, JobRequirement)> = vec![
            (0, job(&["go"])),
            (1, job(&["python"])),
            (2, job(&["rust"])),
            (3, job(&["python"])),
            (4, job(&["java"])),
        ];

        let ranked = match_one_to_many(&candidate, &jobs);
        let ids: Vec<usize> = ranked.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3, 0, 2, 4]);
    }

    #[test]
    fn test_empty_inputs_yield_empty_results() {
        let jobs: Vec<(u32, JobRequirement)> = vec![];
        assert!(match_one_to_many(&profile(&["python"]), &jobs).is_empty());

        let candidates: Vec<(u32, ExtractedProfile)> = vec![];
        assert!(match_many_to_one(&job(&["python"]), &candidates).is_empty());
    }

    #[test]
    fn test_degenerate_profile_scores_zero_without_aborting() {
        let requirement = job(&["python"]);
        let candidates = vec![
            ("empty", ExtractedProfile::default()),
            ("match", profile(&["python"])),
        ];
        let ranked = match_many_to_one(&requirement, &candidates);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].id, "match");
        assert_eq!(ranked[1].score, MatchScore::zero());
    }

    #[test]
    fn test_large_batch_matches_sequential_scoring() {
        let candidate = profile(&["python", "react", "sql"]);
        let pool = [
            &["python"][..],
            &["python", "react"][..],
            &["docker"][..],
            &["python", "react", "sql"][..],
            &["sql", "aws"][..],
        ];
        let jobs: Vec<(usize, JobRequirement)> = (0..500)
            .map(|i| (i, job(pool[i % pool.len()])))
            .collect();

        let ranked = match_one_to_many(&candidate, &jobs);
        assert_eq!(ranked.len(), jobs.len());

        let mut expected: Vec<(usize, u8)> = jobs
            .iter()
            .map(|(id, req)| (*id, score(&candidate, req).unwrap().score))
            .collect();
        expected.sort_by(|a, b| b.1.cmp(&a.1));

        let actual: Vec<(usize, u8)> = ranked.iter().map(|r| (r.id, r.score.score)).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_score_all_preserves_order_across_chunks() {
        let items: Vec<usize> = (0..1000).collect();
        let doubled = score_all(&items, &|x: &usize| x * 2);
        assert_eq!(doubled, items.iter().map(|x| x * 2).collect::<Vec<_>>());
    }
}
