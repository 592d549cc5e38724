use crate::types::summary::{DifficultyTier, Rating, TierCounts, UserSummary};
use cp_leaderboard_libs::{Problem, Submission};
use std::collections::HashMap;

/// Length of the recency window counted as "solved last week".
pub const TRAILING_WINDOW_SECONDS: i64 = 7 * 24 * 60 * 60;

/// Difficulty rating of each problem keyed by its composite key (`1850A`).
pub type ProblemRatings = HashMap<String, i32>;

/// Build the rating lookup from the problemset. Problems without a key or a rating are left out.
pub fn rating_table(problems: &[Problem]) -> ProblemRatings {
    problems
        .iter()
        .filter_map(|problem| Some((problem.key()?, problem.rating?)))
        .collect()
}

/// Summarize one user's accepted submissions.
///
/// Each accepted submission counts once toward `total_solved`, toward the tier of its problem
/// when the problem is rated 800 or above, and toward `solved_last_week` when it was made at or
/// after `now - TRAILING_WINDOW_SECONDS`. Returns `None` for a user with no tiered submission and
/// nothing in the trailing window.
pub fn summarize(
    username: &str,
    rating: Rating,
    submissions: &[Submission],
    ratings: &ProblemRatings,
    now: i64,
) -> Option<UserSummary> {
    let window_start = now - TRAILING_WINDOW_SECONDS;

    let mut tiers = TierCounts::default();
    let mut solved_last_week: u32 = 0;
    let mut total_solved: u32 = 0;

    for submission in submissions.iter().filter(|submission| submission.is_accepted()) {
        total_solved += 1;

        if let Some(tier) = submission
            .problem
            .key()
            .and_then(|key| ratings.get(&key))
            .and_then(|rating| DifficultyTier::from_rating(*rating))
        {
            tiers.add(tier);
        }

        if submission.creation_time_seconds >= window_start {
            solved_last_week += 1;
        }
    }

    if tiers.total() == 0 && solved_last_week == 0 {
        tracing::debug!("{} has no recent or rated activity, skipped", username);
        return None;
    }

    Some(UserSummary {
        username: username.to_string(),
        rating,
        tiers,
        solved_last_week,
        total_solved,
    })
}
