use crate::{modules::codeforces::aggregator::{self, ProblemRatings}, types::summary::Rating};
use cp_leaderboard_libs::{CodeforcesApi, Submission};

/// Fetch layer over the Codeforces API.
///
/// Every query degrades to an empty or default value on failure and logs the cause, so a broken
/// user or an API outage never aborts the run.
pub struct CodeforcesCrawler<'a, C> {
    api: &'a C,
}

impl<'a, C: CodeforcesApi> CodeforcesCrawler<'a, C> {
    pub fn new(api: &'a C) -> Self {
        Self { api }
    }

    /// Accepted submissions of the user.
    pub async fn fetch_submissions(&self, handle: &str) -> Vec<Submission> {
        match self.api.user_status(handle).await {
            Ok(submissions) => {
                let accepted: Vec<Submission> = submissions
                    .into_iter()
                    .filter(|submission| submission.is_accepted())
                    .collect();
                tracing::debug!("{} accepted submissions of {}", accepted.len(), handle);
                accepted
            }
            Err(e) => {
                tracing::error!("failed to fetch submissions of {}: {:?}", handle, e);
                Vec::new()
            }
        }
    }

    /// Current rating of the user. A rating of 0 is reported as unrated.
    pub async fn fetch_rating(&self, handle: &str) -> Rating {
        match self.api.user_info(handle).await {
            Ok(user) => Rating::from(user.rating.filter(|rating| *rating != 0)),
            Err(e) => {
                tracing::error!("failed to fetch rating of {}: {:?}", handle, e);
                Rating::Unrated
            }
        }
    }

    /// Rating of every rated problem. An empty table leaves all submissions untiered.
    pub async fn fetch_problem_ratings(&self) -> ProblemRatings {
        tracing::info!("Attempting to get problem ratings from Codeforces...");
        match self.api.problemset_problems().await {
            Ok(problemset) => {
                let ratings = aggregator::rating_table(&problemset.problems);
                tracing::info!("{} problem ratings collected.", ratings.len());
                ratings
            }
            Err(e) => {
                tracing::error!("failed to fetch problem ratings: {:?}", e);
                ProblemRatings::new()
            }
        }
    }
}
