use crate::{
    modules::codeforces::{
        aggregator::{self, ProblemRatings},
        crawler::CodeforcesCrawler,
    },
    types::summary::UserSummary,
};
use cp_leaderboard_libs::CodeforcesApi;
use futures::{future, stream, StreamExt};

pub struct LeaderboardGenerator<'a, C> {
    crawler: CodeforcesCrawler<'a, C>,
}

impl<'a, C: CodeforcesApi> LeaderboardGenerator<'a, C> {
    pub fn new(api: &'a C) -> Self {
        Self {
            crawler: CodeforcesCrawler::new(api),
        }
    }

    async fn summarize_user(
        &self,
        username: &str,
        ratings: &ProblemRatings,
        now: i64,
    ) -> Option<UserSummary> {
        tracing::info!("Fetching data for {}", username);
        let (submissions, rating) = tokio::join!(
            self.crawler.fetch_submissions(username),
            self.crawler.fetch_rating(username)
        );

        aggregator::summarize(username, rating, &submissions, ratings, now)
    }

    /// Summaries of every active user in roster order.
    ///
    /// The problem ratings are fetched once, then users are processed one at a time.
    /// `now` is the epoch second the trailing window is measured from.
    pub async fn generate(&self, roster: &[String], now: i64) -> Vec<UserSummary> {
        let ratings = self.crawler.fetch_problem_ratings().await;
        let ratings = &ratings;

        let summaries: Vec<UserSummary> = stream::iter(roster)
            .then(|username| self.summarize_user(username, ratings, now))
            .filter_map(future::ready)
            .collect()
            .await;

        tracing::info!(
            "{} of {} users have activity to report.",
            summaries.len(),
            roster.len()
        );

        summaries
    }
}
