use cp_leaderboard_libs::LeetCodeApi;
use futures::{future, stream, StreamExt};
use serde_json::Value;

/// Maximum number of profile requests in flight at once.
const CONCURRENCY: usize = 4;

pub struct ProfileCrawler<'a, C> {
    api: &'a C,
}

impl<'a, C: LeetCodeApi> ProfileCrawler<'a, C> {
    pub fn new(api: &'a C) -> Self {
        Self { api }
    }

    async fn fetch_profile(&self, username: &str) -> Option<Value> {
        match self.api.user_profile(username).await {
            Ok(profile) => {
                tracing::info!("Profile of {} fetched", username);
                Some(profile)
            }
            Err(e) => {
                tracing::error!("failed to fetch profile of {}: {:?}", username, e);
                None
            }
        }
    }

    /// Profiles of the roster users in roster order.
    ///
    /// Users whose profile can't be fetched are left out.
    pub async fn crawl(&self, roster: &[String]) -> Vec<Value> {
        let profiles: Vec<Value> = stream::iter(roster)
            .map(|username| self.fetch_profile(username))
            .buffered(CONCURRENCY)
            .filter_map(future::ready)
            .collect()
            .await;

        tracing::info!(
            "{} of {} profiles collected.",
            profiles.len(),
            roster.len()
        );

        profiles
    }
}
