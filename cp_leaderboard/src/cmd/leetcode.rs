use crate::modules::{leetcode::crawler::ProfileCrawler, roster, writer};
use anyhow::{Context, Result};
use cp_leaderboard_libs::{leetcode::client::DEFAULT_LEETCODE_PROFILE_URL, LeetCodeClient};
use std::path::Path;

/// Newline-delimited list of LeetCode usernames.
pub const ROSTER_PATH: &str = "./data/leetcode_users.txt";
pub const OUTPUT_PATH: &str = "./data/leetcode_data.json";

pub async fn run() -> Result<()> {
    let client = LeetCodeClient::new(DEFAULT_LEETCODE_PROFILE_URL).with_context(|| {
        let message = format!(
            "couldn't create LeetCode client for {}",
            DEFAULT_LEETCODE_PROFILE_URL
        );
        tracing::error!(message);
        message
    })?;

    let roster = roster::load(Path::new(ROSTER_PATH)).await?;

    let crawler = ProfileCrawler::new(&client);
    let profiles = crawler.crawl(&roster).await;

    writer::save(Path::new(OUTPUT_PATH), &profiles).await
}
