use crate::modules::{codeforces::generator::LeaderboardGenerator, roster, writer};
use anyhow::{Context, Result};
use chrono::Utc;
use cp_leaderboard_libs::{codeforces::client::DEFAULT_CODEFORCES_API_URL, CodeforcesClient};
use std::path::Path;

/// Newline-delimited list of Codeforces handles.
pub const ROSTER_PATH: &str = "./data/codeforces_users.txt";
pub const OUTPUT_PATH: &str = "./data/codeforces_data.json";

pub async fn run() -> Result<()> {
    let client = CodeforcesClient::new(DEFAULT_CODEFORCES_API_URL).with_context(|| {
        let message = format!(
            "couldn't create Codeforces client for {}",
            DEFAULT_CODEFORCES_API_URL
        );
        tracing::error!(message);
        message
    })?;

    let roster = roster::load(Path::new(ROSTER_PATH)).await?;

    let generator = LeaderboardGenerator::new(&client);
    let summaries = generator.generate(&roster, Utc::now().timestamp()).await;

    writer::save(Path::new(OUTPUT_PATH), &summaries).await
}
