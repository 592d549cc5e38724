mod cmd;
mod modules;
mod types;

use crate::cmd::{codeforces, leetcode};
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use std::{env, process::ExitCode, str::FromStr};
use tokio::runtime::Builder;
use tracing_subscriber::{
    filter::{EnvFilter, LevelFilter},
    fmt::{
        self,
        time::{FormatTime, OffsetTime, UtcTime},
    },
};

#[derive(Debug, Parser)]
#[command(name = "cp_leaderboard")]
#[command(about = "Collect competitive programming activity for the leaderboard")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Summarize Codeforces activity of the roster
    Codeforces,
    /// Export LeetCode profiles of the roster
    #[command(name = "leetcode")]
    LeetCode,
}

fn init_subscriber<T>(filter: EnvFilter, timer: T)
where
    T: FormatTime + Send + Sync + 'static,
{
    let format = fmt::format()
        .with_level(true)
        .with_target(true)
        .with_ansi(false)
        .with_thread_ids(true)
        .with_timer(timer);
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .event_format(format)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("failed to set tracing subscriber: {}", e);
    }
}

fn main() -> ExitCode {
    dotenv().ok();

    let log_level = env::var("RUST_LOG").unwrap_or(String::from("info"));
    let filter = EnvFilter::builder()
        .with_default_directive(
            LevelFilter::from_str(&log_level)
                .unwrap_or(LevelFilter::INFO)
                .into(),
        )
        .from_env_lossy();
    // The local offset can't be determined on some platforms once threads exist.
    match OffsetTime::local_rfc_3339() {
        Ok(timer) => init_subscriber(filter, timer),
        Err(_) => init_subscriber(filter, UtcTime::rfc_3339()),
    }

    let cli = Cli::parse();

    let runtime = match Builder::new_multi_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(e) => {
            tracing::error!("failed to build tokio runtime: {:?}", e);
            return ExitCode::FAILURE;
        }
    };

    let result = match cli.command {
        Commands::Codeforces => runtime.block_on(codeforces::run()),
        Commands::LeetCode => runtime.block_on(leetcode::run()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("command failed: {:?}", e);
            ExitCode::FAILURE
        }
    }
}
