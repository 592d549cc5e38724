//! In-memory stand-in for the Codeforces API used by tests.

use async_trait::async_trait;
use cp_leaderboard_libs::{
    codeforces::model::ProblemsetResult, CodeforcesApi, CodeforcesError, Problem, Submission,
    User,
};
use std::{
    collections::{HashMap, HashSet},
    sync::Mutex,
};

pub fn problem(contest_id: i64, index: &str, rating: Option<i32>) -> Problem {
    Problem {
        contest_id: Some(contest_id),
        problemset_name: None,
        index: Some(index.to_string()),
        name: format!("Problem {}{}", contest_id, index),
        rating,
        tags: Vec::new(),
    }
}

pub fn submission(contest_id: i64, index: &str, verdict: &str, at: i64) -> Submission {
    Submission {
        id: at,
        contest_id: Some(contest_id),
        creation_time_seconds: at,
        problem: problem(contest_id, index, None),
        author: None,
        programming_language: String::from("Rust 2021"),
        verdict: Some(verdict.to_string()),
    }
}

#[derive(Default)]
pub struct FakeCodeforces {
    pub submissions: HashMap<String, Vec<Submission>>,
    pub ratings: HashMap<String, Option<i32>>,
    /// `None` makes `problemset.problems` fail.
    pub problems: Option<Vec<Problem>>,
    /// Handles whose every query fails.
    pub broken: HashSet<String>,
    pub requested: Mutex<Vec<String>>,
}

impl FakeCodeforces {
    fn check(&self, handle: &str) -> Result<(), CodeforcesError> {
        if let Ok(mut requested) = self.requested.lock() {
            requested.push(handle.to_string());
        }
        if self.broken.contains(handle) {
            return Err(CodeforcesError::ApiError(format!(
                "handle: User with handle {} not found",
                handle
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl CodeforcesApi for FakeCodeforces {
    async fn user_status(&self, handle: &str) -> Result<Vec<Submission>, CodeforcesError> {
        self.check(handle)?;
        Ok(self.submissions.get(handle).cloned().unwrap_or_default())
    }

    async fn user_info(&self, handle: &str) -> Result<User, CodeforcesError> {
        self.check(handle)?;
        Ok(User {
            handle: handle.to_string(),
            rating: self.ratings.get(handle).copied().flatten(),
            max_rating: None,
            rank: None,
            max_rank: None,
        })
    }

    async fn problemset_problems(&self) -> Result<ProblemsetResult, CodeforcesError> {
        match &self.problems {
            Some(problems) => Ok(ProblemsetResult {
                problems: problems.clone(),
                problem_statistics: Vec::new(),
            }),
            None => Err(CodeforcesError::ApiError(String::from(
                "Call limit exceeded",
            ))),
        }
    }
}
