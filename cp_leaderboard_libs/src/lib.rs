pub mod codeforces;
pub mod leetcode;

pub use codeforces::{
    client::{CodeforcesApi, CodeforcesClient, CodeforcesError},
    model::{Problem, Submission, User},
};
pub use leetcode::client::{LeetCodeApi, LeetCodeClient, LeetCodeError};
