pub mod codeforces;
pub mod leetcode;
