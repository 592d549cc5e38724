pub mod codeforces;
pub mod leetcode;
pub mod roster;
pub mod writer;
