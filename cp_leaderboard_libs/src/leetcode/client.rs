use async_trait::async_trait;
use reqwest::{Client, Url};
use serde_json::Value;
use thiserror::Error;

type Result<T> = std::result::Result<T, LeetCodeError>;

pub const DEFAULT_LEETCODE_PROFILE_URL: &str = "http://localhost:8081/";

#[derive(Debug, Error)]
pub enum LeetCodeError {
    #[error("failed to request to leetcode profile api")]
    RequestError(#[from] reqwest::Error),
    #[error("invalid leetcode profile api url given")]
    InvalidUrlError(#[from] url::ParseError),
    #[error("{0}")]
    UnexpectedError(String),
}

/// Profile lookups served by a LeetCode profile proxy.
#[async_trait]
pub trait LeetCodeApi {
    /// Raw profile document of the user, passed through untouched.
    async fn user_profile(&self, username: &str) -> Result<Value>;
}

pub struct LeetCodeClient {
    base_url: Url,
    client: Client,
}

impl LeetCodeClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(LeetCodeError::UnexpectedError(format!(
                "{} cannot be used as a base url",
                base_url
            )));
        }

        Ok(LeetCodeClient {
            base_url,
            client: Client::new(),
        })
    }

    fn profile_url(&self, username: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("userProfile").push(username);
        }
        url
    }
}

#[async_trait]
impl LeetCodeApi for LeetCodeClient {
    async fn user_profile(&self, username: &str) -> Result<Value> {
        let res = self.client.get(self.profile_url(username)).send().await?;
        match res.error_for_status_ref() {
            Ok(_) => {
                let body: Value = res.json().await?;
                Ok(body)
            }
            Err(e) => Err(LeetCodeError::UnexpectedError(format!(
                "unexpected error [{}] while fetching profile of {}",
                e, username
            ))),
        }
    }
}
