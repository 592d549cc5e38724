use crate::codeforces::model::*;
use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use thiserror::Error;

type Result<T> = std::result::Result<T, CodeforcesError>;

pub const DEFAULT_CODEFORCES_API_URL: &str = "https://codeforces.com/api/";

#[derive(Debug, Error)]
pub enum CodeforcesError {
    #[error("failed to request to codeforces api")]
    RequestError(#[from] reqwest::Error),
    #[error("failed to deserialize JSON data")]
    DeserializeError(#[from] serde_json::Error),
    #[error("invalid codeforces api url given")]
    InvalidUrlError(#[from] url::ParseError),
    #[error("codeforces api returned failure: {0}")]
    ApiError(String),
    #[error("codeforces api returned no result for {0}")]
    EmptyResult(String),
}

/// Read-only queries against the Codeforces public API.
#[async_trait]
pub trait CodeforcesApi {
    /// All submissions of the user, newest first.
    async fn user_status(&self, handle: &str) -> Result<Vec<Submission>>;
    async fn user_info(&self, handle: &str) -> Result<User>;
    async fn problemset_problems(&self) -> Result<ProblemsetResult>;
}

pub struct CodeforcesClient {
    user_status_url: Url,
    user_info_url: Url,
    problemset_url: Url,
    client: Client,
}

impl CodeforcesClient {
    pub fn new(api_url: &str) -> Result<Self> {
        let mut base_url = Url::parse(api_url)?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        let user_status_url = base_url.join("user.status")?;
        let user_info_url = base_url.join("user.info")?;
        let problemset_url = base_url.join("problemset.problems")?;

        let client = Client::builder().gzip(true).build()?;

        Ok(CodeforcesClient {
            user_status_url,
            user_info_url,
            problemset_url,
            client,
        })
    }

    async fn get<T: DeserializeOwned>(&self, url: &Url, params: &[(&str, &str)]) -> Result<T> {
        let res = self.client.get(url.clone()).query(params).send().await?;
        let status = res.status();
        let body = res.text().await?;

        unwrap_envelope(status, &body, url.path())
    }
}

/// Unwrap the `{status, comment, result}` envelope of a response body.
///
/// Codeforces answers failed queries with a non-2xx status and a FAILED envelope,
/// so the body is parsed before the status code is considered.
fn unwrap_envelope<T: DeserializeOwned>(status: StatusCode, body: &str, path: &str) -> Result<T> {
    let envelope: CodeforcesResponse<T> = match serde_json::from_str(body) {
        Ok(envelope) => envelope,
        Err(e) if status.is_success() => return Err(CodeforcesError::DeserializeError(e)),
        Err(_) => {
            return Err(CodeforcesError::ApiError(format!(
                "unexpected status code [{}] from {}",
                status, path
            )))
        }
    };

    if !envelope.is_ok() {
        return Err(CodeforcesError::ApiError(
            envelope
                .comment
                .unwrap_or_else(|| format!("status [{}]", envelope.status)),
        ));
    }

    envelope
        .result
        .ok_or_else(|| CodeforcesError::EmptyResult(path.to_string()))
}

/// First user of a `user.info` result.
fn first_user(users: Vec<User>, handle: &str) -> Result<User> {
    users
        .into_iter()
        .next()
        .ok_or_else(|| CodeforcesError::EmptyResult(handle.to_string()))
}

#[async_trait]
impl CodeforcesApi for CodeforcesClient {
    async fn user_status(&self, handle: &str) -> Result<Vec<Submission>> {
        tracing::debug!("request submissions of {}", handle);
        self.get(&self.user_status_url, &[("handle", handle)]).await
    }

    async fn user_info(&self, handle: &str) -> Result<User> {
        tracing::debug!("request user information of {}", handle);
        let users: Vec<User> = self.get(&self.user_info_url, &[("handles", handle)]).await?;
        first_user(users, handle)
    }

    async fn problemset_problems(&self) -> Result<ProblemsetResult> {
        tracing::debug!("request problemset");
        self.get(&self.problemset_url, &[]).await
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn create_new_client() {
        let client = CodeforcesClient::new(DEFAULT_CODEFORCES_API_URL).unwrap();

        assert_eq!(
            client.user_status_url,
            Url::parse("https://codeforces.com/api/user.status").unwrap()
        );
        assert_eq!(
            client.user_info_url,
            Url::parse("https://codeforces.com/api/user.info").unwrap()
        );
        assert_eq!(
            client.problemset_url,
            Url::parse("https://codeforces.com/api/problemset.problems").unwrap()
        );
    }

    #[test]
    fn create_new_client_without_trailing_slash() {
        let client = CodeforcesClient::new("http://localhost:8080/api").unwrap();

        assert_eq!(
            client.user_info_url,
            Url::parse("http://localhost:8080/api/user.info").unwrap()
        );
    }

    #[test]
    fn create_new_client_with_invalid_url() {
        let result = CodeforcesClient::new("not a url");

        assert!(matches!(result, Err(CodeforcesError::InvalidUrlError(_))));
    }

    #[test]
    fn test_unwrap_ok_envelope() {
        let body = r#"{"status": "OK", "result": [{"handle": "tourist", "rating": 3800}]}"#;

        let users: Vec<User> = unwrap_envelope(StatusCode::OK, body, "/api/user.info").unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].rating, Some(3800));
    }

    #[test]
    fn test_unwrap_failed_envelope() {
        let body = r#"{"status": "FAILED", "comment": "Call limit exceeded"}"#;

        let result: Result<Vec<Submission>> =
            unwrap_envelope(StatusCode::OK, body, "/api/user.status");
        match result {
            Err(CodeforcesError::ApiError(message)) => assert_eq!(message, "Call limit exceeded"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_unwrap_failed_envelope_with_error_status() {
        let body = r#"{"status": "FAILED", "comment": "handle: User with handle nobody not found"}"#;

        let result: Result<Vec<Submission>> =
            unwrap_envelope(StatusCode::BAD_REQUEST, body, "/api/user.status");
        match result {
            Err(CodeforcesError::ApiError(message)) => {
                assert_eq!(message, "handle: User with handle nobody not found")
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_unwrap_html_error_page() {
        let body = "<html><body><h1>502 Bad Gateway</h1></body></html>";

        let result: Result<ProblemsetResult> =
            unwrap_envelope(StatusCode::BAD_GATEWAY, body, "/api/problemset.problems");
        match result {
            Err(CodeforcesError::ApiError(message)) => {
                assert!(message.contains("502"));
                assert!(message.contains("/api/problemset.problems"));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_unwrap_malformed_body_with_success_status() {
        let result: Result<Vec<User>> = unwrap_envelope(StatusCode::OK, "{", "/api/user.info");

        assert!(matches!(result, Err(CodeforcesError::DeserializeError(_))));
    }

    #[test]
    fn test_unwrap_ok_envelope_without_result() {
        let result: Result<Vec<User>> =
            unwrap_envelope(StatusCode::OK, r#"{"status": "OK"}"#, "/api/user.info");

        assert!(matches!(result, Err(CodeforcesError::EmptyResult(path)) if path == "/api/user.info"));
    }

    #[test]
    fn test_first_user_of_empty_result() {
        let result = first_user(Vec::new(), "nobody");

        assert!(matches!(result, Err(CodeforcesError::EmptyResult(handle)) if handle == "nobody"));
    }

    /// Normal system test against the live Codeforces API.
    ///
    /// Run this test with network access.
    #[tokio::test]
    #[ignore]
    async fn test_user_info() {
        let client = CodeforcesClient::new(DEFAULT_CODEFORCES_API_URL).unwrap();
        let user = client.user_info("tourist").await.unwrap();

        assert_eq!(user.handle, String::from("tourist"));
        assert!(user.rating.is_some());
    }

    #[tokio::test]
    #[ignore]
    async fn test_user_not_found() {
        let client = CodeforcesClient::new(DEFAULT_CODEFORCES_API_URL).unwrap();
        let result = client.user_status("this_handle_should_not_exist_0000").await;

        assert!(matches!(result, Err(CodeforcesError::ApiError(_))));
    }

    #[tokio::test]
    #[ignore]
    async fn test_problemset_problems() {
        let client = CodeforcesClient::new(DEFAULT_CODEFORCES_API_URL).unwrap();
        let problemset = client.problemset_problems().await.unwrap();

        assert!(problemset
            .problems
            .iter()
            .any(|problem| problem.key().as_deref() == Some("1A")));
    }
}
