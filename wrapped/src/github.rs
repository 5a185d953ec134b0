use reqwest::{header, Client};
use serde::Deserialize;

const GITHUB_API_BASE_URL: &str = "https://api.github.com";

/// Client for the GitHub REST API. Only used to resolve the session user;
/// the yearly stat aggregation runs in an external job.
#[derive(Clone, Debug)]
pub(crate) struct GithubClient {
    client: Client,
}

#[derive(Deserialize, Debug, Clone)]
pub(crate) struct GithubUser {
    pub(crate) id: u64,
    pub(crate) login: String,
    pub(crate) name: Option<String>,
    pub(crate) avatar_url: String,
}

impl GithubClient {
    pub(crate) fn new() -> Self {
        // GitHub rejects requests without a user agent
        let client = Client::builder()
            .user_agent(concat!("wrapped/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap();
        Self { client }
    }

    /// Resolve an OAuth access token to the user it belongs to.
    pub(crate) async fn current_user(&self, token: &str) -> Result<GithubUser, reqwest::Error> {
        self.client
            .get(format!("{GITHUB_API_BASE_URL}/user"))
            .bearer_auth(token)
            .header(header::ACCEPT, "application/vnd.github+json")
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }
}
