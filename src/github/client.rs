use reqwest::{header, Client, Response, StatusCode};

use crate::error::{Error, Result};
use crate::models::{GitHubUser, Repository};

const DEFAULT_BASE_URL: &str = "https://api.github.com";

pub struct GitHubClient {
    client: Client,
    base_url: String,
}

impl GitHubClient {
    /// `token` is optional; without one requests go out unauthenticated and
    /// hit GitHub's lower rate limit sooner.
    pub fn new(token: Option<&str>) -> Result<Self> {
        Self::with_base_url(token, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(token: Option<&str>, base_url: &str) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        if let Some(token) = token.map(str::trim).filter(|t| !t.is_empty()) {
            headers.insert(
                header::AUTHORIZATION,
                header::HeaderValue::from_str(&authorization_value(token))?,
            );
        }
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static("gitfolio/0.1"),
        );

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub async fn get_user(&self, username: &str) -> Result<GitHubUser> {
        let url = format!("{}/users/{}", self.base_url, username);
        tracing::info!("Fetching user: {}", username);

        let response = self
            .client
            .get(&url)
            .header(header::ACCEPT, "application/vnd.github.v3+json")
            .send()
            .await?;

        let response = check_status(response, username).await?;
        Ok(response.json().await?)
    }

    /// Up to 100 owned repositories, most recently updated first.
    pub async fn get_user_repos(&self, username: &str) -> Result<Vec<Repository>> {
        let url = format!(
            "{}/users/{}/repos?sort=updated&per_page=100&type=owner",
            self.base_url, username
        );
        tracing::info!("Fetching repositories for: {}", username);

        let response = self
            .client
            .get(&url)
            .header(header::ACCEPT, "application/vnd.github.v3+json")
            .send()
            .await?;

        let response = check_status(response, username).await?;
        Ok(response.json().await?)
    }

    /// Raw README text, or `None` if the repository has none or the request fails.
    pub async fn get_readme(&self, owner: &str, repo: &str) -> Option<String> {
        let url = format!("{}/repos/{}/{}/readme", self.base_url, owner, repo);
        tracing::debug!("Fetching README: {}/{}", owner, repo);

        let response = match self
            .client
            .get(&url)
            .header(header::ACCEPT, "application/vnd.github.v3.raw")
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                tracing::debug!("README request for {}/{} failed: {}", owner, repo, e);
                return None;
            }
        };

        if !response.status().is_success() {
            tracing::debug!("No README for {}/{}: {}", owner, repo, response.status());
            return None;
        }

        response.text().await.ok()
    }
}

/// Fine-grained tokens use the Bearer scheme; classic tokens use `token`.
fn authorization_value(token: &str) -> String {
    if token.starts_with("github_pat_") {
        format!("Bearer {}", token)
    } else {
        format!("token {}", token)
    }
}

async fn check_status(response: Response, username: &str) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    match status {
        StatusCode::NOT_FOUND => Err(Error::UserNotFound(username.to_string())),
        StatusCode::UNAUTHORIZED => Err(Error::Unauthorized),
        StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS => {
            Err(Error::RateLimited(seconds_until_reset(&response)))
        }
        _ => {
            let body = response.text().await.unwrap_or_default();
            Err(Error::GitHubApi(format!(
                "Request for {} failed: {} - {}",
                username, status, body
            )))
        }
    }
}

fn seconds_until_reset(response: &Response) -> u64 {
    let reset = response
        .headers()
        .get("x-ratelimit-reset")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<i64>().ok());

    match reset {
        Some(reset) => (reset - chrono::Utc::now().timestamp()).max(0) as u64,
        None => 0,
    }
}
