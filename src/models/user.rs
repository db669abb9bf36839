use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Account-level data of the analyzed GitHub user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubUser {
    pub login: String,
    pub id: u64,
    pub name: Option<String>,
    #[serde(default)]
    pub avatar_url: String,
    #[serde(default)]
    pub html_url: String,
    pub bio: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub blog: Option<String>,
    pub email: Option<String>,
    pub public_repos: u32,
    #[serde(default)]
    pub public_gists: u32,
    pub followers: u32,
    pub following: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl GitHubUser {
    /// GitHub reports an unset blog as an empty string rather than null.
    pub fn blog_link(&self) -> Option<&str> {
        self.blog.as_deref().filter(|b| !b.is_empty())
    }
}
