#![allow(dead_code)]

use chrono::{Duration, Utc};
use serde_json::{json, Value};

pub fn user_json(login: &str) -> Value {
    json!({
        "login": login,
        "id": 583231,
        "name": "The Octocat",
        "avatar_url": "https://avatars.githubusercontent.com/u/583231",
        "html_url": format!("https://github.com/{}", login),
        "bio": "Building developer tools since forever",
        "company": "@github",
        "location": "San Francisco",
        "blog": "https://github.blog",
        "email": null,
        "public_repos": 8,
        "public_gists": 8,
        "followers": 4,
        "following": 9,
        "created_at": "2011-01-25T18:44:36Z",
        "updated_at": "2024-01-22T12:13:51Z"
    })
}

pub fn repo_json(name: &str, stars: u32, language: Option<&str>) -> Value {
    let updated = (Utc::now() - Duration::days(2)).to_rfc3339();
    json!({
        "id": stars as u64 + 1000,
        "name": name,
        "full_name": format!("octocat/{}", name),
        "html_url": format!("https://github.com/octocat/{}", name),
        "description": format!("The {} project", name),
        "language": language,
        "homepage": null,
        "stargazers_count": stars,
        "forks_count": 1,
        "open_issues_count": 0,
        "topics": ["demo"],
        "license": { "key": "mit", "name": "MIT License", "spdx_id": "MIT", "url": null },
        "fork": false,
        "archived": false,
        "disabled": false,
        "size": 120,
        "created_at": "2020-03-01T10:00:00Z",
        "updated_at": updated,
        "pushed_at": updated,
        "owner": { "login": "octocat" }
    })
}

pub fn review_json() -> Value {
    json!({
        "summary": "A capable generalist with well-documented tools.",
        "strengths": ["Clear READMEs", "Consistent licensing"],
        "weaknesses": ["Few collaborators"],
        "suggestions": ["Pin flagship projects"],
        "readmeFeedback": [
            { "repoName": "spoon-knife", "clarityScore": 8, "feedback": "Concise and clear" }
        ]
    })
}
