use serde::Serialize;
use serde_json::{json, Value};

use crate::analysis::selection::top_repositories;
use crate::models::{GitHubUser, ReadmeSample, Repository};

const NO_READMES: &str = "No READMEs available.";

/// Condensed repository metadata sent to the model.
#[derive(Debug, Clone, Serialize)]
pub struct RepoContext {
    pub name: String,
    pub description: Option<String>,
    pub language: Option<String>,
    pub topics: Vec<String>,
    pub stars: u32,
}

impl From<&Repository> for RepoContext {
    fn from(repo: &Repository) -> Self {
        Self {
            name: repo.name.clone(),
            description: repo.description.clone(),
            language: repo.language.clone(),
            topics: repo.topics.clone(),
            stars: repo.stargazers_count,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProfileReviewRequest {
    pub bio: Option<String>,
    pub location: Option<String>,
    pub public_repos: u32,
    pub followers: u32,
    pub top_repos: Vec<RepoContext>,
    pub readmes: Vec<ReadmeSample>,
    pub snippet_chars: usize,
}

impl ProfileReviewRequest {
    /// Describes the `context_size` most-starred repositories and the sampled READMEs.
    pub fn new(
        user: &GitHubUser,
        repos: &[Repository],
        readmes: Vec<ReadmeSample>,
        context_size: usize,
        snippet_chars: usize,
    ) -> Self {
        Self {
            bio: user.bio.clone(),
            location: user.location.clone(),
            public_repos: user.public_repos,
            followers: user.followers,
            top_repos: top_repositories(repos, context_size)
                .into_iter()
                .map(RepoContext::from)
                .collect(),
            readmes,
            snippet_chars,
        }
    }

    pub fn to_prompt(&self) -> String {
        let repos_json =
            serde_json::to_string_pretty(&self.top_repos).unwrap_or_else(|_| "[]".to_string());

        let readme_context = if self.readmes.is_empty() {
            NO_READMES.to_string()
        } else {
            self.readmes
                .iter()
                .map(|r| {
                    format!(
                        "Repo: {}\nReadme Snippet: {}",
                        r.repo_name,
                        truncate(&r.content, self.snippet_chars)
                    )
                })
                .collect::<Vec<_>>()
                .join("\n---\n")
        };

        let bio = self.bio.as_deref().filter(|b| !b.is_empty()).unwrap_or("No bio provided");
        let location = self
            .location
            .as_deref()
            .filter(|l| !l.is_empty())
            .unwrap_or("Not specified");

        format!(
            r#"Act as a strict Senior Technical Recruiter and Engineering Manager.
Analyze this GitHub profile data to determine employability and technical strength.

User Bio: "{bio}"
Location: "{location}"
Public Repos: {public_repos}
Followers: {followers}

Top Repositories:
{repos_json}

README Contents (Snippets):
{readme_context}

Provide a structured JSON response with:
1. A professional summary (2-3 sentences).
2. Key strengths (3-5 bullet points).
3. Critical weaknesses or red flags (3-5 bullet points).
4. Actionable suggestions to improve the profile for job hunting (3-5 items).
5. Specific feedback on the READMEs provided (clarity, structure).
"#,
            bio = bio,
            location = location,
            public_repos = self.public_repos,
            followers = self.followers,
            repos_json = repos_json,
            readme_context = readme_context,
        )
    }
}

/// JSON schema the model's answer must satisfy.
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "summary": { "type": "STRING" },
            "strengths": { "type": "ARRAY", "items": { "type": "STRING" } },
            "weaknesses": { "type": "ARRAY", "items": { "type": "STRING" } },
            "suggestions": { "type": "ARRAY", "items": { "type": "STRING" } },
            "readmeFeedback": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "repoName": { "type": "STRING" },
                        "clarityScore": { "type": "NUMBER", "description": "Score out of 10" },
                        "feedback": { "type": "STRING" }
                    },
                    "required": ["repoName", "clarityScore", "feedback"]
                }
            }
        },
        "required": ["summary", "strengths", "weaknesses", "suggestions", "readmeFeedback"]
    })
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        let mut cut: String = text.chars().take(max_chars).collect();
        cut.push_str("...");
        cut
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::{repo, user};
    use chrono::Utc;

    #[test]
    fn test_prompt_uses_top_repos_by_stars() {
        let repos: Vec<_> = (0..7)
            .map(|i| {
                let mut r = repo(&format!("repo{}", i), Utc::now());
                r.stargazers_count = i;
                r
            })
            .collect();
        let request = ProfileReviewRequest::new(&user("octocat"), &repos, Vec::new(), 5, 1000);

        let names: Vec<_> = request.top_repos.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["repo6", "repo5", "repo4", "repo3", "repo2"]);

        let prompt = request.to_prompt();
        assert!(prompt.contains("No bio provided"));
        assert!(prompt.contains("Not specified"));
        assert!(prompt.contains(NO_READMES));
    }

    #[test]
    fn test_readme_snippets_are_truncated() {
        let readmes = vec![ReadmeSample {
            repo_name: "big".to_string(),
            content: "a".repeat(30),
        }];
        let request = ProfileReviewRequest::new(&user("octocat"), &[], readmes, 5, 10);
        let prompt = request.to_prompt();

        assert!(prompt.contains(&format!("Repo: big\nReadme Snippet: {}...", "a".repeat(10))));
        assert!(!prompt.contains(&"a".repeat(11)));
    }

    #[test]
    fn test_truncate_leaves_short_text_alone() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("exactly10!", 10), "exactly10!");
    }
}
