use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::models::score::{
    ACTIVITY_MAX, CODE_QUALITY_MAX, DOCUMENTATION_MAX, IMPACT_MAX, ORGANIZATION_MAX,
    TECHNICAL_DEPTH_MAX,
};
use crate::models::{GitHubUser, ProfileScore, Repository, ScoreBreakdown, ScoreDetails};

const RECENT_WINDOW_DAYS: f64 = 30.0;
const MILLIS_PER_DAY: f64 = 86_400_000.0;
const PLACEHOLDER_NAME_PATTERNS: [&str; 4] = ["patch-", "untitled", "test", "hello-world"];

/// Deterministic portfolio score. The formula is fixed so that scores stay
/// comparable between runs and between implementations.
pub struct ScoringEngine {
    evaluated_at: DateTime<Utc>,
}

impl ScoringEngine {
    pub fn new() -> Self {
        Self::at(Utc::now())
    }

    /// Engine whose "recent activity" window ends at `evaluated_at`.
    pub fn at(evaluated_at: DateTime<Utc>) -> Self {
        Self { evaluated_at }
    }

    /// Scores a profile. `repos` must be non-empty; the pipeline rejects
    /// empty portfolios before scoring.
    pub fn score(&self, user: &GitHubUser, repos: &[Repository]) -> ProfileScore {
        let mut details = ScoreDetails::default();

        let breakdown = ScoreBreakdown {
            documentation: self.documentation(user, repos, &mut details),
            code_quality: self.code_quality(repos),
            activity: self.activity(user, repos, &mut details),
            organization: self.organization(repos),
            impact: self.impact(user, repos, &mut details),
            technical_depth: self.technical_depth(repos, &mut details),
        };

        ProfileScore {
            total: breakdown.sum().round() as u32,
            breakdown,
            details,
        }
    }

    fn documentation(
        &self,
        user: &GitHubUser,
        repos: &[Repository],
        details: &mut ScoreDetails,
    ) -> f64 {
        let mut points = 0.0;

        if user.bio.as_deref().map(|b| b.chars().count() > 10).unwrap_or(false) {
            points += 5.0;
        } else {
            details.weaknesses.push("Missing or short profile bio".to_string());
        }

        if user.blog_link().is_some() {
            points += 5.0;
        }

        let described = repos.iter().filter(|r| r.description_len() > 5).count();
        let ratio = ratio(described, repos.len());
        points += (ratio * 10.0).min(10.0);

        if ratio < 0.5 {
            details.weaknesses.push("Many repositories lack descriptions".to_string());
        }

        points.min(DOCUMENTATION_MAX)
    }

    fn code_quality(&self, repos: &[Repository]) -> f64 {
        let licensed = repos.iter().filter(|r| r.license.is_some()).count();
        let tagged = repos.iter().filter(|r| !r.topics.is_empty()).count();

        let points = (ratio(licensed, repos.len()) * 10.0).min(10.0)
            + (ratio(tagged, repos.len()) * 10.0).min(10.0);

        points.min(CODE_QUALITY_MAX)
    }

    fn activity(
        &self,
        user: &GitHubUser,
        repos: &[Repository],
        details: &mut ScoreDetails,
    ) -> f64 {
        let recent = repos
            .iter()
            .filter(|r| self.updated_recently(r.updated_at))
            .count();

        let points =
            (user.public_repos as f64 * 0.5).min(10.0) + (recent as f64 * 2.0).min(10.0);

        if recent == 0 {
            details
                .weaknesses
                .push("No recent activity in the last 30 days".to_string());
        } else {
            details.strengths.push("Consistent recent activity".to_string());
        }

        points.min(ACTIVITY_MAX)
    }

    /// Elapsed time is rounded up to whole days, so exactly 30 days still counts.
    fn updated_recently(&self, updated_at: DateTime<Utc>) -> bool {
        let elapsed_ms = (self.evaluated_at - updated_at).num_milliseconds().abs() as f64;
        (elapsed_ms / MILLIS_PER_DAY).ceil() <= RECENT_WINDOW_DAYS
    }

    fn organization(&self, repos: &[Repository]) -> f64 {
        let mut points = 0.0;

        let placeholder_names = repos
            .iter()
            .filter(|r| is_placeholder_name(&r.name))
            .count();
        if placeholder_names == 0 {
            points += 5.0;
        }

        let total_desc_len: usize = repos.iter().map(|r| r.description_len()).sum();
        let avg_desc_len = total_desc_len as f64 / repos.len().max(1) as f64;
        points += (avg_desc_len / 5.0).min(10.0);

        points.min(ORGANIZATION_MAX)
    }

    fn impact(&self, user: &GitHubUser, repos: &[Repository], details: &mut ScoreDetails) -> f64 {
        let total_stars: u64 = repos.iter().map(|r| r.stargazers_count as u64).sum();

        let points =
            (total_stars as f64 * 0.5).min(8.0) + (user.followers as f64 * 0.5).min(7.0);

        if total_stars > 10 {
            details
                .strengths
                .push("Good community validation (Stars)".to_string());
        }

        points.min(IMPACT_MAX)
    }

    fn technical_depth(&self, repos: &[Repository], details: &mut ScoreDetails) -> f64 {
        let languages: HashSet<&str> = repos
            .iter()
            .filter_map(|r| r.primary_language())
            .collect();

        let points: f64 = match languages.len() {
            n if n >= 3 => {
                details
                    .strengths
                    .push("Demonstrates polyglot versatility".to_string());
                10.0
            }
            2 => 7.0,
            _ => 4.0,
        };

        points.min(TECHNICAL_DEPTH_MAX)
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Scores a profile against the current time.
pub fn calculate_profile_score(user: &GitHubUser, repos: &[Repository]) -> ProfileScore {
    ScoringEngine::new().score(user, repos)
}

fn ratio(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64
    }
}

fn is_placeholder_name(name: &str) -> bool {
    let lower = name.to_lowercase();
    PLACEHOLDER_NAME_PATTERNS.iter().any(|p| lower.contains(p))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::{mit, repo, user};
    use chrono::Duration;

    fn now() -> DateTime<Utc> {
        "2025-06-01T12:00:00Z".parse().unwrap()
    }

    fn strong_profile() -> (GitHubUser, Vec<Repository>) {
        let mut u = user("octocat");
        u.bio = Some(
            "Systems engineer building fast, reliable tools in Rust"
                .chars()
                .take(50)
                .collect(),
        );
        u.blog = Some("https://octocat.dev".to_string());
        u.public_repos = 20;
        u.followers = 20;

        let languages = ["Rust", "Go", "Python"];
        let repos = (0..10)
            .map(|i| {
                let updated = if i < 6 {
                    now() - Duration::days(3)
                } else {
                    now() - Duration::days(200)
                };
                let mut r = repo(&format!("project-{}", i), updated);
                r.description = Some("x".repeat(20));
                r.license = Some(mit());
                r.topics = vec!["cli".to_string(), "tooling".to_string()];
                r.language = Some(languages[i % 3].to_string());
                r.stargazers_count = 5;
                r
            })
            .collect();

        (u, repos)
    }

    #[test]
    fn test_strong_profile_scores_94() {
        let (u, repos) = strong_profile();
        let score = ScoringEngine::at(now()).score(&u, &repos);

        assert_eq!(score.breakdown.documentation, 20.0);
        assert_eq!(score.breakdown.code_quality, 20.0);
        assert_eq!(score.breakdown.activity, 20.0);
        assert_eq!(score.breakdown.organization, 9.0);
        assert_eq!(score.breakdown.impact, 15.0);
        assert_eq!(score.breakdown.technical_depth, 10.0);
        assert_eq!(score.total, 94);

        assert_eq!(
            score.details.strengths,
            vec![
                "Consistent recent activity",
                "Good community validation (Stars)",
                "Demonstrates polyglot versatility",
            ]
        );
        assert!(score.details.weaknesses.is_empty());
    }

    #[test]
    fn test_sparse_profile_collects_weaknesses() {
        let u = user("ghost");
        let repos = vec![repo("hello-world", now() - Duration::days(400))];
        let score = ScoringEngine::at(now()).score(&u, &repos);

        assert_eq!(score.breakdown.documentation, 0.0);
        assert_eq!(score.breakdown.code_quality, 0.0);
        assert_eq!(score.breakdown.activity, 0.0);
        assert_eq!(score.breakdown.organization, 0.0);
        assert_eq!(score.breakdown.impact, 0.0);
        assert_eq!(score.breakdown.technical_depth, 4.0);
        assert_eq!(score.total, 4);
        assert_eq!(
            score.details.weaknesses,
            vec![
                "Missing or short profile bio",
                "Many repositories lack descriptions",
                "No recent activity in the last 30 days",
            ]
        );
        assert!(score.details.strengths.is_empty());
    }

    #[test]
    fn test_partial_ratios_are_linear() {
        let u = user("octocat");
        let mut a = repo("alpha", now());
        a.description = Some("A useful description".to_string());
        a.license = Some(mit());
        let b = repo("beta", now());
        let score = ScoringEngine::at(now()).score(&u, &[a, b]);

        // half described, half licensed, no topics
        assert_eq!(score.breakdown.documentation, 5.0);
        assert_eq!(score.breakdown.code_quality, 5.0);
        // 20 chars over 2 repos -> avg 10 -> 2 points, plus 5 for clean names
        assert_eq!(score.breakdown.organization, 7.0);
        assert!(!score
            .details
            .weaknesses
            .contains(&"Many repositories lack descriptions".to_string()));
    }

    #[test]
    fn test_recent_window_is_inclusive_of_day_thirty() {
        let engine = ScoringEngine::at(now());
        assert!(engine.updated_recently(now() - Duration::days(30)));
        assert!(!engine.updated_recently(now() - Duration::days(30) - Duration::milliseconds(1)));
        assert!(engine.updated_recently(now() + Duration::days(2)));
    }

    #[test]
    fn test_technical_depth_is_assigned_not_accumulated() {
        let engine = ScoringEngine::at(now());
        let u = user("octocat");
        let mut depths = Vec::new();

        for langs in [vec![], vec!["Rust"], vec!["Rust", "Go"], vec!["Rust", "Go", "C", "Zig"]] {
            let repos: Vec<_> = langs
                .iter()
                .enumerate()
                .map(|(i, l)| {
                    let mut r = repo(&format!("r{}", i), now());
                    r.language = Some(l.to_string());
                    r
                })
                .chain(std::iter::once(repo("plain", now())))
                .collect();
            depths.push(engine.score(&u, &repos).breakdown.technical_depth);
        }

        assert_eq!(depths, vec![4.0, 4.0, 7.0, 10.0]);
    }

    #[test]
    fn test_placeholder_names_are_case_insensitive() {
        assert!(is_placeholder_name("Hello-World"));
        assert!(is_placeholder_name("my-TEST-app"));
        assert!(is_placeholder_name("patch-1"));
        assert!(is_placeholder_name("Untitled"));
        assert!(!is_placeholder_name("ripgrep"));
    }

    #[test]
    fn test_buckets_stay_within_maxima() {
        let mut u = user("famous");
        u.bio = Some("A very long biography that goes on and on".to_string());
        u.blog = Some("https://example.com".to_string());
        u.public_repos = 500;
        u.followers = 100_000;

        let repos: Vec<_> = (0..30)
            .map(|i| {
                let mut r = repo(&format!("lib{}", i), now());
                r.description = Some("d".repeat(400));
                r.license = Some(mit());
                r.topics = vec!["x".to_string()];
                r.language = Some(format!("Lang{}", i));
                r.stargazers_count = 10_000;
                r
            })
            .collect();

        let score = ScoringEngine::at(now()).score(&u, &repos);
        for (_, value, max) in score.breakdown.rows() {
            assert!(value >= 0.0 && value <= max);
        }
        assert_eq!(score.total, score.breakdown.sum().round() as u32);
        assert_eq!(score.total, 100);
    }

    #[test]
    fn test_empty_blog_does_not_count() {
        let mut u = user("octocat");
        u.blog = Some(String::new());
        let score = ScoringEngine::at(now()).score(&u, &[repo("alpha", now())]);
        assert_eq!(score.breakdown.documentation, 0.0);
    }

    #[test]
    fn test_calculate_profile_score_uses_current_time() {
        let (u, mut repos) = strong_profile();
        let stale = Utc::now() - Duration::days(400);
        for r in &mut repos {
            r.updated_at = stale;
        }

        let score = calculate_profile_score(&u, &repos);
        let pinned = ScoringEngine::at(Utc::now()).score(&u, &repos);

        assert_eq!(score, pinned);
        assert_eq!(score.breakdown.activity, 10.0);
        assert_eq!(score.breakdown.technical_depth, 10.0);
        assert!(score
            .details
            .strengths
            .contains(&"Demonstrates polyglot versatility".to_string()));
    }
}
