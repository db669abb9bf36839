use chrono::Utc;
use futures::future::join_all;
use indicatif::{ProgressBar, ProgressStyle};

use crate::analysis::languages::calculate_language_stats;
use crate::analysis::scoring::ScoringEngine;
use crate::analysis::selection::top_repositories;
use crate::config::PipelineConfig;
use crate::error::{Error, Result};
use crate::github::GitHubClient;
use crate::llm::{ProfileReviewRequest, ProfileReviewer};
use crate::models::{AnalysisResult, GitHubUser, ReadmeSample, Repository};

pub struct AnalysisPipeline {
    github: GitHubClient,
    reviewer: ProfileReviewer,
    config: PipelineConfig,
}

impl AnalysisPipeline {
    pub fn new(github: GitHubClient, reviewer: ProfileReviewer, config: PipelineConfig) -> Self {
        Self {
            github,
            reviewer,
            config,
        }
    }

    /// Runs one analysis. Fetch failures abort the run; README and AI
    /// failures only thin out the result.
    pub async fn analyze_user(&self, username: &str) -> Result<AnalysisResult> {
        let username = username.trim();
        if username.is_empty() {
            return Err(Error::MissingUsername);
        }

        // Step 1: Fetch profile and repositories
        tracing::info!("Fetching GitHub profile for: {}", username);
        let user = self.github.get_user(username).await?;
        let repos = self.github.get_user_repos(username).await?;

        if repos.is_empty() {
            return Err(Error::EmptyPortfolio(username.to_string()));
        }
        tracing::info!("Found {} repositories", repos.len());

        // Step 2: Heuristic baseline, independent of the AI outcome
        let languages = calculate_language_stats(&repos);
        let score = ScoringEngine::new().score(&user, &repos);
        tracing::info!("Heuristic score: {}/100", score.total);

        // Step 3: Sample READMEs of the most-starred repositories
        let readmes = self.fetch_readme_samples(&user, &repos).await;
        tracing::info!("Collected {} README samples", readmes.len());

        // Step 4: Optional AI review
        let request = ProfileReviewRequest::new(
            &user,
            &repos,
            readmes,
            self.config.ai_context_size,
            self.config.readme_snippet_chars,
        );
        let ai_analysis = self.reviewer.review(&request).await.into_analysis();
        if ai_analysis.is_none() {
            tracing::info!("No AI review available, using heuristic analysis only");
        }

        Ok(AnalysisResult {
            user,
            repositories: repos,
            languages,
            score,
            ai_analysis,
            analysis_date: Utc::now(),
        })
    }

    async fn fetch_readme_samples(
        &self,
        user: &GitHubUser,
        repos: &[Repository],
    ) -> Vec<ReadmeSample> {
        let top = top_repositories(repos, self.config.readme_sample_size);

        let pb = if self.config.show_progress {
            ProgressBar::new(top.len() as u64)
        } else {
            ProgressBar::hidden()
        };
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} READMEs")
        {
            pb.set_style(style.progress_chars("#>-"));
        }

        let fetches = top.into_iter().map(|repo| {
            let pb = pb.clone();
            async move {
                let content = self
                    .github
                    .get_readme(&user.login, &repo.name)
                    .await
                    .unwrap_or_default();
                pb.inc(1);
                ReadmeSample {
                    repo_name: repo.name.clone(),
                    content,
                }
            }
        });

        let samples = join_all(fetches).await;
        pb.finish_and_clear();

        samples
            .into_iter()
            .filter(|s| !s.content.is_empty())
            .collect()
    }
}
