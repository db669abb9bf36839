use clap::Parser;
use tracing_subscriber::EnvFilter;

use gitfolio::analysis::{resolve_review, ReviewContent, MAX_LISTED_LANGUAGES};
use gitfolio::models::AnalysisResult;
use gitfolio::{AnalysisPipeline, Config, GitHubClient, PipelineConfig, ProfileReviewer};

#[derive(Parser, Debug)]
#[command(name = "gitfolio")]
#[command(version = "0.1.0")]
#[command(about = "Score a GitHub portfolio and review it with AI")]
struct Args {
    /// GitHub username to analyze
    #[arg(short, long)]
    username: String,

    /// Output format (json, text, markdown)
    #[arg(short, long, default_value = "text")]
    format: String,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<String>,

    /// GitHub access token (overrides GITHUB_TOKEN)
    #[arg(long)]
    github_token: Option<String>,

    /// Gemini API key (overrides GEMINI_API_KEY)
    #[arg(long)]
    ai_key: Option<String>,

    /// Gemini model to use for the review
    #[arg(long)]
    model: Option<String>,

    /// Skip the AI review and report the heuristic score only
    #[arg(long)]
    no_ai: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("gitfolio=info".parse()?)
                .add_directive("reqwest=warn".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = Config::from_env();

    let github_token = args.github_token.clone().or_else(|| config.github_token.clone());
    let github = GitHubClient::new(github_token.as_deref())?;

    let reviewer = if args.no_ai {
        ProfileReviewer::disabled()
    } else {
        let ai_key = args.ai_key.clone().or_else(|| config.ai_api_key.clone());
        let model = args.model.clone().unwrap_or_else(|| config.ai_model.clone());
        ProfileReviewer::from_api_key(ai_key.as_deref(), &model)
    };

    let pipeline_config = PipelineConfig {
        show_progress: args.output.is_some() || args.format != "json",
        ..PipelineConfig::from(&config)
    };

    let pipeline = AnalysisPipeline::new(github, reviewer, pipeline_config);

    tracing::info!("Starting analysis for GitHub user: {}", args.username);
    let result = pipeline.analyze_user(&args.username).await?;

    output_result(&result, &args)?;

    Ok(())
}

fn output_result(result: &AnalysisResult, args: &Args) -> anyhow::Result<()> {
    let review = resolve_review(&result.score, result.ai_analysis.as_ref());

    let output = match args.format.as_str() {
        "json" => serde_json::to_string_pretty(&serde_json::json!({
            "result": result,
            "review": review,
        }))?,
        "markdown" => format_markdown(result, &review),
        _ => format_text(result, &review),
    };

    if let Some(ref path) = args.output {
        std::fs::write(path, &output)?;
        tracing::info!("Output written to: {}", path);
    } else {
        println!("{}", output);
    }

    Ok(())
}

fn format_text(result: &AnalysisResult, review: &ReviewContent) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "\n=== Portfolio Analysis: {} ===\n\n",
        result.user.login
    ));

    if let Some(ref name) = result.user.name {
        output.push_str(&format!("Name: {}\n", name));
    }
    if let Some(ref bio) = result.user.bio {
        output.push_str(&format!("Bio: {}\n", bio));
    }
    output.push_str(&format!(
        "Repositories: {} | Followers: {}\n\n",
        result.repositories.len(),
        result.user.followers
    ));

    output.push_str(&format!(
        "Portfolio Score: {}/100 ({})\n",
        result.score.total,
        result.score.tier()
    ));
    for (label, value, max) in result.score.breakdown.rows() {
        output.push_str(&format!("  {:<14} {:>5.1} / {}\n", label, value, max));
    }

    if !result.languages.is_empty() {
        output.push_str("\nLanguages:\n");
        for lang in result.languages.iter().take(MAX_LISTED_LANGUAGES) {
            output.push_str(&format!(
                "  - {}: {} repos ({}%)\n",
                lang.name, lang.count, lang.percentage
            ));
        }
    }

    match &result.ai_analysis {
        Some(ai) => output.push_str(&format!("\nAI Summary:\n  {}\n", ai.summary)),
        None => output.push_str("\n(AI review unavailable, showing heuristic analysis)\n"),
    }

    if !review.strengths.is_empty() {
        output.push_str("\nStrengths:\n");
        for strength in review.listed_strengths() {
            output.push_str(&format!("  + {}\n", strength));
        }
    }

    if !review.weaknesses.is_empty() {
        output.push_str("\nAreas for Improvement:\n");
        for weakness in review.listed_weaknesses() {
            output.push_str(&format!("  - {}\n", weakness));
        }
    }

    output.push_str("\nSuggestions:\n");
    for (i, suggestion) in review.suggestions.iter().enumerate() {
        output.push_str(&format!("  {}. {}\n", i + 1, suggestion));
    }

    if !review.readme_feedback.is_empty() {
        output.push_str("\nREADME Feedback:\n");
        for fb in &review.readme_feedback {
            output.push_str(&format!(
                "  {} ({:.0}/10): {}\n",
                fb.repo_name, fb.clarity_score, fb.feedback
            ));
        }
    }

    output.push_str(&format!(
        "\nAnalyzed on: {}\n",
        result.analysis_date.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    output
}

fn format_markdown(result: &AnalysisResult, review: &ReviewContent) -> String {
    let mut output = String::new();

    output.push_str(&format!("# Portfolio Analysis: {}\n\n", result.user.login));

    if let Some(ref name) = result.user.name {
        output.push_str(&format!("**Name:** {}\n\n", name));
    }
    if let Some(ref bio) = result.user.bio {
        output.push_str(&format!("> {}\n\n", bio));
    }

    output.push_str(&format!(
        "## Score: {}/100 ({})\n\n",
        result.score.total,
        result.score.tier()
    ));
    output.push_str("| Category | Points | Max |\n|----------|--------|-----|\n");
    for (label, value, max) in result.score.breakdown.rows() {
        output.push_str(&format!("| {} | {:.1} | {} |\n", label, value, max));
    }

    if !result.languages.is_empty() {
        output.push_str("\n## Languages\n\n");
        output.push_str("| Language | Repos | Share |\n|----------|-------|-------|\n");
        for lang in result.languages.iter().take(MAX_LISTED_LANGUAGES) {
            output.push_str(&format!(
                "| {} | {} | {}% |\n",
                lang.name, lang.count, lang.percentage
            ));
        }
    }

    if let Some(ref ai) = result.ai_analysis {
        output.push_str(&format!("\n## Summary\n\n{}\n", ai.summary));
    } else {
        output.push_str("\n*AI review unavailable, showing heuristic analysis.*\n");
    }

    if !review.strengths.is_empty() {
        output.push_str("\n## Strengths\n\n");
        for strength in review.listed_strengths() {
            output.push_str(&format!("- {}\n", strength));
        }
    }

    if !review.weaknesses.is_empty() {
        output.push_str("\n## Areas for Improvement\n\n");
        for weakness in review.listed_weaknesses() {
            output.push_str(&format!("- {}\n", weakness));
        }
    }

    output.push_str("\n## Suggestions\n\n");
    for (i, suggestion) in review.suggestions.iter().enumerate() {
        output.push_str(&format!("{}. {}\n", i + 1, suggestion));
    }

    if !review.readme_feedback.is_empty() {
        output.push_str("\n## README Feedback\n\n");
        output.push_str("| Repository | Clarity | Feedback |\n|------------|---------|----------|\n");
        for fb in &review.readme_feedback {
            output.push_str(&format!(
                "| {} | {:.0}/10 | {} |\n",
                fb.repo_name, fb.clarity_score, fb.feedback
            ));
        }
    }

    output.push_str(&format!(
        "\n---\n*Analyzed on {}*\n",
        result.analysis_date.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    output
}
