use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use gitleaderboard::{Config, ContributorInfo, GitHubClient, Result};

#[derive(Parser, Debug)]
#[command(name = "gitleaderboard")]
#[command(version = "0.1.0")]
#[command(about = "Fetch contributor PR and issue activity for a contribution leaderboard")]
struct Args {
    /// GitHub organization to scope searches to
    #[arg(short, long)]
    organization: String,

    /// GitHub usernames to fetch, in order
    #[arg(required = true)]
    contributors: Vec<String>,

    /// Output format (json, text)
    #[arg(short, long, default_value = "text")]
    format: String,

    /// Output file (defaults to stdout)
    #[arg(long)]
    output: Option<String>,

    /// Search pages to fetch per query
    #[arg(long)]
    pages: Option<u32>,

    /// Items per search page (GitHub caps this at 100)
    #[arg(long)]
    page_size: Option<u32>,

    /// Print the current API quota before fetching
    #[arg(long)]
    rate_limit: bool,
}

#[derive(Debug, Serialize)]
struct Report {
    contributor: String,
    #[serde(flatten)]
    info: ContributorInfo,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("gitleaderboard=info".parse()?)
                .add_directive("reqwest=warn".parse()?),
        )
        .init();

    dotenvy::dotenv().ok();

    let args = Args::parse();
    let config = Config::from_env()?;

    let client = GitHubClient::new(&config.github_token)?.with_search_limits(
        args.pages.unwrap_or(config.max_search_pages),
        args.page_size.unwrap_or(config.search_page_size),
    );

    if args.rate_limit {
        let limits = client.check_rate_limit().await?;
        tracing::info!(
            "Rate limit: core {}/{}, search {}/{}",
            limits.resources.core.remaining,
            limits.resources.core.limit,
            limits.resources.search.remaining,
            limits.resources.search.limit
        );
    }

    // One contributor at a time; the search quota is shared and small.
    let mut reports = Vec::new();
    for contributor in &args.contributors {
        match client.contributor_info(&args.organization, contributor).await {
            Ok(info) => reports.push(Report {
                contributor: contributor.clone(),
                info,
            }),
            Err(err) if err.is_fatal() => return Err(err.into()),
            Err(err) => {
                tracing::warn!("Skipping {}: {}", contributor, err);
            }
        }
    }

    output_reports(&reports, &args)?;

    Ok(())
}

fn output_reports(reports: &[Report], args: &Args) -> Result<()> {
    let output = match args.format.as_str() {
        "json" => serde_json::to_string_pretty(reports)?,
        _ => format_text(reports),
    };

    if let Some(ref path) = args.output {
        std::fs::write(path, &output)?;
        tracing::info!("Output written to: {}", path);
    } else {
        println!("{}", output);
    }

    Ok(())
}

fn format_text(reports: &[Report]) -> String {
    let mut output = String::new();

    for report in reports {
        output.push_str(&format!("\n=== {} ===\n", report.contributor));
        output.push_str(&format!("Profile: {}\n", report.info.home));
        output.push_str(&format!("Avatar: {}\n", report.info.avatar_url));
        output.push_str(&format!(
            "Open PRs: {} ({})\n",
            report.info.open_prs_created_times.len(),
            report.info.open_prs_link
        ));
        output.push_str(&format!(
            "Merged PRs: {} ({})\n",
            report.info.merged_prs_created_times.len(),
            report.info.merged_prs_link
        ));
        output.push_str(&format!(
            "Issues: {} ({})\n",
            report.info.issues_created_times.len(),
            report.info.issues_link
        ));
    }

    output
}
