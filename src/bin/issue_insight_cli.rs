use std::io::Write;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use issue_insight::formatter::{IssueListRenderer, IssueTableRenderer};
use issue_insight::github::GitHubClient;
use issue_insight::types::SearchQuery;

#[derive(Parser)]
#[command(name = "issue-insight")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Search GitHub issues and render the results as an HTML report")]
#[command(
    long_about = "Search GitHub issues from the command line. The given terms are joined into a single query and sent to the GitHub issue search API; the matching issues are written to stdout as an HTML report table. Supports GitHub search syntax in the terms (e.g. \"repo:golang/go\", \"is:open\", \"label:bug\") alongside free text. Plain-text and JSON output are available via --format."
)]
struct Cli {
    /// Search terms, joined with single spaces into one search query -
    /// supports GitHub search syntax (e.g. "repo:golang/go is:open json decoder")
    #[arg(required = true)]
    terms: Vec<String>,
    /// Output format for results - html renders a report table, text a compact
    /// listing, json the decoded search result for programmatic use
    #[arg(long, default_value = "html")]
    format: OutputFormat,
    /// Request timeout in seconds for the search API call (default: 10 seconds)
    #[arg(long)]
    request_timeout: Option<u64>,
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    Html,
    Text,
    Json,
}

fn main() -> Result<()> {
    // Initialize logging; log output goes to stderr so it never mixes into
    // the rendered report on stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("issue_insight=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let client = GitHubClient::new(cli.request_timeout.map(Duration::from_secs))?;
    let query = SearchQuery::from_terms(&cli.terms);
    let result = client.search_issues(&query)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match cli.format {
        OutputFormat::Html => IssueTableRenderer::new().render(&result, &mut out)?,
        OutputFormat::Text => IssueListRenderer::new().render(&result, &mut out)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &result)?;
            out.write_all(b"\n")?;
        }
    }

    Ok(())
}
