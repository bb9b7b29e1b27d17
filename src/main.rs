use clap::Parser;
use gh_latest::{latest_release_tags, Config, GitHubClient, LookupResult};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gh-latest")]
#[command(about = "Look up the latest tagged release of public GitHub repositories")]
#[command(version)]
struct Cli {
    /// Repositories to look up, in owner/name form
    #[arg(required = true)]
    repos: Vec<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match run(&cli.repos).await {
        Ok(versions) => {
            for version in versions {
                println!("{}", version);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(repos: &[String]) -> LookupResult<Vec<String>> {
    let client = GitHubClient::new(&Config::from_env())?;
    latest_release_tags(&client, repos).await
}
