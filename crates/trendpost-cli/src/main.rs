mod run;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use trendpost_writer::HuggingFaceSummarizer;

#[derive(Debug, Parser)]
#[command(name = "trendpost")]
#[command(about = "Turn trending tech topics into short blog posts")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch topics and generate one post per topic (default)
    Run {
        /// List the posts that would be generated without calling the model
        #[arg(long)]
        dry_run: bool,
    },
    /// Fetch and print topics only
    Topics,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = trendpost_core::load_app_config()?;
    init_tracing(&config.log_level);

    let targets = trendpost_core::load_scrape_targets(&config.sources_path)?;
    let sources = trendpost_sources::default_sources(&config, &targets)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command.unwrap_or(Commands::Run { dry_run: false }) {
        Commands::Run { dry_run: true } => {
            let summary = run::run_dry(&sources, &mut out).await?;
            tracing::info!(topics = summary.topics, "dry run complete");
        }
        Commands::Run { dry_run: false } => {
            let summarizer = HuggingFaceSummarizer::from_config(&config)?;
            let summary = run::run_once(&sources, &summarizer, &mut out).await?;
            tracing::info!(
                topics = summary.topics,
                posts = summary.posts,
                failed_generations = summary.failed_generations,
                "run complete"
            );
        }
        Commands::Topics => {
            let count = run::list_topics(&sources, &mut out).await?;
            tracing::info!(topics = count, "topic listing complete");
        }
    }

    Ok(())
}

/// `RUST_LOG` wins when set; otherwise `TRENDPOST_LOG_LEVEL`. Structured logs
/// go to stderr; progress lines and posts are written to stdout by `run`.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
