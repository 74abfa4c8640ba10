use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use subtitle_search::offsets::load_offsets;
use subtitle_search::query::handle_queries;
use subtitle_search::subtitle::load_episodes;

/// Approximate subtitle search over a k-mismatch distance.
#[derive(Parser, Debug)]
#[command(name = "subtitle-search")]
#[command(about = "Search episode subtitles for near-matches of a query")]
struct Cli {
    /// Directory containing the source video files (validated, not read).
    videos_directory: PathBuf,

    /// Directory containing subtitle files.
    subtitles_directory: PathBuf,

    /// Path to the offsets file (`name: signed_integer_milliseconds` per line).
    offsets_filepath: PathBuf,

    /// Query string to run instead of reading from standard input. May be repeated.
    #[arg(long = "query")]
    queries: Vec<String>,

    /// Read queries (one per line) from this file instead of standard input.
    #[arg(long = "query-file")]
    query_file: Option<PathBuf>,

    /// Override the tracing filter (takes precedence over RUST_LOG).
    #[arg(long = "log-level")]
    log_level: Option<String>,
}

fn init_tracing(log_level: Option<&str>) {
    let filter = log_level
        .map(|level| tracing_subscriber::EnvFilter::new(level.to_string()))
        .unwrap_or_else(|| {
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("subtitle_search=info"))
        });

    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    anyhow::ensure!(
        cli.videos_directory.is_dir(),
        "videos directory {} does not exist",
        cli.videos_directory.display()
    );

    tracing::info!("loading offsets from {}", cli.offsets_filepath.display());
    let offsets = load_offsets(&cli.offsets_filepath)
        .with_context(|| format!("loading offsets file {}", cli.offsets_filepath.display()))?;

    tracing::info!("loading episodes from {}", cli.subtitles_directory.display());
    let episodes = load_episodes(&cli.subtitles_directory, &offsets)
        .with_context(|| format!("loading subtitles directory {}", cli.subtitles_directory.display()))?;
    tracing::info!("loaded {} episodes", episodes.len());

    let stdout = io::stdout();
    let mut writer = stdout.lock();

    if !cli.queries.is_empty() {
        for query in &cli.queries {
            subtitle_search::query::handle_query(&episodes, query, &mut writer)?;
        }
        return Ok(());
    }

    if let Some(path) = &cli.query_file {
        let contents =
            fs::read_to_string(path).with_context(|| format!("reading query file {}", path.display()))?;
        for query in contents.lines() {
            subtitle_search::query::handle_query(&episodes, query, &mut writer)?;
        }
        return Ok(());
    }

    let stdin = io::stdin();
    handle_queries(&episodes, stdin.lock(), &mut writer)?;
    writer.flush()?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref());

    if let Err(err) = run(&cli) {
        tracing::error!("subtitle-search failed: {err:#}");
        std::process::exit(1);
    }

    Ok(())
}
