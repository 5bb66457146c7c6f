use std::io;
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod games;
mod report;
mod scan;

#[derive(Debug, Parser)]
#[command(name = "chanrank")]
#[command(about = "Rank YouTube channels by their coverage of a list of games")]
struct Cli {
    /// Path to the newline-delimited games list (defaults to the configured path)
    #[arg(long)]
    games_file: Option<PathBuf>,

    /// Videos to fetch per game; prompts on stdin when omitted
    #[arg(long)]
    max_videos: Option<u32>,

    /// Directory the _results.txt and _results.csv reports are written to
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let config = chanrank_core::load_app_config()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone())),
        )
        .init();

    let games_path = cli.games_file.unwrap_or_else(|| config.games_path.clone());
    let games = games::load_games(&games_path)?;

    let max_videos = cli
        .max_videos
        .unwrap_or_else(|| prompt_max_videos(config.default_max_videos));

    println!(
        "Searching for videos ({max_videos} each) on the following games: {}",
        games.join(", ")
    );
    println!();

    let client =
        chanrank_youtube::YoutubeClient::new(&config.youtube_api_key, config.request_timeout_secs)?;
    let window_start = scan::coverage_window_start(chrono::Utc::now());

    let state = scan::run_scan(&client, &games, max_videos, window_start).await?;
    let ranked = chanrank_core::rank_channels(state);

    report::print_console(&ranked);

    std::fs::create_dir_all(&cli.out_dir)?;
    let text_path = cli.out_dir.join("_results.txt");
    report::write_text_report(&ranked, &text_path)?;
    println!("Results written to {}", text_path.display());

    let csv_path = cli.out_dir.join("_results.csv");
    report::write_csv_report(&ranked, &csv_path)?;
    println!("Results written to {}", csv_path.display());

    Ok(())
}

/// Interactive fallback for `--max-videos`: reads one line from stdin and
/// keeps the configured default on empty or unparseable input.
fn prompt_max_videos(default: u32) -> u32 {
    println!("Enter the number of videos to search for for each game (default is {default}):");
    let mut line = String::new();
    if io::stdin().read_line(&mut line).is_err() {
        return default;
    }
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return default;
    }
    trimmed.parse().unwrap_or_else(|_| {
        println!("Invalid input. Using default value.");
        default
    })
}
