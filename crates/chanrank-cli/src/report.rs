//! Report emitters: colored console, text file, tabular file.
//!
//! All three consume the same ranked structure read-only. Ordering
//! decisions live in `chanrank-core`; this module only decides formatting.
//! Per-game video ordering is applied here, at render time, on a fresh
//! vector each time.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::Context;
use console::style;

use chanrank_core::{rank_videos, ChannelCoverage};

/// Prints the ranked leaderboard to stdout, channel headers in green and
/// game lines in cyan.
pub(crate) fn print_console(ranked: &[ChannelCoverage]) {
    println!("Channels with videos on the specified games:");
    for coverage in ranked {
        println!("{}", style(coverage.channel()).green());
        for (game, videos) in coverage.games() {
            println!("{}", style(format!("{game} ({} videos)", videos.len())).cyan());
            for video in rank_videos(videos) {
                println!("\t {video}");
            }
            println!();
        }
    }
}

/// Writes the text report: the console layout without colors.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub(crate) fn write_text_report(ranked: &[ChannelCoverage], path: &Path) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create text report at {}", path.display()))?;
    let mut out = BufWriter::new(file);

    for coverage in ranked {
        writeln!(out, "{}", coverage.channel())?;
        for (game, videos) in coverage.games() {
            writeln!(out, "{game} ({} videos)", videos.len())?;
            for video in rank_videos(videos) {
                writeln!(out, "\t {video}")?;
            }
            writeln!(out)?;
        }
    }

    out.flush()?;
    Ok(())
}

/// Writes the tabular report consumed by spreadsheets.
///
/// One row per channel: subscriber count, name, link, and every covered
/// game as `<game> (<video count>)` joined with ` | ` in the last field.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub(crate) fn write_csv_report(ranked: &[ChannelCoverage], path: &Path) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create tabular report at {}", path.display()))?;
    let mut out = BufWriter::new(file);

    writeln!(out, "Number of Subs, Name, Link, Covered Games")?;
    for coverage in ranked {
        let channel = coverage.channel();
        writeln!(
            out,
            "{}, {}, {}, {}",
            channel.subscribers,
            channel.title,
            channel.link(),
            covered_games(coverage)
        )?;
    }

    out.flush()?;
    Ok(())
}

fn covered_games(coverage: &ChannelCoverage) -> String {
    coverage
        .games()
        .map(|(game, videos)| format!("{game} ({})", videos.len()))
        .collect::<Vec<_>>()
        .join(" | ")
}
