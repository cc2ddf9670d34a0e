//! Output formatting and persistence for leaderboards.
//!
//! Supports a plain text table, JSON documents and CSV export.

use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

use crate::error::LeaderboardResult;
use crate::scoring::types::{Leaderboard, LeaderboardRow};

const MEDALS: [&str; 3] = ["🏆", "🥇", "✨"];

fn medal(rank: usize) -> Option<&'static str> {
    rank.checked_sub(1).and_then(|i| MEDALS.get(i).copied())
}

/// Renders the rows as a fixed-width table. The top three authors get a medal.
pub fn render_table(rows: &[LeaderboardRow]) -> String {
    let author_width = rows
        .iter()
        .map(|r| r.author.chars().count() + 2)
        .max()
        .unwrap_or(0)
        .max("Author".len());

    let mut out = format!(
        "{:>4}  {:<aw$}  {:>3}  {:>3}  {:>3}  {:>3}  {:>5}\n",
        "Rank",
        "Author",
        "6pt",
        "4pt",
        "3pt",
        "1pt",
        "Total",
        aw = author_width
    );

    for (index, row) in rows.iter().enumerate() {
        let rank = index + 1;
        let label = match medal(rank) {
            Some(m) => format!("{} {m}", row.author),
            None => row.author.clone(),
        };
        let pad = author_width.saturating_sub(label.chars().count());
        out.push_str(&format!(
            "{:>4}  {}{}  {:>3}  {:>3}  {:>3}  {:>3}  {:>5}\n",
            rank,
            label,
            " ".repeat(pad),
            row.platinum,
            row.gold,
            row.silver,
            row.bronze,
            row.total_score
        ));
    }

    out
}

/// Writes `value` as pretty-printed JSON, replacing any existing file.
pub fn write_json(path: &str, value: &impl Serialize) -> LeaderboardResult<()> {
    ensure_parent(path)?;
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    debug!(path, "JSON written");
    Ok(())
}

#[derive(Serialize)]
struct CsvRow<'a> {
    rank: usize,
    author: &'a str,
    platinum: u32,
    gold: u32,
    silver: u32,
    bronze: u32,
    total_score: u32,
}

/// Writes one header line and one row per author, replacing any existing file.
pub fn write_csv(path: &str, leaderboard: &Leaderboard) -> LeaderboardResult<()> {
    ensure_parent(path)?;
    let mut writer = csv::Writer::from_path(path)?;

    for (index, row) in leaderboard.rows.iter().enumerate() {
        writer.serialize(CsvRow {
            rank: index + 1,
            author: &row.author,
            platinum: row.platinum,
            gold: row.gold,
            silver: row.silver,
            bronze: row.bronze,
            total_score: row.total_score,
        })?;
    }

    if leaderboard.rows.is_empty() {
        writer.write_record([
            "rank",
            "author",
            "platinum",
            "gold",
            "silver",
            "bronze",
            "total_score",
        ])?;
    }

    writer.flush()?;
    debug!(path, rows = leaderboard.rows.len(), "CSV written");
    Ok(())
}

fn ensure_parent(path: &str) -> LeaderboardResult<()> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
