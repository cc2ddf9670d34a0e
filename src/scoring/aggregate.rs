use crate::scoring::tier::score_tier;
use crate::scoring::types::{AuthorAggregate, Leaderboard, LeaderboardRow, RawEntry, ScoredEntry};
use chrono::Utc;
use std::collections::HashMap;

/// Scores every entry, numbering them by input position starting at 1.
pub fn score_entries(entries: &[RawEntry]) -> Vec<ScoredEntry> {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| ScoredEntry {
            rank: index + 1,
            author: entry.author.clone(),
            stage: entry.stage.clone(),
            status: entry.status.clone(),
            score: score_tier(&entry.stage, &entry.status),
        })
        .collect()
}

/// Folds entries into one row per author, sorted by descending total score.
///
/// Authors with equal totals keep the order in which they first appear.
pub fn aggregate(entries: &[RawEntry]) -> Vec<LeaderboardRow> {
    let scored = score_entries(entries);

    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut authors: Vec<(&str, AuthorAggregate)> = Vec::new();

    for entry in &scored {
        let slot = *index.entry(entry.author.as_str()).or_insert_with(|| {
            authors.push((entry.author.as_str(), AuthorAggregate::default()));
            authors.len() - 1
        });
        authors[slot].1.record(entry.score);
    }

    let mut rows: Vec<LeaderboardRow> = authors
        .into_iter()
        .map(|(author, agg)| LeaderboardRow::from_aggregate(author.to_string(), &agg))
        .collect();

    // stable: ties stay in first-appearance order
    rows.sort_by(|a, b| b.total_score.cmp(&a.total_score));
    rows
}

/// Aggregates `entries` and stamps the result with the generation time.
pub fn build_leaderboard(entries: &[RawEntry]) -> Leaderboard {
    Leaderboard {
        generated_at: Utc::now(),
        entries: entries.len(),
        rows: aggregate(entries),
    }
}
