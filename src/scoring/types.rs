//! Data types used by the scoring pipeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Status assigned to entries whose source omitted one.
pub const NO_STATUS: &str = "No status";

/// One unranked observation as delivered by a data provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEntry {
    pub author: String,
    pub stage: String,
    pub status: String,
}

impl RawEntry {
    /// Builds an entry, substituting [`NO_STATUS`] for a missing or empty status.
    pub fn new(author: impl Into<String>, stage: impl Into<String>, status: Option<&str>) -> Self {
        let status = match status {
            Some(s) if !s.is_empty() => s.to_string(),
            _ => NO_STATUS.to_string(),
        };
        Self {
            author: author.into(),
            stage: stage.into(),
            status,
        }
    }
}

/// A [`RawEntry`] with its 1-based input position and tier score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredEntry {
    pub rank: usize,
    pub author: String,
    pub stage: String,
    pub status: String,
    pub score: u32,
}

/// Running tier counts for one author.
///
/// The counters are only touched through [`AuthorAggregate::record`], which
/// recomputes `total_score` after every increment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorAggregate {
    platinum: u32,
    gold: u32,
    silver: u32,
    bronze: u32,
    total_score: u32,
}

impl AuthorAggregate {
    pub fn platinum(&self) -> u32 {
        self.platinum
    }

    pub fn gold(&self) -> u32 {
        self.gold
    }

    pub fn silver(&self) -> u32 {
        self.silver
    }

    pub fn bronze(&self) -> u32 {
        self.bronze
    }

    pub fn total_score(&self) -> u32 {
        self.total_score
    }

    /// Counts one scored entry. Scores outside the tier table count nothing.
    pub fn record(&mut self, score: u32) {
        use super::tier::Tier;

        match Tier::from_score(score) {
            Some(Tier::Platinum) => self.platinum += 1,
            Some(Tier::Gold) => self.gold += 1,
            Some(Tier::Silver) => self.silver += 1,
            Some(Tier::Bronze) => self.bronze += 1,
            None => {}
        }

        self.total_score = Tier::Platinum.points() * self.platinum
            + Tier::Gold.points() * self.gold
            + Tier::Silver.points() * self.silver
            + Tier::Bronze.points() * self.bronze;
    }
}

/// One line of the rendered leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardRow {
    pub author: String,
    pub platinum: u32,
    pub gold: u32,
    pub silver: u32,
    pub bronze: u32,
    #[serde(rename = "totalScore")]
    pub total_score: u32,
}

impl LeaderboardRow {
    pub fn from_aggregate(author: String, agg: &AuthorAggregate) -> Self {
        Self {
            author,
            platinum: agg.platinum(),
            gold: agg.gold(),
            silver: agg.silver(),
            bronze: agg.bronze(),
            total_score: agg.total_score(),
        }
    }
}

/// Complete leaderboard document, written by `rank --json`.
#[derive(Debug, Serialize)]
pub struct Leaderboard {
    pub generated_at: DateTime<Utc>,
    pub entries: usize,
    pub rows: Vec<LeaderboardRow>,
}
