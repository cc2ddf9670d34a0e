//! Submission scoring and per-author aggregation.
//!
//! Each raw entry is scored into a tier, entries are folded into one
//! aggregate per author, and the result is ranked by total score.

pub mod aggregate;
pub mod analyzer;
pub mod tier;
pub mod types;

pub use aggregate::{aggregate, build_leaderboard, score_entries};
pub use tier::{Tier, score_tier};
