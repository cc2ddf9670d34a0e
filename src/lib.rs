pub mod error;
pub mod fetch;
pub mod html;
pub mod infra;
pub mod output;
pub mod parser;
pub mod scoring;
pub mod services;

pub use error::{LeaderboardError, LeaderboardResult};
