use leaderboard::fetch::BasicClient;
use leaderboard::html::TableColumns;
use leaderboard::infra::{HtmlTableProvider, SnapshotProvider};
use leaderboard::parser::parse_entries;
use leaderboard::scoring::aggregate;
use leaderboard::scoring::analyzer::run;
use leaderboard::services::data_provider::DataProvider;
use std::sync::Arc;

const SNAPSHOT: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/leaderboard.json");
const EXTRA: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/tests/fixtures/leaderboard_extra.json"
);
const TABLE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/submissions.html");

#[test]
fn test_full_pipeline() {
    let bytes = include_bytes!("fixtures/leaderboard.json");
    let entries = parse_entries("fixture", bytes).expect("Failed to parse snapshot");
    let rows = aggregate(&entries);

    let ranking: Vec<_> = rows
        .iter()
        .map(|r| (r.author.as_str(), r.total_score))
        .collect();
    assert_eq!(
        ranking,
        vec![
            ("Barbara Liskov", 8),
            ("Grace Hopper", 7),
            ("Alan Turing", 6),
            ("Ada Lovelace", 5),
            ("Edsger Dijkstra", 0),
        ]
    );
}

#[tokio::test]
async fn test_sources_concatenate_in_order() {
    let client = Arc::new(BasicClient::new());
    let providers: Vec<Arc<dyn DataProvider>> = vec![
        Arc::new(SnapshotProvider::new(SNAPSHOT, client.clone())),
        Arc::new(SnapshotProvider::new(EXTRA, client.clone())),
    ];

    let board = run(providers, 2).await.expect("Failed to run pipeline");
    assert_eq!(board.entries, 11);

    // Ada (8) and Barbara (8) tie, as do Alan (6) and Edsger (6, all from the
    // second source); each pair keeps first-appearance order.
    let ranking: Vec<_> = board
        .rows
        .iter()
        .map(|r| (r.author.as_str(), r.total_score))
        .collect();
    assert_eq!(
        ranking,
        vec![
            ("Ada Lovelace", 8),
            ("Barbara Liskov", 8),
            ("Grace Hopper", 7),
            ("Alan Turing", 6),
            ("Edsger Dijkstra", 6),
        ]
    );
}

#[tokio::test]
async fn test_missing_source_fails_whole_run() {
    let client = Arc::new(BasicClient::new());
    let providers: Vec<Arc<dyn DataProvider>> = vec![
        Arc::new(SnapshotProvider::new(SNAPSHOT, client.clone())),
        Arc::new(SnapshotProvider::new(
            "tests/fixtures/does_not_exist.json",
            client.clone(),
        )),
    ];

    let err = run(providers, 2).await.unwrap_err();
    assert!(err.is_load_failure());
}

#[tokio::test]
async fn test_scraped_table_ranks_like_snapshot() {
    let client = Arc::new(BasicClient::new());
    let provider = HtmlTableProvider::new(TABLE, 1.0, TableColumns::default(), client.clone())
        .expect("valid fraction");

    let providers: Vec<Arc<dyn DataProvider>> = vec![Arc::new(provider)];
    let board = run(providers, 1).await.unwrap();
    let ranking: Vec<_> = board
        .rows
        .iter()
        .map(|r| (r.author.as_str(), r.total_score))
        .collect();
    assert_eq!(
        ranking,
        vec![("Alan Turing", 6), ("Ada Lovelace", 4), ("Grace Hopper", 3)]
    );

    let half = HtmlTableProvider::new(TABLE, 0.5, TableColumns::default(), client).unwrap();
    let rows = half.scrape().await.unwrap();
    let authors: Vec<_> = rows.iter().map(|r| r.author.as_str()).collect();
    assert_eq!(authors, vec!["Ada Lovelace", "Grace Hopper"]);
}
