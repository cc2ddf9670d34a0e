//! Row extraction from an externally rendered submissions table.
//!
//! This is a small tag scanner, not an HTML parser: it finds `<tr>` blocks,
//! splits them into `<td>` cells and keeps the visible text of each cell.

use serde::Serialize;

use crate::error::{LeaderboardError, LeaderboardResult};

/// 0-based cell positions of the fields inside a table row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableColumns {
    pub author: usize,
    pub stage: usize,
    pub status: usize,
}

impl Default for TableColumns {
    fn default() -> Self {
        Self {
            author: 3,
            stage: 7,
            status: 8,
        }
    }
}

/// One scraped row, exactly as found on the page (missing cells are empty).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScrapedRow {
    pub author: String,
    pub stage: String,
    pub status: String,
}

pub fn validate_fraction(fraction: f64) -> LeaderboardResult<f64> {
    if (0.0..=1.0).contains(&fraction) {
        Ok(fraction)
    } else {
        Err(LeaderboardError::InvalidArgument(format!(
            "fraction must be between 0 and 1, got {fraction}"
        )))
    }
}

/// Extracts `(author, stage, status)` from the rows of `html`.
///
/// Row 0 is treated as the header. Only rows with index up to
/// `floor(row_count * fraction)` are read, and rows without `<td>` cells are
/// skipped.
pub fn scrape_table(html: &str, fraction: f64, columns: &TableColumns) -> Vec<ScrapedRow> {
    let rows = tag_blocks(html, "tr", &["tr", "/table"]);
    let limit = (rows.len() as f64 * fraction).floor() as usize;

    rows.iter()
        .enumerate()
        .skip(1)
        .take_while(|(index, _)| *index <= limit)
        .filter_map(|(_, row)| {
            let cells = tag_blocks(row, "td", &["td", "th"]);
            if cells.is_empty() {
                return None;
            }
            let text = |i: usize| cells.get(i).map(|c| cell_text(c)).unwrap_or_default();
            Some(ScrapedRow {
                author: text(columns.author),
                stage: text(columns.stage),
                status: text(columns.status),
            })
        })
        .collect()
}

/// Returns the inner markup of every `<tag ...>...</tag>` block in `s`.
///
/// A block without a closing tag ends where the next `<stop ...>` opens, or at
/// the end of input.
fn tag_blocks<'a>(s: &'a str, tag: &str, stops: &[&str]) -> Vec<&'a str> {
    let lc = s.to_ascii_lowercase();
    let close = format!("</{tag}");
    let mut blocks = Vec::new();
    let mut from = 0;

    while let Some(start) = find_open_tag(&lc, tag, from) {
        let Some(open_end) = lc[start..].find('>').map(|i| start + i + 1) else {
            break;
        };

        let mut end = lc.len();
        if let Some(i) = lc[open_end..].find(&close) {
            end = end.min(open_end + i);
        }
        for stop in stops {
            let next = if let Some(closing) = stop.strip_prefix('/') {
                lc[open_end..].find(&format!("</{closing}")).map(|i| open_end + i)
            } else {
                find_open_tag(&lc, stop, open_end)
            };
            if let Some(i) = next {
                end = end.min(i);
            }
        }

        blocks.push(&s[open_end..end]);
        from = end.max(open_end);
    }

    blocks
}

/// Finds `<tag` followed by `>`, `/` or whitespace, so `<tr` skips `<track`.
fn find_open_tag(lc: &str, tag: &str, from: usize) -> Option<usize> {
    let needle = format!("<{tag}");
    let mut pos = from;
    while let Some(i) = lc.get(pos..)?.find(&needle) {
        let start = pos + i;
        match lc.as_bytes().get(start + needle.len()) {
            Some(b'>') | Some(b'/') => return Some(start),
            Some(c) if c.is_ascii_whitespace() => return Some(start),
            _ => pos = start + needle.len(),
        }
    }
    None
}

/// Visible text of a cell: tags removed, common entities decoded, whitespace collapsed.
pub fn cell_text(markup: &str) -> String {
    let mut out = String::with_capacity(markup.len());
    let mut in_tag = false;

    for ch in markup.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }

    let decoded = out
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&");

    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}
