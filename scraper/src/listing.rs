use anyhow::Result;
use chrono::NaiveDateTime;
use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};

use crate::cursor::YearMonth;
use crate::source::Source;

const SNAPSHOT_TIMESTAMP_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// A snapshot directory found on a listing page.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Snapshot {
    pub id: String,
    pub href: String,
    pub timestamp: Option<NaiveDateTime>,
}

impl Snapshot {
    pub fn from_href(href: &str) -> Self {
        let id = href.trim_end_matches('/').to_string();
        let timestamp = NaiveDateTime::parse_from_str(&id, SNAPSHOT_TIMESTAMP_FORMAT).ok();
        Self {
            id,
            href: href.to_string(),
            timestamp,
        }
    }
}

pub fn listing_url(base_url: &str, month: YearMonth) -> String {
    format!(
        "{}?year={}&month={:02}",
        base_url,
        month.year(),
        month.month()
    )
}

/// All anchor hrefs on the page, in document order. Anchors without one are skipped.
pub fn extract_hrefs(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let anchor_selector = Selector::parse("a").unwrap();

    document
        .select(&anchor_selector)
        .filter_map(|anchor| anchor.value().attr("href"))
        .map(|href| href.to_string())
        .collect()
}

pub fn filter_by_year(hrefs: Vec<String>, year: i32) -> Vec<String> {
    let prefix = year.to_string();
    hrefs
        .into_iter()
        .filter(|href| href.starts_with(&prefix))
        .collect()
}

/// Fetch the listing for `month` and return the hrefs belonging to its year.
pub fn fetch_listing(
    source: &dyn Source,
    base_url: &str,
    month: YearMonth,
) -> Result<Vec<String>> {
    let url = listing_url(base_url, month);
    log::debug!("Fetching listing {}", url);

    let html = source.fetch_text(&url)?;
    let hrefs = filter_by_year(extract_hrefs(&html), month.year());
    log::debug!("Found {} snapshots for {}", hrefs.len(), month);
    Ok(hrefs)
}

pub fn snapshots_for(hrefs: &[String]) -> Vec<Snapshot> {
    hrefs.iter().map(|href| Snapshot::from_href(href)).collect()
}
