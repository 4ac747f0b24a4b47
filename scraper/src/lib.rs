pub mod cursor;
pub mod fetcher;
pub mod listing;
pub mod snapshot;
pub mod source;

#[cfg(test)]
pub mod tests;

// Re-export key types and functions for easier access
pub use crate::cursor::{CursorError, YearMonth};
pub use crate::fetcher::{Fetcher, FetcherConfig, RunSummary};
pub use crate::listing::{
    extract_hrefs, fetch_listing, filter_by_year, listing_url, snapshots_for, Snapshot,
};
pub use crate::snapshot::{files_url, save_name, TARGETS};
pub use crate::source::{HttpSource, Source};
