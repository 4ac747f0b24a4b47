use anyhow::{Context, Result};
use reqwest::blocking::Client;
use std::fs::File;
use std::path::Path;

pub const USER_AGENT: &str = concat!("debian-snapshot-scraper/", env!("CARGO_PKG_VERSION"));

/// Where listing pages and snapshot files come from.
pub trait Source {
    /// Fetch a page as text. Non-success statuses are errors.
    fn fetch_text(&self, url: &str) -> Result<String>;

    /// Stream `url` into a newly created file at `dest`, returning the byte count.
    fn download(&self, url: &str, dest: &Path) -> Result<u64>;
}

pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { client })
    }
}

impl Source for HttpSource {
    fn fetch_text(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .with_context(|| format!("Failed to send request to {}", url))?
            .error_for_status()
            .with_context(|| format!("Bad response status from {}", url))?;
        response.text().context("Failed to get response text")
    }

    fn download(&self, url: &str, dest: &Path) -> Result<u64> {
        let mut response = self
            .client
            .get(url)
            .send()
            .with_context(|| format!("Failed to send request to {}", url))?
            .error_for_status()
            .with_context(|| format!("Bad response status from {}", url))?;

        let mut file = File::create(dest)
            .with_context(|| format!("Failed to create file: {}", dest.display()))?;
        response
            .copy_to(&mut file)
            .with_context(|| format!("Failed to write {} to {}", url, dest.display()))
    }
}
