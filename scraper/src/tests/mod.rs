use anyhow::{anyhow, Context, Result};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::source::Source;

pub mod fixtures;

/// In-memory stand-in for the snapshot archive that records every request made.
#[derive(Default)]
pub struct FakeArchive {
    pages: HashMap<String, String>,
    files: HashMap<String, Vec<u8>>,
    pub page_requests: RefCell<Vec<String>>,
    pub downloads: RefCell<Vec<String>>,
}

impl FakeArchive {
    pub fn with_page(mut self, url: &str, html: &str) -> Self {
        self.pages.insert(url.to_string(), html.to_string());
        self
    }

    pub fn with_file(mut self, url: &str, content: &[u8]) -> Self {
        self.files.insert(url.to_string(), content.to_vec());
        self
    }
}

impl Source for FakeArchive {
    fn fetch_text(&self, url: &str) -> Result<String> {
        self.page_requests.borrow_mut().push(url.to_string());
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| anyhow!("404 Not Found: {}", url))
    }

    fn download(&self, url: &str, dest: &Path) -> Result<u64> {
        self.downloads.borrow_mut().push(url.to_string());
        let content = self
            .files
            .get(url)
            .ok_or_else(|| anyhow!("404 Not Found: {}", url))?;
        fs::write(dest, content)
            .with_context(|| format!("Failed to write {}", dest.display()))?;
        Ok(content.len() as u64)
    }
}
