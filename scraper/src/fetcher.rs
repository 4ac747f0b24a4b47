use anyhow::Result;
use std::path::PathBuf;

use crate::cursor::{YearMonth, DEFAULT_FROM, DEFAULT_TO};
use crate::listing::fetch_listing;
use crate::snapshot::{
    files_url, save_name, DEFAULT_ARCH, DEFAULT_BASE_URL, DEFAULT_DIST, TARGETS,
};
use crate::source::Source;

#[derive(Debug, Clone)]
pub struct FetcherConfig {
    pub base_url: String,
    pub from: YearMonth,
    /// Exclusive.
    pub to: YearMonth,
    pub dist: String,
    pub arch: String,
    pub output_dir: PathBuf,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            from: DEFAULT_FROM,
            to: DEFAULT_TO,
            dist: DEFAULT_DIST.to_string(),
            arch: DEFAULT_ARCH.to_string(),
            output_dir: PathBuf::from("."),
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub months: usize,
    pub snapshots: usize,
    pub downloaded: usize,
    pub skipped: usize,
}

pub struct Fetcher<'a> {
    config: FetcherConfig,
    source: &'a dyn Source,
}

impl<'a> Fetcher<'a> {
    pub fn new(config: FetcherConfig, source: &'a dyn Source) -> Self {
        Self { config, source }
    }

    /// Walk every month of the range and download the metadata files that are missing.
    /// The first failure ends the run.
    pub fn run(&self) -> Result<RunSummary> {
        let mut summary = RunSummary::default();

        for month in self.config.from.months_until(self.config.to) {
            println!(
                "Current date: {} - {} - {}",
                month.as_yyyymm(),
                month.year(),
                month.month()
            );
            summary.months += 1;

            let hrefs = fetch_listing(self.source, &self.config.base_url, month)?;
            for href in &hrefs {
                summary.snapshots += 1;
                self.fetch_snapshot(href, &mut summary)?;
            }
        }

        log::info!(
            "Visited {} months, {} snapshots: {} files downloaded, {} already present",
            summary.months,
            summary.snapshots,
            summary.downloaded,
            summary.skipped
        );
        Ok(summary)
    }

    fn fetch_snapshot(&self, href: &str, summary: &mut RunSummary) -> Result<()> {
        let url = files_url(
            &self.config.base_url,
            href,
            &self.config.dist,
            &self.config.arch,
        );

        for target in TARGETS {
            let save = save_name(href, target);
            let dest = self.config.output_dir.join(&save);

            if dest.exists() {
                log::debug!("{} already present, skipping", dest.display());
                summary.skipped += 1;
                continue;
            }

            let file_url = format!("{}{}", url, target);
            println!("{} {}", file_url, save);
            let bytes = self.source.download(&file_url, &dest)?;
            log::debug!("Wrote {} bytes to {}", bytes, dest.display());
            summary.downloaded += 1;
        }

        Ok(())
    }
}
