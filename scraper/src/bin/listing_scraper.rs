use anyhow::{Context, Result};
use clap::Parser;
use debian_snapshot_scraper::snapshot::{files_url, DEFAULT_ARCH, DEFAULT_BASE_URL, DEFAULT_DIST};
use debian_snapshot_scraper::{fetch_listing, snapshots_for, HttpSource, YearMonth};
use std::fs;

/// List the snapshots available for a single month and save them as JSON
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Year in YYYY format (e.g. 2015)
    year: i32,

    /// Month between 1 and 12
    month: u32,

    /// Snapshot archive root
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,
}

pub fn scrape_listing(base_url: &str, month: YearMonth) -> Result<()> {
    let source = HttpSource::new()?;
    let hrefs = fetch_listing(&source, base_url, month)?;
    let snapshots = snapshots_for(&hrefs);

    println!("Found {} snapshots for {}", snapshots.len(), month);

    if snapshots.is_empty() {
        println!("No snapshots found for this period");
        return Ok(());
    }

    println!("\nSnapshots:");
    for (index, snapshot) in snapshots.iter().enumerate() {
        match snapshot.timestamp {
            Some(timestamp) => println!("{}. {} ({})", index + 1, snapshot.id, timestamp),
            None => println!("{}. {}", index + 1, snapshot.id),
        }
        println!(
            "   URL: {}",
            files_url(base_url, &snapshot.href, DEFAULT_DIST, DEFAULT_ARCH)
        );
    }

    let output_file_name = format!("listing_{}_{:02}.json", month.year(), month.month());
    let json =
        serde_json::to_string_pretty(&snapshots).context("Failed to serialize snapshot listing")?;
    fs::write(&output_file_name, json).context("Failed to write JSON file")?;

    println!("\nListing saved to {}", output_file_name);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::init();

    let month = YearMonth::new(cli.year, cli.month).context("Invalid year or month")?;
    scrape_listing(&cli.base_url, month)
}
