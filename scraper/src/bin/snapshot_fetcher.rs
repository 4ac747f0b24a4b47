use anyhow::{Context, Result};
use clap::Parser;
use debian_snapshot_scraper::cursor::{DEFAULT_FROM, DEFAULT_TO};
use debian_snapshot_scraper::snapshot::{DEFAULT_ARCH, DEFAULT_BASE_URL, DEFAULT_DIST};
use debian_snapshot_scraper::{Fetcher, FetcherConfig, HttpSource, YearMonth};
use log::LevelFilter;
use std::fs;
use std::path::PathBuf;

/// Download Release and Packages.gz files of every Debian snapshot in a range of months
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// First month to fetch (YYYYMM or YYYY-MM)
    #[arg(long, default_value_t = DEFAULT_FROM)]
    from: YearMonth,

    /// Month to stop at, not fetched itself (YYYYMM or YYYY-MM)
    #[arg(long, default_value_t = DEFAULT_TO)]
    to: YearMonth,

    /// Snapshot archive root, listing pages live at `<BASE_URL>?year=..&month=..`
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Distribution whose metadata is downloaded
    #[arg(long, default_value = DEFAULT_DIST)]
    dist: String,

    /// Architecture whose Packages index is downloaded
    #[arg(long, default_value = DEFAULT_ARCH)]
    arch: String,

    /// Directory the files are saved to
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    env_logger::builder()
        .filter_level(log_level)
        .parse_default_env()
        .init();

    fs::create_dir_all(&cli.output_dir).with_context(|| {
        format!(
            "Failed to create output directory: {}",
            cli.output_dir.display()
        )
    })?;

    log::info!(
        "Fetching snapshots from {} until {} into {}",
        cli.from,
        cli.to,
        cli.output_dir.display()
    );

    let config = FetcherConfig {
        base_url: cli.base_url,
        from: cli.from,
        to: cli.to,
        dist: cli.dist,
        arch: cli.arch,
        output_dir: cli.output_dir,
    };

    let source = HttpSource::new()?;
    Fetcher::new(config, &source).run()?;

    Ok(())
}
