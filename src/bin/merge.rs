//! feedmerge: merge threat-intelligence feeds into sorted blocklists.

use clap::Parser;
use feedmerge::{FeedCatalog, HttpFetcher, Whitelist};
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "feedmerge")]
#[command(version = "0.1.0")]
#[command(about = "Merge threat-intelligence feeds into clean, sorted blocklists", long_about = None)]
struct Cli {
    /// Output directory for ips.txt, domains.txt and urls.txt
    #[arg(short, long, default_value = "docs")]
    output_dir: PathBuf,

    /// Whitelist file, one domain pattern per line (a missing file disables filtering)
    #[arg(short, long, default_value = "whitelist.txt")]
    whitelist: PathBuf,

    /// YAML feed catalog replacing the stock source list
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the summary as JSON
    #[arg(long)]
    json: bool,

    /// Verbose output (debug-level logging)
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> feedmerge::Result<()> {
    let catalog = match &cli.config {
        Some(path) => FeedCatalog::from_yaml(&fs::read_to_string(path)?)?,
        None => FeedCatalog::default(),
    };

    let whitelist = Whitelist::load(&cli.whitelist)?;
    if !whitelist.is_empty() {
        log::info!("loaded {} whitelist patterns", whitelist.len());
    }

    let fetcher = HttpFetcher::new()?;
    let report = feedmerge::run(&catalog, &fetcher, &whitelist, &cli.output_dir)?;

    if cli.json {
        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| feedmerge::Error::Config(e.to_string()))?;
        println!("{json}");
    } else {
        println!("{}", report.summary());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["feedmerge"]).unwrap();
        assert_eq!(cli.output_dir, PathBuf::from("docs"));
        assert_eq!(cli.whitelist, PathBuf::from("whitelist.txt"));
        assert!(cli.config.is_none());
        assert!(!cli.json);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_cli_verbose_flag() {
        let cli = Cli::try_parse_from(["feedmerge", "-v"]).unwrap();
        assert!(cli.verbose);

        let cli = Cli::try_parse_from(["feedmerge", "--verbose"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn test_cli_options() {
        let cli = Cli::try_parse_from([
            "feedmerge",
            "--output-dir",
            "out",
            "--config",
            "feeds.yml",
            "--json",
        ])
        .unwrap();
        assert_eq!(cli.output_dir, PathBuf::from("out"));
        assert_eq!(cli.config, Some(PathBuf::from("feeds.yml")));
        assert!(cli.json);
    }
}
