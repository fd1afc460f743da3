//! Stormboard CLI
//!
//! Local entry point: loads an advisory feed, applies filter toggles, and
//! prints the projected display sequence.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use stormboard::{
    error::Result,
    models::{Config, FeedPayload, FilterState, LocaleConfig},
    store::AdvisoryStore,
};

/// Stormboard - Weather Hazard Advisory Board
#[derive(Parser, Debug)]
#[command(
    name = "stormboard",
    version,
    about = "Groups, filters, and sorts weather hazard advisories"
)]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "data/config.toml")]
    config: PathBuf,

    /// Path to the locale tables file
    #[arg(long, default_value = "data/locale.toml")]
    locale_file: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the projected advisory sequence from a feed
    Show {
        /// Path to the feed JSON file
        feed: PathBuf,

        /// Category code to toggle before projecting (repeatable)
        #[arg(long)]
        toggle: Vec<u32>,

        /// Emit the projection as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print the filter registry for a feed
    Filters {
        /// Path to the feed JSON file
        feed: PathBuf,
    },

    /// Validate configuration, locale tables, and a feed
    Validate {
        /// Path to the feed JSON file
        feed: PathBuf,
    },
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Build a store and load the given feed into it.
fn load_store(cli: &Cli, feed: &PathBuf) -> Result<AdvisoryStore> {
    let config = Config::load_or_default(&cli.config);
    let locale = LocaleConfig::load_or_default(&cli.locale_file);

    let mut store = AdvisoryStore::new(&config, &locale);
    let payload = FeedPayload::load(feed)?;
    let report = store.reload(payload);

    log::info!(
        "Loaded {} advisories from {} ({} rejected)",
        report.loaded,
        feed.display(),
        report.rejected.len()
    );

    Ok(store)
}

/// Main entry point for the CLI application.
fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        Command::Show { feed, toggle, json } => {
            let mut store = load_store(&cli, feed)?;

            for &code in toggle {
                match store.toggle(code) {
                    Ok(state) => log::debug!("Toggled filter {code} to {state:?}"),
                    Err(e) => log::warn!("Skipping toggle: {e}"),
                }
            }

            if *json {
                println!("{}", serde_json::to_string_pretty(&store.visible())?);
                return Ok(());
            }

            let formatter = store.formatter();
            for display in store.visible() {
                let advisory = &display.advisory;
                let ts = advisory.timestamp();

                if display.show_date_separator {
                    println!("── {} ──", formatter.format(ts, "d F"));
                }

                let pattern = if advisory.time_pattern.is_empty() {
                    "H:i"
                } else {
                    &advisory.time_pattern
                };
                let category = store
                    .filters()
                    .get(&advisory.category)
                    .map_or("?", |entry| entry.display_name.as_str());

                println!(
                    "{} [{}] {}",
                    formatter.format(ts, pattern),
                    category,
                    advisory.title
                );
                if !advisory.body.is_empty() {
                    println!("    {}", advisory.body);
                }
            }
        }

        Command::Filters { feed } => {
            let store = load_store(&cli, feed)?;

            for entry in store.filters().values() {
                let marker = match entry.state {
                    FilterState::Applied => "✓",
                    FilterState::Removed => "✗",
                    FilterState::Disabled => "-",
                };
                println!(
                    "{} {:2} {} ({})",
                    marker, entry.category_code, entry.display_name, entry.count
                );
            }
            println!("Applied filters: {}", store.total_applied());
        }

        Command::Validate { feed } => {
            log::info!("Validating configuration...");

            let config = Config::load_or_default(&cli.config);
            config.validate()?;
            log::info!("✓ Config OK");

            let locale = LocaleConfig::load_or_default(&cli.locale_file);
            locale.validate()?;
            log::info!("✓ Locale tables OK");

            let mut store = AdvisoryStore::new(&config, &locale);
            let report = store.reload(FeedPayload::load(feed)?);
            log::info!(
                "✓ Feed OK: {} advisories loaded, {} rejected",
                report.loaded,
                report.rejected.len()
            );
            for issue in &report.rejected {
                log::warn!("  record {}: {}", issue.index, issue.reason);
            }

            log::info!("All validations passed!");
        }
    }

    Ok(())
}
