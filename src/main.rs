//! GlassTube - a glassy video portal demo
//!
//! A desktop mock of a video-sharing site built with iced. Everything is
//! in memory: the catalog, the two demo accounts, comments and reactions all
//! reset when the window closes.
//!
//! # Features
//!
//! - Home and trending feeds with live search
//! - Watch page with likes, dislikes, save and related videos
//! - Per-video comment threads
//! - Sign in, registration and an admin-only upload dialog
//! - Several color themes, remembered between runs
//!
//! # Usage
//!
//! ```bash
//! # Run the GUI application
//! glasstube
//!
//! # CLI commands
//! glasstube list                             # Every video in the catalog
//! glasstube list --section trending          # Trending only
//! glasstube list --query gaming              # Search titles and channels
//! glasstube login admin@glassy.tube admin123 # Check a demo account
//! glasstube export > catalog.json            # Dump the catalog as JSON
//! glasstube --catalog catalog.json list      # Use a custom catalog
//! ```

mod app;
mod config;
mod core;
mod theme;
mod utils;
mod validators;

use clap::{Parser, Subcommand};
use iced::Size;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::core::catalog::Catalog;
use crate::core::directory::MockDirectory;
use crate::core::filter::{FilteredCatalog, Section};
use crate::core::notify::{NoticeKind, NotificationSink};
use crate::core::portal::Portal;

shadow_rs::shadow!(build);

#[derive(Parser)]
#[command(name = "glasstube")]
#[command(about = "GlassTube - a glassy video portal demo", long_about = None)]
#[command(version = build::PKG_VERSION, long_version = build::VERSION)]
struct Cli {
    /// Load the catalog from a JSON file instead of the built-in demo videos
    #[arg(long, global = true, env = "GLASSTUBE_CATALOG", value_name = "PATH")]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List videos, optionally filtered
    List {
        /// Section to list (home or trending)
        #[arg(short, long, default_value = "home")]
        section: Section,
        /// Case-insensitive search over titles and channel names
        #[arg(short, long, default_value = "")]
        query: String,
    },
    /// Check credentials against the demo account directory
    Login { email: String, password: String },
    /// Print the catalog as pretty JSON
    Export,
}

/// Prints notices: successes to stdout, errors to stderr
struct ConsoleSink;

impl NotificationSink for ConsoleSink {
    fn notify(&mut self, kind: NoticeKind, message: String) {
        match kind {
            NoticeKind::Success => println!("✓ {message}"),
            NoticeKind::Error => eprintln!("✗ {message}"),
        }
    }
}

fn main() -> ExitCode {
    if let Err(e) = crate::utils::ensure_dirs() {
        eprintln!("Warning: could not create app directories: {e}");
    }
    let cli = Cli::parse();

    if let Some(command) = cli.command {
        init_cli_logging();
        match handle_cli(command, cli.catalog.as_deref()) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Error: {e}");
                ExitCode::FAILURE
            }
        }
    } else {
        launch_gui(cli.catalog)
    }
}

fn init_cli_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_catalog(path: Option<&Path>) -> crate::core::error::Result<Catalog> {
    match path {
        Some(path) => Catalog::load_json(path),
        None => Ok(Catalog::seeded()),
    }
}

/// Lines printed by `list`: the summary when a query is active, the empty
/// message when nothing matched, then one row per item
fn listing(filtered: &FilteredCatalog<'_>) -> Vec<String> {
    let mut lines = Vec::with_capacity(filtered.len() + 1);
    if let Some(summary) = filtered.summary() {
        lines.push(summary);
    }
    if filtered.is_empty() {
        lines.push(filtered.empty_message().to_string());
    }
    lines.extend(filtered.items.iter().map(|item| {
        format!(
            "{:>4}  {:<56} {:<18} {:>12}  {}",
            item.id,
            crate::utils::truncate_string(&item.title, 56),
            crate::utils::truncate_string(&item.owner, 18),
            item.views,
            item.duration
        )
    }));
    lines
}

fn handle_cli(
    command: Commands,
    catalog_path: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::List { section, query } => {
            if section.requires_session() {
                return Err(format!("'{section}' needs a signed-in session; use the GUI").into());
            }
            let catalog = load_catalog(catalog_path)?;
            let portal = Portal::new(catalog, MockDirectory::seeded());
            for line in listing(&portal.filtered(section, &query)) {
                println!("{line}");
            }
        }
        Commands::Login { email, password } => {
            let mut portal = Portal::new(load_catalog(catalog_path)?, MockDirectory::seeded());
            // The sink already printed the reason
            let Ok(session) = portal.login(&email, &password, &mut ConsoleSink) else {
                return Err("login failed".into());
            };
            println!("Role: {}", session.role);
            println!(
                "Can upload: {}",
                if session.can_upload() { "yes" } else { "no" }
            );
        }
        Commands::Export => {
            let catalog = load_catalog(catalog_path)?;
            println!("{}", catalog.to_json_pretty()?);
        }
    }
    Ok(())
}

fn launch_gui(catalog_override: Option<PathBuf>) -> ExitCode {
    // Set up logging to file
    if let Some(mut log_path) = crate::utils::get_state_dir() {
        log_path.push("glasstube.log");
        if let Ok(file) = std::fs::File::create(log_path) {
            tracing_subscriber::fmt().with_writer(file).init();
        } else {
            tracing_subscriber::fmt::init();
        }
    } else {
        tracing_subscriber::fmt::init();
    }

    let boot = move || app::State::new(catalog_override.clone());

    let result = iced::application(boot, app::State::update, app::State::view)
        .subscription(app::State::subscription)
        .window(iced::window::Settings {
            size: Size::new(1280.0, 800.0),
            min_size: Some(Size::new(720.0, 520.0)),
            ..Default::default()
        })
        .title(app::State::title)
        .theme(app::State::iced_theme)
        .run();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("GUI exited with error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_with_query_starts_with_summary() {
        let portal = Portal::seeded();
        let lines = listing(&portal.filtered(Section::Home, "gaming"));
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "1 results for \"gaming\"");
        assert!(lines[1].trim_start().starts_with("2  Ultimate Gaming Setup"));
    }

    #[test]
    fn test_listing_without_query_has_no_summary() {
        let portal = Portal::seeded();
        let lines = listing(&portal.filtered(Section::Trending, ""));
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|l| !l.contains("results for")));
    }

    #[test]
    fn test_listing_no_match_reports_empty() {
        let portal = Portal::seeded();
        let lines = listing(&portal.filtered(Section::Home, "hub "));
        assert_eq!(lines, vec!["0 results for \"hub \"", "No videos found"]);
    }
}
