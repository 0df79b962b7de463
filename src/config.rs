use crate::core::filter::Section;
use crate::theme::ThemeChoice;
use crate::utils::get_data_dir;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "config.json";

/// Persisted UI preferences
///
/// Domain state (catalog, session, reactions) is never written here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub theme_choice: ThemeChoice,
    /// Section shown at startup; signed-in sections fall back to Home
    #[serde(default)]
    pub start_section: Section,
    /// Smaller cards, more columns
    #[serde(default)]
    pub compact_grid: bool,
    /// Catalog JSON to load instead of the built-in seed
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,
}

impl AppConfig {
    pub fn initial_section(&self) -> Section {
        if self.start_section.requires_session() {
            Section::Home
        } else {
            self.start_section
        }
    }
}

pub fn config_path() -> Option<PathBuf> {
    get_data_dir().map(|dir| dir.join(CONFIG_FILE))
}

/// Saves the config to the data dir. A missing data dir is a no-op.
pub async fn save_config(config: &AppConfig) -> std::io::Result<()> {
    match config_path() {
        Some(path) => save_config_to(&path, config).await,
        None => Ok(()),
    }
}

/// Atomic write: temp file created 0o600, synced, then renamed over `path`
pub async fn save_config_to(path: &Path, config: &AppConfig) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(config)?;
    let temp_path = path.with_extension("json.tmp");

    #[cfg(unix)]
    {
        use tokio::fs::OpenOptions;
        use tokio::io::AsyncWriteExt;

        let mut file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .mode(0o600)
            .open(&temp_path)
            .await?;

        file.write_all(json.as_bytes()).await?;
        file.sync_all().await?;
    }

    #[cfg(not(unix))]
    {
        use tokio::io::AsyncWriteExt;

        let mut file = tokio::fs::File::create(&temp_path).await?;
        file.write_all(json.as_bytes()).await?;
        file.sync_all().await?;
    }

    tokio::fs::rename(&temp_path, path).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::StorageFull {
            std::io::Error::new(
                std::io::ErrorKind::StorageFull,
                "Disk full: cannot save preferences. Free up space and try again.",
            )
        } else {
            e
        }
    })
}

/// Loads the config, or the default if it is missing or malformed.
///
/// Blocking, since `State::new` runs before any async context exists.
pub fn load_config() -> AppConfig {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => AppConfig::default(),
    }
}

pub fn load_config_from(path: &Path) -> AppConfig {
    match std::fs::read_to_string(path) {
        Ok(json) => parse_config(&json, path),
        Err(_) => AppConfig::default(),
    }
}

fn parse_config(json: &str, path: &Path) -> AppConfig {
    serde_json::from_str(json).unwrap_or_else(|e| {
        tracing::warn!("Ignoring malformed config at {}: {e}", path.display());
        AppConfig::default()
    })
}
