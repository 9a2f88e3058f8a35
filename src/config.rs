/// Application configuration
///
/// Settings come from a JSON file (every field optional) and can be
/// overridden on the command line.

use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use crate::state::catalog;
use crate::state::data::MenuSection;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Command line flags
#[derive(Debug, Parser)]
#[command(name = "juice-cart", version, about = "A small juice shop with a shopping cart")]
pub struct Cli {
    /// Page to open first, e.g. `menu.html` or `/shop/cart.html`
    #[arg(long)]
    pub page: Option<String>,

    /// Path to the JSON config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Path to the SQLite database holding the cart
    #[arg(long)]
    pub database: Option<PathBuf>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ShopConfig {
    /// Symbol printed before every amount
    pub currency: String,
    /// Database file; the user data directory is used when unset
    pub database: Option<PathBuf>,
    /// Page shown at launch
    pub start_page: String,
    /// Delay before a toast starts fading
    pub toast_fade_ms: u64,
    /// Delay before a toast is removed
    pub toast_ms: u64,
    /// Delay before the order confirmation closes by itself
    pub confirmation_ms: u64,
    /// Delay between opening a menu section and scrolling to it
    pub menu_scroll_delay_ms: u64,
    /// Menu sections; the built-in juice menu when unset
    pub menu: Option<Vec<MenuSection>>,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            currency: "₹".to_string(),
            database: None,
            start_page: "index.html".to_string(),
            toast_fade_ms: 1400,
            toast_ms: 1800,
            confirmation_ms: 4200,
            menu_scroll_delay_ms: 150,
            menu: None,
        }
    }
}

impl ShopConfig {
    /// Default config file location (~/.config/juice-cart/config.json on Linux)
    pub fn default_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir()?;
        path.push("juice-cart");
        path.push("config.json");
        Some(path)
    }

    /// Load from `path`. A missing file gives the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        Self::from_json(&json).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Resolve the config for a launch: file first, then flags on top
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let mut config = match cli.config.clone().or_else(Self::default_path) {
            Some(path) => Self::load(&path)?,
            None => Self::default(),
        };

        if let Some(page) = &cli.page {
            config.start_page = page.clone();
        }
        if let Some(database) = &cli.database {
            config.database = Some(database.clone());
        }

        Ok(config)
    }

    pub fn menu(&self) -> Vec<MenuSection> {
        self.menu.clone().unwrap_or_else(catalog::default_menu)
    }

    pub fn toast_fade(&self) -> Duration {
        Duration::from_millis(self.toast_fade_ms)
    }

    pub fn toast_lifetime(&self) -> Duration {
        Duration::from_millis(self.toast_ms)
    }

    pub fn confirmation_lifetime(&self) -> Duration {
        Duration::from_millis(self.confirmation_ms)
    }

    pub fn menu_scroll_delay(&self) -> Duration {
        Duration::from_millis(self.menu_scroll_delay_ms)
    }
}
