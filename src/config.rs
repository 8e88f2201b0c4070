use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::model::Anchor;

const APP_DIR: &str = "boutique-rs";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub player: PlayerConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default = "default_store_name")]
    pub name: String,
    #[serde(default = "default_tagline")]
    pub tagline: String,
    #[serde(default = "default_phone")]
    pub phone: String,
    #[serde(default = "default_currency")]
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Directory for the daily rotated log files
    #[serde(default = "default_log_dir")]
    pub directory: PathBuf,
    /// Filter used when `RUST_LOG` is not set
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Refuse every play request, like a browser blocking autoplay.
    #[serde(default)]
    pub autoplay_blocked: bool,
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default = "default_products")]
    pub products: Vec<ProductConfig>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductSection {
    Montres,
    Lunettes,
}

impl ProductSection {
    pub fn anchor(self) -> Anchor {
        match self {
            ProductSection::Montres => Anchor::Montres,
            ProductSection::Lunettes => Anchor::Lunettes,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductConfig {
    pub id: u32,
    pub name: String,
    pub price: String,
    #[serde(default)]
    pub image: String,
    pub section: ProductSection,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            name: default_store_name(),
            tagline: default_tagline(),
            phone: default_phone(),
            currency: default_currency(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            directory: default_log_dir(),
            filter: default_log_filter(),
        }
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            autoplay_blocked: false,
            tick_ms: default_tick_ms(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            products: default_products(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store: StoreConfig::default(),
            logging: LoggingConfig::default(),
            player: PlayerConfig::default(),
            catalog: CatalogConfig::default(),
        }
    }
}

fn default_store_name() -> String {
    "Time & Vision".to_string()
}

fn default_tagline() -> String {
    "Montres et Lunettes".to_string()
}

fn default_phone() -> String {
    "+212 771-948034".to_string()
}

fn default_currency() -> String {
    "DH".to_string()
}

fn default_log_dir() -> PathBuf {
    PathBuf::from(".logs")
}

fn default_log_filter() -> String {
    "boutique_rs=debug,warn".to_string()
}

fn default_tick_ms() -> u64 {
    250
}

fn product(id: u32, name: &str, price: &str, image: &str, section: ProductSection) -> ProductConfig {
    ProductConfig {
        id,
        name: name.to_string(),
        price: price.to_string(),
        image: image.to_string(),
        section,
    }
}

fn default_products() -> Vec<ProductConfig> {
    use ProductSection::*;
    vec![
        product(1, "Montre Royale", "15 000,00 DH", "/images/montre-royale.jpg", Montres),
        product(2, "Montre Diamant", "28 500,00 DH", "/images/montre-diamant.jpg", Montres),
        product(3, "Chronographe Atlas", "9 800,00 DH", "/images/chronographe-atlas.jpg", Montres),
        product(4, "Montre Classique", "4 200,00 DH", "/images/montre-classique.jpg", Montres),
        product(5, "Lunettes Prestige", "3 200,00 DH", "/images/lunettes-prestige.jpg", Lunettes),
        product(6, "Lunettes Aviateur", "2 450,00 DH", "/images/lunettes-aviateur.jpg", Lunettes),
        product(7, "Lunettes Écaille", "1 800,00 DH", "/images/lunettes-ecaille.jpg", Lunettes),
    ]
}

impl Config {
    /// Load the config file, writing defaults first if it does not exist yet.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            let config = Self::default();
            config.save_to(path)?;
            return Ok(config);
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let write_err = |source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(write_err)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.store.name, "Time & Vision");
        assert_eq!(config.store.currency, "DH");
        assert!(!config.player.autoplay_blocked);
        assert_eq!(config.player.tick_ms, 250);
        assert!(config.catalog.products.iter().any(|p| p.name == "Montre Royale"));
        assert!(Config::config_path().ends_with("boutique-rs/config.toml"));
    }

    #[test]
    fn test_missing_file_is_created_with_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config, Config::default());
        assert!(path.exists());

        let reloaded = Config::load_from(&path).unwrap();
        assert_eq!(reloaded, config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[player]\nautoplay_blocked = true\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert!(config.player.autoplay_blocked);
        assert_eq!(config.player.tick_ms, 250);
        assert_eq!(config.store, StoreConfig::default());
        assert_eq!(config.catalog.products.len(), 7);
    }

    #[test]
    fn test_invalid_file_reports_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[player\n").unwrap();

        assert!(matches!(Config::load_from(&path), Err(ConfigError::Parse { .. })));
    }
}
