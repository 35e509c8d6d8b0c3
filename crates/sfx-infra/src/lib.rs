//! Infrastructure adapters for sfxdrag.
//!
//! - [`config`]: TOML configuration loading
//! - [`preferences`]: JSON file storage for the OS preference
//! - [`catalog`]: HTTP client for the catalog service

pub mod catalog;
pub mod config;
pub mod preferences;

pub use catalog::HttpCatalogClient;
pub use config::{load_config, load_config_or_default, BridgeConfig};
pub use preferences::FilePreferenceStorage;
