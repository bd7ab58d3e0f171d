//! User configuration for forgeplate.
//!
//! Settings are stored as YAML in the platform config directory
//! (`~/.config/forgeplate/config.yml` on Linux) unless `FORGEPLATE_CONFIG`
//! names another file.
//!
//! # Example
//!
//! ```
//! use forgeplate::config::UserConfig;
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! let path = temp.path().join("config.yml");
//!
//! let mut config = UserConfig::load_from(&path).unwrap();
//! config.general.full_name = "Sam Doe".to_string();
//! config.save_to(&path).unwrap();
//!
//! assert_eq!(UserConfig::load_from(&path).unwrap().general.full_name, "Sam Doe");
//! ```

pub mod user;

pub use user::{GeneralSettings, UserConfig, CONFIG_ENV_VAR, CONFIG_SECTIONS};
