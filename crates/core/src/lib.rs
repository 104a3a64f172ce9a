//! Events Admin Core Library
//!
//! Shared pieces for the admin server:
//! - Configuration discovery (XDG-compliant) and TOML loading
//! - Defaults shared by the CLI and config file

mod config;

pub use config::{find_config_file, load_config, ConfigSource};

/// Application name used for XDG paths
pub const APP_NAME: &str = "events-admin";

/// Default admin server port
pub const DEFAULT_ADMIN_PORT: u16 = 9810;

/// Default backend API the event list is fetched from
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000/api";
