use crate::source::MenuSource;
use dotenv::dotenv;
use std::env;
use std::path::PathBuf;

pub const DEFAULT_SOURCE: &str = "menu.json";
pub const DEFAULT_LOG_FILE: &str = "klik-menu.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub source: MenuSource,
    pub log_file: PathBuf,
    pub debug: bool,
}

/// Initializes the application configuration from `.env` and the process
/// environment. CLI flags have already been folded into the environment.
pub fn init_app_config() -> AppConfig {
    // Load environment variables from .env file
    dotenv().ok();

    AppConfig {
        source: get_menu_source(),
        log_file: get_log_file(),
        debug: debug_enabled(),
    }
}

/// Gets the menu data source, a local file unless the value is a URL
pub fn get_menu_source() -> MenuSource {
    MenuSource::parse(&env::var("MENU_SOURCE").unwrap_or_else(|_| DEFAULT_SOURCE.to_string()))
}

/// Gets the path the terminal UI logs to
pub fn get_log_file() -> PathBuf {
    env::var("MENU_LOG_FILE").map_or_else(|_| PathBuf::from(DEFAULT_LOG_FILE), PathBuf::from)
}

pub fn debug_enabled() -> bool {
    env::var("DEBUG").is_ok_and(|value| !value.is_empty() && value != "0")
}
