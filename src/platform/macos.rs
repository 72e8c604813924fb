// macOS paths live under ~/Library.

use std::env;
use std::path::PathBuf;

const APP_DIR: &str = "Quantum Browser";

fn home_dir() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/tmp")))
}

pub fn get_config_dir() -> PathBuf {
    home_dir()
        .join("Library")
        .join("Application Support")
        .join(APP_DIR)
}
