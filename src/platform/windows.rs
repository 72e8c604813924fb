// Windows settings live in roaming AppData.

use std::env;
use std::path::PathBuf;

const APP_DIR: &str = "Quantum Browser";

pub fn get_config_dir() -> PathBuf {
    let appdata = env::var("APPDATA")
        .unwrap_or_else(|_| String::from("C:\\Users\\Default\\AppData\\Roaming"));
    PathBuf::from(appdata).join(APP_DIR)
}
