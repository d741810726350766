use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::errors::TrackerError;

/// Environment override for the app directory, used by scripted runs and
/// integration tests.
pub const HOME_ENV: &str = "TALLY_CORE_HOME";

const APP_DIR: &str = "tally_core";

pub fn ensure_dir(path: &Path) -> Result<(), TrackerError> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Resolution order: explicit override, `TALLY_CORE_HOME`, the platform data
/// directory, finally the working directory.
pub fn base_dir(override_dir: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = override_dir {
        return dir;
    }
    if let Some(dir) = std::env::var_os(HOME_ENV) {
        return PathBuf::from(dir);
    }
    dirs::data_dir()
        .map(|dir| dir.join(APP_DIR))
        .unwrap_or_else(|| PathBuf::from("."))
}

pub fn store_file_in(base: &Path) -> PathBuf {
    base.join("store.json")
}

pub fn config_file_in(base: &Path) -> PathBuf {
    base.join("config.json")
}
