use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::core::utils::{base_dir, config_file_in, ensure_dir};
use crate::errors::TrackerError;

const TMP_SUFFIX: &str = "tmp";

/// User preferences applied at shell startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub currency_symbol: String,
    #[serde(default)]
    pub plain_output: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_symbol: "$".into(),
            plain_output: false,
            data_dir: None,
        }
    }
}

/// Loads and saves the configuration file in the app directory.
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, TrackerError> {
        Self::from_base(base_dir(None))
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, TrackerError> {
        Self::from_base(base)
    }

    fn from_base(base: PathBuf) -> Result<Self, TrackerError> {
        ensure_dir(&base)?;
        Ok(Self {
            path: config_file_in(&base),
        })
    }

    pub fn load(&self) -> Result<Config, TrackerError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), TrackerError> {
        if let Some(parent) = self.path.parent() {
            ensure_dir(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), TrackerError> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn load_defaults_when_absent() {
        let temp = TempDir::new().expect("temp dir");
        let manager =
            ConfigManager::with_base_dir(temp.path().to_path_buf()).expect("config manager");
        let config = manager.load().expect("load defaults");
        assert_eq!(config.currency_symbol, "$");
        assert!(!config.plain_output);
    }

    #[test]
    fn save_and_reload() {
        let temp = TempDir::new().expect("temp dir");
        let manager =
            ConfigManager::with_base_dir(temp.path().to_path_buf()).expect("config manager");
        let config = Config {
            currency_symbol: "€".into(),
            plain_output: true,
            data_dir: None,
        };
        manager.save(&config).expect("save");
        let loaded = manager.load().expect("reload");
        assert_eq!(loaded.currency_symbol, "€");
        assert!(loaded.plain_output);
    }
}
