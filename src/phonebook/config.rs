use crate::error::{PhonebookError, Result};
use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "address_book.json";

/// Environment variable that relocates the phonebook home directory.
pub const HOME_ENV: &str = "PHONEBOOK_HOME";

/// Configuration for phonebook, stored in `<home>/config.json`
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct PhonebookConfig {
    /// Data file for the address book, relative to the home directory unless absolute
    #[serde(default = "default_data_file")]
    pub data_file: String,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

impl Default for PhonebookConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
        }
    }
}

impl PhonebookConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(PhonebookError::Io)?;
        let config: PhonebookConfig =
            serde_json::from_str(&content).map_err(PhonebookError::Serialization)?;
        Ok(config)
    }

    /// Absolute (or home-relative) location of the data file.
    pub fn data_path(&self, home: &Path) -> PathBuf {
        let data_file = Path::new(&self.data_file);
        if data_file.is_absolute() {
            data_file.to_path_buf()
        } else {
            home.join(data_file)
        }
    }
}

/// Resolves the home directory: `$PHONEBOOK_HOME`, then the platform data dir, then `.`.
pub fn home_dir() -> PathBuf {
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return PathBuf::from(home);
    }
    ProjectDirs::from("com", "phonebook", "phonebook")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}
