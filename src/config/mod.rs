use std::path::PathBuf;
use std::{env, fs};

use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::utils::app_data_dir;

const CONFIG_FILE: &str = "config.json";
const REMOTE_URI_ENV: &str = "TRIP_CORE_REMOTE_URI";

const DEFAULT_REMOTE_URI: &str = "mongodb://localhost:27017";
const DEFAULT_DATABASE: &str = "holiday_wallet";

/// Crate configuration: where the remote document store lives and where
/// the local fallback keeps its state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub remote_uri: String,
    pub database: String,
    /// Overrides the default data directory; `None` resolves to the
    /// platform default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            remote_uri: DEFAULT_REMOTE_URI.into(),
            database: DEFAULT_DATABASE.into(),
            data_dir: None,
        }
    }
}

impl Config {
    /// Loads `config.json` from the data directory when present, falling
    /// back to defaults, then applies the `TRIP_CORE_REMOTE_URI`
    /// environment override.
    pub fn load() -> Result<Self> {
        let mut config = Self::read_file(app_data_dir().join(CONFIG_FILE))?;
        if let Ok(uri) = env::var(REMOTE_URI_ENV) {
            config.remote_uri = uri;
        }
        Ok(config)
    }

    fn read_file(path: PathBuf) -> Result<Self> {
        if path.exists() {
            let data = fs::read_to_string(&path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Self::default())
        }
    }
}
