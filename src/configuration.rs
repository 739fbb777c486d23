use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::tabulated::storagekind::StorageKind;

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("cannot open configuration '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid configuration '{path}': {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[derive(Deserialize)]
#[serde(default)]
struct ConfigurationJsonProp {
    log_level: String,
    storage: StorageKind,
    output_dir: Option<PathBuf>,
    sample_count: usize,
}

impl Default for ConfigurationJsonProp {
    fn default() -> Self {
        ConfigurationJsonProp {
            log_level: "info".to_owned(),
            storage: StorageKind::default(),
            output_dir: None,
            sample_count: 11,
        }
    }
}

/// Settings of the demonstration driver.
#[derive(Clone, Debug)]
pub struct Configuration {
    log_level: String,
    storage: StorageKind,
    output_dir: PathBuf,
    sample_count: usize,
}

impl Configuration {
    pub fn new() -> Configuration {
        Self::from_json_prop(ConfigurationJsonProp::default())
    }

    /// Reads a JSON configuration file; missing fields keep their defaults.
    pub fn from_reader<P: AsRef<Path>>(file_path: P) -> Result<Configuration, ConfigurationError> {
        let path = file_path.as_ref();
        let file = File::open(path).map_err(|source| ConfigurationError::Io {
            path: path.to_owned(),
            source,
        })?;
        let json_prop: ConfigurationJsonProp = serde_json::from_reader(BufReader::new(file))
            .map_err(|source| ConfigurationError::Json {
                path: path.to_owned(),
                source,
            })?;
        Ok(Self::from_json_prop(json_prop))
    }

    fn from_json_prop(json_prop: ConfigurationJsonProp) -> Configuration {
        Configuration {
            log_level: json_prop.log_level,
            storage: json_prop.storage,
            output_dir: json_prop.output_dir.unwrap_or_else(std::env::temp_dir),
            sample_count: json_prop.sample_count,
        }
    }

    pub fn log_level(&self) -> &str {
        &self.log_level
    }

    /// Storage that persisted tables are read back into.
    pub fn storage(&self) -> StorageKind {
        self.storage
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn sample_count(&self) -> usize {
        self.sample_count
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::new()
    }
}
