//! Configuration settings for an alignment

use std::{
    error::Error,
    fmt::Display,
    fs::read_to_string,
    path::{Path, PathBuf},
    str::FromStr,
};

use inertia::Tolerances;
use serde::{Deserialize, Serialize};


#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Numerical tolerances for the eigensolver and for deciding when the
    /// principal axis is already parallel to the target. Any omitted field
    /// keeps its default value.
    #[serde(default)]
    pub tolerances: Tolerances,
}

#[derive(Debug)]
pub enum ConfigError {
    Read(PathBuf, std::io::Error),
    Parse(PathBuf, toml::de::Error),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Read(path, e) => {
                write!(f, "failed to read config {}: {e}", path.display())
            }
            ConfigError::Parse(path, e) => {
                write!(f, "failed to parse config {}: {e}", path.display())
            }
        }
    }
}

impl Error for ConfigError {}

impl FromStr for Config {
    type Err = toml::de::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        toml::from_str(s)
    }
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = read_to_string(path)
            .map_err(|e| ConfigError::Read(path.to_owned(), e))?;
        let ret: Self = contents
            .parse()
            .map_err(|e| ConfigError::Parse(path.to_owned(), e))?;
        log::debug!("loaded {ret:?} from {}", path.display());
        Ok(ret)
    }
}
