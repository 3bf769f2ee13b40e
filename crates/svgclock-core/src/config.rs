use std::{
    fs,
    path::{Path, PathBuf},
};

pub use svgclock_proto::config::*;

use log::{info, warn};
use masterror::AppError;
use shellexpand::full;

/// Failures while locating, reading or decoding the configuration file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigReadError {
    /// The path could not be expanded (unknown variable, missing home).
    Expand { path: String, context: String },
    /// An explicitly requested config file does not exist.
    Missing { path: PathBuf },
    /// Reading the file or creating its directory failed.
    Io { path: PathBuf, context: String },
    /// The file is not valid TOML for [`Config`].
    Parse { path: PathBuf, context: String },
    /// The file parsed but holds inconsistent values.
    Validation(ConfigValidationError),
}

impl std::fmt::Display for ConfigReadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Expand { path, context } => {
                write!(f, "failed to expand config path {}: {}", path, context)
            }
            Self::Missing { path } => {
                write!(f, "config file does not exist: {}", path.display())
            }
            Self::Io { path, context } => {
                write!(f, "failed to read config at {:?}: {}", path, context)
            }
            Self::Parse { path, context } => {
                write!(f, "failed to parse config at {:?}: {}", path, context)
            }
            Self::Validation(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for ConfigReadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ConfigValidationError> for ConfigReadError {
    fn from(err: ConfigValidationError) -> Self {
        Self::Validation(err)
    }
}

impl From<ConfigReadError> for AppError {
    fn from(err: ConfigReadError) -> Self {
        AppError::internal(err.to_string())
    }
}

/// Load the configuration.
///
/// With an explicit `path` the file must exist. Without one the default
/// location is used; its directory is created if needed and a missing file
/// yields [`Config::default`].
pub fn get_config(path: Option<PathBuf>) -> Result<(Config, PathBuf), ConfigReadError> {
    match path {
        Some(path) => {
            info!("Config path provided {path:?}");
            let expanded = expand_path(&path)?;

            if !expanded.exists() {
                return Err(ConfigReadError::Missing { path: expanded });
            }

            let config = read_config(&expanded)?;
            Ok((config, expanded))
        }
        None => {
            let expanded = expand_path(Path::new(DEFAULT_CONFIG_FILE_PATH))?;

            if let Some(parent) = expanded.parent()
                && !parent.exists()
            {
                fs::create_dir_all(parent).map_err(|err| ConfigReadError::Io {
                    path: parent.to_path_buf(),
                    context: err.to_string(),
                })?;
            }

            if !expanded.exists() {
                info!("No config file at {expanded:?}, using defaults");
                return Ok((Config::default(), expanded));
            }

            let config = read_config(&expanded)?;
            Ok((config, expanded))
        }
    }
}

fn expand_path(path: &Path) -> Result<PathBuf, ConfigReadError> {
    let str_path = path.to_string_lossy();
    let expanded = full(&str_path).map_err(|err| ConfigReadError::Expand {
        path: str_path.to_string(),
        context: err.to_string(),
    })?;

    Ok(PathBuf::from(expanded.as_ref()))
}

/// Read, decode and validate a config file.
pub fn read_config(path: &Path) -> Result<Config, ConfigReadError> {
    let content = fs::read_to_string(path).map_err(|err| {
        warn!("Failed to read config file: {err}");
        ConfigReadError::Io {
            path: path.to_path_buf(),
            context: err.to_string(),
        }
    })?;

    info!("Decoding config file {path:?}");

    let config: Config = toml::from_str(&content).map_err(|err| {
        warn!("Failed to parse config file: {err}");
        ConfigReadError::Parse {
            path: path.to_path_buf(),
            context: err.to_string(),
        }
    })?;

    config.validate()?;
    info!("Config file loaded successfully");

    Ok(config)
}
