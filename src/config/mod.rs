use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

const APP_DIR: &str = "cropframe";
const APP_CONFIG_FILE: &str = "config.json";

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing HOME environment variable")]
    MissingHomeDirectory,
    #[error("failed to read crop config: {path}")]
    ReadConfig {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse crop config")]
    ParseConfig(#[from] serde_json::Error),
    #[error("invalid {field} bound: {reason}")]
    InvalidBounds {
        field: &'static str,
        reason: &'static str,
    },
}

/// Size bounds applied while resizing.
///
/// Unset maxima fall back to the container's dimension at each step.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SizeLimits {
    pub min_width: f64,
    pub min_height: f64,
    pub max_width: Option<f64>,
    pub max_height: Option<f64>,
}

/// Host options for the crop editor, as read from `config.json`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CropConfig {
    pub min_width: f64,
    pub min_height: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_height: Option<f64>,
    /// Keep a valid selection when the image body is pressed.
    pub keep_selection: bool,
    /// Presentation only.
    pub rule_of_thirds: bool,
}

impl CropConfig {
    pub fn from_json_str(contents: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn size_limits(&self) -> SizeLimits {
        SizeLimits {
            min_width: self.min_width,
            min_height: self.min_height,
            max_width: self.max_width,
            max_height: self.max_height,
        }
    }

    pub fn validate(&self) -> ConfigResult<()> {
        validate_axis("width", self.min_width, self.max_width)?;
        validate_axis("height", self.min_height, self.max_height)
    }
}

fn validate_axis(field: &'static str, min: f64, max: Option<f64>) -> ConfigResult<()> {
    if !min.is_finite() || min < 0.0 {
        return Err(ConfigError::InvalidBounds {
            field,
            reason: "minimum must be a non-negative number",
        });
    }
    let Some(max) = max else {
        return Ok(());
    };
    if !max.is_finite() || max <= 0.0 {
        return Err(ConfigError::InvalidBounds {
            field,
            reason: "maximum must be a positive number",
        });
    }
    if min > max {
        return Err(ConfigError::InvalidBounds {
            field,
            reason: "minimum exceeds maximum",
        });
    }
    Ok(())
}

/// Loads `config.json` from the user config directory, falling back to
/// defaults when it is missing or unusable.
pub fn load_crop_config() -> CropConfig {
    let (xdg_config_home, home) = config_env_dirs();
    load_crop_config_with(xdg_config_home.as_deref(), home.as_deref())
}

fn load_crop_config_with(xdg_config_home: Option<&Path>, home: Option<&Path>) -> CropConfig {
    let path = match app_config_path(APP_DIR, APP_CONFIG_FILE, xdg_config_home, home) {
        Ok(path) => path,
        Err(err) => {
            tracing::debug!(%err, "no config directory; using default crop config");
            return CropConfig::default();
        }
    };
    if !path.exists() {
        return CropConfig::default();
    }
    match read_crop_config(&path) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(%err, ?path, "failed to load crop config; using defaults");
            CropConfig::default()
        }
    }
}

pub fn read_crop_config(path: &Path) -> ConfigResult<CropConfig> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadConfig {
        path: path.to_path_buf(),
        source,
    })?;
    CropConfig::from_json_str(&contents)
}

fn config_env_dirs() -> (Option<PathBuf>, Option<PathBuf>) {
    (
        std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from),
        std::env::var_os("HOME").map(PathBuf::from),
    )
}

fn app_config_path(
    app_dir: &str,
    file_name: &str,
    xdg_config_home: Option<&Path>,
    home: Option<&Path>,
) -> ConfigResult<PathBuf> {
    let mut path = config_root(xdg_config_home, home)?;
    path.push(app_dir);
    path.push(file_name);
    Ok(path)
}

fn config_root(xdg_config_home: Option<&Path>, home: Option<&Path>) -> ConfigResult<PathBuf> {
    if let Some(xdg) = xdg_config_home.filter(|path| !path.as_os_str().is_empty()) {
        return Ok(xdg.to_path_buf());
    }

    let home = home.ok_or(ConfigError::MissingHomeDirectory)?;
    Ok(home.join(".config"))
}
