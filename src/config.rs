use std::fs;
use std::path::{Path, PathBuf};

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::appearance::AppearanceSetting;
use crate::canvas::DEFAULT_CELL_SIZE;
use crate::error::{Error, Result};
use crate::geometry::{LayoutDirection, Size};
use crate::item::LayoutMode;
use crate::labels::SymbolStyle;
use crate::views::{day_of_week, month_header};

fn default_first_weekday() -> Weekday {
    Weekday::Sun
}

fn default_cell_width() -> f64 {
    DEFAULT_CELL_SIZE.width
}

fn default_cell_height() -> f64 {
    DEFAULT_CELL_SIZE.height
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub appearance: AppearanceSetting,
    #[serde(default)]
    pub layout: LayoutMode,
    #[serde(default)]
    pub layout_direction: LayoutDirection,
    #[serde(default = "default_first_weekday")]
    pub first_weekday: Weekday,
    #[serde(default)]
    pub weekday_symbols: SymbolStyle,
    /// Points covered by one terminal column.
    #[serde(default = "default_cell_width")]
    pub cell_width: f64,
    /// Points covered by one terminal row.
    #[serde(default = "default_cell_height")]
    pub cell_height: f64,
    #[serde(default)]
    pub log_file: Option<String>,
    #[serde(default)]
    pub day_of_week: day_of_week::InvariantViewProperties,
    #[serde(default)]
    pub month_header: month_header::InvariantViewProperties,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            appearance: AppearanceSetting::default(),
            layout: LayoutMode::default(),
            layout_direction: LayoutDirection::default(),
            first_weekday: default_first_weekday(),
            weekday_symbols: SymbolStyle::default(),
            cell_width: default_cell_width(),
            cell_height: default_cell_height(),
            log_file: None,
            day_of_week: day_of_week::InvariantViewProperties::base(),
            month_header: month_header::InvariantViewProperties::base(),
        }
    }
}

impl Config {
    /// Terminal cell size in points, falling back to the default for non-positive values.
    #[must_use]
    pub fn cell_size(&self) -> Size {
        let pick = |value: f64, fallback: f64| if value > 0.0 { value } else { fallback };
        Size::new(
            pick(self.cell_width, DEFAULT_CELL_SIZE.width),
            pick(self.cell_height, DEFAULT_CELL_SIZE.height),
        )
    }

    #[must_use]
    pub fn log_path(&self) -> PathBuf {
        self.log_file
            .as_deref()
            .map_or_else(|| get_config_dir().join("monthgrid.log"), resolve_path)
    }

    pub fn load() -> Result<Self> {
        Self::load_from(&get_config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }
        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Creates an empty config file. Returns `false` when one already exists.
    pub fn init() -> Result<bool> {
        Self::init_at(&get_config_path())
    }

    pub fn init_at(path: &Path) -> Result<bool> {
        if path.exists() {
            return Ok(false);
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, "")?;
        Ok(true)
    }

    /// Renders the effective configuration, defaults included.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Resolve a path to absolute: a leading `~/` expands to the home directory, other relative
/// paths join the cwd.
#[must_use]
pub fn resolve_path(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }

    let path = PathBuf::from(path);
    if path.is_absolute() {
        path
    } else {
        std::env::current_dir().unwrap_or_default().join(path)
    }
}

pub fn get_config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("monthgrid")
}

pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.toml")
}
