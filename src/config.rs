use chrono::NaiveDate;
use serde::Deserialize;
use std::env;
use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{Error, ErrorKind, Result};

const CONFIG_PATH_ENV_VAR: &str = "DATEPICK_CONFIG_FILE";

const DEFAULT_TICK_RATE: u64 = 500;
const DEFAULT_LABEL_FORMAT: &str = "%Y/%m";
const DEFAULT_WEEKDAY_LABELS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

pub(crate) fn find_configfile_locations() -> Vec<PathBuf> {
    let mut locations = Vec::new();

    if let Ok(path) = env::var(CONFIG_PATH_ENV_VAR) {
        locations.push(PathBuf::from(path));
    }

    if let Some(dir) = dirs::config_dir() {
        locations.push(dir.join("datepick").join("config.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        locations.push(home.join(".datepick.toml"));
    }

    locations
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub today_char: Option<char>,
    pub selected_char: Option<char>,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        ThemeConfig {
            today_char: Some('*'),
            selected_char: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Milliseconds between clock checks.
    pub tick_rate: u64,
    pub label_format: String,
    /// Sunday first.
    pub weekday_labels: Vec<String>,
    pub theme: ThemeConfig,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            tick_rate: DEFAULT_TICK_RATE,
            label_format: DEFAULT_LABEL_FORMAT.to_owned(),
            weekday_labels: DEFAULT_WEEKDAY_LABELS
                .iter()
                .map(|&l| l.to_owned())
                .collect(),
            theme: ThemeConfig::default(),
        }
    }
}

impl Config {
    pub fn from_toml(content: &str) -> Result<Config> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Config> {
        let content = fs::read_to_string(path).map_err(|err| {
            Error::from(err).with_msg(&format!("could not read {}", path.display()))
        })?;
        Config::from_toml(&content)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate)
    }

    fn validate(&self) -> Result<()> {
        if self.weekday_labels.len() != 7 {
            return Err(Error::new(
                ErrorKind::ConfigParse,
                &format!(
                    "expected 7 weekday labels, found {}",
                    self.weekday_labels.len()
                ),
            ));
        }

        if self.tick_rate == 0 {
            return Err(Error::new(
                ErrorKind::ConfigParse,
                "tick_rate must be greater than zero",
            ));
        }

        // Unknown specifiers and ones that need a time or an offset only fail
        // once a month label is rendered.
        let mut sample = String::new();
        if write!(sample, "{}", NaiveDate::MIN.format(&self.label_format)).is_err() {
            return Err(Error::new(
                ErrorKind::ConfigParse,
                &format!("invalid label_format '{}'", self.label_format),
            ));
        }

        Ok(())
    }
}

/// Loads `path` if given, otherwise the first existing file of the default
/// locations. Without any config file the defaults are used.
pub fn load_suitable_config(path: Option<&Path>) -> Result<Config> {
    if let Some(path) = path {
        log::info!("loading config from {}", path.display());
        return Config::load(path);
    }

    match find_configfile_locations()
        .into_iter()
        .find(|location| location.is_file())
    {
        Some(location) => {
            log::info!("loading config from {}", location.display());
            Config::load(&location)
        }
        None => {
            log::info!("no config file found, using defaults");
            Ok(Config::default())
        }
    }
}
