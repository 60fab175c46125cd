use clockface::Theme;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub radius: f64,
    pub density: f64,
    pub output: PathBuf,
    pub theme: Theme,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            radius: clockface::style::DEFAULT_RADIUS,
            density: 1.0,
            output: PathBuf::from("clock.png"),
            theme: Theme::default(),
        }
    }
}

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
}

pub const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

pub fn get_config_path() -> Result<PathBuf, SettingsError> {
    let proj_dirs = ProjectDirs::from("org", "clockface", "clockface")
        .ok_or(SettingsError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

fn builder() -> config::ConfigBuilder<config::builder::DefaultState> {
    config::Config::builder()
}

fn environment() -> config::Environment {
    config::Environment::with_prefix("CLOCKFACE")
        .prefix_separator("_")
        .separator("__")
}

pub fn load_settings() -> Result<Settings, SettingsError> {
    let config_path = get_config_path()?;

    let s = builder()
        .add_source(config::File::from(config_path).required(false))
        .add_source(environment())
        .build()?;

    Ok(s.try_deserialize()?)
}

pub fn load_or_default() -> Settings {
    match load_settings() {
        Ok(settings) => settings,
        Err(e) => {
            log::warn!("Using default settings: {}", e);
            Settings::default()
        }
    }
}

pub fn write_default_config() -> std::io::Result<PathBuf> {
    let path =
        get_config_path().map_err(|e| std::io::Error::new(std::io::ErrorKind::NotFound, e))?;
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs_err::write(&path, DEFAULT_CONFIG)?;
    }
    Ok(path)
}
