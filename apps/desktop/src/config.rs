use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::Deserialize;

pub const DEFAULT_CONFIG_FILE: &str = "menu.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    pub fixture_path: Option<PathBuf>,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            fixture_path: None,
            log_filter: "info".into(),
        }
    }
}

/// Defaults, then `config_file` if it exists, then environment overrides.
pub fn load_settings(config_file: &Path) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    if config_file.exists() {
        let raw = fs::read_to_string(config_file)
            .with_context(|| format!("failed to read settings '{}'", config_file.display()))?;
        let file_cfg = toml::from_str::<HashMap<String, String>>(&raw)
            .with_context(|| format!("failed to parse settings '{}'", config_file.display()))?;
        apply_file_settings(&mut settings, &file_cfg);
    }

    apply_env_overrides(&mut settings, |key| std::env::var(key).ok());
    Ok(settings)
}

fn apply_file_settings(settings: &mut Settings, file_cfg: &HashMap<String, String>) {
    if let Some(v) = file_cfg.get("fixture_path") {
        settings.fixture_path = Some(PathBuf::from(v));
    }
    if let Some(v) = file_cfg.get("log_filter") {
        settings.log_filter = v.clone();
    }
}

fn apply_env_overrides(settings: &mut Settings, var: impl Fn(&str) -> Option<String>) {
    if let Some(v) = var("MENU_FIXTURE") {
        settings.fixture_path = Some(PathBuf::from(v));
    }
    if let Some(v) = var("APP__FIXTURE_PATH") {
        settings.fixture_path = Some(PathBuf::from(v));
    }

    if let Some(v) = var("APP__LOG_FILTER") {
        settings.log_filter = v;
    }
}
