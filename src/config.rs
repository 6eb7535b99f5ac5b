use std::{
    fs,
    path::{Path, PathBuf},
    sync::LazyLock,
};

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const CONFIG_FILE_NAME: &str = "glider.config.json";

static LOCALE_ID_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").unwrap());

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    pub locales: Vec<String>,
    pub default_locale: String,
    #[serde(default = "default_messages_dir")]
    pub messages_dir: String,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    #[serde(default = "default_true")]
    pub validate_translations: bool,
    #[serde(default = "default_true")]
    pub generate_namespaces: bool,
}

fn default_messages_dir() -> String {
    "messages".to_string()
}

fn default_output_dir() -> String {
    "src/glider".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locales: vec!["en".to_string()],
            default_locale: "en".to_string(),
            messages_dir: default_messages_dir(),
            output_dir: default_output_dir(),
            validate_translations: true,
            generate_namespaces: true,
        }
    }
}

impl Config {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.locales.is_empty() {
            return Err(Error::configuration(
                "\"locales\" must list at least one locale",
            ));
        }

        for (i, locale) in self.locales.iter().enumerate() {
            if !LOCALE_ID_REGEX.is_match(locale) {
                return Err(Error::configuration(format!(
                    "locale \"{}\" may only contain letters, digits, '_' and '-'",
                    locale
                )));
            }
            if self.locales[..i].contains(locale) {
                return Err(Error::configuration(format!(
                    "locale \"{}\" is listed more than once",
                    locale
                )));
            }
        }

        if !self.locales.contains(&self.default_locale) {
            return Err(Error::configuration(format!(
                "defaultLocale \"{}\" is not one of the configured locales ({})",
                self.default_locale,
                self.locales.join(", ")
            )));
        }

        Ok(())
    }
}

/// Values given on the command line; each one replaces the file's value.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub messages_dir: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub locales: Option<Vec<String>>,
    pub no_validate: bool,
    pub no_namespaces: bool,
}

impl ConfigOverrides {
    pub fn apply(&self, config: &mut Config) {
        if let Some(dir) = &self.messages_dir {
            config.messages_dir = dir.to_string_lossy().into_owned();
        }
        if let Some(dir) = &self.output_dir {
            config.output_dir = dir.to_string_lossy().into_owned();
        }
        if let Some(locales) = &self.locales {
            config.locales = locales.clone();
        }
        if self.no_validate {
            config.validate_translations = false;
        }
        if self.no_namespaces {
            config.generate_namespaces = false;
        }
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config)
        .map_err(|e| Error::configuration(format!("failed to generate default config: {}", e)))
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// A validated configuration together with the file it came from.
#[derive(Debug, Clone)]
pub struct ConfigLoadResult {
    pub config: Config,
    pub path: PathBuf,
}

impl ConfigLoadResult {
    /// Directory holding the config file; relative paths resolve against it.
    pub fn base_dir(&self) -> &Path {
        self.path.parent().unwrap_or(Path::new("."))
    }

    pub fn messages_dir(&self) -> PathBuf {
        self.base_dir().join(&self.config.messages_dir)
    }

    pub fn output_dir(&self) -> PathBuf {
        self.base_dir().join(&self.config.output_dir)
    }
}

pub fn load_config(start_dir: &Path, overrides: &ConfigOverrides) -> Result<ConfigLoadResult> {
    let path = find_config_file(start_dir).ok_or_else(|| Error::ConfigNotFound {
        file_name: CONFIG_FILE_NAME,
        start: start_dir.to_path_buf(),
    })?;

    let content = fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
    let mut config: Config = serde_json::from_str(&content).map_err(|source| Error::Parse {
        path: path.clone(),
        source,
    })?;
    overrides.apply(&mut config);
    config.validate()?;

    Ok(ConfigLoadResult { config, path })
}
