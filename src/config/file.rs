//! Configuration file and environment sources

use std::path::{Path, PathBuf};

use crate::error::{CountextError, Result};
use crate::models::config::PartialSettings;
use super::{ConfigSource, parser};

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = ".countext.toml";

/// Default environment variable prefix
pub const ENV_PREFIX: &str = "COUNTEXT";

/// Configuration file source
pub struct FileConfig {
    path: PathBuf,
    name: String,
}

impl FileConfig {
    /// Create a new file configuration source with a custom path
    pub fn with_path<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            name: format!("config file ({})", path.as_ref().display()),
        }
    }
}

impl ConfigSource for FileConfig {
    fn load(&self) -> Result<PartialSettings> {
        if !self.is_available() {
            return Err(CountextError::ConfigNotFound {
                path: self.path.clone(),
            });
        }

        parser::parse_config_file(&self.path)
    }

    fn is_available(&self) -> bool {
        self.path.is_file()
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Environment variable configuration source
///
/// Reads `<PREFIX>_IGNORE` (comma separated), `<PREFIX>_IGNORE_NOEXT`,
/// `<PREFIX>_CASE_INSENSITIVE`, `<PREFIX>_VERBOSE`, `<PREFIX>_MODE` and
/// `<PREFIX>_FORMAT`. Values that do not parse are ignored.
pub struct EnvConfig {
    prefix: String,
    name: String,
}

const ENV_KEYS: [&str; 6] = [
    "IGNORE",
    "IGNORE_NOEXT",
    "CASE_INSENSITIVE",
    "VERBOSE",
    "MODE",
    "FORMAT",
];

impl EnvConfig {
    /// Create a new environment variable configuration source
    pub fn new(prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        Self {
            name: format!("{} environment variables", &prefix),
            prefix,
        }
    }

    fn var(&self, key: &str) -> Option<String> {
        std::env::var(format!("{}_{}", self.prefix, key)).ok()
    }

    fn flag(&self, key: &str) -> Option<bool> {
        self.var(key).and_then(|value| parse_bool(&value))
    }
}

impl ConfigSource for EnvConfig {
    fn load(&self) -> Result<PartialSettings> {
        let mut settings = PartialSettings::default();

        if let Some(ignore) = self.var("IGNORE") {
            let entries: Vec<String> = ignore
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
            if !entries.is_empty() {
                settings.ignore = Some(entries);
            }
        }

        settings.ignore_noext = self.flag("IGNORE_NOEXT");
        settings.case_insensitive = self.flag("CASE_INSENSITIVE");
        settings.verbose = self.flag("VERBOSE");
        settings.mode = self.var("MODE").and_then(|value| value.parse().ok());
        settings.format = self.var("FORMAT").and_then(|value| value.parse().ok());

        Ok(settings)
    }

    fn is_available(&self) -> bool {
        ENV_KEYS.iter().any(|key| self.var(key).is_some())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Lenient boolean parsing for environment values
fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
