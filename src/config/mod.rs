//! Configuration management
//!
//! Settings are layered: built-in defaults, then a config file, then
//! `COUNTEXT_*` environment variables, then the command line.

pub mod cli;
pub mod file;
pub mod parser;
pub mod settings;

use crate::error::Result;
use crate::models::config::{PartialSettings, Settings};
use log::debug;

pub use cli::{CliArgs, CliConfig};
pub use file::{DEFAULT_CONFIG_FILE, ENV_PREFIX, EnvConfig, FileConfig};
pub use parser::{create_default_config, find_default_config, parse_config_content, parse_config_file};
pub use settings::SettingsValidator;

/// Trait for configuration sources
pub trait ConfigSource {
    /// Load configuration from this source
    fn load(&self) -> Result<PartialSettings>;

    /// Check if this configuration source is available
    fn is_available(&self) -> bool;

    /// Get the name of this configuration source for logging
    fn name(&self) -> &str;
}

/// Configuration builder for merging multiple sources
pub struct ConfigBuilder {
    partial: PartialSettings,
}

impl ConfigBuilder {
    /// Create a new configuration builder with defaults
    pub fn new() -> Self {
        Self {
            partial: PartialSettings::default(),
        }
    }

    /// Merge settings from a partial configuration
    pub fn merge(mut self, partial: PartialSettings) -> Self {
        self.partial.merge_from(partial);
        self
    }

    /// Load and merge settings from a configuration source
    pub fn load_from<S: ConfigSource>(self, source: &S) -> Result<Self> {
        if source.is_available() {
            debug!("loading settings from {}", source.name());
            Ok(self.merge(source.load()?))
        } else {
            Ok(self)
        }
    }

    /// Try to load from a source, ignoring if not available or broken
    pub fn try_load_from<S: ConfigSource>(self, source: &S) -> Self {
        if !source.is_available() {
            return self;
        }

        match source.load() {
            Ok(partial) => self.merge(partial),
            Err(err) => {
                debug!("ignoring {}: {}", source.name(), err);
                self
            }
        }
    }

    /// Add configuration from a file that must exist
    pub fn add_config_file(self, path: &std::path::Path) -> Result<Self> {
        let file_config = FileConfig::with_path(path);
        debug!("loading settings from {}", file_config.name());
        Ok(self.merge(file_config.load()?))
    }

    /// Add configuration from the first default config file found, if any
    pub fn add_default_config_file(self) -> Result<Self> {
        match find_default_config()? {
            Some(default_config) => Ok(self.merge(default_config)),
            None => Ok(self),
        }
    }

    /// Build the final settings with validation
    pub fn build(self) -> Result<Settings> {
        let settings = self.partial.to_settings();

        SettingsValidator::validate(&settings)?;

        Ok(settings)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Load configuration from every source with proper precedence handling
pub fn load_config(cli_config: &CliConfig) -> Result<Settings> {
    load_config_with_env_prefix(cli_config, ENV_PREFIX)
}

/// Load configuration with a custom environment variable prefix
pub fn load_config_with_env_prefix(cli_config: &CliConfig, env_prefix: &str) -> Result<Settings> {
    let builder = ConfigBuilder::new();

    // An explicit --config must exist; otherwise look in the default places
    let builder = match cli_config.config_path() {
        Some(path) => builder.add_config_file(path)?,
        None => builder.add_default_config_file()?,
    };

    let builder = builder.try_load_from(&EnvConfig::new(env_prefix));

    // Command line has the last word
    builder.load_from(cli_config)?.build()
}
