//! Final settings validation

use crate::core::ignore::IgnoreSet;
use crate::error::{CountextError, Result};
use crate::models::config::Settings;

/// Settings validator for ensuring configuration is valid
pub struct SettingsValidator;

impl SettingsValidator {
    /// Validate settings and return errors if invalid
    pub fn validate(settings: &Settings) -> Result<()> {
        // Ignore entries must be non-empty
        IgnoreSet::new(&settings.ignore)?;

        if settings.max_depth == Some(0) {
            return Err(CountextError::config_error("Max depth must be at least 1"));
        }

        if let Some(path) = &settings.output_file {
            if path.as_os_str().is_empty() {
                return Err(CountextError::config_error("Output file path is empty"));
            }
        }

        Ok(())
    }
}
