//! # Array List Configuration
//!
//! Tunables for construction and growth, loadable from TOML.
//!
//! ```toml
//! initial_capacity = 32
//!
//! [growth]
//! numerator = 2
//! denominator = 1
//! ```
//!
//! Every field is optional; missing fields take their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::growth::GrowthFactor;
use crate::{INITIAL_CAPACITY, MIN_CAPACITY};

/// Construction and growth settings for an [`ArrayList`](crate::ArrayList).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArrayListConfig {
    /// Slots allocated at construction. Must be at least [`MIN_CAPACITY`].
    pub initial_capacity: usize,
    /// Factor applied when an append finds the buffer full.
    pub growth: GrowthFactor,
}

impl Default for ArrayListConfig {
    fn default() -> Self {
        Self {
            initial_capacity: INITIAL_CAPACITY,
            growth: GrowthFactor::default(),
        }
    }
}

impl ArrayListConfig {
    /// Checks every constraint.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if the initial capacity is below
    /// [`MIN_CAPACITY`] or the growth factor is not strictly above one.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.initial_capacity < MIN_CAPACITY {
            return Err(ConfigError::Invalid(format!(
                "initial_capacity must be at least {MIN_CAPACITY}, got {}",
                self.initial_capacity
            )));
        }

        if !self.growth.is_expanding() {
            return Err(ConfigError::Invalid(format!(
                "growth factor must be greater than one, got {}/{}",
                self.growth.numerator, self.growth.denominator
            )));
        }

        Ok(())
    }

    /// Parses and validates a config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML and
    /// [`ConfigError::Invalid`] if validation fails.
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a config file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise the
    /// same errors as [`ArrayListConfig::from_toml_str`].
    pub fn from_toml_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&text)
    }
}
