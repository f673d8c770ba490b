//! Shell configuration.
//!
//! Settings for the interactive shell, read once at startup from environment
//! variables. A `.env` file in the working directory is loaded first if it
//! exists.
//!
//! # Environment Variables
//!
//! - `KITCHEN_NAME`: Name used in the greeting (default: `Joey's Kitchen`)
//! - `KITCHEN_EXIT_KEYWORD`: Line that ends the session (default: `exit`)
//!
//! # Example
//!
//! ```rust,ignore
//! use kitchen::config::ShellConfig;
//!
//! let config = ShellConfig::from_env()?;
//! println!("Welcome to {}.", config.kitchen_name());
//! ```

use std::env;

use thiserror::Error;

use crate::menu::MealTime;

/// Default restaurant name.
pub const DEFAULT_KITCHEN_NAME: &str = "Joey's Kitchen";

/// Default keyword that ends the session.
pub const DEFAULT_EXIT_KEYWORD: &str = "exit";

const KITCHEN_NAME_KEY: &str = "KITCHEN_NAME";
const EXIT_KEYWORD_KEY: &str = "KITCHEN_EXIT_KEYWORD";

// =============================================================================
// ConfigError
// =============================================================================

/// A configuration value that cannot be used.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A setting has an unusable value.
    #[error("Invalid value for {key}: {message}")]
    InvalidValue {
        /// The name of the setting.
        key: String,
        /// Why the value was refused.
        message: String,
    },
}

impl ConfigError {
    fn invalid(key: &str, message: &str) -> Self {
        Self::InvalidValue {
            key: key.to_string(),
            message: message.to_string(),
        }
    }
}

// =============================================================================
// ShellConfig
// =============================================================================

/// Settings of the interactive shell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShellConfig {
    kitchen_name: String,
    exit_keyword: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            kitchen_name: DEFAULT_KITCHEN_NAME.to_string(),
            exit_keyword: DEFAULT_EXIT_KEYWORD.to_string(),
        }
    }
}

impl ShellConfig {
    /// Creates a validated configuration.
    ///
    /// Both values are trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if the name is blank, or if the
    /// exit keyword is blank, contains a comma, or is a meal-time keyword.
    ///
    /// # Examples
    ///
    /// ```
    /// use kitchen::config::ShellConfig;
    ///
    /// let config = ShellConfig::new("Night Owl Diner", "quit").unwrap();
    /// assert_eq!(config.exit_keyword(), "quit");
    ///
    /// assert!(ShellConfig::new("Night Owl Diner", "night").is_err());
    /// ```
    pub fn new(kitchen_name: &str, exit_keyword: &str) -> Result<Self, ConfigError> {
        let kitchen_name = kitchen_name.trim();
        let exit_keyword = exit_keyword.trim();

        if kitchen_name.is_empty() {
            return Err(ConfigError::invalid(KITCHEN_NAME_KEY, "must not be blank"));
        }
        if exit_keyword.is_empty() {
            return Err(ConfigError::invalid(EXIT_KEYWORD_KEY, "must not be blank"));
        }
        if exit_keyword.contains(',') {
            return Err(ConfigError::invalid(
                EXIT_KEYWORD_KEY,
                "must not contain a comma",
            ));
        }
        if MealTime::from_keyword(exit_keyword).is_some() {
            return Err(ConfigError::invalid(
                EXIT_KEYWORD_KEY,
                "must not be a meal time",
            ));
        }

        Ok(Self {
            kitchen_name: kitchen_name.to_string(),
            exit_keyword: exit_keyword.to_string(),
        })
    }

    /// Loads the configuration from environment variables.
    ///
    /// Unset variables take their default value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if a variable is set to an
    /// unusable value or is not valid Unicode.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let kitchen_name = get_optional_env(KITCHEN_NAME_KEY, DEFAULT_KITCHEN_NAME)?;
        let exit_keyword = get_optional_env(EXIT_KEYWORD_KEY, DEFAULT_EXIT_KEYWORD)?;

        Self::new(&kitchen_name, &exit_keyword)
    }

    /// Returns the restaurant name.
    #[must_use]
    pub fn kitchen_name(&self) -> &str {
        &self.kitchen_name
    }

    /// Returns the keyword that ends the session.
    #[must_use]
    pub fn exit_keyword(&self) -> &str {
        &self.exit_keyword
    }
}

/// Gets an optional environment variable with a default value.
fn get_optional_env(key: &str, default: &str) -> Result<String, ConfigError> {
    match env::var(key) {
        Ok(value) => Ok(value),
        Err(env::VarError::NotPresent) => Ok(default.to_string()),
        Err(env::VarError::NotUnicode(_)) => {
            Err(ConfigError::invalid(key, "value is not valid Unicode"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_config() {
        let config = ShellConfig::default();

        assert_eq!(config.kitchen_name(), "Joey's Kitchen");
        assert_eq!(config.exit_keyword(), "exit");
    }

    #[rstest]
    fn new_trims_values() {
        let config = ShellConfig::new("  Diner ", " bye ").unwrap();

        assert_eq!(config.kitchen_name(), "Diner");
        assert_eq!(config.exit_keyword(), "bye");
    }

    #[rstest]
    #[case("", "exit", "KITCHEN_NAME")]
    #[case("Diner", "   ", "KITCHEN_EXIT_KEYWORD")]
    #[case("Diner", "bye, now", "KITCHEN_EXIT_KEYWORD")]
    #[case("Diner", "Morning", "KITCHEN_EXIT_KEYWORD")]
    #[case("Diner", "night", "KITCHEN_EXIT_KEYWORD")]
    fn new_rejects_unusable_values(
        #[case] kitchen_name: &str,
        #[case] exit_keyword: &str,
        #[case] key: &str,
    ) {
        let error = ShellConfig::new(kitchen_name, exit_keyword).unwrap_err();

        match error {
            ConfigError::InvalidValue { key: actual, .. } => assert_eq!(actual, key),
        }
    }

    #[rstest]
    fn config_error_display() {
        let error = ConfigError::invalid("KITCHEN_NAME", "must not be blank");

        assert_eq!(
            error.to_string(),
            "Invalid value for KITCHEN_NAME: must not be blank"
        );
    }

    // Note: from_env is not tested here because changing the environment
    // needs unsafe env::set_var in Rust 2024 edition.
}
