//! # Configuration
//!
//! Engine settings loaded from the environment.
//!
//! Variables are read with the `ASSEMBLY_` prefix
//! (`ASSEMBLY_CHECKOUT_BASE_URL`, `ASSEMBLY_TIMEOUT_MS`,
//! `ASSEMBLY_SLOT_KEY_PREFIX`); a local `.env` file is honored.

use serde::Deserialize;

/// Engine settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// Base URL of the checkout service API.
    pub checkout_base_url: String,
    /// Outbound request timeout in milliseconds.
    pub timeout_ms: u64,
    /// Prefix composed with an option type into the persisted slot key
    /// (`"{prefix}_{type}"`). Deployment-specific catalog naming.
    pub slot_key_prefix: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            checkout_base_url: "http://localhost:8080/api/checkout".to_string(),
            timeout_ms: 5000,
            slot_key_prefix: "add-on".to_string(),
        }
    }
}

impl Settings {
    /// Loads settings from the environment, falling back to defaults for
    /// unset variables.
    ///
    /// # Errors
    ///
    /// Returns a [`config::ConfigError`] when a variable is present but
    /// cannot be deserialized into its field type.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();

        let defaults = Self::default();
        config::Config::builder()
            .set_default("checkout_base_url", defaults.checkout_base_url)?
            .set_default("timeout_ms", defaults.timeout_ms)?
            .set_default("slot_key_prefix", defaults.slot_key_prefix)?
            .add_source(config::Environment::with_prefix("ASSEMBLY"))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sensible() {
        let settings = Settings::default();
        assert!(settings.checkout_base_url.starts_with("http"));
        assert_eq!(settings.timeout_ms, 5000);
        assert_eq!(settings.slot_key_prefix, "add-on");
    }

    #[test]
    fn from_env_falls_back_to_defaults() {
        let settings = Settings::from_env().unwrap();
        assert!(!settings.slot_key_prefix.is_empty());
        assert!(settings.timeout_ms > 0);
    }
}
