use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Validation options applied when a catalog is built
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Reject path segments and unit terms outside lowercase letters, digits and hyphens
    pub enforce_naming_conventions: bool,
    /// Reject descriptions that do not end in `.`, `!` or `?`
    pub require_terminal_punctuation: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            enforce_naming_conventions: false,
            require_terminal_punctuation: false,
        }
    }
}

impl CatalogConfig {
    /// Strictest settings, used by the test suite against the built-in table
    pub fn strict() -> Self {
        Self {
            enforce_naming_conventions: true,
            require_terminal_punctuation: true,
        }
    }

    /// Parse a config from JSON; absent fields keep their defaults
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        if raw.trim().is_empty() {
            return Err(CatalogError::ConfigError("empty config document".to_string()));
        }
        Ok(serde_json::from_str(raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CatalogConfig::default();
        assert!(!config.enforce_naming_conventions);
        assert!(!config.require_terminal_punctuation);
    }

    #[test]
    fn test_from_json_partial() {
        let config = CatalogConfig::from_json(r#"{"require_terminal_punctuation": true}"#).unwrap();
        assert!(config.require_terminal_punctuation);
        assert!(!config.enforce_naming_conventions);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(
            CatalogConfig::from_json("not json"),
            Err(CatalogError::SerializationError(_))
        ));
        assert!(matches!(
            CatalogConfig::from_json("   "),
            Err(CatalogError::ConfigError(_))
        ));
    }
}
