//! # Converter Configuration
//!
//! A [`crate::Converter`] can be configured from YAML:
//!
//! ```yaml
//! memoize: false
//! grammar-order: [interval, pitch]
//! ```
//!
//! Both keys are optional. Defaults: memoization on, pitch grammar before interval.

use serde::Deserialize;
use std::collections::HashSet;

use crate::dispatch::{Grammar, DEFAULT_GRAMMAR_ORDER};
use crate::error::NotationError;

/// Raw configuration for YAML deserialization
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct RawConfig {
    memoize: Option<bool>,
    grammar_order: Option<Vec<Grammar>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConverterConfig {
    /// Remember parse and build results
    pub memoize: bool,
    /// Grammars tried by `parse`, first match wins
    pub grammar_order: Vec<Grammar>,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            memoize: true,
            grammar_order: DEFAULT_GRAMMAR_ORDER.to_vec(),
        }
    }
}

impl ConverterConfig {
    pub fn from_yaml(content: &str) -> Result<Self, NotationError> {
        // An empty document deserializes as unit, not as an empty map
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let raw: RawConfig = serde_yaml::from_str(content)
            .map_err(|e| NotationError::ConfigError(e.to_string()))?;

        let grammar_order = match raw.grammar_order {
            Some(order) => validate_grammar_order(order)?,
            None => DEFAULT_GRAMMAR_ORDER.to_vec(),
        };

        Ok(Self {
            memoize: raw.memoize.unwrap_or(true),
            grammar_order,
        })
    }
}

fn validate_grammar_order(order: Vec<Grammar>) -> Result<Vec<Grammar>, NotationError> {
    if order.is_empty() {
        return Err(NotationError::ConfigError(
            "grammar-order must not be empty".to_string(),
        ));
    }
    let mut seen = HashSet::new();
    for grammar in &order {
        if !seen.insert(*grammar) {
            return Err(NotationError::ConfigError(format!(
                "grammar-order lists {} more than once",
                grammar.name()
            )));
        }
    }
    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(
            ConverterConfig::from_yaml("").unwrap(),
            ConverterConfig::default()
        );
        assert_eq!(
            ConverterConfig::from_yaml("{}").unwrap(),
            ConverterConfig::default()
        );
    }

    #[test]
    fn test_full_config() {
        let yaml = "memoize: false\ngrammar-order: [interval, pitch]\n";
        let config = ConverterConfig::from_yaml(yaml).unwrap();
        assert!(!config.memoize);
        assert_eq!(
            config.grammar_order,
            vec![Grammar::Interval, Grammar::Pitch]
        );
    }

    fn config_error(message: &str) -> Result<ConverterConfig, NotationError> {
        Err(NotationError::ConfigError(message.to_string()))
    }

    #[test]
    fn test_invalid_configs() {
        assert_eq!(
            ConverterConfig::from_yaml("grammar-order: []"),
            config_error("grammar-order must not be empty")
        );
        assert_eq!(
            ConverterConfig::from_yaml("grammar-order: [pitch, pitch]"),
            config_error("grammar-order lists pitch more than once")
        );
        assert!(matches!(
            ConverterConfig::from_yaml("grammar-order: [chord]"),
            Err(NotationError::ConfigError(_))
        ));
        assert!(matches!(
            ConverterConfig::from_yaml("cache-size: 10"),
            Err(NotationError::ConfigError(_))
        ));
    }
}
