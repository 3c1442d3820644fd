//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`TIPSPLIT_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use serde::{Deserialize, Serialize};
use tip_core::validation::validate_split_count;
use tip_core::{SplitCount, DEFAULT_SLIDER_POSITION};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Slider position a new or reset bill starts at (0.0-1.0)
    pub default_slider_position: f32,

    /// Split count a new or reset bill starts at
    pub default_split: SplitCount,

    /// How views are written to stdout
    pub output_mode: OutputMode,

    /// tracing filter used when `RUST_LOG` is unset
    pub log_filter: String,
}

/// How the shell renders a view.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Human-readable screen layout
    #[default]
    Text,

    /// One JSON object per line, for scripting
    Json,
}

impl Default for ConfigState {
    /// ## Default Values
    /// - Tip slider: 0.1 (10%)
    /// - Split: 1
    /// - Output: text
    /// - Logging: info
    fn default() -> Self {
        ConfigState {
            default_slider_position: DEFAULT_SLIDER_POSITION,
            default_split: SplitCount::ONE,
            output_mode: OutputMode::Text,
            log_filter: "info".to_string(),
        }
    }
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `TIPSPLIT_DEFAULT_TIP`: starting slider position, e.g. "0.15"
    /// - `TIPSPLIT_DEFAULT_SPLIT`: starting split count, e.g. "2"
    /// - `TIPSPLIT_OUTPUT`: "text" or "json"
    /// - `TIPSPLIT_LOG`: tracing filter, e.g. "debug"
    ///
    /// Unusable values keep the default and add a warning to the returned
    /// list. Loading runs before logging is up, so the caller reports them.
    pub fn from_env() -> (Self, Vec<String>) {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup (the environment in production).
    pub fn from_lookup<F>(lookup: F) -> (Self, Vec<String>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();
        let mut warnings = Vec::new();

        if let Some(raw) = lookup("TIPSPLIT_DEFAULT_TIP") {
            match raw.trim().parse::<f32>() {
                Ok(position) if (0.0..=1.0).contains(&position) => {
                    config.default_slider_position = position;
                }
                _ => warnings.push(format!(
                    "TIPSPLIT_DEFAULT_TIP must be between 0.0 and 1.0, got '{}', using default",
                    raw
                )),
            }
        }

        if let Some(raw) = lookup("TIPSPLIT_DEFAULT_SPLIT") {
            match raw.trim().parse::<i64>().ok().map(validate_split_count) {
                Some(Ok(split)) => config.default_split = split,
                _ => warnings.push(format!(
                    "TIPSPLIT_DEFAULT_SPLIT must be a whole number of at least 1, got '{}', using default",
                    raw
                )),
            }
        }

        if let Some(raw) = lookup("TIPSPLIT_OUTPUT") {
            match raw.trim().to_ascii_lowercase().as_str() {
                "text" => config.output_mode = OutputMode::Text,
                "json" => config.output_mode = OutputMode::Json,
                _ => warnings.push(format!(
                    "TIPSPLIT_OUTPUT must be 'text' or 'json', got '{}', using default",
                    raw
                )),
            }
        }

        if let Some(filter) = lookup("TIPSPLIT_LOG") {
            if !filter.trim().is_empty() {
                config.log_filter = filter.trim().to_string();
            }
        }

        (config, warnings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_environment() {
        let (config, warnings) = ConfigState::from_lookup(|_| None);
        assert_eq!(config, ConfigState::default());
        assert!(warnings.is_empty());
        assert_eq!(config.default_slider_position, 0.1);
        assert_eq!(config.default_split, SplitCount::ONE);
    }

    #[test]
    fn test_overrides_from_environment() {
        let (config, warnings) = ConfigState::from_lookup(lookup_from(&[
            ("TIPSPLIT_DEFAULT_TIP", "0.2"),
            ("TIPSPLIT_DEFAULT_SPLIT", " 3 "),
            ("TIPSPLIT_OUTPUT", "JSON"),
            ("TIPSPLIT_LOG", "debug"),
        ]));
        assert_eq!(config.default_slider_position, 0.2);
        assert_eq!(config.default_split.get(), 3);
        assert_eq!(config.output_mode, OutputMode::Json);
        assert_eq!(config.log_filter, "debug");
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_bad_values_fall_back_to_defaults() {
        let (config, warnings) = ConfigState::from_lookup(lookup_from(&[
            ("TIPSPLIT_DEFAULT_TIP", "15"),
            ("TIPSPLIT_DEFAULT_SPLIT", "0"),
            ("TIPSPLIT_OUTPUT", "yaml"),
            ("TIPSPLIT_LOG", "   "),
        ]));
        assert_eq!(config, ConfigState::default());
        assert_eq!(warnings.len(), 3);
    }

    #[test]
    fn test_each_bad_value_is_reported() {
        let (config, warnings) = ConfigState::from_lookup(lookup_from(&[
            ("TIPSPLIT_DEFAULT_SPLIT", "0"),
            ("TIPSPLIT_OUTPUT", "yaml"),
        ]));
        assert_eq!(config.output_mode, OutputMode::Text);
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].starts_with("TIPSPLIT_DEFAULT_SPLIT"));
        assert!(warnings[0].contains("'0'"));
        assert!(warnings[1].starts_with("TIPSPLIT_OUTPUT"));
        assert!(warnings[1].contains("'yaml'"));
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(ConfigState::default()).unwrap();
        assert_eq!(json["defaultSplit"], 1);
        assert_eq!(json["outputMode"], "text");
    }
}
