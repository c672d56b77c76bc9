use std::env;
use std::str::FromStr;

use anyhow::{Context, Result, bail};
use dotenvy::dotenv;
use tracing::Level;

use crate::form::controller::DEFAULT_SUCCESS_MESSAGE;

#[derive(Clone, Debug)]
pub struct Config {
    // Logging
    pub log_dir: String,
    pub log_file: String,
    pub log_level: Level,

    // Form
    pub success_message: String,
    pub prompt: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from any key lookup; missing keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let log_level = var("LOG_LEVEL", "debug");

        let success_message = var("SUCCESS_MESSAGE", DEFAULT_SUCCESS_MESSAGE);
        if success_message.trim().is_empty() {
            bail!("SUCCESS_MESSAGE must not be empty");
        }

        Ok(Self {
            log_dir: var("LOG_DIR", "logs"),
            log_file: var("LOG_FILE", "form.log"),
            log_level: Level::from_str(log_level.trim())
                .with_context(|| format!("LOG_LEVEL has an invalid value: {log_level:?}"))?,

            success_message,
            prompt: var("PROMPT", "> "),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config.log_dir, "logs");
        assert_eq!(config.log_file, "form.log");
        assert_eq!(config.log_level, Level::DEBUG);
        assert_eq!(config.success_message, DEFAULT_SUCCESS_MESSAGE);
        assert_eq!(config.prompt, "> ");
    }

    #[test]
    fn overrides_from_environment() {
        let config = Config::from_lookup(lookup(&[
            ("LOG_DIR", "/tmp/intake"),
            ("LOG_LEVEL", "warn"),
            ("SUCCESS_MESSAGE", "Saved."),
        ]))
        .unwrap();

        assert_eq!(config.log_dir, "/tmp/intake");
        assert_eq!(config.log_level, Level::WARN);
        assert_eq!(config.success_message, "Saved.");
    }

    #[test]
    fn rejects_blank_success_message() {
        for value in ["", "   "] {
            let err = Config::from_lookup(lookup(&[("SUCCESS_MESSAGE", value)])).unwrap_err();

            assert!(err.to_string().contains("SUCCESS_MESSAGE"));
        }
    }

    #[test]
    fn rejects_unknown_log_level() {
        let err = Config::from_lookup(lookup(&[("LOG_LEVEL", "loud")])).unwrap_err();

        assert!(err.to_string().contains("LOG_LEVEL"));
    }
}
