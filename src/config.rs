use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::Word;
use crate::error::ConfigError;
use crate::game::GameRules;
use crate::source::{Backoff, RetryPolicy};

/// Secret used when no word can be fetched
pub const DEFAULT_FALLBACK_SECRET: &str = "WORDLE";

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackoffKind {
    Fixed,
    Linear,
    Exponential,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BackoffConfig {
    pub kind: BackoffKind,
    pub base_ms: u64,
    /// Upper bound for exponential backoff
    pub max_ms: u64,
}

impl Default for BackoffConfig {
    fn default() -> Self {
        BackoffConfig {
            kind: BackoffKind::Linear,
            base_ms: 1000,
            max_ms: 8000,
        }
    }
}

/// Secret fetching parameters.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    pub max_attempts: u32,
    pub timeout_ms: u64,
    pub backoff: BackoffConfig,
}

impl Default for FetchConfig {
    fn default() -> Self {
        FetchConfig {
            max_attempts: 3,
            timeout_ms: 5000,
            backoff: BackoffConfig::default(),
        }
    }
}

impl FetchConfig {
    #[must_use]
    pub fn retry_policy(&self) -> RetryPolicy {
        let base = Duration::from_millis(self.backoff.base_ms);
        let backoff = match self.backoff.kind {
            BackoffKind::Fixed => Backoff::Fixed(base),
            BackoffKind::Linear => Backoff::Linear(base),
            BackoffKind::Exponential => Backoff::Exponential {
                base,
                max: Duration::from_millis(self.backoff.max_ms),
            },
        };
        RetryPolicy {
            max_attempts: self.max_attempts,
            attempt_timeout: Duration::from_millis(self.timeout_ms),
            backoff,
        }
    }
}

/// Top-level game configuration, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub rules: GameRules,
    pub fetch: FetchConfig,
    pub fallback_secret: String,
    /// Custom word list; the embedded list is used when absent
    pub wordlist: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            rules: GameRules::default(),
            fetch: FetchConfig::default(),
            fallback_secret: DEFAULT_FALLBACK_SECRET.to_string(),
            wordlist: None,
        }
    }
}

impl GameConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    /// Returns `ConfigError` if the file cannot be read, parsed or validated.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml(&content)
    }

    /// Parse and validate configuration from TOML text.
    ///
    /// # Errors
    /// Returns `ConfigError` on malformed TOML or invalid values.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    ///
    /// # Errors
    /// Returns `ConfigError` if an existing file is unreadable or invalid.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            eprintln!("Warning: config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    ///
    /// # Errors
    /// Returns `ConfigError::Validation` naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rules.word_length == 0 {
            return Err(ConfigError::Validation(
                "rules.word_length must be > 0".into(),
            ));
        }
        if self.rules.max_rows == 0 {
            return Err(ConfigError::Validation("rules.max_rows must be > 0".into()));
        }
        if self.fetch.max_attempts == 0 {
            return Err(ConfigError::Validation(
                "fetch.max_attempts must be > 0".into(),
            ));
        }
        if self.fetch.timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "fetch.timeout_ms must be > 0".into(),
            ));
        }
        if self.fetch.backoff.kind == BackoffKind::Exponential
            && self.fetch.backoff.max_ms < self.fetch.backoff.base_ms
        {
            return Err(ConfigError::Validation(
                "fetch.backoff.max_ms must be >= base_ms".into(),
            ));
        }
        if let Err(e) = self.fallback_word() {
            return Err(ConfigError::Validation(format!("fallback_secret: {e}")));
        }
        Ok(())
    }

    /// The fallback secret as a word of the configured length.
    ///
    /// # Errors
    /// Returns the validation error when it does not fit `rules.word_length`.
    pub fn fallback_word(&self) -> Result<Word, crate::core::WordError> {
        Word::new(&self.fallback_secret, self.rules.word_length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.rules.word_length, 6);
        assert_eq!(config.fallback_word().unwrap().text(), "WORDLE");
    }

    #[test]
    fn partial_toml_uses_defaults() {
        let config = GameConfig::from_toml(
            r#"
            fallback_secret = "garden"

            [rules]
            max_hints = 5

            [fetch.backoff]
            kind = "exponential"
            base_ms = 200
            "#,
        )
        .unwrap();

        assert_eq!(config.rules.max_hints, 5);
        assert_eq!(config.rules.max_rows, 6);
        assert_eq!(config.fetch.max_attempts, 3);
        assert_eq!(
            config.fetch.retry_policy().backoff,
            Backoff::Exponential {
                base: Duration::from_millis(200),
                max: Duration::from_millis(8000),
            }
        );
    }

    #[test]
    fn default_retry_policy_matches_fetch_defaults() {
        assert_eq!(FetchConfig::default().retry_policy(), RetryPolicy::default());
    }

    #[test]
    fn fallback_must_match_length() {
        let err = GameConfig::from_toml(
            r#"
            [rules]
            word_length = 5
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("fallback_secret"));
    }

    #[test]
    fn zero_rows_rejected() {
        let mut config = GameConfig::default();
        config.rules.max_rows = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn malformed_toml_rejected() {
        assert!(matches!(
            GameConfig::from_toml("rules = 3"),
            Err(ConfigError::TomlParse(_))
        ));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config =
            GameConfig::load_or_default(Path::new("/nonexistent/wordle_game.toml")).unwrap();
        assert_eq!(config, GameConfig::default());
    }
}
