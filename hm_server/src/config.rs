//! Server configuration management.
//!
//! Consolidates all environment variable reads and provides validated configuration.

use hangman::DEFAULT_DIFFICULTY;
use std::{net::SocketAddr, path::PathBuf};

/// Complete server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server bind address
    pub bind: SocketAddr,
    /// Game configuration
    pub game: GameConfig,
    /// Round token configuration
    pub session: SessionConfig,
    /// Directory served under `/static`
    pub static_dir: PathBuf,
    /// Prometheus exporter address, disabled when unset
    pub metrics_bind: Option<SocketAddr>,
}

/// Word and leaderboard configuration
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Word file with one `difficulty:word` entry per line
    pub words_file: PathBuf,
    /// Leaderboard JSON file
    pub scores_file: PathBuf,
    /// Difficulty used when a requested one has no words
    pub default_difficulty: String,
}

/// Round token configuration
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Token signing secret (required)
    pub secret: String,
    /// Token and cookie lifetime in hours
    pub ttl_hours: i64,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Arguments
    ///
    /// * `bind_override` - Optional bind address override (from CLI args)
    /// * `words_override` - Optional word file override (from CLI args)
    /// * `scores_override` - Optional score file override (from CLI args)
    ///
    /// # Returns
    ///
    /// * `Result<ServerConfig, ConfigError>` - Loaded configuration or error
    ///
    /// # Errors
    ///
    /// Returns error if required variables are missing or invalid
    pub fn from_env(
        bind_override: Option<SocketAddr>,
        words_override: Option<PathBuf>,
        scores_override: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        let bind = match bind_override {
            Some(bind) => bind,
            None => parse_env_required_format("SERVER_BIND", "127.0.0.1:8080")?,
        };

        let game = GameConfig {
            words_file: words_override
                .or_else(|| std::env::var("WORDS_FILE").ok().map(PathBuf::from))
                .unwrap_or_else(|| PathBuf::from("words/words.txt")),
            scores_file: scores_override
                .or_else(|| std::env::var("SCORES_FILE").ok().map(PathBuf::from))
                .unwrap_or_else(|| PathBuf::from("scores/scores.json")),
            default_difficulty: std::env::var("DEFAULT_DIFFICULTY")
                .unwrap_or_else(|_| DEFAULT_DIFFICULTY.to_string()),
        };

        // Session secret (REQUIRED)
        let secret = std::env::var("SESSION_SECRET").map_err(|_| ConfigError::MissingRequired {
            var: "SESSION_SECRET".to_string(),
            hint: "Generate with: openssl rand -hex 32".to_string(),
        })?;

        if secret.len() < 32 {
            return Err(ConfigError::Invalid {
                var: "SESSION_SECRET".to_string(),
                reason: "Must be at least 32 characters (128-bit security)".to_string(),
            });
        }

        let session = SessionConfig {
            secret,
            ttl_hours: parse_env_or("SESSION_TTL_HOURS", 24),
        };

        let metrics_bind = match std::env::var("METRICS_BIND") {
            Ok(value) => Some(value.parse().map_err(|_| ConfigError::Invalid {
                var: "METRICS_BIND".to_string(),
                reason: format!("'{value}' is not an IP:PORT address"),
            })?),
            Err(_) => None,
        };

        Ok(ServerConfig {
            bind,
            game,
            session,
            static_dir: std::env::var("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("static")),
            metrics_bind,
        })
    }

    /// Validate configuration after loading
    ///
    /// # Returns
    ///
    /// * `Result<(), ConfigError>` - Success or validation error
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.game.default_difficulty.trim().is_empty() {
            return Err(ConfigError::Invalid {
                var: "DEFAULT_DIFFICULTY".to_string(),
                reason: "Must not be empty".to_string(),
            });
        }

        if self.session.ttl_hours <= 0 {
            return Err(ConfigError::Invalid {
                var: "SESSION_TTL_HOURS".to_string(),
                reason: "Must be greater than 0".to_string(),
            });
        }

        if self.metrics_bind == Some(self.bind) {
            return Err(ConfigError::Invalid {
                var: "METRICS_BIND".to_string(),
                reason: format!("Must differ from server bind address ({})", self.bind),
            });
        }

        Ok(())
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {var}\nHint: {hint}")]
    MissingRequired { var: String, hint: String },

    #[error("Invalid configuration for {var}: {reason}")]
    Invalid { var: String, reason: String },
}

/// Helper to parse environment variable with default fallback
fn parse_env_or<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Helper for values whose default is a literal that must parse
fn parse_env_required_format<T>(key: &str, default: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
{
    let raw = std::env::var(key).unwrap_or_else(|_| default.to_string());
    raw.parse().map_err(|_| ConfigError::Invalid {
        var: key.to_string(),
        reason: format!("'{raw}' could not be parsed"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 8] = [
        "SERVER_BIND",
        "WORDS_FILE",
        "SCORES_FILE",
        "DEFAULT_DIFFICULTY",
        "SESSION_SECRET",
        "SESSION_TTL_HOURS",
        "STATIC_DIR",
        "METRICS_BIND",
    ];

    fn clear_env() {
        for var in VARS {
            // SAFETY: env-mutating tests are serialized with #[serial].
            unsafe { std::env::remove_var(var) };
        }
    }

    fn set_env(key: &str, value: &str) {
        // SAFETY: env-mutating tests are serialized with #[serial].
        unsafe { std::env::set_var(key, value) };
    }

    fn valid_config() -> ServerConfig {
        ServerConfig {
            bind: "127.0.0.1:8080".parse().unwrap(),
            game: GameConfig {
                words_file: PathBuf::from("words/words.txt"),
                scores_file: PathBuf::from("scores/scores.json"),
                default_difficulty: "facile".to_string(),
            },
            session: SessionConfig {
                secret: "a".repeat(32),
                ttl_hours: 24,
            },
            static_dir: PathBuf::from("static"),
            metrics_bind: None,
        }
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::MissingRequired {
            var: "SESSION_SECRET".to_string(),
            hint: "Use openssl".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("SESSION_SECRET"));
        assert!(msg.contains("Use openssl"));
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        set_env("SESSION_SECRET", &"s".repeat(32));

        let config = ServerConfig::from_env(None, None, None).unwrap();
        assert_eq!(config.bind, "127.0.0.1:8080".parse().unwrap());
        assert_eq!(config.game.words_file, PathBuf::from("words/words.txt"));
        assert_eq!(config.game.scores_file, PathBuf::from("scores/scores.json"));
        assert_eq!(config.game.default_difficulty, "facile");
        assert_eq!(config.session.ttl_hours, 24);
        assert_eq!(config.static_dir, PathBuf::from("static"));
        assert!(config.metrics_bind.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_from_env_overrides_win() {
        clear_env();
        set_env("SESSION_SECRET", &"s".repeat(32));
        set_env("SERVER_BIND", "0.0.0.0:9000");
        set_env("WORDS_FILE", "/etc/words.txt");

        let config = ServerConfig::from_env(
            Some("127.0.0.1:7000".parse().unwrap()),
            Some(PathBuf::from("mots.txt")),
            Some(PathBuf::from("/tmp/scores.json")),
        )
        .unwrap();

        assert_eq!(config.bind, "127.0.0.1:7000".parse().unwrap());
        assert_eq!(config.game.words_file, PathBuf::from("mots.txt"));
        assert_eq!(config.game.scores_file, PathBuf::from("/tmp/scores.json"));
    }

    #[test]
    #[serial]
    fn test_missing_secret() {
        clear_env();

        let err = ServerConfig::from_env(None, None, None).unwrap_err();
        assert!(matches!(err, ConfigError::MissingRequired { .. }));
    }

    #[test]
    #[serial]
    fn test_short_secret() {
        clear_env();
        set_env("SESSION_SECRET", "too_short");

        let err = ServerConfig::from_env(None, None, None).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }

    #[test]
    #[serial]
    fn test_bad_bind_address() {
        clear_env();
        set_env("SESSION_SECRET", &"s".repeat(32));
        set_env("SERVER_BIND", "not-an-address");

        let err = ServerConfig::from_env(None, None, None).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { ref var, .. } if var == "SERVER_BIND"));
    }

    #[test]
    fn test_config_validation_zero_ttl() {
        let mut config = valid_config();
        config.session.ttl_hours = 0;

        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }

    #[test]
    fn test_config_validation_blank_default_difficulty() {
        let mut config = valid_config();
        config.game.default_difficulty = "  ".to_string();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_metrics_port_clash() {
        let mut config = valid_config();
        config.metrics_bind = Some(config.bind);

        assert!(config.validate().is_err());
    }
}
