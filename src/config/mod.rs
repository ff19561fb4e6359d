use std::env;
use std::fmt;
use std::path::PathBuf;

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub storage: StorageConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let data_dir =
            PathBuf::from(env::var("AGENT_FIT_DATA_DIR").unwrap_or_else(|_| "data".to_string()));
        let reports_dir = PathBuf::from(
            env::var("AGENT_FIT_REPORTS_DIR").unwrap_or_else(|_| "reports".to_string()),
        );
        let log_level = env::var("AGENT_FIT_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        if data_dir.as_os_str().is_empty() {
            return Err(ConfigError::EmptyPath { variable: "AGENT_FIT_DATA_DIR" });
        }
        if reports_dir.as_os_str().is_empty() {
            return Err(ConfigError::EmptyPath { variable: "AGENT_FIT_REPORTS_DIR" });
        }

        Ok(Self {
            storage: StorageConfig { data_dir, reports_dir },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Locations for the evaluation history and exported reports.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
    pub reports_dir: PathBuf,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    EmptyPath { variable: &'static str },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyPath { variable } => {
                write!(f, "{variable} must not be set to an empty path")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("AGENT_FIT_DATA_DIR");
        env::remove_var("AGENT_FIT_REPORTS_DIR");
        env::remove_var("AGENT_FIT_LOG_LEVEL");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.storage.data_dir, PathBuf::from("data"));
        assert_eq!(config.storage.reports_dir, PathBuf::from("reports"));
        assert_eq!(config.telemetry.log_level, "info");
    }

    #[test]
    fn load_honors_overrides() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("AGENT_FIT_DATA_DIR", "/tmp/agent-fit-data");
        env::set_var("AGENT_FIT_LOG_LEVEL", "debug");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.storage.data_dir, PathBuf::from("/tmp/agent-fit-data"));
        assert_eq!(config.telemetry.log_level, "debug");
        reset_env();
    }

    #[test]
    fn load_rejects_empty_data_dir() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("AGENT_FIT_DATA_DIR", "");
        let err = AppConfig::load().expect_err("empty path rejected");
        assert!(err.to_string().contains("AGENT_FIT_DATA_DIR"));
        reset_env();
    }
}
