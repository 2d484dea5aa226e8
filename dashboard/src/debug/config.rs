//! Logging configuration from environment variables

use std::path::PathBuf;

use lib_utils::envs::get_env_or;

/// File name prefix of the rotated log
pub const LOG_FILE_PREFIX: &str = "dashboard.log";

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebugConfig {
    /// Log directory (for rotation)
    pub log_dir: PathBuf,
    /// Log level filter (e.g., "dashboard=debug,info")
    pub log_level: String,
}

fn default_log_level() -> &'static str {
    if cfg!(feature = "debug-mode") {
        "dashboard=debug,info"
    } else {
        "dashboard=info,warn"
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("logs"),
            log_level: default_log_level().to_string(),
        }
    }
}

impl DebugConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            log_dir: PathBuf::from(get_env_or("DASHBOARD_LOG_DIR", "logs")),
            log_level: get_env_or("RUST_LOG", default_log_level()),
        }
    }

    /// Path of today's log file is `log_dir/dashboard.log.YYYY-MM-DD`
    pub fn log_file(&self) -> PathBuf {
        self.log_dir.join(LOG_FILE_PREFIX)
    }

    /// Check if debug logging is enabled
    pub fn is_debug_enabled(&self) -> bool {
        self.log_level.contains("debug") || self.log_level.contains("trace")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_detection() {
        let config = DebugConfig {
            log_dir: PathBuf::from("logs"),
            log_level: "dashboard=debug".to_string(),
        };
        assert!(config.is_debug_enabled());
        assert_eq!(config.log_file(), PathBuf::from("logs/dashboard.log"));
    }

    #[test]
    fn test_reads_values_from_env_file() {
        let dir = std::env::temp_dir().join(format!("dashboard-env-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        let env_file = dir.join(".env");
        std::fs::write(&env_file, "DASHBOARD_LOG_DIR=/tmp/dashboard-from-env-file\n").unwrap();

        dotenvy::from_path(&env_file).unwrap();
        let config = DebugConfig::from_env();
        assert_eq!(config.log_dir, PathBuf::from("/tmp/dashboard-from-env-file"));

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
