//! Settings management
//!
//! The host service supplies the log destination and level through a TOML
//! settings file. All fields are optional; missing ones fall back to
//! defaults, and an unreadable or unparseable file falls back wholesale.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::constants::{DEFAULT_LEVEL, DEFAULT_LOG_PATH};
use crate::error::{LogError, Result};
use crate::level::LogLevel;
use crate::logger::Logger;

/// Settings for the logging subsystem
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub log: LogSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// Destination file for the main log
    pub path: PathBuf,
    /// Least-severe level written to the main log
    pub level: LogLevel,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_LOG_PATH),
            level: DEFAULT_LEVEL,
        }
    }
}

impl Settings {
    /// Apply these settings to `logger`: open the configured log file as
    /// the destination at the configured level.
    pub fn apply(&self, logger: &Logger) -> Result<()> {
        logger.open_log_file(&self.log.path, self.log.level)
    }
}

/// Load settings from `path`, or defaults if the file does not exist or
/// cannot be used.
pub fn load(path: &Path) -> Settings {
    if !path.exists() {
        return Settings::default();
    }

    match fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("Settings parse error in {:?}: {}, using defaults", path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read settings {:?}: {}, using defaults", path, e);
            Settings::default()
        }
    }
}

/// Save settings to `path`
pub fn save(settings: &Settings, path: &Path) -> Result<()> {
    // Settings are always serializable (all fields are serde-compatible)
    let content = toml::to_string_pretty(settings).expect("Settings serialization failed");
    fs::write(path, content).map_err(|e| LogError::ConfigRead {
        path: path.to_path_buf(),
        source: e,
    })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_values() {
        let settings = Settings::default();
        assert_eq!(settings.log.path, PathBuf::from(DEFAULT_LOG_PATH));
        assert_eq!(settings.log.level, LogLevel::Info);
    }

    #[test]
    fn test_settings_serialize_deserialize_roundtrip() {
        let settings = Settings {
            log: LogSettings {
                path: PathBuf::from("/var/log/wace.log"),
                level: LogLevel::Debug,
            },
        };

        let toml_str = toml::to_string_pretty(&settings).unwrap();
        let restored: Settings = toml::from_str(&toml_str).unwrap();

        assert_eq!(restored.log.path, PathBuf::from("/var/log/wace.log"));
        assert_eq!(restored.log.level, LogLevel::Debug);
    }

    #[test]
    fn test_settings_partial_log_section() {
        // Only the level is given; the path should use its default.
        let partial_toml = r#"
[log]
level = "WARN"
"#;

        let settings: Settings = toml::from_str(partial_toml).unwrap();
        assert_eq!(settings.log.level, LogLevel::Warn);
        assert_eq!(settings.log.path, PathBuf::from(DEFAULT_LOG_PATH));
    }

    #[test]
    fn test_settings_empty_file() {
        let settings: Settings = toml::from_str("").unwrap();
        assert_eq!(settings.log.level, LogLevel::Info);
        assert_eq!(settings.log.path, PathBuf::from(DEFAULT_LOG_PATH));
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let settings = load(Path::new("/nonexistent/wace-settings.toml"));
        assert_eq!(settings.log.level, LogLevel::Info);
    }

    #[test]
    fn test_save_then_load_roundtrip() {
        let dir = std::env::temp_dir().join(format!(
            "wace-log-settings-{}-{}",
            std::process::id(),
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_millis()
        ));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("settings.toml");

        let settings = Settings {
            log: LogSettings {
                path: dir.join("wace.log"),
                level: LogLevel::Error,
            },
        };
        save(&settings, &path).unwrap();

        let restored = load(&path);
        assert_eq!(restored.log.level, LogLevel::Error);
        assert_eq!(restored.log.path, dir.join("wace.log"));

        let _ = fs::remove_dir_all(&dir);
    }
}
