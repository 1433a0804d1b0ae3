use crate::errors::{AppError, AppResult};
use crate::models::WeekdayStyle;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

pub mod migrate;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_show_weekday")]
    pub show_weekday: String,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
    #[serde(default = "default_show_date")]
    pub show_date: bool,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_show_weekday() -> String {
    WeekdayStyle::default().as_str().to_string()
}
fn default_separator_char() -> String {
    "-".to_string()
}
fn default_show_date() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            show_weekday: default_show_weekday(),
            separator_char: default_separator_char(),
            show_date: default_show_date(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rwaterlogger")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rwaterlogger")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rwaterlogger.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rwaterlogger.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content).map_err(|e| {
            tracing::warn!(path = %path.display(), error = %e, "Unparsable configuration file");
            AppError::ConfigLoad
        })
    }

    /// Weekday style for the date header. Unknown values fall back to the default.
    pub fn weekday_style(&self) -> WeekdayStyle {
        WeekdayStyle::from_code(&self.show_weekday).unwrap_or_else(|| {
            tracing::warn!(value = %self.show_weekday, "Unknown show_weekday value");
            WeekdayStyle::default()
        })
    }

    /// Initialize configuration and database files.
    /// Returns the database path that was configured.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<String> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir).map_err(|e| {
            AppError::Config(format!("Failed to create directory {:?}: {}", dir, e))
        })?;

        // DB path: user provided or default
        let db_path = match custom_db {
            Some(name) => {
                let p = crate::utils::path::expand_tilde(&name);
                if p.is_absolute() { p } else { dir.join(p) }
            }
            None => Self::database_file(),
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config).map_err(|_| AppError::ConfigSave)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(migrate::annotate(&yaml).as_bytes())?;
        }

        Ok(config.database)
    }
}
