use crate::errors::{AppError, AppResult};
use crate::models::dialect::Dialect;
use crate::utils::path::expand_tilde;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Environment variable that overrides `birth_date`.
pub const BIRTH_DATE_ENV: &str = "BABY_BIRTH_DATE";

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    /// Birth date (YYYY-MM-DD) used for month-age buckets.
    #[serde(default)]
    pub birth_date: Option<String>,
}

fn default_data_dir() -> String {
    "./data".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            data_dir: default_data_dir(),
            birth_date: None,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("piyostats")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".piyostats")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("piyostats.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("piyostats.sqlite")
    }

    /// Load configuration from file, or return defaults if not found.
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("cannot parse {}: {e}", path.display())))
    }

    /// Resolve the birth date: `--birth-date`, then `BABY_BIRTH_DATE`,
    /// then the config file.
    pub fn resolve_birth_date(&self, cli_override: Option<&str>) -> AppResult<NaiveDate> {
        let env_value = env::var(BIRTH_DATE_ENV).ok().filter(|v| !v.trim().is_empty());

        let raw = cli_override
            .map(str::to_string)
            .or(env_value)
            .or_else(|| self.birth_date.clone())
            .ok_or(AppError::MissingBirthDate)?;

        NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
            .map_err(|_| AppError::InvalidBirthDate(raw.clone()))
    }

    /// Directory holding the exports of `dialect` (`<data_dir>/<dialect>`).
    pub fn input_dir(&self, dialect: Dialect) -> PathBuf {
        expand_tilde(&self.data_dir).join(dialect.as_str())
    }

    /// Resolve a `--db` value: `~` is expanded, a relative name lives in
    /// the config directory.
    pub fn resolve_db_path(custom_db: &str) -> PathBuf {
        let p = expand_tilde(custom_db);
        if p.is_absolute() {
            p
        } else {
            Self::config_dir().join(p)
        }
    }

    /// Initialize configuration and database files.
    ///
    /// An existing config file is kept: only `database` is replaced, and only
    /// when `--db` is given.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let existing = Self::config_file().exists();
        let mut config = Self::load()?;

        if let Some(name) = custom_db {
            config.database = Self::resolve_db_path(&name).to_string_lossy().to_string();
        }
        let db_path = expand_tilde(&config.database);

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| AppError::Config(format!("cannot serialize config: {e}")))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            if existing {
                println!("✅ Config file updated: {:?}", Self::config_file());
            } else {
                println!("✅ Config file: {:?}", Self::config_file());
            }
        }

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }

        Ok(db_path)
    }
}
