use crate::ui::messages::warning;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

/// Field names every configuration file is expected to carry.
pub const CONFIG_FIELDS: [&str; 3] = ["database", "export_dir", "default_period"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_export_dir")]
    pub export_dir: String,
    #[serde(default = "default_period")]
    pub default_period: String,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_export_dir() -> String {
    ".".to_string()
}
fn default_period() -> String {
    "this_month".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            export_dir: default_export_dir(),
            default_period: default_period(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rservicelog")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rservicelog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rservicelog.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rservicelog.sqlite")
    }

    /// Load configuration from file, or return defaults if not found.
    /// An unreadable or invalid file is reported and replaced by defaults.
    pub fn load() -> Self {
        let path = Self::config_file();
        if !path.exists() {
            return Config::default();
        }

        let parsed: Result<Config, String> = fs::read_to_string(&path)
            .map_err(|e| e.to_string())
            .and_then(|content| serde_yaml::from_str(&content).map_err(|e| e.to_string()));

        match parsed {
            Ok(cfg) => cfg,
            Err(e) => {
                warning(format!(
                    "Cannot load configuration {}: {e}. Using defaults.",
                    path.display()
                ));
                Config::default()
            }
        }
    }

    /// Fields from [`CONFIG_FIELDS`] absent in the YAML text.
    pub fn missing_fields(yaml: &str) -> Vec<&'static str> {
        let value: serde_yaml::Value = serde_yaml::from_str(yaml).unwrap_or(serde_yaml::Value::Null);
        let Some(map) = value.as_mapping() else {
            return CONFIG_FIELDS.to_vec();
        };

        CONFIG_FIELDS
            .iter()
            .copied()
            .filter(|f| !map.contains_key(*f))
            .collect()
    }

    /// Initialize configuration and database files.
    /// Returns the database path that was configured.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> io::Result<String> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = if let Some(name) = custom_db {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::database_file()
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config).map_err(io::Error::other)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        Ok(config.database)
    }
}
