use config::{Config, ConfigError, Environment, File};
use crate::core::ForestParams;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub data: DataSettings,
    #[serde(default)]
    pub model: ModelSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 5000 }

/// Reference dataset
#[derive(Debug, Clone, Deserialize)]
pub struct DataSettings {
    #[serde(default = "default_dataset_path")]
    pub dataset_path: PathBuf,
    #[serde(default = "default_label_column")]
    pub label_column: String,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            dataset_path: default_dataset_path(),
            label_column: default_label_column(),
        }
    }
}

fn default_dataset_path() -> PathBuf { PathBuf::from("dataset/stud.csv") }
fn default_label_column() -> String { "Courses".to_string() }

/// Random forest artifact; the hyperparameters are read only by the
/// `career-compass-train` binary that produces it
#[derive(Debug, Clone, Deserialize)]
pub struct ModelSettings {
    #[serde(default = "default_model_path")]
    pub path: PathBuf,
    #[serde(default = "default_n_estimators")]
    pub n_estimators: usize,
    #[serde(default = "default_max_depth")]
    pub max_depth: Option<usize>,
    #[serde(default = "default_random_state")]
    pub random_state: u64,
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            path: default_model_path(),
            n_estimators: default_n_estimators(),
            max_depth: default_max_depth(),
            random_state: default_random_state(),
        }
    }
}

impl ModelSettings {
    pub fn forest_params(&self) -> ForestParams {
        ForestParams {
            n_estimators: self.n_estimators,
            max_depth: self.max_depth,
            random_state: self.random_state,
        }
    }
}

fn default_model_path() -> PathBuf { PathBuf::from("model/forest.safetensors") }
fn default_n_estimators() -> usize { 100 }
fn default_max_depth() -> Option<usize> { Some(10) }
fn default_random_state() -> u64 { 42 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
/// One of `full`, `pretty` or `json`
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with CAREER_)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., CAREER__SERVER__PORT -> server.port
            .add_source(env_source())
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(env_source())
            .build()?
            .try_deserialize()
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("CAREER")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.server.port, 5000);
        assert_eq!(settings.data.label_column, "Courses");
        assert_eq!(settings.data.dataset_path, PathBuf::from("dataset/stud.csv"));
        assert_eq!(settings.logging.level, "info");
        assert_eq!(settings.logging.format, "json");
        assert_eq!(settings.model.path, PathBuf::from("model/forest.safetensors"));
        assert_eq!(settings.model.forest_params(), ForestParams::default());
    }

    #[test]
    fn test_load_from_partial_file() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp file");
        writeln!(
            file,
            "[server]\nport = 8088\n\n[model]\npath = \"artifacts/forest.safetensors\"\nn_estimators = 25"
        )
        .expect("write");

        let settings = Settings::load_from(file.path()).unwrap();

        assert_eq!(settings.server.port, 8088);
        assert_eq!(settings.server.host, "127.0.0.1");
        assert_eq!(settings.model.path, PathBuf::from("artifacts/forest.safetensors"));
        assert_eq!(settings.model.n_estimators, 25);
        assert_eq!(settings.model.max_depth, Some(10));
        assert_eq!(settings.data.label_column, "Courses");
    }
}
