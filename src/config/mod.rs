//! Configuration for a sample run

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::ConfigError;
use crate::samples::SAMPLE_NAMES;

/// Main configuration for a run of the samples
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SamplesConfig {
    pub name: String,
    pub random_seed: u64,
    /// Samples to run, in registration order. Empty runs all of them.
    #[serde(default)]
    pub samples: Vec<String>,
    #[serde(default)]
    pub repository: RepositoryConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepositoryConfig {
    #[serde(default = "default_entity_count")]
    pub entity_count: usize,
    /// Entity ids are drawn from `1..=id_ceiling`
    #[serde(default = "default_id_ceiling")]
    pub id_ceiling: i32,
    #[serde(default = "default_find_threshold")]
    pub find_threshold: i32,
}

fn default_entity_count() -> usize {
    8
}

fn default_id_ceiling() -> i32 {
    20
}

fn default_find_threshold() -> i32 {
    10
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            entity_count: default_entity_count(),
            id_ceiling: default_id_ceiling(),
            find_threshold: default_find_threshold(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl SamplesConfig {
    /// Load and validate configuration from a YAML file
    pub fn from_yaml<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    pub fn from_yaml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: SamplesConfig = serde_yaml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a YAML file
    pub fn to_yaml<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let yaml = serde_yaml::to_string(self)?;
        fs::write(path, yaml)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for name in &self.samples {
            if !SAMPLE_NAMES.contains(&name.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "unknown sample '{name}', expected one of: {}",
                    SAMPLE_NAMES.join(", ")
                )));
            }
        }

        if self.repository.entity_count == 0 {
            return Err(ConfigError::Validation(
                "repository.entity_count must be greater than zero".into(),
            ));
        }

        if self.repository.id_ceiling <= 0 {
            return Err(ConfigError::Validation(
                "repository.id_ceiling must be greater than zero".into(),
            ));
        }

        Ok(())
    }

    /// Built-in configuration used when no file is given
    pub fn standard() -> Self {
        Self {
            name: "code_samples".to_string(),
            random_seed: 7,
            samples: Vec::new(),
            repository: RepositoryConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for SamplesConfig {
    fn default() -> Self {
        Self::standard()
    }
}
