use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to write config file {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to serialize config: {0}")]
    Serialize(#[source] serde_yaml_ng::Error),
    #[error("Failed to deserialize config: {0}")]
    Deserialize(#[source] serde_yaml_ng::Error),
    #[error("Config validation error: {0}")]
    Invalid(String),
}
