use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize: {0}")]
    Serialize(#[source] serde_yaml_ng::Error),

    #[error("failed to deserialize: {0}")]
    Deserialize(#[source] serde_yaml_ng::Error),

    #[error("validation error: {0}")]
    Validation(String),
}
