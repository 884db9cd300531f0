use common::GameError;
use common::config::ConfigError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    /// The player asked to leave, or input ended.
    #[error("player quit")]
    Quit,

    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Game(#[from] GameError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("stats record is malformed: {0}")]
    MalformedPersistedRecord(String),
}

pub type Result<T> = std::result::Result<T, ClientError>;
