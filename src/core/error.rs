use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Enemy not found in catalog: {0}")]
    EnemyNotFound(String),

    #[error("Invalid catalog data: {0}")]
    Catalog(String),

    #[error("Invalid config: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;
