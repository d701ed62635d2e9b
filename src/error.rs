use thiserror::Error;

#[derive(Error, Debug)]
pub enum EmailqlError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Server error: {0}")]
    Server(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config already exists at {0}")]
    AlreadyInitialized(String),
}

pub type Result<T> = std::result::Result<T, EmailqlError>;
