use thiserror::Error;

/// User-facing errors.
#[derive(Error, Debug)]
pub enum SqlPrettyError {
    #[error("sqlpretty config error: {0}")]
    Config(String),

    #[error("sqlpretty input error: {0}")]
    Input(String),

    #[error("sqlpretty placeholder error: {0}")]
    Placeholder(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, SqlPrettyError>;
