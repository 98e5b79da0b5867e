use std::path::PathBuf;

/// Errors returned by game operations (drop, undo, redo, reset).
///
/// All variants are recoverable: the operation is rejected and the game
/// state is left exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("column {column} out of range (board has {cols} columns)")]
    InvalidColumn { column: usize, cols: usize },

    #[error("not this side's turn, or the game is over")]
    InvalidTurn,

    #[error("nothing to undo or redo")]
    EmptyHistory,

    #[error("board dimensions {rows}x{cols} outside the allowed 4..=12 range")]
    InvalidDimensions { rows: usize, cols: usize },
}

/// Errors that can occur when loading or parsing settings.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
