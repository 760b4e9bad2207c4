use std::path::PathBuf;

/// Errors raised by board mutations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {column} is out of range (board has {width} columns)")]
    InvalidColumn { column: usize, width: usize },

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("column {0} is empty")]
    ColumnEmpty(usize),
}

/// Errors that can occur while the agent picks a move.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("no legal move available")]
    NoLegalMove,

    #[error("board mutation failed during search: {0}")]
    Move(#[from] MoveError),
}

/// Errors that can occur while driving a human-vs-agent game.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("the game is over")]
    GameOver,

    #[error("it is not the human player's turn")]
    NotHumanTurn,

    #[error("illegal move: {0}")]
    Move(#[from] MoveError),

    #[error("agent failed to move: {0}")]
    Search(#[from] SearchError),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
