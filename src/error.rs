use crate::piece::Color;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotationError {
    #[error("expected file a-h, got '{0}'")]
    File(char),

    #[error("expected rank 1-8, got '{0}'")]
    Rank(char),

    #[error("wrong length for square or move notation: {0:?}")]
    Length(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("no legal moves available for {0:?}")]
    NoLegalMoves(Color),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot parse config: {0}")]
    Json(#[from] serde_json::Error),
}
