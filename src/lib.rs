pub mod ai;
pub mod board;
pub mod config;
pub mod error;
pub mod eval;
pub mod game;
pub mod moves;
pub mod piece;
pub mod position;

pub use ai::{Ai, Move, SearchResult};
pub use board::Board;
pub use config::EngineConfig;
pub use error::{ConfigError, NotationError, SearchError};
pub use game::{AiPlays, Game, GameStatus, Setup};
pub use piece::{Color, Piece, PieceKind};
pub use position::Position;
