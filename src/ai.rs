use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::Board;
use crate::config::EngineConfig;
use crate::error::SearchError;
use crate::eval::evaluate;
use crate::piece::{Color, Piece};
use crate::position::Position;

/// A piece together with the square it goes to; the origin is the piece's own position.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    pub piece: Piece,
    pub to: Position,
}

impl Move {
    pub fn from(&self) -> Position {
        self.piece.position()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from(), self.to)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub best: Option<Move>,
    pub score: i32,
}

/// Every legal move of `color`: pieces in board-scan order, targets in generation order.
pub fn candidate_moves(board: &Board, color: Color) -> Vec<Move> {
    board.pieces_of(color)
        .flat_map(|piece| {
            board.legal_moves(piece)
                .into_iter()
                .map(move |to| Move { piece: *piece, to })
        })
        .collect()
}

/// Either side checkmated or stalemated.
fn is_terminal(board: &Board) -> bool {
    [Color::White, Color::Black].iter().any(|&color| !board.has_legal_move(color))
}

/// Depth-limited minimax with alpha-beta pruning. `maximizing` means `ai_color` moves at
/// this node. Ties keep the first move found.
pub fn search(board: &Board, ai_color: Color, depth: u32, mut alpha: i32, mut beta: i32, maximizing: bool) -> SearchResult {
    if depth == 0 || is_terminal(board) {
        return SearchResult { best: None, score: evaluate(board, ai_color) };
    }

    let side = if maximizing { ai_color } else { ai_color.opposite() };
    let candidates = candidate_moves(board, side);
    if candidates.is_empty() {
        return SearchResult { best: None, score: evaluate(board, ai_color) };
    }

    let mut best = None;
    let mut best_score = if maximizing { i32::MIN } else { i32::MAX };
    for mv in candidates {
        let mut simulated = board.clone();
        simulated.apply_move(mv.from(), mv.to);
        let score = search(&simulated, ai_color, depth - 1, alpha, beta, !maximizing).score;

        if maximizing {
            if score > best_score {
                best_score = score;
                best = Some(mv);
            }
            alpha = alpha.max(best_score);
        } else {
            if score < best_score {
                best_score = score;
                best = Some(mv);
            }
            beta = beta.min(best_score);
        }

        if beta <= alpha {
            break;
        }
    }
    SearchResult { best, score: best_score }
}

/// The computer opponent. Low difficulties play random legal moves, higher ones search.
pub struct Ai {
    config: EngineConfig,
    rng: StdRng,
}

impl Ai {
    pub fn new(config: EngineConfig) -> Ai {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ai { config, rng }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn pick_move(&mut self, board: &Board, color: Color) -> Result<Move, SearchError> {
        let candidates = candidate_moves(board, color);
        if candidates.is_empty() {
            return Err(SearchError::NoLegalMoves(color));
        }

        if self.config.uses_random_moves() {
            let mv = candidates[self.rng.gen_range(0..candidates.len())];
            log::debug!("{} plays random move {} out of {}", color, mv, candidates.len());
            return Ok(mv);
        }

        let result = search(board, color, self.config.difficulty, i32::MIN, i32::MAX, true);
        match result.best {
            Some(mv) => {
                log::debug!("{} searched depth {}: {} scores {}", color, self.config.difficulty, mv, result.score);
                Ok(mv)
            }
            None => {
                log::warn!("Search for {} returned no move, playing first candidate", color);
                Ok(candidates[0])
            }
        }
    }
}
