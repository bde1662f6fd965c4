use std::collections::HashSet;

use crate::ai::Ai;
use crate::board::Board;
use crate::config::EngineConfig;
use crate::piece::{Color, Piece};
use crate::position::{parse_move, Position};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Win(Color),
    Draw
}

/// Which pieces [`Game::make_ai_move`] is allowed to move.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AiPlays {
    Side(Color),
    /// Self-play: the engine moves for whoever is to move.
    BothSides,
}

impl AiPlays {
    pub fn includes(&self, color: Color) -> bool {
        match self {
            AiPlays::Side(side) => *side == color,
            AiPlays::BothSides => true,
        }
    }
}

/// Starting arrangement for a new game.
#[derive(Debug, Clone)]
pub enum Setup {
    Standard,
    /// Pieces placed on their stored positions, e.g. a faction's army.
    Custom(Vec<Piece>),
}

pub struct Game {
    board: Board,
    turn: Color,
    turn_count: u32,
    status: GameStatus,
    ai: Ai,
    ai_plays: AiPlays,
}

impl Game {
    /// The player moves first; the engine takes the other side.
    pub fn new(first_to_move: Color, setup: Setup) -> Game {
        Game::with_config(first_to_move, setup, EngineConfig::default())
    }

    pub fn with_config(first_to_move: Color, setup: Setup, config: EngineConfig) -> Game {
        let board = match setup {
            Setup::Standard => Board::standard(),
            Setup::Custom(pieces) => Board::from_pieces(pieces),
        };
        log::info!("New game, {} to move, difficulty {}", first_to_move, config.difficulty);
        let mut game = Game {
            board,
            turn: first_to_move,
            turn_count: 1,
            status: GameStatus::InProgress,
            ai: Ai::new(config),
            ai_plays: AiPlays::Side(first_to_move.opposite()),
        };
        game.update_status();
        game
    }

    pub fn with_ai_plays(mut self, ai_plays: AiPlays) -> Game {
        self.ai_plays = ai_plays;
        self
    }

    pub fn ai_plays(&self) -> AiPlays {
        self.ai_plays
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn turn_count(&self) -> u32 {
        self.turn_count
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn difficulty(&self) -> u32 {
        self.ai.config().difficulty
    }

    pub fn is_game_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    pub fn winner(&self) -> Option<Color> {
        match self.status {
            GameStatus::Win(color) => Some(color),
            _ => None,
        }
    }

    pub fn is_in_check(&self) -> bool {
        self.board.is_king_in_check(self.turn)
    }

    /// Legal targets of the piece on `pos`, empty unless it belongs to the side to move.
    pub fn legal_moves_for(&self, pos: Position) -> HashSet<Position> {
        match self.board.piece_at(pos) {
            Some(piece) if piece.color == self.turn => self.board.legal_moves(piece).into_iter().collect(),
            _ => HashSet::new(),
        }
    }

    /// Plays `from` -> `to` for the side to move. Returns `false` and changes nothing when the
    /// move is not allowed.
    pub fn make_move(&mut self, from: Position, to: Position) -> bool {
        if self.is_game_over() {
            log::debug!("Move {}{} rejected, game is over", from, to);
            return false;
        }
        let piece = match self.board.piece_at(from) {
            Some(piece) if piece.color == self.turn => *piece,
            _ => {
                log::debug!("Move {}{} rejected, no {} piece on {}", from, to, self.turn, from);
                return false;
            }
        };
        if !self.board.legal_moves(&piece).contains(&to) || self.board.would_expose_check(&piece, to) {
            log::debug!("Move {}{} rejected, illegal for {}", from, to, piece.display_name());
            return false;
        }
        self.commit(from, to);
        true
    }

    /// Same as [`Game::make_move`] for four-character input such as `e2e4`.
    pub fn make_move_algebraic(&mut self, notation: &str) -> bool {
        match parse_move(notation) {
            Ok((from, to)) => self.make_move(from, to),
            Err(e) => {
                log::debug!("Cannot parse move {:?}: {}", notation, e);
                false
            }
        }
    }

    /// Lets the engine play, provided the side to move is one it controls.
    pub fn make_ai_move(&mut self) -> bool {
        if self.is_game_over() {
            return false;
        }
        if !self.ai_plays.includes(self.turn) {
            log::debug!("AI move rejected, {} is not played by the AI", self.turn);
            return false;
        }
        match self.ai.pick_move(&self.board, self.turn) {
            Ok(mv) => {
                log::info!("AI ({}) plays {}", self.turn, mv);
                self.commit(mv.from(), mv.to);
                true
            }
            Err(e) => {
                log::warn!("AI cannot move: {}", e);
                false
            }
        }
    }

    fn commit(&mut self, from: Position, to: Position) {
        self.board.apply_move(from, to);
        self.turn = self.turn.opposite();
        self.turn_count += 1;
        self.update_status();
    }

    /// Ends the game if the side to move is checkmated or stalemated.
    fn update_status(&mut self) {
        if self.board.is_checkmate(self.turn) {
            let winner = self.turn.opposite();
            self.status = GameStatus::Win(winner);
            log::info!("Checkmate, {} wins after {} turns", winner, self.turn_count);
        } else if self.board.is_stalemate(self.turn) {
            self.status = GameStatus::Draw;
            log::info!("Stalemate after {} turns", self.turn_count);
        }
    }
}
