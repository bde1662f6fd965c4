use std::fmt;

use crate::moves;
use crate::piece::{Color, Piece, PieceKind};
use crate::position::{Position, HEIGHT, WIDTH};

const BACK_RANK: [PieceKind; WIDTH] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Pawn files that the standard variant setup fills with Vanguards.
const VANGUARD_FILES: [usize; 2] = [3, 4];

/// The 8x8 grid. Every piece's stored position equals the cell it sits in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; WIDTH]; HEIGHT],
}

impl Board {
    pub fn empty() -> Board {
        Board { squares: [[None; WIDTH]; HEIGHT] }
    }

    /// The variant opening: the classic arrangement with the d- and e-pawns replaced by Vanguards.
    pub fn standard() -> Board {
        Board::from_pieces(standard_army(Color::White).into_iter().chain(standard_army(Color::Black)))
    }

    /// The unmodified 32-piece chess opening.
    pub fn classic() -> Board {
        Board::from_pieces(classic_army(Color::White).into_iter().chain(classic_army(Color::Black)))
    }

    /// Places each piece on its own stored position; later pieces replace earlier ones on the same square.
    pub fn from_pieces(pieces: impl IntoIterator<Item = Piece>) -> Board {
        let mut board = Board::empty();
        for piece in pieces {
            board.place(piece);
        }
        board
    }

    pub fn place(&mut self, piece: Piece) {
        let pos = piece.position();
        self.squares[pos.row()][pos.col()] = Some(piece);
    }

    pub fn remove(&mut self, pos: Position) -> Option<Piece> {
        self.squares[pos.row()][pos.col()].take()
    }

    pub fn piece_at(&self, pos: Position) -> Option<&Piece> {
        self.squares[pos.row()][pos.col()].as_ref()
    }

    /// Raw lookup that answers `None` for coordinates off the board.
    pub fn piece_at_coords(&self, row: i8, col: i8) -> Option<&Piece> {
        Position::from_coords(row, col).and_then(|pos| self.piece_at(pos))
    }

    /// All pieces in board-scan order: row 0 first, left to right.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.squares.iter().flatten().flatten()
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces().filter(move |piece| piece.color == color)
    }

    /// Moves the piece on `from` to `to`, capturing whatever stands there. A king moving two
    /// columns castles: the corner rook is moved next to it first.
    ///
    /// Panics if `from` is empty.
    pub fn apply_move(&mut self, from: Position, to: Position) {
        let mut piece = self.remove(from)
            .unwrap_or_else(|| panic!("No piece at {} to move", from));

        if piece.kind == PieceKind::King && from.row() == to.row() && from.col().abs_diff(to.col()) == 2 {
            let (rook_col, rook_to_col) = if to.col() > from.col() {
                (WIDTH - 1, from.col() + 1)
            } else {
                (0, from.col() - 1)
            };
            let rook_from = Position::new(from.row(), rook_col).expect("Corner is on the board");
            let rook_to = Position::new(from.row(), rook_to_col).expect("Castling square is on the board");
            log::trace!("Castling {} king, rook {} -> {}", piece.color, rook_from, rook_to);
            self.apply_move(rook_from, rook_to);
        }

        if let Some(captured) = self.piece_at(to) {
            log::trace!("{} captures {} on {}", piece.display_name(), captured.display_name(), to);
        }
        piece.move_to(to);
        self.place(piece);
    }

    /// Panics if `color` has no king on the board.
    pub fn find_king(&self, color: Color) -> Position {
        self.pieces_of(color)
            .find(|piece| piece.kind == PieceKind::King)
            .map(|king| king.position())
            .unwrap_or_else(|| panic!("No {} king found on the board", color))
    }

    pub fn is_square_attacked(&self, pos: Position, by: Color) -> bool {
        self.pieces_of(by).any(|attacker| moves::attacks(self, attacker, pos))
    }

    pub fn is_king_in_check(&self, color: Color) -> bool {
        self.is_square_attacked(self.find_king(color), color.opposite())
    }

    /// Whether moving `piece` to `target` would leave its own king attacked. Decided on a
    /// scratch copy, so `self` is never touched.
    pub fn would_expose_check(&self, piece: &Piece, target: Position) -> bool {
        let mut simulated = self.clone();
        simulated.apply_move(piece.position(), target);
        simulated.is_king_in_check(piece.color)
    }

    pub fn legal_moves(&self, piece: &Piece) -> Vec<Position> {
        piece.pseudo_legal_moves(self)
            .into_iter()
            .filter(|&target| !self.would_expose_check(piece, target))
            .collect()
    }

    pub fn has_legal_move(&self, color: Color) -> bool {
        self.pieces_of(color).any(|piece| !self.legal_moves(piece).is_empty())
    }

    pub fn is_checkmate(&self, color: Color) -> bool {
        self.is_king_in_check(color) && !self.has_legal_move(color)
    }

    pub fn is_stalemate(&self, color: Color) -> bool {
        !self.is_king_in_check(color) && !self.has_legal_move(color)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  a b c d e f g h")?;
        for (row, cells) in self.squares.iter().enumerate() {
            write!(f, "{} ", HEIGHT - row)?;
            for cell in cells {
                let icon = cell.map_or('.', |piece| piece.symbol());
                write!(f, "{} ", icon)?;
            }
            writeln!(f, "{}", HEIGHT - row)?;
        }
        write!(f, "  a b c d e f g h")
    }
}

fn home_rows(color: Color) -> (usize, usize) {
    match color {
        Color::White => (HEIGHT - 1, HEIGHT - 2),
        Color::Black => (0, 1),
    }
}

fn new_pieces(color: Color) -> Vec<Piece> {
    let (back_row, _) = home_rows(color);
    BACK_RANK.iter()
        .zip(Position::all().filter(|pos| pos.row() == back_row))
        .map(|(&kind, pos)| Piece::new(color, kind, pos))
        .collect()
}

fn new_pawns(color: Color, vanguards: bool) -> Vec<Piece> {
    let (_, pawn_row) = home_rows(color);
    Position::all()
        .filter(|pos| pos.row() == pawn_row)
        .map(|pos| {
            let kind = if vanguards && VANGUARD_FILES.contains(&pos.col()) {
                PieceKind::Vanguard
            } else {
                PieceKind::Pawn
            };
            Piece::new(color, kind, pos)
        })
        .collect()
}

/// One side of the variant opening, ready to hand to [`Board::from_pieces`].
pub fn standard_army(color: Color) -> Vec<Piece> {
    [new_pawns(color, true), new_pieces(color)].concat()
}

pub fn classic_army(color: Color) -> Vec<Piece> {
    [new_pawns(color, false), new_pieces(color)].concat()
}
