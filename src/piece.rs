use std::fmt;

use crate::board::Board;
use crate::moves;
use crate::position::Position;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Color {
    White, Black
}

impl Color {
    pub fn opposite(&self) -> Color {
        if self == &Color::White {
            Color::Black
        } else {
            Color::White
        }
    }

    /// Row step a pawn of this color advances by.
    pub fn forward(&self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => f.write_str("White"),
            Color::Black => f.write_str("Black"),
        }
    }
}

/// The closed set of piece kinds. `Vanguard` and `Cavalry` are the two variant pieces.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
    /// One step diagonally, or up to two squares orthogonally without jumping.
    Vanguard,
    /// Knight jumps, or up to two squares orthogonally without jumping.
    Cavalry,
}

impl PieceKind {
    pub const ALL: [PieceKind; 8] = [
        PieceKind::King,
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Pawn,
        PieceKind::Vanguard,
        PieceKind::Cavalry,
    ];

    fn letter(&self) -> char {
        match self {
            PieceKind::King => 'K',
            PieceKind::Queen => 'Q',
            PieceKind::Rook => 'R',
            PieceKind::Bishop => 'B',
            PieceKind::Knight => 'N',
            PieceKind::Pawn => 'P',
            PieceKind::Vanguard => 'V',
            PieceKind::Cavalry => 'C',
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
    position: Position,
    has_moved: bool,
}

impl Piece {
    pub fn new(color: Color, kind: PieceKind, position: Position) -> Self {
        Piece { color, kind, position, has_moved: false }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn has_moved(&self) -> bool {
        self.has_moved
    }

    /// Same piece, flagged as already moved. Used to build positions where castling
    /// or a pawn double step must be unavailable.
    pub fn moved(mut self) -> Self {
        self.has_moved = true;
        self
    }

    /// Only the board calls this, so the stored position always matches the occupied cell.
    pub(crate) fn move_to(&mut self, position: Position) {
        self.position = position;
        self.has_moved = true;
    }

    pub fn pseudo_legal_moves(&self, board: &Board) -> Vec<Position> {
        moves::pseudo_legal_moves(board, self)
    }

    pub fn symbol(&self) -> char {
        match self.color {
            Color::White => self.kind.letter(),
            Color::Black => self.kind.letter().to_ascii_lowercase(),
        }
    }

    pub fn display_name(&self) -> String {
        format!("{} {:?}", self.color, self.kind)
    }
}

#[cfg(test)]
mod test {
    use crate::piece::{Color, Piece, PieceKind};
    use crate::position::Position;

    #[test]
    fn test_opposite() {
        assert_eq!(Color::White.opposite(), Color::Black);
        assert_eq!(Color::Black.opposite(), Color::White);
    }

    #[test]
    fn test_symbols() {
        let pos = Position::new(0, 0).unwrap();
        assert_eq!(Piece::new(Color::White, PieceKind::Vanguard, pos).symbol(), 'V');
        assert_eq!(Piece::new(Color::Black, PieceKind::Cavalry, pos).symbol(), 'c');
        assert_eq!(Piece::new(Color::Black, PieceKind::Knight, pos).symbol(), 'n');
        assert_eq!(Piece::new(Color::White, PieceKind::Vanguard, pos).display_name(), "White Vanguard");
    }

    #[test]
    fn test_copy_keeps_moved_flag() {
        let mut piece = Piece::new(Color::White, PieceKind::Rook, Position::new(7, 0).unwrap());
        assert!(!piece.has_moved());
        piece.move_to(Position::new(5, 0).unwrap());
        let copy = piece;
        assert!(copy.has_moved());
        assert_eq!(copy.position(), Position::new(5, 0).unwrap());
        assert_eq!(copy, piece);
    }
}
