use crate::board::Board;
use crate::piece::{Color, Piece, PieceKind};

pub const CHECKMATE_SCORE: i32 = 1_000_000;

type Table = [[i32; 8]; 8];

const PAWN_TABLE: Table = [
    [ 0,  0,  0,  0,  0,  0,  0,  0],
    [50, 50, 50, 50, 50, 50, 50, 50],
    [10, 10, 20, 30, 30, 20, 10, 10],
    [ 5,  5, 10, 25, 25, 10,  5,  5],
    [ 0,  0,  0, 20, 20,  0,  0,  0],
    [ 5, -5,-10,  0,  0,-10, -5,  5],
    [ 5, 10, 10,-20,-20, 10, 10,  5],
    [ 0,  0,  0,  0,  0,  0,  0,  0],
];

const KNIGHT_TABLE: Table = [
    [-50,-40,-30,-30,-30,-30,-40,-50],
    [-40,-20,  0,  0,  0,  0,-20,-40],
    [-30,  0, 10, 15, 15, 10,  0,-30],
    [-30,  5, 15, 20, 20, 15,  5,-30],
    [-30,  0, 15, 20, 20, 15,  0,-30],
    [-30,  5, 10, 15, 15, 10,  5,-30],
    [-40,-20,  0,  5,  5,  0,-20,-40],
    [-50,-40,-30,-30,-30,-30,-40,-50],
];

const BISHOP_TABLE: Table = [
    [-20,-10,-10,-10,-10,-10,-10,-20],
    [-10,  0,  0,  0,  0,  0,  0,-10],
    [-10,  0, 10, 10, 10, 10,  0,-10],
    [-10,  5,  5, 10, 10,  5,  5,-10],
    [-10,  0,  5, 10, 10,  5,  0,-10],
    [-10,  5,  5,  5,  5,  5,  5,-10],
    [-10,  0,  5,  0,  0,  5,  0,-10],
    [-20,-10,-10,-10,-10,-10,-10,-20],
];

const ROOK_TABLE: Table = [
    [ 0,  0,  0,  0,  0,  0,  0,  0],
    [ 5, 10, 10, 10, 10, 10, 10,  5],
    [-5,  0,  0,  0,  0,  0,  0, -5],
    [-5,  0,  0,  0,  0,  0,  0, -5],
    [-5,  0,  0,  0,  0,  0,  0, -5],
    [-5,  0,  0,  0,  0,  0,  0, -5],
    [-5,  0,  0,  0,  0,  0,  0, -5],
    [ 0,  0,  0,  5,  5,  0,  0,  0],
];

const QUEEN_TABLE: Table = [
    [-20,-10,-10, -5, -5,-10,-10,-20],
    [-10,  0,  0,  0,  0,  0,  0,-10],
    [-10,  0,  5,  5,  5,  5,  0,-10],
    [ -5,  0,  5,  5,  5,  5,  0, -5],
    [  0,  0,  5,  5,  5,  5,  0, -5],
    [-10,  5,  5,  5,  5,  5,  0,-10],
    [-10,  0,  5,  0,  0,  0,  0,-10],
    [-20,-10,-10, -5, -5,-10,-10,-20],
];

const KING_TABLE: Table = [
    [-30,-40,-40,-50,-50,-40,-40,-30],
    [-30,-40,-40,-50,-50,-40,-40,-30],
    [-30,-40,-40,-50,-50,-40,-40,-30],
    [-30,-40,-40,-50,-50,-40,-40,-30],
    [-20,-30,-30,-40,-40,-30,-30,-20],
    [-10,-20,-20,-20,-20,-20,-20,-10],
    [ 20, 20,  0,  0,  0,  0, 20, 20],
    [ 20, 30, 10,  0,  0, 10, 30, 20],
];

const VANGUARD_TABLE: Table = KNIGHT_TABLE;

const CAVALRY_TABLE: Table = [
    [-50,-40,-30,-30,-30,-30,-40,-50],
    [-40,-20,  0,  5,  5,  0,-20,-40],
    [-30,  0, 15, 20, 20, 15,  0,-30],
    [-30,  5, 20, 25, 25, 20,  5,-30],
    [-30,  5, 20, 25, 25, 20,  5,-30],
    [-30,  0, 15, 20, 20, 15,  0,-30],
    [-40,-20,  5, 10, 10,  5,-20,-40],
    [-50,-40,-30,-30,-30,-30,-40,-50],
];

/// Material value in centipawns.
pub fn material(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 100,
        PieceKind::Knight => 320,
        PieceKind::Bishop => 330,
        PieceKind::Rook => 500,
        PieceKind::Queen => 900,
        PieceKind::King => 20000,
        PieceKind::Vanguard => 350,
        PieceKind::Cavalry => 380,
    }
}

fn table(kind: PieceKind) -> &'static Table {
    match kind {
        PieceKind::Pawn => &PAWN_TABLE,
        PieceKind::Knight => &KNIGHT_TABLE,
        PieceKind::Bishop => &BISHOP_TABLE,
        PieceKind::Rook => &ROOK_TABLE,
        PieceKind::Queen => &QUEEN_TABLE,
        PieceKind::King => &KING_TABLE,
        PieceKind::Vanguard => &VANGUARD_TABLE,
        PieceKind::Cavalry => &CAVALRY_TABLE,
    }
}

/// Tables are written from White's side; Black reads them upside down.
pub fn positional(piece: &Piece) -> i32 {
    let pos = piece.position();
    let row = match piece.color {
        Color::White => pos.row(),
        Color::Black => 7 - pos.row(),
    };
    table(piece.kind)[row][pos.col()]
}

/// Static score of `board` from `ai_color`'s point of view.
pub fn evaluate(board: &Board, ai_color: Color) -> i32 {
    let opponent = ai_color.opposite();
    if board.is_checkmate(opponent) {
        return CHECKMATE_SCORE;
    }
    if board.is_checkmate(ai_color) {
        return -CHECKMATE_SCORE;
    }
    if board.is_stalemate(opponent) || board.is_stalemate(ai_color) {
        return 0;
    }

    board.pieces()
        .map(|piece| {
            let value = material(piece.kind) + positional(piece);
            if piece.color == ai_color { value } else { -value }
        })
        .sum()
}

#[cfg(test)]
mod test {
    use crate::board::Board;
    use crate::eval::{evaluate, material, positional, CHECKMATE_SCORE};
    use crate::piece::Color::{Black, White};
    use crate::piece::{Piece, PieceKind};
    use crate::position::Position;

    fn sq(row: usize, col: usize) -> Position {
        Position::new(row, col).unwrap()
    }

    #[test]
    fn test_opening_is_balanced() {
        assert_eq!(evaluate(&Board::standard(), White), 0);
        assert_eq!(evaluate(&Board::standard(), Black), 0);
        assert_eq!(evaluate(&Board::classic(), White), 0);
    }

    #[test]
    fn test_mirrored_tables() {
        let white = Piece::new(White, PieceKind::Pawn, sq(1, 0));
        let black = Piece::new(Black, PieceKind::Pawn, sq(6, 0));
        assert_eq!(positional(&white), 50);
        assert_eq!(positional(&black), 50);

        let white = Piece::new(White, PieceKind::King, sq(7, 6));
        let black = Piece::new(Black, PieceKind::King, sq(0, 6));
        assert_eq!(positional(&white), 30);
        assert_eq!(positional(&black), 30);
    }

    #[test]
    fn test_every_kind_mirrors_between_colors() {
        for kind in PieceKind::ALL {
            assert!(material(kind) > 0);
            for pos in Position::all() {
                let mirrored = sq(7 - pos.row(), pos.col());
                let white = Piece::new(White, kind, pos);
                let black = Piece::new(Black, kind, mirrored);
                assert_eq!(positional(&white), positional(&black), "{:?} on {}", kind, pos);
            }
        }
    }

    #[test]
    fn test_material_advantage() {
        let mut board = Board::standard();
        board.remove(sq(1, 0));
        let score = evaluate(&board, White);
        assert_eq!(score, material(PieceKind::Pawn) + 5);
        assert_eq!(evaluate(&board, Black), -score);
    }

    #[test]
    fn test_terminal_scores() {
        let mate = Board::from_pieces([
            Piece::new(White, PieceKind::King, sq(0, 0)),
            Piece::new(Black, PieceKind::King, sq(2, 1)),
            Piece::new(Black, PieceKind::Rook, sq(0, 7)),
        ]);
        assert_eq!(evaluate(&mate, Black), CHECKMATE_SCORE);
        assert_eq!(evaluate(&mate, White), -CHECKMATE_SCORE);

        let stalemate = Board::from_pieces([
            Piece::new(White, PieceKind::King, sq(0, 0)),
            Piece::new(Black, PieceKind::Queen, sq(1, 2)),
            Piece::new(Black, PieceKind::King, sq(7, 7)),
        ]);
        assert_eq!(evaluate(&stalemate, Black), 0);
        assert_eq!(evaluate(&stalemate, White), 0);
    }
}
