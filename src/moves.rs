use crate::board::Board;
use crate::piece::{Piece, PieceKind};
use crate::position::{Position, WIDTH};

const ORTHOGONAL: [[i8; 2]; 4] = [[-1, 0], [0, 1], [1, 0], [0, -1]];
const DIAGONAL: [[i8; 2]; 4] = [[-1, -1], [-1, 1], [1, 1], [1, -1]];
const ALL_DIRECTIONS: [[i8; 2]; 8] = [
    [-1, -1], [-1, 0], [-1, 1],
    [0, -1], [0, 1],
    [1, -1], [1, 0], [1, 1],
];
const KNIGHT_JUMPS: [[i8; 2]; 8] = [
    [-2, -1], [-2, 1], [-1, -2], [-1, 2],
    [1, -2], [1, 2], [2, -1], [2, 1],
];
const VANGUARD_DIAGONALS: [[i8; 2]; 4] = [[-1, -1], [-1, 1], [1, -1], [1, 1]];
const VANGUARD_LINES: [[i8; 2]; 4] = [[0, -1], [0, 1], [-1, 0], [1, 0]];
const CAVALRY_LINES: [[i8; 2]; 4] = [[-1, 0], [1, 0], [0, -1], [0, 1]];

/// How far the variant pieces slide orthogonally.
const SHORT_RANGE: usize = 2;

fn move_by_vector(board: &Board, piece: &Piece, vec: &[i8; 2], limit: usize) -> Vec<Position> {
    let mut result: Vec<Position> = Vec::new();
    let mut current = piece.position();
    for _ in 0..limit {
        current = match current.offset(vec[0], vec[1]) {
            None => break,
            Some(next) => next,
        };
        match board.piece_at(current) {
            None => result.push(current),
            Some(other) => {
                if other.color != piece.color {
                    result.push(current);
                }
                break
            }
        }
    }
    result
}

fn move_by_vectors(board: &Board, piece: &Piece, vecs: &[[i8; 2]], limit: usize) -> Vec<Position> {
    vecs.iter()
        .flat_map(|vec| move_by_vector(board, piece, vec, limit))
        .collect()
}

fn pawn_moves(board: &Board, pawn: &Piece) -> Vec<Position> {
    let forward = pawn.color.forward();
    let mut result: Vec<Position> = Vec::new();
    if let Some(one) = pawn.position().offset(forward, 0).filter(|&p| board.piece_at(p).is_none()) {
        result.push(one);
        if !pawn.has_moved() {
            if let Some(two) = one.offset(forward, 0).filter(|&p| board.piece_at(p).is_none()) {
                result.push(two);
            }
        }
    }
    for d_col in [-1, 1] {
        if let Some(target) = pawn.position().offset(forward, d_col) {
            if board.piece_at(target).is_some_and(|other| other.color != pawn.color) {
                result.push(target);
            }
        }
    }
    result
}

fn king_moves(board: &Board, king: &Piece) -> Vec<Position> {
    let mut result = move_by_vectors(board, king, &ALL_DIRECTIONS, 1);
    if !king.has_moved() && !board.is_square_attacked(king.position(), king.color.opposite()) {
        for kingside in [true, false] {
            if let Some(target) = castle_target(board, king, kingside) {
                result.push(target);
            }
        }
    }
    result
}

/// Destination of the king when castling towards one corner, if every castling condition
/// except "king unmoved and not in check" holds.
fn castle_target(board: &Board, king: &Piece, kingside: bool) -> Option<Position> {
    let (direction, rook_col): (i8, usize) = if kingside { (1, WIDTH - 1) } else { (-1, 0) };
    let row = king.position().row();
    let col = king.position().col();

    let rook_ready = board.piece_at_coords(row as i8, rook_col as i8)
        .is_some_and(|rook| rook.kind == PieceKind::Rook && rook.color == king.color && !rook.has_moved());
    if !rook_ready {
        return None;
    }

    let (low, high) = if kingside { (col + 1, rook_col) } else { (rook_col + 1, col) };
    if (low..high).any(|c| board.piece_at_coords(row as i8, c as i8).is_some()) {
        return None;
    }

    let opponent = king.color.opposite();
    let mut target = None;
    for step in 0..=2 {
        let square = king.position().offset(0, step * direction)?;
        if board.is_square_attacked(square, opponent) {
            return None;
        }
        target = Some(square);
    }
    target
}

/// Squares `piece` could move to, ignoring whether its own king would be left in check.
pub fn pseudo_legal_moves(board: &Board, piece: &Piece) -> Vec<Position> {
    match piece.kind {
        PieceKind::King => king_moves(board, piece),
        PieceKind::Queen => move_by_vectors(board, piece, &ALL_DIRECTIONS, WIDTH),
        PieceKind::Rook => move_by_vectors(board, piece, &ORTHOGONAL, WIDTH),
        PieceKind::Bishop => move_by_vectors(board, piece, &DIAGONAL, WIDTH),
        PieceKind::Knight => move_by_vectors(board, piece, &KNIGHT_JUMPS, 1),
        PieceKind::Pawn => pawn_moves(board, piece),
        PieceKind::Vanguard => [
            move_by_vectors(board, piece, &VANGUARD_DIAGONALS, 1),
            move_by_vectors(board, piece, &VANGUARD_LINES, SHORT_RANGE),
        ].concat(),
        PieceKind::Cavalry => [
            move_by_vectors(board, piece, &KNIGHT_JUMPS, 1),
            move_by_vectors(board, piece, &CAVALRY_LINES, SHORT_RANGE),
        ].concat(),
    }
}

/// Whether `attacker` threatens `target`. Kings and pawns are answered geometrically so
/// that check detection never has to generate king moves (which ask about check again).
pub fn attacks(board: &Board, attacker: &Piece, target: Position) -> bool {
    let from = attacker.position();
    match attacker.kind {
        PieceKind::King => {
            from != target
                && from.row().abs_diff(target.row()) <= 1
                && from.col().abs_diff(target.col()) <= 1
        }
        PieceKind::Pawn => [-1, 1].iter()
            .any(|&d_col| from.offset(attacker.color.forward(), d_col) == Some(target)),
        _ => pseudo_legal_moves(board, attacker).contains(&target),
    }
}
