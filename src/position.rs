use std::fmt;
use std::str::FromStr;

use crate::error::NotationError;

pub const WIDTH: usize = 8;
pub const HEIGHT: usize = 8;

/// A square on the board. Row 0 is rank 8, column 0 is file a. Serialized as its
/// algebraic name, so deserializing can never produce an off-board square.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Option<Position> {
        (row < HEIGHT && col < WIDTH).then_some(Position { row, col })
    }

    pub fn from_coords(row: i8, col: i8) -> Option<Position> {
        if row < 0 || col < 0 {
            return None;
        }
        Position::new(row as usize, col as usize)
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    /// Square reached by stepping `d_row` rows and `d_col` columns, if still on the board.
    pub fn offset(&self, d_row: i8, d_col: i8) -> Option<Position> {
        Position::from_coords(self.row as i8 + d_row, self.col as i8 + d_col)
    }

    pub fn all() -> impl Iterator<Item = Position> {
        (0..HEIGHT).flat_map(|row| (0..WIDTH).map(move |col| Position { row, col }))
    }

    pub fn from_algebraic(notation: &str) -> Result<Position, NotationError> {
        let mut chars = notation.chars();
        let (file, rank) = match (chars.next(), chars.next(), chars.next()) {
            (Some(file), Some(rank), None) => (file, rank),
            _ => return Err(NotationError::Length(notation.to_string())),
        };
        if !('a'..='h').contains(&file) {
            return Err(NotationError::File(file));
        }
        if !('1'..='8').contains(&rank) {
            return Err(NotationError::Rank(rank));
        }
        let col = file as usize - 'a' as usize;
        let row = HEIGHT - 1 - (rank as usize - '1' as usize);
        Ok(Position { row, col })
    }

    pub fn to_algebraic(&self) -> String {
        let file = (b'a' + self.col as u8) as char;
        let rank = (b'8' - self.row as u8) as char;
        format!("{}{}", file, rank)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_algebraic())
    }
}

impl FromStr for Position {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::from_algebraic(s)
    }
}

impl TryFrom<String> for Position {
    type Error = NotationError;

    fn try_from(notation: String) -> Result<Self, Self::Error> {
        Position::from_algebraic(&notation)
    }
}

impl From<Position> for String {
    fn from(pos: Position) -> String {
        pos.to_algebraic()
    }
}

/// Parses the four character `<file><rank><file><rank>` move form, e.g. `e2e4`.
pub fn parse_move(notation: &str) -> Result<(Position, Position), NotationError> {
    if notation.chars().count() != 4 || !notation.is_ascii() {
        return Err(NotationError::Length(notation.to_string()));
    }
    let from = notation[0..2].parse()?;
    let to = notation[2..4].parse()?;
    Ok((from, to))
}
