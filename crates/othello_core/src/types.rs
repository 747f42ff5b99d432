use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BoardError;

/// Board edge length.
pub const SIZE: usize = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Black,
    White,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::Black, Side::White];

    pub fn opponent(self) -> Side {
        match self {
            Side::Black => Side::White,
            Side::White => Side::Black,
        }
    }

    /// Numeric cell value: Black is `+1`, White is `-1`.
    pub fn value(self) -> i8 {
        match self {
            Side::Black => 1,
            Side::White => -1,
        }
    }

    pub fn from_value(v: i8) -> Option<Side> {
        match v {
            1 => Some(Side::Black),
            -1 => Some(Side::White),
            _ => None,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Black => f.write_str("black"),
            Side::White => f.write_str("white"),
        }
    }
}

impl FromStr for Side {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "black" | "b" | "x" | "1" | "+1" => Ok(Side::Black),
            "white" | "w" | "o" | "-1" => Ok(Side::White),
            _ => Err(BoardError::Side(s.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    Black,
    White,
}

impl Cell {
    pub fn side(self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::Black => Some(Side::Black),
            Cell::White => Some(Side::White),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    pub fn is(self, side: Side) -> bool {
        self == Cell::from(side)
    }

    pub fn value(self) -> i8 {
        self.side().map_or(0, Side::value)
    }

    pub fn from_value(v: i8) -> Option<Cell> {
        match v {
            0 => Some(Cell::Empty),
            _ => Side::from_value(v).map(Cell::from),
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Black => 'X',
            Cell::White => 'O',
        }
    }

    pub fn from_char(ch: char) -> Option<Cell> {
        match ch {
            '.' | '-' | '_' => Some(Cell::Empty),
            'X' | 'x' | 'B' | 'b' => Some(Cell::Black),
            'O' | 'o' | 'W' | 'w' => Some(Cell::White),
            _ => None,
        }
    }
}

impl From<Side> for Cell {
    fn from(side: Side) -> Cell {
        match side {
            Side::Black => Cell::Black,
            Side::White => Cell::White,
        }
    }
}

/// A disc placement at `(row, col)`, both in `0..8`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    pub row: u8,
    pub col: u8,
}

impl Move {
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!((row as usize) < SIZE && (col as usize) < SIZE);
        Self { row, col }
    }

    /// Row-major index in `0..64`.
    /// Both coordinates lie on the 8x8 board.
    pub fn is_on_board(self) -> bool {
        (self.row as usize) < SIZE && (self.col as usize) < SIZE
    }

    pub fn index(self) -> usize {
        self.row as usize * SIZE + self.col as usize
    }

    pub fn from_index(idx: usize) -> Option<Move> {
        if idx < SIZE * SIZE {
            Some(Move::new((idx / SIZE) as u8, (idx % SIZE) as u8))
        } else {
            None
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_on_board() {
            return write!(f, "({}, {})", self.row, self.col);
        }
        let file = (b'a' + self.col) as char;
        let rank = (b'1' + self.row) as char;
        write!(f, "{file}{rank}")
    }
}

impl FromStr for Move {
    type Err = BoardError;

    /// Parses `d3`-style notation: file letter is the column, rank digit is `row + 1`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let b = s.trim().as_bytes();
        if b.len() != 2 {
            return Err(BoardError::Coordinate(s.to_string()));
        }
        let file = b[0].to_ascii_lowercase();
        let rank = b[1];
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(BoardError::Coordinate(s.to_string()));
        }
        Ok(Move::new(rank - b'1', file - b'a'))
    }
}

// Helpers
pub fn in_bounds(row: i8, col: i8) -> bool {
    (0..SIZE as i8).contains(&row) && (0..SIZE as i8).contains(&col)
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
