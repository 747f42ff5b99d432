use std::fmt;
use std::str::FromStr;

use crate::error::BoardError;
use crate::types::*;

/// An 8x8 grid of cells.
///
/// `Board` is `Copy`: rule functions take a board by reference and hand back a
/// fresh one, so search branches never share state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub fn empty() -> Self {
        Board {
            cells: [[Cell::Empty; SIZE]; SIZE],
        }
    }

    /// Standard opening layout: White on d4/e5, Black on e4/d5.
    pub fn startpos() -> Self {
        let mut b = Board::empty();
        b.cells[3][3] = Cell::White;
        b.cells[3][4] = Cell::Black;
        b.cells[4][3] = Cell::Black;
        b.cells[4][4] = Cell::White;
        b
    }

    /// Builds a board from numeric cells (`0`, `1` Black, `-1` White).
    pub fn from_values(values: &[[i8; SIZE]; SIZE]) -> Result<Self, BoardError> {
        let mut b = Board::empty();
        for (row, line) in values.iter().enumerate() {
            for (col, &value) in line.iter().enumerate() {
                b.cells[row][col] =
                    Cell::from_value(value).ok_or(BoardError::CellValue { row, col, value })?;
            }
        }
        Ok(b)
    }

    /// Like [`Board::from_values`] but also checks the dimensions.
    pub fn from_rows<R: AsRef<[i8]>>(rows: &[R]) -> Result<Self, BoardError> {
        if rows.len() != SIZE {
            return Err(BoardError::Rows(rows.len()));
        }
        let mut values = [[0i8; SIZE]; SIZE];
        for (row, line) in rows.iter().enumerate() {
            let line = line.as_ref();
            if line.len() != SIZE {
                return Err(BoardError::Columns {
                    row,
                    len: line.len(),
                });
            }
            values[row].copy_from_slice(line);
        }
        Board::from_values(&values)
    }

    pub fn to_values(&self) -> [[i8; SIZE]; SIZE] {
        let mut out = [[0i8; SIZE]; SIZE];
        for (row, line) in self.cells.iter().enumerate() {
            for (col, cell) in line.iter().enumerate() {
                out[row][col] = cell.value();
            }
        }
        out
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row][col] = cell;
    }

    #[inline]
    pub fn at(&self, mv: Move) -> Cell {
        self.cells[mv.row as usize][mv.col as usize]
    }

    /// Copy of this board with one cell replaced.
    pub fn with(mut self, row: usize, col: usize, cell: Cell) -> Board {
        self.set(row, col, cell);
        self
    }

    pub fn count(&self, side: Side) -> u32 {
        let target = Cell::from(side);
        self.cells
            .iter()
            .flatten()
            .filter(|&&c| c == target)
            .count() as u32
    }

    pub fn empty_count(&self) -> u32 {
        self.cells.iter().flatten().filter(|c| c.is_empty()).count() as u32
    }

    pub fn occupied(&self) -> u32 {
        (SIZE * SIZE) as u32 - self.empty_count()
    }

    pub fn is_full(&self) -> bool {
        self.empty_count() == 0
    }

    /// Iterates `(row, col, cell)` in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .flat_map(|(r, line)| line.iter().enumerate().map(move |(c, &cell)| (r, c, cell)))
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parses eight rows of eight cell characters. Whitespace inside a row and
    /// blank lines are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<Vec<char>> = s
            .lines()
            .map(|l| l.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
            .filter(|l| !l.is_empty())
            .collect();
        if rows.len() != SIZE {
            return Err(BoardError::Rows(rows.len()));
        }

        let mut b = Board::empty();
        for (row, line) in rows.iter().enumerate() {
            if line.len() != SIZE {
                return Err(BoardError::Columns {
                    row,
                    len: line.len(),
                });
            }
            for (col, &ch) in line.iter().enumerate() {
                b.cells[row][col] = Cell::from_char(ch).ok_or(BoardError::CellChar { row, col, ch })?;
            }
        }
        Ok(b)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.cells {
            let s: String = line.iter().map(|c| c.to_char()).collect();
            writeln!(f, "{s}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
