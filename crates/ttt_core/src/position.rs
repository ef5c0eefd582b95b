use crate::{Error, Result, BOARD_SIZE};

pub const SIDE: usize = 3;

// Fields stay private so every Position is on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    row: usize, // 0-2
    col: usize, // 0-2
}

impl Position {
    pub fn new(row: usize, col: usize) -> Result<Self> {
        if row < SIDE && col < SIDE {
            Ok(Self { row, col })
        } else {
            Err(Error::invalid_argument(format!(
                "row {} / column {} is outside the 3x3 board",
                row, col
            )))
        }
    }

    pub fn from_index(index: usize) -> Result<Self> {
        if index >= BOARD_SIZE {
            return Err(Error::invalid_argument(format!(
                "index {} is out of bounds (must be 0-8)",
                index
            )));
        }

        Ok(Self {
            row: index / SIDE,
            col: index % SIDE,
        })
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn index(&self) -> usize {
        self.row * SIDE + self.col
    }

    // Accepts "row col" (1-based) or a single cell number 1-9
    pub fn from_human(input: &str) -> Result<Self> {
        let parts: Vec<&str> = input.split_whitespace().collect();
        let parse = |s: &str| {
            s.parse::<usize>()
                .map_err(|_| Error::invalid_argument(format!("'{}' is not a number", s)))
        };

        match parts.as_slice() {
            &[cell] => {
                let n = parse(cell)?;
                if n == 0 {
                    return Err(Error::invalid_argument("cell numbers start at 1"));
                }
                Self::from_index(n - 1)
            }
            &[row, col] => {
                let (row, col) = (parse(row)?, parse(col)?);
                if row == 0 || col == 0 {
                    return Err(Error::invalid_argument("rows and columns start at 1"));
                }
                Self::new(row - 1, col - 1)
            }
            _ => Err(Error::invalid_argument(format!(
                "expected 'row col' or a cell number, got '{}'",
                input.trim()
            ))),
        }
    }
}
