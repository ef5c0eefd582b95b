use std::fmt;
use std::str::FromStr;

use crate::{Cell, Error, Player, Position, Result};

pub const BOARD_SIZE: usize = 9;

/// A 3x3 board snapshot. Cheap to copy, so the search works on copies and
/// never touches the caller's board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; BOARD_SIZE],
        }
    }

    pub fn from_cells(cells: &[Cell]) -> Result<Self> {
        let cells: [Cell; BOARD_SIZE] = cells.try_into().map_err(|_| {
            Error::invalid_argument(format!(
                "a board needs exactly {} cells, got {}",
                BOARD_SIZE,
                cells.len()
            ))
        })?;
        Ok(Self { cells })
    }

    pub fn cells(&self) -> &[Cell; BOARD_SIZE] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Result<Cell> {
        self.cells.get(index).copied().ok_or_else(|| {
            Error::invalid_argument(format!("index {} is out of bounds (must be 0-8)", index))
        })
    }

    pub fn cell(&self, pos: Position) -> Cell {
        self.cells[pos.index()]
    }

    pub fn is_empty_at(&self, index: usize) -> bool {
        matches!(self.cells.get(index), Some(Cell::Empty))
    }

    pub fn place(&mut self, index: usize, player: Player) -> Result<()> {
        match self.get(index)? {
            Cell::Empty => {
                self.cells[index] = player.to_cell();
                Ok(())
            }
            _ => Err(Error::OccupiedCell { index }),
        }
    }

    // Copy-on-write variant of `place`
    pub fn with_move(&self, index: usize, player: Player) -> Result<Board> {
        let mut next = *self;
        next.place(index, player)?;
        Ok(next)
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    pub fn move_count(&self) -> usize {
        BOARD_SIZE - self.count(Cell::Empty)
    }

    // X moves first, so X is level with O or one ahead
    pub fn is_well_formed(&self) -> bool {
        let x = self.count(Cell::X);
        let o = self.count(Cell::O);
        x == o || x == o + 1
    }

    pub fn next_player(&self) -> Player {
        if self.count(Cell::X) > self.count(Cell::O) {
            Player::O
        } else {
            Player::X
        }
    }
}

impl FromStr for Board {
    type Err = Error;

    /// Parses nine cell characters, e.g. `"XX./OO./..."`. Row separators
    /// (`/`, `|`, newlines) are ignored.
    fn from_str(s: &str) -> Result<Self> {
        let mut cells = Vec::with_capacity(BOARD_SIZE);
        for (i, c) in s.chars().filter(|c| !matches!(*c, '/' | '|' | '\n' | '\r')).enumerate() {
            let cell = Cell::from_char(c).ok_or_else(|| {
                Error::invalid_argument(format!("invalid character '{}' at position {} in '{}'", c, i, s))
            })?;
            cells.push(cell);
        }
        Self::from_cells(&cells)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, chunk) in self.cells.chunks(3).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for cell in chunk {
                write!(f, "{}", cell.to_char())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_display() {
        let board: Board = "XX./OO./...".parse().unwrap();
        assert_eq!(board.get(0).unwrap(), Cell::X);
        assert_eq!(board.get(4).unwrap(), Cell::O);
        assert_eq!(board.get(8).unwrap(), Cell::Empty);
        assert_eq!(board.to_string(), "XX.\nOO.\n...");
        assert_eq!(board.to_string().parse::<Board>().unwrap(), board);
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert!(matches!("XX.".parse::<Board>(), Err(Error::InvalidArgument { .. })));
        assert!(matches!("XX.OO....X".parse::<Board>(), Err(Error::InvalidArgument { .. })));
        assert!(matches!("XX.OO..Z.".parse::<Board>(), Err(Error::InvalidArgument { .. })));
    }

    #[test]
    fn from_cells_requires_nine() {
        assert!(Board::from_cells(&[Cell::Empty; 9]).is_ok());
        assert!(matches!(
            Board::from_cells(&[Cell::Empty; 8]),
            Err(Error::InvalidArgument { .. })
        ));
        assert!(matches!(
            Board::from_cells(&[Cell::X; 10]),
            Err(Error::InvalidArgument { .. })
        ));
    }

    #[test]
    fn place_rejects_occupied_and_out_of_range() {
        let mut board = Board::new();
        board.place(4, Player::X).unwrap();
        assert_eq!(board.place(4, Player::O), Err(Error::OccupiedCell { index: 4 }));
        assert!(matches!(board.place(9, Player::O), Err(Error::InvalidArgument { .. })));
        assert_eq!(board.move_count(), 1);
    }

    #[test]
    fn with_move_leaves_original_untouched() {
        let board = Board::new();
        let next = board.with_move(0, Player::X).unwrap();
        assert_eq!(board, Board::new());
        assert_eq!(next.get(0).unwrap(), Cell::X);
    }

    #[test]
    fn turn_and_well_formedness() {
        let mut board = Board::new();
        assert_eq!(board.next_player(), Player::X);
        board.place(0, Player::X).unwrap();
        assert_eq!(board.next_player(), Player::O);
        assert!(board.is_well_formed());
        board.place(1, Player::X).unwrap();
        assert!(!board.is_well_formed());

        let o_ahead: Board = "O........".parse().unwrap();
        assert!(!o_ahead.is_well_formed());
    }
}
