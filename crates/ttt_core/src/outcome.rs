//! Win/draw detection over the eight fixed lines.

use crate::{is_full, Board, Cell, Player};

/// Rows, then columns, then diagonals. The order is also the tie-break order
/// for [`completing_cell`] and [`winning_line`].
pub const WINNING_LINES: [[usize; 3]; 8] = [
    // rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // diagonals
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Ongoing,
    Win(Player),
    Draw,
}

impl Outcome {
    pub fn is_over(self) -> bool {
        self != Outcome::Ongoing
    }
}

pub fn has_won(board: &Board, player: Player) -> bool {
    let target = player.to_cell();
    let cells = board.cells();
    WINNING_LINES
        .iter()
        .any(|line| line.iter().all(|&idx| cells[idx] == target))
}

pub fn winner(board: &Board) -> Option<Player> {
    Player::ALL.into_iter().find(|&player| has_won(board, player))
}

pub fn is_draw(board: &Board) -> bool {
    is_full(board) && winner(board).is_none()
}

pub fn is_terminal(board: &Board) -> bool {
    winner(board).is_some() || is_full(board)
}

pub fn outcome(board: &Board) -> Outcome {
    match winner(board) {
        Some(player) => Outcome::Win(player),
        None if is_full(board) => Outcome::Draw,
        None => Outcome::Ongoing,
    }
}

/// First completed line, if any.
pub fn winning_line(board: &Board) -> Option<[usize; 3]> {
    let cells = board.cells();
    WINNING_LINES.iter().copied().find(|&[a, b, c]| {
        cells[a] != Cell::Empty && cells[a] == cells[b] && cells[a] == cells[c]
    })
}

/// The empty cell of the first line holding two of `player`'s marks and
/// nothing else, i.e. where `player` completes a line next move.
pub fn completing_cell(board: &Board, player: Player) -> Option<usize> {
    let target = player.to_cell();
    let cells = board.cells();

    WINNING_LINES.iter().find_map(|line| {
        let mut empty = None;
        let mut own = 0;
        for &idx in line {
            match cells[idx] {
                Cell::Empty => empty = Some(idx),
                c if c == target => own += 1,
                _ => return None,
            }
        }
        if own == 2 {
            empty
        } else {
            None
        }
    })
}
