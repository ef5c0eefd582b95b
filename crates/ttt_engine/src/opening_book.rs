use std::collections::HashMap;

use once_cell::sync::Lazy;
use ttt_core::{is_terminal, Board, Player};

// Shared read-only book used by the hard difficulty
pub static OPENING_BOOK: Lazy<OpeningBook> = Lazy::new(OpeningBook::new);

const CENTER: usize = 4;
const CORNERS: [usize; 4] = [0, 2, 6, 8];

/// Fixed replies for early positions, keyed by board and the side the AI
/// plays. Every entry is a move the full search also rates optimal; past the
/// empty board an entry only exists for the side whose turn it is.
#[derive(Debug, Clone)]
pub struct OpeningBook {
    positions: HashMap<(Board, Player), usize>,
}

impl OpeningBook {
    pub fn new() -> Self {
        let mut book = Self {
            positions: HashMap::new(),
        };
        book.initialize_openings();
        book
    }

    fn initialize_openings(&mut self) {
        let board = Board::new();

        // Every opening draws under perfect play; the center leaves the
        // opponent the fewest safe replies
        for player in Player::ALL {
            self.add_line(&board, player, CENTER);
        }

        // Against a corner opening the center is the only drawing reply
        for corner in CORNERS {
            if let Ok(after_corner) = board.with_move(corner, Player::X) {
                self.add_line(&after_corner, Player::O, CENTER);
            }
        }
    }

    pub fn add_line(&mut self, board: &Board, player: Player, mv: usize) {
        self.positions.insert((*board, player), mv);
    }

    pub fn lookup(&self, board: &Board, player: Player) -> Option<usize> {
        if is_terminal(board) {
            return None;
        }
        self.positions
            .get(&(*board, player))
            .copied()
            .filter(|&mv| board.is_empty_at(mv))
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

impl Default for OpeningBook {
    fn default() -> Self {
        Self::new()
    }
}
