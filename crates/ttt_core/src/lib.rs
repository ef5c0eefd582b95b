// Core tic-tac-toe game logic modules
pub mod board;
pub mod error;
pub mod game;
pub mod moves;
pub mod outcome;
pub mod player;
pub mod position;

// Re-export main types for convenience
pub use board::{Board, BOARD_SIZE};
pub use error::{Error, Result};
pub use game::{Game, GameMode, Move, Scoreboard};
pub use moves::{available_moves, is_full};
pub use outcome::{
    completing_cell, has_won, is_draw, is_terminal, outcome, winner, winning_line, Outcome,
    WINNING_LINES,
};
pub use player::{Cell, Player};
pub use position::Position;
