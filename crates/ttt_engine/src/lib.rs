pub mod ai;
pub mod evaluation;
pub mod heuristic;
pub mod opening_book;
pub mod search;

pub use ai::{choose_move, Difficulty, TicTacToeAI};
pub use evaluation::terminal_score;
pub use opening_book::OpeningBook;
pub use search::{best_move, score_moves, search, search_with, Pruning, SearchResult};
