use ttt_core::{has_won, is_full, Board, Player};

// A win found at search depth d scores WIN_SCORE - d, a loss d - WIN_SCORE,
// so faster wins and slower losses rank higher
pub const WIN_SCORE: i32 = 10;
pub const DRAW_SCORE: i32 = 0;

/// Score of a finished position from `ai`'s point of view, `None` while the
/// game is still going. The AI win check runs before the human one.
pub fn terminal_score(board: &Board, ai: Player, human: Player, depth: i32) -> Option<i32> {
    if has_won(board, ai) {
        Some(WIN_SCORE - depth)
    } else if has_won(board, human) {
        Some(depth - WIN_SCORE)
    } else if is_full(board) {
        Some(DRAW_SCORE)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scores_depend_on_depth() {
        let x_wins: Board = "XXX/OO./...".parse().unwrap();
        assert_eq!(terminal_score(&x_wins, Player::X, Player::O, 1), Some(9));
        assert_eq!(terminal_score(&x_wins, Player::X, Player::O, 3), Some(7));
        assert_eq!(terminal_score(&x_wins, Player::O, Player::X, 2), Some(-8));
    }

    #[test]
    fn draw_and_ongoing() {
        let draw: Board = "XOX/XOO/OXX".parse().unwrap();
        assert_eq!(terminal_score(&draw, Player::X, Player::O, 9), Some(DRAW_SCORE));
        assert_eq!(terminal_score(&Board::new(), Player::X, Player::O, 0), None);
    }
}
