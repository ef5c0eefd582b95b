use log::trace;
use rand::seq::SliceRandom;
use rand::Rng;
use ttt_core::{available_moves, completing_cell, Board, Error, Player, Result};

const CENTER: usize = 4;
const CORNERS: [usize; 4] = [0, 2, 6, 8];

fn pick<R: Rng + ?Sized>(moves: &[usize], rng: &mut R) -> Result<usize> {
    moves
        .choose(rng)
        .copied()
        .ok_or_else(|| Error::invalid_state("no available moves"))
}

/// Easy difficulty: any empty cell, uniformly.
pub fn random_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Result<usize> {
    pick(&available_moves(board), rng)
}

/// Medium difficulty rule cascade: win, block, center, a random corner, then
/// a random remaining cell. Win and block take the first line in fixed line
/// order.
pub fn rule_based_move<R: Rng + ?Sized>(
    board: &Board,
    ai: Player,
    human: Player,
    rng: &mut R,
) -> Result<usize> {
    if let Some(mv) = completing_cell(board, ai) {
        trace!("{} wins at {}", ai, mv);
        return Ok(mv);
    }

    if let Some(mv) = completing_cell(board, human) {
        trace!("{} blocks {} at {}", ai, human, mv);
        return Ok(mv);
    }

    if board.is_empty_at(CENTER) {
        return Ok(CENTER);
    }

    let corners: Vec<usize> = CORNERS
        .iter()
        .copied()
        .filter(|&idx| board.is_empty_at(idx))
        .collect();
    if !corners.is_empty() {
        return pick(&corners, rng);
    }

    random_move(board, rng)
}
