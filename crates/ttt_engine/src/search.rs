// Exhaustive minimax with alpha-beta pruning for the hard difficulty
use log::{debug, trace};
use ttt_core::{available_moves, is_terminal, Board, Error, Player, Result};

use crate::evaluation::terminal_score;
use crate::opening_book::OPENING_BOOK;

// Search window bounds, standing in for -inf / +inf
const ALPHA_INIT: i32 = i32::MIN;
const BETA_INIT: i32 = i32::MAX;

/// Whether the scorer may skip siblings once the window closes. Both modes
/// return the same move and score; `None` exists as a brute-force reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pruning {
    #[default]
    AlphaBeta,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub position: usize,
    pub score: i32,
    // Positions visited, root children included
    pub nodes: u64,
}

pub(crate) fn check_preconditions(board: &Board, ai: Player, human: Player) -> Result<()> {
    if ai == human {
        return Err(Error::invalid_argument(format!(
            "AI and human cannot both play {}",
            ai
        )));
    }
    if is_terminal(board) {
        return Err(Error::invalid_state(format!(
            "no move to compute on a finished board:\n{}",
            board
        )));
    }
    Ok(())
}

struct Searcher {
    ai: Player,
    human: Player,
    pruning: Pruning,
    nodes: u64,
}

impl Searcher {
    fn new(ai: Player, human: Player, pruning: Pruning) -> Self {
        Self {
            ai,
            human,
            pruning,
            nodes: 0,
        }
    }

    // Scores every root candidate in ascending index order, each with a full window
    fn score_root(&mut self, board: &Board) -> Result<Vec<(usize, i32)>> {
        let mut scored = Vec::with_capacity(9);
        for mv in available_moves(board) {
            let child = board.with_move(mv, self.ai)?;
            let score = self.minimax(&child, 1, false, ALPHA_INIT, BETA_INIT)?;
            trace!("candidate {} scored {}", mv, score);
            scored.push((mv, score));
        }
        Ok(scored)
    }

    fn minimax(
        &mut self,
        board: &Board,
        depth: i32,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
    ) -> Result<i32> {
        self.nodes += 1;

        if let Some(score) = terminal_score(board, self.ai, self.human, depth) {
            return Ok(score);
        }

        let moves = available_moves(board);
        if moves.is_empty() {
            return Err(Error::invalid_state(format!(
                "non-terminal board has no moves:\n{}",
                board
            )));
        }

        let mover = if maximizing { self.ai } else { self.human };
        let mut best = if maximizing { ALPHA_INIT } else { BETA_INIT };

        for mv in moves {
            let child = board.with_move(mv, mover)?;
            let score = self.minimax(&child, depth + 1, !maximizing, alpha, beta)?;

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }

            // Cutoff - the opponent already has a better option elsewhere
            if self.pruning == Pruning::AlphaBeta && beta <= alpha {
                break;
            }
        }

        Ok(best)
    }
}

/// Runs the full search and returns the highest scoring move. Ties go to the
/// lowest index.
pub fn search(board: &Board, ai: Player, human: Player) -> Result<SearchResult> {
    search_with(board, ai, human, Pruning::AlphaBeta)
}

pub fn search_with(board: &Board, ai: Player, human: Player, pruning: Pruning) -> Result<SearchResult> {
    check_preconditions(board, ai, human)?;
    search_unchecked(board, ai, human, pruning)
}

// Callers have already run `check_preconditions`
fn search_unchecked(board: &Board, ai: Player, human: Player, pruning: Pruning) -> Result<SearchResult> {
    let mut searcher = Searcher::new(ai, human, pruning);
    let scored = searcher.score_root(board)?;

    let mut best: Option<(usize, i32)> = None;
    for (mv, score) in scored {
        // Strict comparison keeps the earliest move on ties
        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((mv, score));
        }
    }

    let (position, score) =
        best.ok_or_else(|| Error::invalid_state("no available moves to search"))?;
    debug!(
        "{} to move: best {} score {} ({} nodes, {:?})",
        ai, position, score, searcher.nodes, pruning
    );

    Ok(SearchResult {
        position,
        score,
        nodes: searcher.nodes,
    })
}

/// Score of every legal move, in ascending index order.
pub fn score_moves(board: &Board, ai: Player, human: Player) -> Result<Vec<(usize, i32)>> {
    check_preconditions(board, ai, human)?;
    Searcher::new(ai, human, Pruning::AlphaBeta).score_root(board)
}

/// Hard-difficulty move choice: opening book first, then the full search.
pub fn best_move(board: &Board, ai: Player, human: Player) -> Result<usize> {
    check_preconditions(board, ai, human)?;
    best_move_unchecked(board, ai, human)
}

pub(crate) fn best_move_unchecked(board: &Board, ai: Player, human: Player) -> Result<usize> {
    if let Some(mv) = OPENING_BOOK.lookup(board, ai) {
        debug!("{} to move: book move {}", ai, mv);
        return Ok(mv);
    }

    search_unchecked(board, ai, human, Pruning::AlphaBeta).map(|result| result.position)
}
