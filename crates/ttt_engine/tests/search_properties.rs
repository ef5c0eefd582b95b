// Exhaustive checks of the hard difficulty over the whole game tree
use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use ttt_core::{available_moves, has_won, is_full, is_terminal, winner, Board, Player};
use ttt_engine::{best_move, choose_move, search, search_with, Difficulty, Pruning};

// Every non-terminal position reachable from the empty board with X first
fn reachable_positions() -> Vec<Board> {
    fn walk(board: Board, seen: &mut HashSet<Board>, out: &mut Vec<Board>) {
        if !seen.insert(board) || is_terminal(&board) {
            return;
        }
        out.push(board);
        let player = board.next_player();
        for mv in available_moves(&board) {
            walk(board.with_move(mv, player).unwrap(), seen, out);
        }
    }

    let mut seen = HashSet::new();
    let mut out = Vec::new();
    walk(Board::new(), &mut seen, &mut out);
    out
}

// Plain minimax without any pruning, written independently of the engine
fn reference_score(board: &Board, ai: Player, human: Player, depth: i32, maximizing: bool) -> i32 {
    if has_won(board, ai) {
        return 10 - depth;
    }
    if has_won(board, human) {
        return depth - 10;
    }
    if is_full(board) {
        return 0;
    }

    let mover = if maximizing { ai } else { human };
    let scores = available_moves(board).into_iter().map(|mv| {
        let child = board.with_move(mv, mover).unwrap();
        reference_score(&child, ai, human, depth + 1, !maximizing)
    });
    if maximizing {
        scores.max().unwrap()
    } else {
        scores.min().unwrap()
    }
}

fn reference_root(board: &Board, ai: Player) -> Vec<(usize, i32)> {
    available_moves(board)
        .into_iter()
        .map(|mv| {
            let child = board.with_move(mv, ai).unwrap();
            (mv, reference_score(&child, ai, ai.opponent(), 1, false))
        })
        .collect()
}

#[test]
fn reachable_position_count() {
    // 5478 legal positions, 958 of them finished games
    assert_eq!(reachable_positions().len(), 5478 - 958);
}

#[test]
fn pruning_matches_brute_force_everywhere() {
    reachable_positions().par_iter().for_each(|board| {
        let ai = board.next_player();
        let human = ai.opponent();

        let pruned = search_with(board, ai, human, Pruning::AlphaBeta).unwrap();
        let full = search_with(board, ai, human, Pruning::None).unwrap();
        assert_eq!(
            (pruned.position, pruned.score),
            (full.position, full.score),
            "pruning changed the result on\n{}",
            board
        );
        assert!(pruned.nodes <= full.nodes);
    });
}

#[test]
fn search_picks_lowest_index_of_best_score() {
    reachable_positions().par_iter().for_each(|board| {
        let ai = board.next_player();
        let scores = reference_root(board, ai);
        let best = scores.iter().map(|&(_, s)| s).max().unwrap();
        let lowest = scores.iter().find(|&&(_, s)| s == best).map(|&(mv, _)| mv).unwrap();

        let result = search(board, ai, ai.opponent()).unwrap();
        assert_eq!(result.score, best, "score mismatch on\n{}", board);
        assert_eq!(result.position, lowest, "tie-break mismatch on\n{}", board);

        // Repeated calls give the same answer
        assert_eq!(search(board, ai, ai.opponent()).unwrap(), result);
    });
}

#[test]
fn hard_move_is_always_optimal() {
    reachable_positions().par_iter().for_each(|board| {
        let ai = board.next_player();
        let scores = reference_root(board, ai);
        let best = scores.iter().map(|&(_, s)| s).max().unwrap();

        let mv = best_move(board, ai, ai.opponent()).unwrap();
        assert!(scores.contains(&(mv, best)), "move {} is not optimal on\n{}", mv, board);
    });
}

#[test]
fn book_never_overrides_search_tie_break() {
    // Only the empty board may differ: the search alone would open in a corner
    reachable_positions()
        .par_iter()
        .filter(|board| **board != Board::new())
        .for_each(|board| {
            for ai in Player::ALL {
                let searched = search(board, ai, ai.opponent()).unwrap();
                let mv = best_move(board, ai, ai.opponent()).unwrap();
                assert_eq!(mv, searched.position, "{} to play on\n{}", ai, board);
            }
        });
}

// Plays every possible human line against the hard AI and collects the winners
fn play_out(board: Board, to_move: Player, ai: Player, results: &mut Vec<Option<Player>>) {
    if is_terminal(&board) {
        results.push(winner(&board));
        return;
    }

    if to_move == ai {
        let mut rng = StdRng::seed_from_u64(0);
        let mv = choose_move(&board, Difficulty::Hard, ai, ai.opponent(), &mut rng).unwrap();
        let next = board.with_move(mv, ai).unwrap();
        play_out(next, to_move.opponent(), ai, results);
    } else {
        for mv in available_moves(&board) {
            let next = board.with_move(mv, to_move).unwrap();
            play_out(next, to_move.opponent(), ai, results);
        }
    }
}

#[test]
fn hard_ai_never_loses() {
    for ai in Player::ALL {
        let results: Vec<Option<Player>> = if ai == Player::X {
            let mut results = Vec::new();
            play_out(Board::new(), Player::X, ai, &mut results);
            results
        } else {
            // Fan out over the human's opening moves
            (0..9)
                .into_par_iter()
                .flat_map_iter(|opening| {
                    let mut results = Vec::new();
                    let board = Board::new().with_move(opening, Player::X).unwrap();
                    play_out(board, Player::O, ai, &mut results);
                    results
                })
                .collect()
        };

        assert!(!results.is_empty());
        assert!(
            results.iter().all(|&w| w != Some(ai.opponent())),
            "{} lost at least one game",
            ai
        );
    }
}

#[test]
fn hard_ai_draws_against_itself() {
    let mut board = Board::new();
    let mut rng = StdRng::seed_from_u64(0);
    while !is_terminal(&board) {
        let player = board.next_player();
        let mv = choose_move(&board, Difficulty::Hard, player, player.opponent(), &mut rng).unwrap();
        board.place(mv, player).unwrap();
    }
    assert_eq!(winner(&board), None);
}
