use std::fmt;
use std::str::FromStr;

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ttt_core::{Board, Error, Player, Result};

use crate::heuristic::{random_move, rule_based_move};
use crate::search::{best_move_unchecked, check_preconditions};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        f.write_str(name)
    }
}

impl FromStr for Difficulty {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(Error::invalid_argument(format!(
                "unknown difficulty '{}' (expected easy, medium or hard)",
                other
            ))),
        }
    }
}

/// Picks a move for `ai` at the given difficulty. Only Easy and Medium draw
/// from `rng`.
pub fn choose_move<R: Rng + ?Sized>(
    board: &Board,
    difficulty: Difficulty,
    ai: Player,
    human: Player,
    rng: &mut R,
) -> Result<usize> {
    check_preconditions(board, ai, human)?;

    let mv = match difficulty {
        Difficulty::Easy => random_move(board, rng)?,
        Difficulty::Medium => rule_based_move(board, ai, human, rng)?,
        Difficulty::Hard => best_move_unchecked(board, ai, human)?,
    };

    debug!("{} ({}) plays {}", ai, difficulty, mv);
    Ok(mv)
}

/// An AI opponent with its own random source.
#[derive(Debug, Clone)]
pub struct TicTacToeAI {
    difficulty: Difficulty,
    player: Player,
    rng: StdRng,
}

impl TicTacToeAI {
    pub fn new(difficulty: Difficulty, player: Player) -> Self {
        Self {
            difficulty,
            player,
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_seed(difficulty: Difficulty, player: Player, seed: u64) -> Self {
        Self {
            difficulty,
            player,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn player(&self) -> Player {
        self.player
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    pub fn get_move(&mut self, board: &Board) -> Result<usize> {
        choose_move(
            board,
            self.difficulty,
            self.player,
            self.player.opponent(),
            &mut self.rng,
        )
    }
}
