use log::info;

use crate::{outcome, Board, Error, Outcome, Player, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    HumanVsHuman,
    HumanVsAi { ai: Player },
}

impl GameMode {
    pub fn is_ai_turn(&self, to_move: Player) -> bool {
        matches!(self, GameMode::HumanVsAi { ai } if *ai == to_move)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub index: usize,
    pub player: Player,
}

/// A single game: the canonical board plus whose turn it is.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    current_turn: Player,
    mode: GameMode,
    history: Vec<Move>,
}

impl Game {
    pub fn new(mode: GameMode) -> Self {
        Self {
            board: Board::new(),
            current_turn: Player::X,
            mode,
            history: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_turn(&self) -> Player {
        self.current_turn
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn last_move(&self) -> Option<Move> {
        self.history.last().copied()
    }

    pub fn outcome(&self) -> Outcome {
        outcome(&self.board)
    }

    pub fn is_over(&self) -> bool {
        self.outcome().is_over()
    }

    pub fn is_ai_turn(&self) -> bool {
        !self.is_over() && self.mode.is_ai_turn(self.current_turn)
    }

    pub fn play(&mut self, index: usize) -> Result<Outcome> {
        if self.is_over() {
            return Err(Error::invalid_state("the game is already over"));
        }

        self.board.place(index, self.current_turn)?;
        self.history.push(Move {
            index,
            player: self.current_turn,
        });
        self.current_turn = self.current_turn.opponent();

        let result = self.outcome();
        if result.is_over() {
            info!("game finished after {} moves: {:?}", self.history.len(), result);
        }
        Ok(result)
    }

    // Replays the earlier moves; the game is left untouched if that fails
    pub fn undo(&mut self) -> Result<Option<Move>> {
        let Some((&last, earlier)) = self.history.split_last() else {
            return Ok(None);
        };
        let board = earlier
            .iter()
            .try_fold(Board::new(), |board, mv| board.with_move(mv.index, mv.player))?;

        self.history.pop();
        self.board = board;
        self.current_turn = last.player;
        Ok(Some(last))
    }

    pub fn reset(&mut self) {
        self.board = Board::new();
        self.current_turn = Player::X;
        self.history.clear();
    }
}

/// Running tally across games of one session. Not persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scoreboard {
    pub x_wins: u32,
    pub o_wins: u32,
    pub draws: u32,
}

impl Scoreboard {
    pub fn record(&mut self, result: Outcome) {
        match result {
            Outcome::Win(Player::X) => self.x_wins += 1,
            Outcome::Win(Player::O) => self.o_wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::Ongoing => {}
        }
    }

    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x_wins,
            Player::O => self.o_wins,
        }
    }

    pub fn games(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }
}
