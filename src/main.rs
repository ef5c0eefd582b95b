use std::io::{self, BufRead, Write};

use clap::Parser;
use log::{info, warn};
use ttt_core::{winning_line, Game, GameMode, Outcome, Player, Position, Scoreboard};
use ttt_engine::{Difficulty, TicTacToeAI};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum Mode {
    /// Two people at one keyboard
    Pvp,
    /// Play against the computer
    Ai,
}

#[derive(Debug, clap::Parser)]
#[clap(about = "Tic-tac-toe in the terminal")]
struct Args {
    #[clap(short, long, value_enum, default_value_t = Mode::Ai)]
    mode: Mode,
    #[clap(short, long, default_value_t = Difficulty::Hard)]
    difficulty: Difficulty,
    #[clap(short, long, default_value_t = Player::O)]
    ai_symbol: Player,
    #[clap(short, long)]
    seed: Option<u64>,
    #[clap(short, long, default_value_t = 1)]
    rounds: u32,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let Args {
        mode,
        difficulty,
        ai_symbol,
        seed,
        rounds,
    } = Args::parse();

    let game_mode = match mode {
        Mode::Pvp => GameMode::HumanVsHuman,
        Mode::Ai => GameMode::HumanVsAi { ai: ai_symbol },
    };
    let mut ai = match seed {
        Some(seed) => TicTacToeAI::with_seed(difficulty, ai_symbol, seed),
        None => TicTacToeAI::new(difficulty, ai_symbol),
    };
    info!("starting {} round(s) in {:?} mode, {} difficulty", rounds, mode, difficulty);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut score = Scoreboard::default();

    for round in 1..=rounds {
        println!("\nRound {} of {}", round, rounds);
        let mut game = Game::new(game_mode);

        while !game.is_over() {
            println!("\n{}\n", game.board());

            let mv = if game.is_ai_turn() {
                let mv = ai.get_move(game.board())?;
                println!("{} plays cell {}", ai.player(), mv + 1);
                mv
            } else {
                print!("{} to move (row col, or cell 1-9): ", game.current_turn());
                io::stdout().flush()?;

                let Some(line) = lines.next() else {
                    println!();
                    print_score(&score);
                    return Ok(());
                };
                match Position::from_human(&line?) {
                    Ok(pos) => pos.index(),
                    Err(e) => {
                        println!("{}", e);
                        continue;
                    }
                }
            };

            if let Err(e) = game.play(mv) {
                warn!("rejected move {}: {}", mv, e);
                println!("{}", e);
            }
        }

        println!("\n{}\n", game.board());
        let result = game.outcome();
        match result {
            Outcome::Win(player) => {
                let line = winning_line(game.board()).unwrap_or_default();
                println!("{} wins on cells {:?}!", player, line.map(|idx| idx + 1));
            }
            Outcome::Draw => println!("Draw!"),
            Outcome::Ongoing => {}
        }
        score.record(result);
        print_score(&score);
    }

    Ok(())
}

fn print_score(score: &Scoreboard) {
    println!(
        "Score: X {} - O {} ({} draws)",
        score.wins(Player::X),
        score.wins(Player::O),
        score.draws
    );
}
