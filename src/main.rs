//! Terminal shell for the rules engine.
//!
//! Without arguments it reads moves from stdin. Arguments are replayed as a
//! game (`1. e4 e5 2. Nf3 ...`), and `--random` plays a seeded random game.

use std::env;
use std::io::{self, BufRead, Write};

use anyhow::{bail, Context};
use tracing::info;

use chess_referee::config::CliConfig;
use chess_referee::game_state::chess_types::{color_name, MoveStatus};
use chess_referee::game_state::game_state::GameState;
use chess_referee::move_generation::legal_move_generator::legal_move_sans;
use chess_referee::utils::pgn::write_pgn;
use chess_referee::utils::random_playout::{seeded_random_playout, PlayoutConfig};
use chess_referee::utils::render_game_state::render_game_state;

const HELP: &str = "\
commands:
  <move>     play a move in algebraic notation (e4, Nf3, exd5, O-O, e8=Q+)
  moves      list legal moves
  fen        print the position as FEN
  pgn        print the game as PGN
  new        start a new game
  help       show this text
  quit       leave";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(io::stderr)
        .init();

    let config = CliConfig::load();
    let start = starting_position(&config)?;
    let args: Vec<String> = env::args().skip(1).collect();

    match args.first().map(String::as_str) {
        Some("--random") => run_random(&start, &config),
        Some(_) => run_script(start, &args, &config),
        None => run_repl(start, &config),
    }
}

fn starting_position(config: &CliConfig) -> anyhow::Result<GameState> {
    match &config.start_fen {
        Some(fen) => GameState::from_fen(fen).with_context(|| format!("invalid start FEN '{fen}'")),
        None => Ok(GameState::new_game()),
    }
}

/// Move-number tokens such as `12.` or `12...` in replayed games.
fn is_move_number_token(token: &str) -> bool {
    let digits = token.trim_end_matches('.');
    token.ends_with('.') && !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

fn run_script(mut game: GameState, tokens: &[String], config: &CliConfig) -> anyhow::Result<()> {
    for token in tokens.iter().filter(|t| !is_move_number_token(t)) {
        if let Err(err) = game.play_move(token) {
            print_game(&game, config)?;
            bail!("move '{token}' rejected ({}): {err}", err.code());
        }
        if game.is_game_over() {
            break;
        }
    }

    print_game(&game, config)?;
    print_outcome(&game)?;
    Ok(())
}

fn run_random(start: &GameState, config: &CliConfig) -> anyhow::Result<()> {
    let seed = config.random_seed.unwrap_or_else(rand::random::<u64>);
    info!(seed, max_plies = config.max_plies, "random game");

    let (game, result) = seeded_random_playout(
        start,
        PlayoutConfig {
            max_plies: config.max_plies,
            seed,
        },
    )
    .context("random game produced a rejected move")?;

    print_game(&game, config)?;
    println!("{:?} after {} plies (seed {seed})", result.outcome, result.plies);
    println!();
    print!("{}", write_pgn(&game));
    Ok(())
}

fn run_repl(start: GameState, config: &CliConfig) -> anyhow::Result<()> {
    let mut game = start.clone();
    print_game(&game, config)?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("failed to read stdin")?;

        for token in line.split_whitespace() {
            match token {
                "quit" | "exit" => return Ok(()),
                "help" => println!("{HELP}"),
                "fen" => println!("{}", game.get_fen()),
                "pgn" => print!("{}", write_pgn(&game)),
                "moves" => println!("{}", legal_move_sans(&game).join(" ")),
                "new" => {
                    game = start.clone();
                    print_game(&game, config)?;
                }
                _ if is_move_number_token(token) => {}
                _ => match game.play_move(token) {
                    Ok(_) => {
                        print_game(&game, config)?;
                        print_outcome(&game)?;
                    }
                    Err(err) => println!("{token}: {err} ({})", err.code()),
                },
            }
        }
    }

    Ok(())
}

fn print_game(game: &GameState, config: &CliConfig) -> io::Result<()> {
    let mut out = io::stdout().lock();
    writeln!(out, "{}", render_game_state(game, config.unicode))?;
    if config.show_history && !game.history().is_empty() {
        writeln!(out, "{}", game.history())?;
    }
    out.flush()
}

fn print_outcome(game: &GameState) -> io::Result<()> {
    let mut out = io::stdout().lock();
    match game.status() {
        MoveStatus::Checkmate => {
            let winner = color_name(Some(game.side_to_move().opposite())).unwrap_or("nobody");
            writeln!(out, "{winner} wins by checkmate")?;
        }
        MoveStatus::Stalemate => writeln!(out, "draw by stalemate")?,
        MoveStatus::Check => {
            if let Some(name) = color_name(game.check()) {
                writeln!(out, "{name} is in check")?;
            }
        }
        MoveStatus::Normal => {}
    }
    out.flush()
}
