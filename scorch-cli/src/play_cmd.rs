//! Play command - human (Player1) vs computer (Player2) in the terminal
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: configure_game(), play_session()
//! - Level 3: human_turn(), computer_turn()
//! - Level 4: input parsing

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use anyhow::Result;
use clap::Args;
use scorch_core::{GameConfig, GameState, GreedyAI, Hex, Player};

use crate::render::{render_board, render_moves};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct PlayArgs {
    /// Board radius (overrides the config file)
    #[arg(long)]
    pub board_size: Option<i32>,

    /// Pause before the computer replies, in milliseconds
    #[arg(long, default_value = "500")]
    pub delay_ms: u64,
}

/// What the human typed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Input {
    Move(Hex),
    Quit,
    Invalid,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run play command
pub fn run(args: PlayArgs, base: GameConfig) -> Result<()> {
    let config = configure_game(&args, base)?;

    tracing::info!("Starting game on a board of size {}", config.board_size);

    let stdin = io::stdin();
    let stdout = io::stdout();
    play_session(
        &config,
        Duration::from_millis(args.delay_ms),
        stdin.lock(),
        stdout.lock(),
    )?;

    Ok(())
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

fn configure_game(args: &PlayArgs, base: GameConfig) -> Result<GameConfig> {
    let config = match args.board_size {
        Some(size) => base.with_board_size(size),
        None => base,
    };
    config.validate()?;
    Ok(config)
}

/// Alternate human and computer turns until the game ends or input runs out
fn play_session<R: BufRead, W: Write>(
    config: &GameConfig,
    delay: Duration,
    input: R,
    mut out: W,
) -> Result<GameState> {
    let mut state = config.new_game()?;
    let mut ai = match config.seed {
        Some(seed) => GreedyAI::with_seed(seed.wrapping_add(1)),
        None => GreedyAI::new(),
    };
    let mut lines = input.lines();

    loop {
        writeln!(out, "\n{}", render_board(&state))?;
        writeln!(out, "{}", state.status_message())?;

        if state.is_game_over().is_some() {
            break;
        }

        match state.current_player() {
            Player::Player1 => {
                let Some(line) = prompt(&state, &mut lines, &mut out)? else {
                    writeln!(out, "Goodbye.")?;
                    break;
                };
                match parse_input(&line, state.legal_moves()) {
                    Input::Quit => break,
                    Input::Move(to) => state = human_turn(state, to, &mut out)?,
                    Input::Invalid => {
                        writeln!(out, "Enter a move number or `q r` coordinates (or `quit`).")?;
                    }
                }
            }
            Player::Player2 => {
                if !delay.is_zero() {
                    thread::sleep(delay);
                }
                state = computer_turn(state, &mut ai, &mut out)?;
            }
        }
    }

    Ok(state)
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

/// Show the legal moves and read one line; `None` at end of input
fn prompt<W: Write>(
    state: &GameState,
    lines: &mut impl Iterator<Item = io::Result<String>>,
    out: &mut W,
) -> Result<Option<String>> {
    writeln!(out, "{}", render_moves(state.legal_moves()))?;
    write!(out, "> ")?;
    out.flush()?;

    Ok(lines.next().transpose()?)
}

fn human_turn<W: Write>(state: GameState, to: Hex, out: &mut W) -> Result<GameState> {
    let (next, moved) = state.submit_move(Player::Player1, to);
    if !moved {
        writeln!(out, "({}, {}) is not a legal move.", to.q, to.r)?;
    }
    Ok(next)
}

fn computer_turn<W: Write>(state: GameState, ai: &mut GreedyAI, out: &mut W) -> Result<GameState> {
    let Some(to) = ai.choose_move(&state) else {
        return Ok(state);
    };
    let (next, _) = state.submit_move(Player::Player2, to);
    writeln!(out, "Computer moved to ({}, {}).", to.q, to.r)?;
    Ok(next)
}

// ============================================================================
// LEVEL 4 - UTILITIES
// ============================================================================

/// Accepts a move number from the list, `q r`, or `q r s`
fn parse_input(line: &str, legal: &[Hex]) -> Input {
    let line = line.trim();
    if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
        return Input::Quit;
    }

    let numbers: Result<Vec<i32>, _> = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .map(str::parse::<i32>)
        .collect();

    match numbers.as_deref() {
        Ok([index]) if *index >= 1 && (*index as usize) <= legal.len() => {
            Input::Move(legal[*index as usize - 1])
        }
        Ok([q, r]) => Hex::try_new(*q, *r).map_or(Input::Invalid, Input::Move),
        Ok([q, r, s]) => Hex::from_cube(*q, *r, *s).map_or(Input::Invalid, Input::Move),
        _ => Input::Invalid,
    }
}

// ============================================================================
// TESTS
// ============================================================================
