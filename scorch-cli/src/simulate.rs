//! Simulate command - computer vs computer games
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: play_games(), report_results()
//! - Level 3: play_single_game(), compute_statistics()
//! - Level 4: formatting utilities

use anyhow::Result;
use clap::Args;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use serde::Serialize;

use scorch_core::{computer_choose_move, GameConfig, GameResult, GameState, MoveRecord};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct SimulateArgs {
    /// Number of games to play
    #[arg(long, default_value = "10")]
    pub games: usize,

    /// Board radius (overrides the config file)
    #[arg(long)]
    pub board_size: Option<i32>,

    /// Run games in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,

    /// Include every move in the JSON output
    #[arg(long)]
    pub moves: bool,
}

/// Result of a single game
#[derive(Clone, Debug, Serialize)]
struct GameRecord {
    game_number: usize,
    seed: u64,
    result: GameResult,
    moves_played: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    moves: Option<Vec<MoveRecord>>,
}

/// Aggregated results
#[derive(Clone, Debug, Serialize)]
struct SimulationResults {
    total_games: usize,
    player1_wins: usize,
    player2_wins: usize,
    unfinished: usize,
    avg_moves: f32,
    player1_win_rate: f32,
    games: Vec<GameRecord>,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run simulate command
pub fn run(args: SimulateArgs, base: GameConfig) -> Result<()> {
    let config = match args.board_size {
        Some(size) => base.with_board_size(size),
        None => base,
    };
    config.validate()?;

    tracing::info!(
        "Simulating {} games on board size {}{}",
        args.games,
        config.board_size,
        if args.parallel { " (parallel)" } else { "" }
    );

    let base_seed = config.seed.unwrap_or_else(rand::random);
    let games = play_games(&config, &args, base_seed);
    let results = compute_statistics(games);

    report_results(&results, args.json)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Play every game, each with its own derived seed
fn play_games(config: &GameConfig, args: &SimulateArgs, base_seed: u64) -> Vec<GameRecord> {
    let play = |game_index: usize| {
        let seed = base_seed.wrapping_add(game_index as u64);
        let record = play_single_game(config.board_size, game_index + 1, seed, args.moves);
        tracing::info!(
            "Game {}: {:?} ({} moves)",
            record.game_number,
            record.result,
            record.moves_played
        );
        record
    };

    if args.parallel {
        (0..args.games).into_par_iter().map(play).collect()
    } else {
        (0..args.games).map(play).collect()
    }
}

fn report_results(results: &SimulationResults, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(results)?);
    } else {
        print_text_results(results);
    }
    Ok(())
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

/// Play one game with the greedy AI on both sides
fn play_single_game(
    board_size: i32,
    game_number: usize,
    seed: u64,
    keep_moves: bool,
) -> GameRecord {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut state = GameState::new_game(board_size, &mut rng);

    while let Some(to) = computer_choose_move(&state, &mut rng) {
        let (next, moved) = state.submit_move(state.current_player(), to);
        if !moved {
            tracing::warn!("Game {}: rejected computer move {:?}", game_number, to);
            break;
        }
        state = next;
    }

    GameRecord {
        game_number,
        seed,
        result: state.result(),
        moves_played: state.history().len(),
        moves: keep_moves.then(|| state.history().to_vec()),
    }
}

/// Compute aggregate statistics from game records
fn compute_statistics(games: Vec<GameRecord>) -> SimulationResults {
    let count = |result: GameResult| games.iter().filter(|g| g.result == result).count();
    let player1_wins = count(GameResult::Player1Wins);
    let player2_wins = count(GameResult::Player2Wins);
    let unfinished = count(GameResult::Ongoing);

    let total = games.len();
    let total_moves: usize = games.iter().map(|g| g.moves_played).sum();
    let (avg_moves, player1_win_rate) = if total == 0 {
        (0.0, 0.0)
    } else {
        (
            total_moves as f32 / total as f32,
            player1_wins as f32 / total as f32,
        )
    };

    SimulationResults {
        total_games: total,
        player1_wins,
        player2_wins,
        unfinished,
        avg_moves,
        player1_win_rate,
        games,
    }
}

// ============================================================================
// LEVEL 4 - UTILITIES
// ============================================================================

fn percent(part: usize, total: usize) -> f32 {
    if total > 0 {
        part as f32 / total as f32 * 100.0
    } else {
        0.0
    }
}

/// Print results as text
fn print_text_results(results: &SimulationResults) {
    let total = results.total_games;

    println!("\n=== Simulation Results ===");
    println!("Total games:  {}", total);
    println!(
        "Player1 wins: {} ({:.1}%)",
        results.player1_wins,
        percent(results.player1_wins, total)
    );
    println!(
        "Player2 wins: {} ({:.1}%)",
        results.player2_wins,
        percent(results.player2_wins, total)
    );
    if results.unfinished > 0 {
        println!("Unfinished:   {}", results.unfinished);
    }
    println!("Avg moves:    {:.1}", results.avg_moves);

    println!("\nGame details:");
    for game in &results.games {
        println!(
            "  Game {} (seed {}): {:?} in {} moves",
            game.game_number, game.seed, game.result, game.moves_played
        );
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn record(game_number: usize, result: GameResult, moves_played: usize) -> GameRecord {
        GameRecord {
            game_number,
            seed: game_number as u64,
            result,
            moves_played,
            moves: None,
        }
    }

    #[test]
    fn test_compute_statistics_empty() {
        let results = compute_statistics(vec![]);
        assert_eq!(results.player1_wins, 0);
        assert_eq!(results.player2_wins, 0);
        assert_eq!(results.avg_moves, 0.0);
        assert_eq!(results.player1_win_rate, 0.0);
    }

    #[test]
    fn test_compute_statistics() {
        let games = vec![
            record(1, GameResult::Player1Wins, 10),
            record(2, GameResult::Player2Wins, 20),
            record(3, GameResult::Player1Wins, 30),
            record(4, GameResult::Player2Wins, 40),
        ];

        let results = compute_statistics(games);
        assert_eq!(results.total_games, 4);
        assert_eq!(results.player1_wins, 2);
        assert_eq!(results.player2_wins, 2);
        assert_eq!(results.unfinished, 0);
        assert_eq!(results.avg_moves, 25.0);
        assert_eq!(results.player1_win_rate, 0.5);
    }

    #[test]
    fn test_single_game_finishes() {
        let record = play_single_game(5, 1, 42, true);
        assert_ne!(record.result, GameResult::Ongoing);
        assert!(record.moves_played > 0);
        assert_eq!(record.moves.as_ref().map(Vec::len), Some(record.moves_played));
    }

    #[test]
    fn test_single_game_is_reproducible() {
        let a = play_single_game(4, 1, 7, true);
        let b = play_single_game(4, 1, 7, true);
        assert_eq!(a.result, b.result);
        assert_eq!(a.moves, b.moves);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let config = GameConfig::default().with_board_size(3);
        let mut args = SimulateArgs {
            games: 6,
            board_size: None,
            parallel: false,
            json: false,
            moves: false,
        };
        let sequential = play_games(&config, &args, 100);
        args.parallel = true;
        let parallel = play_games(&config, &args, 100);

        let summary = |games: &[GameRecord]| {
            games
                .iter()
                .map(|g| (g.game_number, g.result, g.moves_played))
                .collect::<Vec<_>>()
        };
        assert_eq!(summary(&sequential), summary(&parallel));
    }
}
