//! Server state management
//!
//! Shared state for game sessions.

use scorch_core::{GameState, GreedyAI};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;
use std::time::Duration;

/// One game in progress: the engine state plus the computer opponent driving Player2
pub struct GameSession {
    pub state: GameState,
    pub ai: GreedyAI,
}

impl GameSession {
    pub fn new(state: GameState, ai: GreedyAI) -> Self {
        Self { state, ai }
    }
}

/// Sessions kept before the oldest ones are evicted
pub const DEFAULT_MAX_GAMES: usize = 1000;

/// Server-wide shared state
pub struct ServerState {
    pub games: RwLock<HashMap<u64, GameSession>>,
    next_id: AtomicU64,
    /// Cosmetic pause before the computer answers a human move
    pub ai_delay: Duration,
    max_games: usize,
}

impl ServerState {
    pub fn new(ai_delay: Duration) -> Self {
        Self {
            games: RwLock::new(HashMap::new()),
            next_id: AtomicU64::new(1),
            ai_delay,
            max_games: DEFAULT_MAX_GAMES,
        }
    }

    /// Cap the number of stored sessions (at least one)
    pub fn with_max_games(mut self, max_games: usize) -> Self {
        self.max_games = max_games.max(1);
        self
    }

    /// Store a session and return its id, evicting old sessions when full
    pub fn insert_game(&self, session: GameSession) -> u64 {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let mut games = self.games.write().unwrap();

        while games.len() >= self.max_games {
            let Some(old) = eviction_candidate(&games) else {
                break;
            };
            games.remove(&old);
            tracing::info!("Evicted game {} ({} sessions stored)", old, games.len());
        }

        games.insert(id, session);
        id
    }

    /// Remove a session; false if there was none
    pub fn remove_game(&self, id: u64) -> bool {
        self.games.write().unwrap().remove(&id).is_some()
    }
}

/// Oldest finished game, otherwise the oldest game. Ids only grow, so oldest is smallest.
fn eviction_candidate(games: &HashMap<u64, GameSession>) -> Option<u64> {
    games
        .iter()
        .filter(|(_, session)| session.state.is_game_over().is_some())
        .map(|(&id, _)| id)
        .min()
        .or_else(|| games.keys().copied().min())
}

impl Default for ServerState {
    fn default() -> Self {
        Self::new(Duration::ZERO)
    }
}
