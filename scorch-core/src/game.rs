//! Game state and turn transitions

use crate::board::Hex;
use crate::error::{MoveError, SetupError};
use crate::moves::{is_valid_move, valid_moves};
use crate::state::{pole, Board};
use crate::tile::TileKind;
use rand::Rng;
use serde::{Deserialize, Serialize};

// ============================================================================
// CORE TYPES
// ============================================================================

/// Player (Player1 is the human side, Player2 the computer)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Player {
    Player1,
    Player2,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::Player1 => Player::Player2,
            Player::Player2 => Player::Player1,
        }
    }

    /// This player's territory tile
    pub fn base(self) -> TileKind {
        match self {
            Player::Player1 => TileKind::Player1Base,
            Player::Player2 => TileKind::Player2Base,
        }
    }

    /// This player's piece marker
    pub fn piece(self) -> TileKind {
        match self {
            Player::Player1 => TileKind::Player1Piece,
            Player::Player2 => TileKind::Player2Piece,
        }
    }
}

/// Game result
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    Ongoing,
    Player1Wins,
    Player2Wins,
}

impl GameResult {
    fn won_by(player: Player) -> Self {
        match player {
            Player::Player1 => GameResult::Player1Wins,
            Player::Player2 => GameResult::Player2Wins,
        }
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            GameResult::Ongoing => None,
            GameResult::Player1Wins => Some(Player::Player1),
            GameResult::Player2Wins => Some(Player::Player2),
        }
    }
}

/// Turn state machine
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    AwaitingPlayer1Move,
    AwaitingPlayer2Move,
    GameOver { winner: Player },
}

/// One applied move
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub player: Player,
    pub from: Hex,
    pub to: Hex,
    /// Tile kind the piece landed on
    pub captured: TileKind,
    /// The vacated hex was enemy territory and is now gone
    pub scorched: bool,
}

/// Tile tally for score display
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileCounts {
    pub empty: usize,
    pub player1_base: usize,
    pub player2_base: usize,
}

// ============================================================================
// GAME STATE
// ============================================================================

/// Game state (clone to branch)
#[derive(Clone, Debug)]
pub struct GameState {
    board: Board,

    /// Authoritative piece cursors
    player1_position: Hex,
    player2_position: Hex,

    /// Tile kind each piece displaced when it landed; `None` on the starting pole
    player1_ground: Option<TileKind>,
    player2_ground: Option<TileKind>,

    current_player: Player,
    result: GameResult,

    /// Landing hexes for `current_player`, refreshed after every move
    legal_moves: Vec<Hex>,

    history: Vec<MoveRecord>,
}

impl GameState {
    // ========================================================================
    // CONSTRUCTORS
    // ========================================================================

    /// Start a new game on a freshly randomized board
    pub fn new_game<R: Rng + ?Sized>(board_size: i32, rng: &mut R) -> Self {
        let board = Board::build(board_size, rng);
        Self::with_positions(
            board,
            pole(Player::Player1, board_size),
            pole(Player::Player2, board_size),
        )
    }

    /// Start from a hand-made board. Each player must have exactly one piece on it.
    /// Player1 moves first.
    pub fn from_board(board: Board) -> Result<Self, SetupError> {
        let player1 = locate_piece(&board, Player::Player1)?;
        let player2 = locate_piece(&board, Player::Player2)?;
        Ok(Self::with_positions(board, player1, player2))
    }

    fn with_positions(board: Board, player1_position: Hex, player2_position: Hex) -> Self {
        let legal_moves = valid_moves(&board, player1_position);
        let result = if legal_moves.is_empty() {
            GameResult::Player2Wins
        } else {
            GameResult::Ongoing
        };

        Self {
            board,
            player1_position,
            player2_position,
            player1_ground: None,
            player2_ground: None,
            current_player: Player::Player1,
            result,
            legal_moves,
            history: Vec::new(),
        }
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn result(&self) -> GameResult {
        self.result
    }

    pub fn position(&self, player: Player) -> Hex {
        match player {
            Player::Player1 => self.player1_position,
            Player::Player2 => self.player2_position,
        }
    }

    /// Tile kind underneath a player's piece
    pub fn ground(&self, player: Player) -> Option<TileKind> {
        match player {
            Player::Player1 => self.player1_ground,
            Player::Player2 => self.player2_ground,
        }
    }

    /// Landing hexes for the player to move (empty once the game is over)
    pub fn legal_moves(&self) -> &[Hex] {
        &self.legal_moves
    }

    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Winner, if the game has ended
    pub fn is_game_over(&self) -> Option<Player> {
        self.result.winner()
    }

    /// True when the player to move has nothing to play
    pub fn is_terminal(&self) -> bool {
        valid_moves(&self.board, self.position(self.current_player)).is_empty()
    }

    pub fn phase(&self) -> Phase {
        match (self.result.winner(), self.current_player) {
            (Some(winner), _) => Phase::GameOver { winner },
            (None, Player::Player1) => Phase::AwaitingPlayer1Move,
            (None, Player::Player2) => Phase::AwaitingPlayer2Move,
        }
    }

    /// One-line status for the human (Player1) facing the computer (Player2)
    pub fn status_message(&self) -> &'static str {
        match self.phase() {
            Phase::AwaitingPlayer1Move => "Your turn! Click a valid move (highlighted).",
            Phase::AwaitingPlayer2Move => "Computer is thinking...",
            Phase::GameOver {
                winner: Player::Player2,
            } => "Game Over! No more valid moves for you. Computer wins!",
            Phase::GameOver {
                winner: Player::Player1,
            } => "Game Over! No more valid moves for computer. You win!",
        }
    }

    pub fn tile_counts(&self) -> TileCounts {
        TileCounts {
            empty: self.board.count(TileKind::Empty),
            player1_base: self.board.count(TileKind::Player1Base),
            player2_base: self.board.count(TileKind::Player2Base),
        }
    }

    // ========================================================================
    // APPLY MOVE
    // ========================================================================

    /// Submit a move; illegal requests leave the state untouched.
    ///
    /// Returns the resulting state and whether the move was applied.
    pub fn submit_move(&self, player: Player, to: Hex) -> (Self, bool) {
        let mut next = self.clone();
        match next.try_move(player, to) {
            Ok(_) => (next, true),
            Err(err) => {
                tracing::debug!("Rejected move: {}", err);
                (self.clone(), false)
            }
        }
    }

    /// Apply a move in place
    pub fn try_move(&mut self, player: Player, to: Hex) -> Result<MoveRecord, MoveError> {
        if self.result != GameResult::Ongoing {
            return Err(MoveError::GameOver);
        }
        if player != self.current_player {
            return Err(MoveError::NotYourTurn {
                expected: self.current_player,
                got: player,
            });
        }
        if !is_valid_move(&self.board, self.position(player), to) {
            return Err(MoveError::IllegalDestination(to));
        }

        Ok(self.apply_move_internal(player, to))
    }

    fn apply_move_internal(&mut self, player: Player, to: Hex) -> MoveRecord {
        let from = self.position(player);

        // Scorched earth: the vacated hex is always emptied. When the ground
        // under the piece was enemy territory, that tile is gone for good.
        let scorched = self.ground(player) == Some(player.opponent().base());
        self.board.set(from, TileKind::Empty);

        let captured = self
            .board
            .set(to, player.piece())
            .unwrap_or(TileKind::Empty);

        match player {
            Player::Player1 => {
                self.player1_position = to;
                self.player1_ground = Some(captured);
            }
            Player::Player2 => {
                self.player2_position = to;
                self.player2_ground = Some(captured);
            }
        }

        let record = MoveRecord {
            player,
            from,
            to,
            captured,
            scorched,
        };
        self.history.push(record);

        tracing::debug!(
            "{:?} moved ({},{},{}) -> ({},{},{}) onto {:?}",
            player,
            from.q,
            from.r,
            from.s,
            to.q,
            to.r,
            to.s,
            captured
        );

        self.end_turn();
        record
    }

    fn end_turn(&mut self) {
        self.current_player = self.current_player.opponent();
        self.legal_moves = valid_moves(&self.board, self.position(self.current_player));

        if self.legal_moves.is_empty() {
            self.result = GameResult::won_by(self.current_player.opponent());
            tracing::info!(
                "Game over after {} moves: {:?}",
                self.history.len(),
                self.result
            );
        }
    }
}

/// Find the single hex holding a player's piece
fn locate_piece(board: &Board, player: Player) -> Result<Hex, SetupError> {
    match board.find(player.piece()).as_slice() {
        [] => Err(SetupError::MissingPiece(player)),
        [hex] => Ok(*hex),
        _ => Err(SetupError::DuplicatePiece(player)),
    }
}

// ============================================================================
// TESTS
// ============================================================================
