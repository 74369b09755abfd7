//! Terminal rendering of the board
//!
//! One text row per `r`, indented so the hex rows interlock:
//! `x`/`o` are Player1/Player2 bases (upper case when a legal landing hex),
//! `1`/`2` the pieces, `.` removed tiles.

use scorch_core::{GameState, Hex, TileKind};

fn tile_char(kind: Option<TileKind>, highlighted: bool) -> char {
    match (kind, highlighted) {
        (Some(TileKind::Player1Base), false) => 'x',
        (Some(TileKind::Player1Base), true) => 'X',
        (Some(TileKind::Player2Base), false) => 'o',
        (Some(TileKind::Player2Base), true) => 'O',
        (Some(TileKind::Player1Piece), _) => '1',
        (Some(TileKind::Player2Piece), _) => '2',
        (Some(TileKind::Empty), _) | (None, _) => '.',
    }
}

/// Draw the board with the current player's legal moves highlighted
pub fn render_board(state: &GameState) -> String {
    let n = state.board().size();
    let highlighted = state.legal_moves();
    let mut out = String::new();

    for r in -n..=n {
        let q1 = (-n).max(-r - n);
        let q2 = n.min(-r + n);

        out.push_str(&" ".repeat(r.unsigned_abs() as usize));
        let row: Vec<String> = (q1..=q2)
            .map(|q| {
                let hex = Hex::new(q, r);
                tile_char(state.board().get(hex), highlighted.contains(&hex)).to_string()
            })
            .collect();
        out.push_str(&row.join(" "));
        out.push('\n');
    }

    out
}

/// Numbered list of legal moves for the prompt
pub fn render_moves(moves: &[Hex]) -> String {
    moves
        .iter()
        .enumerate()
        .map(|(i, hex)| format!("{:>2}) {} {}", i + 1, hex.q, hex.r))
        .collect::<Vec<_>>()
        .join("\n")
}
