//! Static move scoring: what a single move is worth in the current position.

use chess_core::{Board, Move, PieceKind};

/// Material values, indexed by PieceKind::idx().
/// Order: Pawn, Knight, Bishop, Rook, Queen, King
pub const PIECE_VALUES: [i32; 6] = [100, 250, 300, 500, 900, 10000];

/// Activity bonus for moving a piece to a safe square, independent of captures.
pub const MOVE_VALUES: [i32; 6] = [100, 80, 85, 90, 95, 70];

/// Flat bonus for any promotion, whatever the promoted-to piece.
pub const PROMOTION_BONUS: i32 = 800;

/// Penalty on top of the piece's material when it lands on an attacked square.
pub const ATTACKED_SQUARE_PENALTY: i32 = 25;

/// Material value of an optional piece kind; no piece is worth 0.
#[inline]
pub fn piece_value(kind: Option<PieceKind>) -> i32 {
    kind.map_or(0, |k| PIECE_VALUES[k.idx()])
}

/// Scores `mv` for the side to move in `board`'s current position.
///
/// Moving onto a square the opponent attacks costs the moving piece's
/// material; otherwise the piece earns its activity bonus. Captured material
/// and promotions are added on top. The board is only queried.
pub fn evaluate_move<B: Board + ?Sized>(board: &B, mv: &Move) -> i32 {
    let mut score = if board.square_is_attacked_by_opponent(mv.to) {
        -ATTACKED_SQUARE_PENALTY - PIECE_VALUES[mv.piece.idx()]
    } else {
        MOVE_VALUES[mv.piece.idx()]
    };

    if mv.is_capture() {
        score += piece_value(mv.capture);
    }
    if mv.is_promotion() {
        score += PROMOTION_BONUS;
    }
    score
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
