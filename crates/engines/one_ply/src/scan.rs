//! One-ply look at the opponent's answers to a candidate move.

use crate::eval::evaluate_move;
use chess_core::{Board, Move};

/// What the opponent can do after a candidate move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReplyScan {
    /// Highest static score among the replies scanned, never below 0
    pub best_reply_value: i32,
    /// Some reply checkmates us
    pub opponent_has_mate: bool,
    /// Replies scored before the scan finished
    pub replies_scanned: u64,
}

/// Plays `mv`, scores every opponent reply in order and undoes `mv` again.
///
/// Scanning stops at the first reply that delivers checkmate; replies after
/// it are never scored. With no legal replies the scan is `(0, false)`.
pub fn scan_responses<B: Board + ?Sized>(board: &mut B, mv: Move) -> ReplyScan {
    let mut scan = ReplyScan::default();

    board.make_move(mv);
    for reply in board.legal_moves() {
        scan.replies_scanned += 1;
        let value = evaluate_move(&*board, &reply);
        if value > scan.best_reply_value {
            scan.best_reply_value = value;
        }

        board.make_move(reply);
        let mate = board.is_checkmate();
        board.undo_move(reply);
        if mate {
            scan.opponent_has_mate = true;
            break;
        }
    }
    board.undo_move(mv);

    scan
}

#[cfg(test)]
#[path = "scan_tests.rs"]
mod scan_tests;
