use chess_core::{Board, Move};

/// Whether playing `mv` checkmates the opponent. The board is restored
/// before returning.
pub fn is_immediate_mate<B: Board + ?Sized>(board: &mut B, mv: Move) -> bool {
    board.make_move(mv);
    let mate = board.is_checkmate();
    board.undo_move(mv);
    mate
}

#[cfg(test)]
#[path = "mate_tests.rs"]
mod mate_tests;
