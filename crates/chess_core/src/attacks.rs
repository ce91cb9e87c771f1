//! Square attack queries on top of cozy-chess attack tables.
//!
//! Sliders use the board's current occupancy, so a piece standing on the
//! target square does not block attacks onto it.

use cozy_chess::{
    get_bishop_moves, get_king_moves, get_knight_moves, get_pawn_attacks, get_rook_moves, BitBoard,
    Board, Color, Piece, Square,
};

/// All pieces of `by` attacking `target`.
pub fn attackers_of(board: &Board, target: Square, by: Color) -> BitBoard {
    let occupied = board.occupied();
    let ours = |piece: Piece| board.colored_pieces(by, piece);
    let diagonal = ours(Piece::Bishop) | ours(Piece::Queen);
    let orthogonal = ours(Piece::Rook) | ours(Piece::Queen);

    // A pawn of `by` attacks target iff a pawn of the other colour on target would attack it
    (get_pawn_attacks(target, !by) & ours(Piece::Pawn))
        | (get_knight_moves(target) & ours(Piece::Knight))
        | (get_king_moves(target) & ours(Piece::King))
        | (get_bishop_moves(target, occupied) & diagonal)
        | (get_rook_moves(target, occupied) & orthogonal)
}

#[inline]
pub fn is_square_attacked(board: &Board, target: Square, by: Color) -> bool {
    !attackers_of(board, target, by).is_empty()
}

#[cfg(test)]
#[path = "attacks_tests.rs"]
mod attacks_tests;
