//! Move generation and make/undo through the `Board` trait
//!
//! Node counts are the standard perft values; every line also checks that
//! the position is restored bit-for-bit afterwards.

use chess_core::{Board, Position};

fn perft<B: Board>(board: &mut B, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }
    let mut nodes = 0;
    for mv in board.legal_moves() {
        board.make_move(mv);
        nodes += perft(board, depth - 1);
        board.undo_move(mv);
    }
    nodes
}

fn check(fen: &str, depth: u8, expected: u64) {
    let mut pos = Position::from_fen(fen).unwrap();
    let before_fen = pos.fen();
    let before_key = pos.fingerprint();

    assert_eq!(perft(&mut pos, depth), expected, "perft({depth}) of {fen}");
    assert_eq!(pos.fen(), before_fen);
    assert_eq!(pos.fingerprint(), before_key);
}

#[test]
fn perft_startpos() {
    check(
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        3,
        8902,
    );
}

#[test]
fn perft_kiwipete() {
    // Castling, en passant and promotions all show up here
    check(
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        2,
        2039,
    );
}

#[test]
fn perft_rook_endgame() {
    check("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1", 3, 2812);
}

#[test]
fn nested_make_undo_in_lifo_order() {
    let mut pos = Position::startpos();
    let root = pos.fingerprint();

    let first = pos.legal_moves()[0];
    pos.make_move(first);
    let after_first = pos.fingerprint();
    let reply = pos.legal_moves()[0];
    pos.make_move(reply);
    assert_eq!(pos.ply(), 2);

    pos.undo_move(reply);
    assert_eq!(pos.fingerprint(), after_first);
    pos.undo_move(first);
    assert_eq!(pos.fingerprint(), root);
}
