use super::*;
use crate::scripted_board::ScriptedBoard;
use chess_core::{Position, Square};

fn find(pos: &Position, from: Square, to: Square) -> Move {
    pos.legal_moves()
        .into_iter()
        .find(|m| m.from == from && m.to == to)
        .unwrap()
}

#[test]
fn test_quiet_move_earns_activity_bonus() {
    let board = ScriptedBoard::new();
    for kind in PieceKind::ALL {
        let mv = Move::new(Square::A1, Square::A2, kind);
        assert_eq!(evaluate_move(&board, &mv), MOVE_VALUES[kind.idx()]);
    }
}

#[test]
fn test_attacked_square_costs_material() {
    let mut board = ScriptedBoard::new();
    board.attacked(&[], Square::D4);

    let queen = Move::new(Square::D1, Square::D4, PieceKind::Queen);
    let pawn = Move::new(Square::D3, Square::D4, PieceKind::Pawn);
    assert_eq!(evaluate_move(&board, &queen), -925);
    assert_eq!(evaluate_move(&board, &pawn), -125);
}

#[test]
fn test_capture_and_promotion_bonuses() {
    let mut board = ScriptedBoard::new();
    board.attacked(&[], Square::B8);

    let capture = Move::new(Square::E4, Square::D5, PieceKind::Pawn).capturing(PieceKind::Queen);
    assert_eq!(evaluate_move(&board, &capture), 100 + 900);

    // Promotion bonus is flat, whatever the piece
    for kind in [PieceKind::Queen, PieceKind::Knight] {
        let promo = Move::new(Square::A7, Square::A8, PieceKind::Pawn).promoting(kind);
        assert_eq!(evaluate_move(&board, &promo), 100 + 800);
    }

    // Capture-promotion onto a defended square
    let promo = Move::new(Square::A7, Square::B8, PieceKind::Pawn)
        .capturing(PieceKind::Rook)
        .promoting(PieceKind::Queen);
    assert_eq!(evaluate_move(&board, &promo), -25 - 100 + 500 + 800);
}

#[test]
fn test_piece_value_of_none_is_zero() {
    assert_eq!(piece_value(None), 0);
    assert_eq!(piece_value(Some(PieceKind::King)), 10000);
}

#[test]
fn test_real_position_trades() {
    // Pawn can take an undefended queen; knight can take a pawn-defended knight
    let pos = Position::from_fen("6k1/8/3p4/3qn3/4P3/5N2/8/6K1 w - - 0 1").unwrap();
    let exd5 = find(&pos, Square::E4, Square::D5);
    let nxe5 = find(&pos, Square::F3, Square::E5);

    assert_eq!(evaluate_move(&pos, &exd5), 1000);
    assert_eq!(evaluate_move(&pos, &nxe5), -25 - 250 + 250);
}
