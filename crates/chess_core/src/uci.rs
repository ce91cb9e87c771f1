use crate::{board::Board, board::Position, error::ChessError, types::*};
use std::time::Duration;

pub fn move_to_uci(mv: Move) -> String {
    let mut s = format!("{}{}", mv.from, mv.to);
    if let Some(p) = mv.promotion {
        s.push(p.uci_char());
    }
    s
}

pub fn parse_uci_move(pos: &Position, txt: &str) -> Result<Move, ChessError> {
    // We parse and then match against legal moves so capture/castle data is correct.
    let illegal = || ChessError::IllegalMove(txt.to_string());
    if !(4..=5).contains(&txt.len()) || !txt.is_ascii() {
        return Err(illegal());
    }
    let from: Square = txt[0..2].parse().map_err(|_| illegal())?;
    let to: Square = txt[2..4].parse().map_err(|_| illegal())?;
    let promo = match txt.as_bytes().get(4).map(|b| b.to_ascii_lowercase()) {
        None => None,
        Some(b'q') => Some(PieceKind::Queen),
        Some(b'r') => Some(PieceKind::Rook),
        Some(b'b') => Some(PieceKind::Bishop),
        Some(b'n') => Some(PieceKind::Knight),
        Some(_) => return Err(illegal()),
    };

    pos.legal_moves()
        .into_iter()
        .find(|m| m.from == from && m.to == to && m.promotion == promo)
        .ok_or_else(illegal)
}

/// Applies the arguments of a UCI `position` command.
///
/// Supports `startpos` and `fen <fen>`, each optionally followed by
/// `moves ...`. The resulting position becomes the new root.
pub fn set_position_from_uci(pos: &mut Position, args: &[&str]) -> Result<(), ChessError> {
    let moves_at = args.iter().position(|&a| a == "moves").unwrap_or(args.len());
    let mut next = match args.first() {
        None | Some(&"startpos") => Position::startpos(),
        Some(&"fen") => Position::from_fen(&args[1..moves_at].join(" "))?,
        Some(other) => {
            return Err(ChessError::InvalidFen {
                fen: other.to_string(),
                reason: "expected `startpos` or `fen`".to_string(),
            })
        }
    };

    for txt in args.iter().skip(moves_at + 1) {
        let mv = parse_uci_move(&next, txt)?;
        next.make_move(mv);
    }
    next.commit();
    *pos = next;
    Ok(())
}

/// Move budget from the arguments of a UCI `go` command.
///
/// `movetime` wins over the side's remaining clock time; `infinite` or no
/// time fields mean no budget.
pub fn parse_go_budget(args: &[&str], side: Color) -> Option<Duration> {
    let field = |name: &str| -> Option<u64> {
        let idx = args.iter().position(|&a| a == name)?;
        args.get(idx + 1)?.parse().ok()
    };
    if args.contains(&"infinite") {
        return None;
    }
    let own_time = match side {
        Color::White => "wtime",
        Color::Black => "btime",
    };
    field("movetime")
        .or_else(|| field(own_time))
        .map(Duration::from_millis)
}

#[cfg(test)]
#[path = "uci_tests.rs"]
mod uci_tests;
