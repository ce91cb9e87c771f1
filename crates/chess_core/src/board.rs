use crate::attacks::is_square_attacked;
use crate::error::ChessError;
use crate::types::*;
use cozy_chess::{File, Piece};

/// Capabilities a move selector needs from a rules engine.
///
/// `make_move`/`undo_move` form a stack: undo must be called with the most
/// recently made move, and a full make/undo sequence restores the original
/// position exactly.
pub trait Board {
    /// Legal moves for the side to move, in a stable order.
    fn legal_moves(&self) -> Vec<Move>;
    fn make_move(&mut self, mv: Move);
    fn undo_move(&mut self, mv: Move);
    /// Whether the side to move is checkmated.
    fn is_checkmate(&self) -> bool;
    /// Whether the side *not* to move attacks `sq`.
    fn square_is_attacked_by_opponent(&self, sq: Square) -> bool;
    /// Comparable key of the current position.
    fn fingerprint(&self) -> u64;
}

/// A chess position backed by cozy-chess.
///
/// cozy-chess is copy-make, so each applied move keeps the previous board on
/// a history stack and undo simply pops it.
#[derive(Clone, Debug)]
pub struct Position {
    board: cozy_chess::Board,
    history: Vec<(Move, cozy_chess::Board)>,
}

impl Position {
    pub fn startpos() -> Self {
        Self::from_board(cozy_chess::Board::default())
    }

    pub fn from_fen(fen: &str) -> Result<Self, ChessError> {
        let board = cozy_chess::Board::from_fen(fen.trim(), false).map_err(|e| {
            ChessError::InvalidFen {
                fen: fen.to_string(),
                reason: format!("{e:?}"),
            }
        })?;
        Ok(Self::from_board(board))
    }

    pub fn from_board(board: cozy_chess::Board) -> Self {
        Self {
            board,
            history: Vec::new(),
        }
    }

    pub fn side_to_move(&self) -> Color {
        self.board.side_to_move()
    }

    pub fn in_check(&self) -> bool {
        !self.board.checkers().is_empty()
    }

    pub fn fen(&self) -> String {
        self.board.to_string()
    }

    /// Number of moves currently applied on top of the root position.
    pub fn ply(&self) -> usize {
        self.history.len()
    }

    /// Forgets the make/undo history, making the current position the root.
    pub fn commit(&mut self) {
        self.history.clear();
    }

    fn convert(&self, raw: cozy_chess::Move, piece: Piece) -> Move {
        let us = self.board.side_to_move();
        let kind = PieceKind::from(piece);

        // cozy-chess encodes castling as the king capturing its own rook
        if kind == PieceKind::King && self.board.colors(us).has(raw.to) {
            let file = if raw.to.file() as u8 > raw.from.file() as u8 {
                File::G
            } else {
                File::C
            };
            let mut mv = Move::new(raw.from, Square::new(file, raw.from.rank()), kind);
            mv.raw = raw;
            return mv;
        }

        let mut mv = Move::new(raw.from, raw.to, kind);
        mv.raw = raw;
        mv.promotion = raw.promotion.map(PieceKind::from);
        mv.capture = match self.board.piece_on(raw.to) {
            Some(captured) => Some(captured.into()),
            None if kind == PieceKind::Pawn && raw.from.file() != raw.to.file() => {
                Some(PieceKind::Pawn)
            }
            None => None,
        };
        mv
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::startpos()
    }
}

impl Board for Position {
    fn legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::with_capacity(64);
        self.board.generate_moves(|piece_moves| {
            let piece = piece_moves.piece;
            for raw in piece_moves {
                moves.push(self.convert(raw, piece));
            }
            false
        });
        moves
    }

    fn make_move(&mut self, mv: Move) {
        let previous = self.board.clone();
        self.board.play_unchecked(mv.raw);
        self.history.push((mv, previous));
    }

    fn undo_move(&mut self, mv: Move) {
        let entry = self.history.pop();
        debug_assert!(
            matches!(entry, Some((made, _)) if made == mv),
            "undo_move called out of order"
        );
        if let Some((_, previous)) = entry {
            self.board = previous;
        }
    }

    fn is_checkmate(&self) -> bool {
        // generate_moves returns true only when the listener aborts on a move
        self.in_check() && !self.board.generate_moves(|_| true)
    }

    fn square_is_attacked_by_opponent(&self, sq: Square) -> bool {
        is_square_attacked(&self.board, sq, !self.board.side_to_move())
    }

    fn fingerprint(&self) -> u64 {
        self.board.hash()
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
