pub use cozy_chess::{Color, Square};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    pub fn idx(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    pub fn uci_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }
}

impl From<cozy_chess::Piece> for PieceKind {
    fn from(piece: cozy_chess::Piece) -> Self {
        match piece {
            cozy_chess::Piece::Pawn => PieceKind::Pawn,
            cozy_chess::Piece::Knight => PieceKind::Knight,
            cozy_chess::Piece::Bishop => PieceKind::Bishop,
            cozy_chess::Piece::Rook => PieceKind::Rook,
            cozy_chess::Piece::Queen => PieceKind::Queen,
            cozy_chess::Piece::King => PieceKind::King,
        }
    }
}

impl From<PieceKind> for cozy_chess::Piece {
    fn from(kind: PieceKind) -> Self {
        match kind {
            PieceKind::Pawn => cozy_chess::Piece::Pawn,
            PieceKind::Knight => cozy_chess::Piece::Knight,
            PieceKind::Bishop => cozy_chess::Piece::Bishop,
            PieceKind::Rook => cozy_chess::Piece::Rook,
            PieceKind::Queen => cozy_chess::Piece::Queen,
            PieceKind::King => cozy_chess::Piece::King,
        }
    }
}

/// A legal move as produced by a [`Board`](crate::Board).
///
/// `to` is always the square the moving piece lands on, so castling reports
/// the king's destination rather than the rook it jumps over.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub piece: PieceKind,
    /// Kind of the captured piece (a pawn for en passant)
    pub capture: Option<PieceKind>,
    pub promotion: Option<PieceKind>,
    /// Encoding the backing rules engine replays
    pub(crate) raw: cozy_chess::Move,
}

impl Move {
    /// Quiet move. Rules engines and test doubles refine it with
    /// [`Move::capturing`] and [`Move::promoting`].
    pub fn new(from: Square, to: Square, piece: PieceKind) -> Self {
        Self {
            from,
            to,
            piece,
            capture: None,
            promotion: None,
            raw: cozy_chess::Move {
                from,
                to,
                promotion: None,
            },
        }
    }

    pub fn capturing(mut self, captured: PieceKind) -> Self {
        self.capture = Some(captured);
        self
    }

    pub fn promoting(mut self, to: PieceKind) -> Self {
        self.promotion = Some(to);
        self.raw.promotion = Some(to.into());
        self
    }

    pub fn is_capture(&self) -> bool {
        self.capture.is_some()
    }

    pub fn is_promotion(&self) -> bool {
        self.promotion.is_some()
    }
}
