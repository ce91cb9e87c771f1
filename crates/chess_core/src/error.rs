use thiserror::Error;

/// Errors raised while turning external input into positions and moves.
#[derive(Debug, Error)]
pub enum ChessError {
    #[error("invalid FEN `{fen}`: {reason}")]
    InvalidFen { fen: String, reason: String },

    #[error("illegal or malformed move `{0}`")]
    IllegalMove(String),
}
