// Tapping an empty square or a non-legal destination is not an error; the
// session rejects those taps itself.

use crate::types::Position;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    /// A raw board move was requested from an empty square.
    #[error("no piece at source square {position}")]
    NoPieceAtSquare { position: Position },

    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    #[error("invalid square notation: {0}")]
    InvalidSquare(String),

    #[error("failed to write game log: {0}")]
    Io(#[from] std::io::Error),
}

pub type EngineResult<T> = Result<T, EngineError>;
