use super::Board;
use crate::error::{EngineError, EngineResult};
use crate::types::*;

pub const START_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

impl Board {
    /// Parse the piece-placement field of a FEN string. The first rank listed
    /// (rank 8) becomes row 0.
    pub fn from_placement(placement: &str) -> EngineResult<Self> {
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(EngineError::InvalidFen(format!(
                "piece placement must have 8 ranks, found {}",
                ranks.len()
            )));
        }

        let mut board = Board::empty();
        for (row, rank_str) in ranks.iter().enumerate() {
            let mut col: i8 = 0;

            for ch in rank_str.chars() {
                if let Some(skip) = ch.to_digit(10) {
                    if !(1..=8).contains(&skip) {
                        return Err(EngineError::InvalidFen(format!("bad empty-square count '{}'", ch)));
                    }
                    col += skip as i8;
                } else {
                    let piece = Piece::from_symbol(ch)
                        .ok_or_else(|| EngineError::InvalidFen(format!("unknown piece '{}'", ch)))?;
                    if col >= 8 {
                        return Err(EngineError::InvalidFen(format!("too many pieces in rank '{}'", rank_str)));
                    }
                    board.set_piece(Position::new(row as i8, col), Some(piece));
                    col += 1;
                }

                if col > 8 {
                    return Err(EngineError::InvalidFen(format!("rank '{}' overflows the board", rank_str)));
                }
            }

            if col != 8 {
                return Err(EngineError::InvalidFen(format!("incomplete rank '{}'", rank_str)));
            }
        }

        Ok(board)
    }

    pub fn to_placement(&self) -> String {
        let mut out = String::with_capacity(72);

        for row in 0..8 {
            if row > 0 {
                out.push('/');
            }
            let mut empty = 0;
            for col in 0..8 {
                match self.get_piece(Position::new(row, col)) {
                    Some(piece) => {
                        if empty > 0 {
                            out.push_str(&empty.to_string());
                            empty = 0;
                        }
                        out.push(piece.symbol());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
        }

        out
    }
}

/// Parse the side-to-move field of a FEN string; absent means white.
pub fn parse_side_to_move(field: Option<&str>) -> EngineResult<PieceColor> {
    match field {
        None | Some("w") => Ok(PieceColor::White),
        Some("b") => Ok(PieceColor::Black),
        Some(other) => Err(EngineError::InvalidFen(format!("invalid active color '{}'", other))),
    }
}
