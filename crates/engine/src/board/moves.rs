use super::Board;
use crate::error::{EngineError, EngineResult};
use crate::types::*;

impl Board {
    /// Apply a raw move with no legality check.
    ///
    /// Whatever sits on `to` is captured. A pawn landing on its far rank is
    /// replaced by a queen of its color; the returned record keeps the pawn so
    /// that `undo_move` can restore it.
    pub fn move_piece(&mut self, from: Position, to: Position) -> EngineResult<Move> {
        let moving_piece = self
            .get_piece(from)
            .ok_or(EngineError::NoPieceAtSquare { position: from })?;
        Ok(self.apply_move(from, to, moving_piece))
    }

    /// `move_piece` for a caller that has already read `moving_piece` off `from`.
    pub(crate) fn apply_move(&mut self, from: Position, to: Position, moving_piece: Piece) -> Move {
        debug_assert_eq!(self.get_piece(from), Some(moving_piece));
        let captured_piece = self.get_piece(to);

        let is_promotion =
            moving_piece.kind == PieceType::Pawn && to.row == moving_piece.color.promotion_row();
        let placed = if is_promotion {
            Piece::new(PieceType::Queen, moving_piece.color)
        } else {
            moving_piece
        };

        self.set_piece(to, Some(placed));
        self.set_piece(from, None);

        Move {
            from,
            to,
            moved_piece: moving_piece,
            captured_piece,
            is_promotion,
        }
    }

    /// Exact inverse of `move_piece`, valid only for the most recently applied move.
    pub fn undo_move(&mut self, mv: &Move) {
        self.set_piece(mv.from, Some(mv.moved_piece));
        self.set_piece(mv.to, mv.captured_piece);
    }
}
