use crate::board::Board;
use crate::types::*;
use log::trace;

pub mod pseudo;

pub use pseudo::{pseudo_legal_moves, GenMode};

#[derive(Debug, Clone, Copy, Default)]
pub struct MoveValidator;

impl MoveValidator {
    pub fn new() -> Self {
        Self
    }

    /// Destinations the piece on `from` may legally move to.
    ///
    /// Empty when `from` is empty or holds a piece not of `color`. Each
    /// pseudo-legal candidate is replayed on a clone and dropped if it leaves
    /// the mover's king in check.
    pub fn legal_moves(&self, board: &Board, from: Position, color: PieceColor) -> Vec<Position> {
        let piece = match board.get_piece(from) {
            Some(piece) if piece.color == color => piece,
            _ => return Vec::new(),
        };

        pseudo_legal_moves(board, from, piece, GenMode::Moves)
            .into_iter()
            .filter(|&to| !self.would_king_be_in_check_after_move(board, from, to, piece))
            .collect()
    }

    pub fn all_legal_moves(&self, board: &Board, color: PieceColor) -> Vec<(Position, Position)> {
        board
            .pieces_of(color)
            .flat_map(|(from, _)| {
                self.legal_moves(board, from, color)
                    .into_iter()
                    .map(move |to| (from, to))
            })
            .collect()
    }

    pub fn has_any_legal_move(&self, board: &Board, color: PieceColor) -> bool {
        board
            .pieces_of(color)
            .any(|(from, _)| !self.legal_moves(board, from, color).is_empty())
    }

    /// Whether `color`'s king stands on a square some enemy piece attacks.
    ///
    /// A board with no king of that color is reported as not in check.
    pub fn is_king_in_check(&self, board: &Board, color: PieceColor) -> bool {
        match board.find_king(color) {
            Some(king) => self.is_square_attacked(board, king, color.opposite()),
            None => false,
        }
    }

    /// Whether any `by` piece's attack-mode set contains `target`.
    pub fn is_square_attacked(&self, board: &Board, target: Position, by: PieceColor) -> bool {
        board
            .pieces_of(by)
            .any(|(from, piece)| pseudo_legal_moves(board, from, piece, GenMode::Attacks).contains(&target))
    }

    pub fn attacked_squares(&self, board: &Board, by: PieceColor) -> Vec<Position> {
        let mut attacked = [[false; 8]; 8];
        for (from, piece) in board.pieces_of(by) {
            for pos in pseudo_legal_moves(board, from, piece, GenMode::Attacks) {
                attacked[pos.row as usize][pos.col as usize] = true;
            }
        }
        Position::all()
            .filter(|pos| attacked[pos.row as usize][pos.col as usize])
            .collect()
    }

    /// Game state for the side to move.
    ///
    /// | in check | has a move | state     |
    /// |----------|------------|-----------|
    /// | yes      | yes        | Check     |
    /// | yes      | no         | Checkmate |
    /// | no       | yes        | Ongoing   |
    /// | no       | no         | Stalemate |
    pub fn evaluate(&self, board: &Board, to_move: PieceColor) -> GameState {
        let in_check = self.is_king_in_check(board, to_move);
        let any_moves = self.has_any_legal_move(board, to_move);
        trace!("evaluate {}: in_check={} any_moves={}", to_move, in_check, any_moves);

        match (in_check, any_moves) {
            (true, true) => GameState::Check,
            (true, false) => GameState::Checkmate,
            (false, true) => GameState::Ongoing,
            (false, false) => GameState::Stalemate,
        }
    }

    fn would_king_be_in_check_after_move(
        &self,
        board: &Board,
        from: Position,
        to: Position,
        piece: Piece,
    ) -> bool {
        let mut copy = board.clone();
        copy.apply_move(from, to, piece);
        self.is_king_in_check(&copy, piece.color)
    }
}
