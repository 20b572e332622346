use crate::board::Board;
use crate::types::*;

const ORTHOGONAL: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const DIAGONAL: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1), (2, -1), (-2, 1), (-2, -1),
    (1, 2), (1, -2), (-1, 2), (-1, -2),
];
const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1), (0, 1),
    (1, -1), (1, 0), (1, 1),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenMode {
    /// Destinations the piece may move to, ignoring own-king safety.
    Moves,
    /// Squares the piece threatens. Differs from `Moves` only for pawns.
    Attacks,
}

pub fn pseudo_legal_moves(board: &Board, from: Position, piece: Piece, mode: GenMode) -> Vec<Position> {
    match piece.kind {
        PieceType::Pawn => pawn_moves(board, from, piece.color, mode),
        PieceType::Knight => step_moves(board, from, piece.color, &KNIGHT_OFFSETS),
        PieceType::King => step_moves(board, from, piece.color, &KING_OFFSETS),
        PieceType::Rook => slide_moves(board, from, piece.color, &ORTHOGONAL),
        PieceType::Bishop => slide_moves(board, from, piece.color, &DIAGONAL),
        PieceType::Queen => {
            let mut moves = slide_moves(board, from, piece.color, &ORTHOGONAL);
            moves.extend(slide_moves(board, from, piece.color, &DIAGONAL));
            moves
        }
    }
}

fn is_enemy(board: &Board, pos: Position, color: PieceColor) -> bool {
    matches!(board.get_piece(pos), Some(p) if p.color != color)
}

fn pawn_moves(board: &Board, from: Position, color: PieceColor, mode: GenMode) -> Vec<Position> {
    let mut moves = Vec::new();
    let dir = color.forward();

    if mode == GenMode::Moves {
        if let Some(one) = from.offset(dir, 0).filter(|&p| board.is_empty(p)) {
            moves.push(one);

            if from.row == color.pawn_start_row() {
                if let Some(two) = from.offset(2 * dir, 0).filter(|&p| board.is_empty(p)) {
                    moves.push(two);
                }
            }
        }
    }

    for dc in [-1, 1] {
        let Some(target) = from.offset(dir, dc) else {
            continue;
        };
        // Pawns threaten both forward diagonals even when empty.
        if mode == GenMode::Attacks || is_enemy(board, target, color) {
            moves.push(target);
        }
    }

    moves
}

fn step_moves(board: &Board, from: Position, color: PieceColor, offsets: &[(i8, i8)]) -> Vec<Position> {
    offsets
        .iter()
        .filter_map(|&(dr, dc)| from.offset(dr, dc))
        .filter(|&pos| board.is_empty(pos) || is_enemy(board, pos, color))
        .collect()
}

fn slide_moves(board: &Board, from: Position, color: PieceColor, directions: &[(i8, i8)]) -> Vec<Position> {
    let mut moves = Vec::new();

    for &(dr, dc) in directions {
        let mut current = from;
        while let Some(next) = current.offset(dr, dc) {
            match board.get_piece(next) {
                None => moves.push(next),
                Some(blocker) => {
                    if blocker.color != color {
                        moves.push(next);
                    }
                    break;
                }
            }
            current = next;
        }
    }

    moves
}
