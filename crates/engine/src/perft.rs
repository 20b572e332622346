use crate::board::Board;
use crate::error::EngineResult;
use crate::types::{PieceColor, Position};
use crate::validator::MoveValidator;
use std::time::Instant;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PerftResult {
    pub nodes: u64,
    pub captures: u64,
    pub promotions: u64,
    pub checks: u64,
    pub checkmates: u64,
    pub time_ms: u128,
}

impl PerftResult {
    pub fn nodes_per_second(&self) -> u64 {
        if self.time_ms == 0 {
            return 0;
        }
        (self.nodes * 1000) / (self.time_ms as u64)
    }
}

/// Known leaf counts from the standard start position. Castling and en
/// passant first become possible at depth 5, so these hold without them.
pub const START_POSITION_COUNTS: &[(u32, u64)] = &[(1, 20), (2, 400), (3, 8_902), (4, 197_281)];

/// Count leaf nodes `depth` plies below `board` with `to_move` to play.
///
/// Moves are applied and undone on `board` in place; it holds the same
/// placement again when this returns.
pub fn perft(board: &mut Board, to_move: PieceColor, depth: u32) -> EngineResult<u64> {
    if depth == 0 {
        return Ok(1);
    }

    let validator = MoveValidator::new();
    let moves = validator.all_legal_moves(board, to_move);
    if depth == 1 {
        return Ok(moves.len() as u64);
    }

    let mut nodes = 0;
    for (from, to) in moves {
        let mv = board.move_piece(from, to)?;
        nodes += perft(board, to_move.opposite(), depth - 1)?;
        board.undo_move(&mv);
    }
    Ok(nodes)
}

/// Perft that also classifies the moves made at the last ply.
pub fn perft_detailed(board: &mut Board, to_move: PieceColor, depth: u32) -> EngineResult<PerftResult> {
    let start_time = Instant::now();
    let mut result = PerftResult::default();
    detailed(board, to_move, depth, &MoveValidator::new(), &mut result)?;
    result.time_ms = start_time.elapsed().as_millis();
    Ok(result)
}

fn detailed(
    board: &mut Board,
    to_move: PieceColor,
    depth: u32,
    validator: &MoveValidator,
    result: &mut PerftResult,
) -> EngineResult<()> {
    if depth == 0 {
        result.nodes += 1;
        return Ok(());
    }

    for (from, to) in validator.all_legal_moves(board, to_move) {
        let mv = board.move_piece(from, to)?;

        if depth == 1 {
            if mv.is_capture() {
                result.captures += 1;
            }
            if mv.is_promotion {
                result.promotions += 1;
            }
            if validator.is_king_in_check(board, to_move.opposite()) {
                result.checks += 1;
                if !validator.has_any_legal_move(board, to_move.opposite()) {
                    result.checkmates += 1;
                }
            }
        }
        detailed(board, to_move.opposite(), depth - 1, validator, result)?;

        board.undo_move(&mv);
    }
    Ok(())
}

/// Per-root-move node counts, largest first.
pub fn perft_divide(
    board: &mut Board,
    to_move: PieceColor,
    depth: u32,
) -> EngineResult<Vec<((Position, Position), u64)>> {
    let validator = MoveValidator::new();
    let mut results = Vec::new();

    for (from, to) in validator.all_legal_moves(board, to_move) {
        let mv = board.move_piece(from, to)?;
        let nodes = if depth > 1 {
            perft(board, to_move.opposite(), depth - 1)?
        } else {
            1
        };
        board.undo_move(&mv);
        results.push(((from, to), nodes));
    }

    results.sort_by(|a, b| b.1.cmp(&a.1));
    Ok(results)
}
