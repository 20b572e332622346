use crate::types::*;

pub mod debug;
pub mod fen;
pub mod moves;

const BACK_RANK: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

/// 8x8 piece placement. Knows nothing about legality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    grid: [[Option<Piece>; 8]; 8],
}

impl Board {
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.initialize();
        board
    }

    pub fn empty() -> Self {
        Self { grid: [[None; 8]; 8] }
    }

    pub fn initialize(&mut self) {
        self.grid = [[None; 8]; 8];

        for color in [PieceColor::White, PieceColor::Black] {
            let pawn_row = color.pawn_start_row();
            let back_row = color.back_row();
            for col in 0..8 {
                self.set_piece(Position::new(pawn_row, col), Some(Piece::new(PieceType::Pawn, color)));
                self.set_piece(Position::new(back_row, col), Some(Piece::new(BACK_RANK[col as usize], color)));
            }
        }
    }

    // Off-board positions are a caller bug; indexing panics on them.
    pub fn get_piece(&self, pos: Position) -> Option<Piece> {
        debug_assert!(pos.is_on_board(), "off-board read at {:?}", pos);
        self.grid[pos.row as usize][pos.col as usize]
    }

    pub fn set_piece(&mut self, pos: Position, piece: Option<Piece>) {
        debug_assert!(pos.is_on_board(), "off-board write at {:?}", pos);
        self.grid[pos.row as usize][pos.col as usize] = piece;
    }

    pub fn is_empty(&self, pos: Position) -> bool {
        self.get_piece(pos).is_none()
    }

    /// Occupancy snapshot for renderers, indexed `[row][col]`.
    pub fn grid(&self) -> &[[Option<Piece>; 8]; 8] {
        &self.grid
    }

    pub fn squares(&self) -> impl Iterator<Item = Square> + '_ {
        Position::all().map(move |position| Square {
            position,
            piece: self.get_piece(position),
        })
    }

    pub fn pieces_of(&self, color: PieceColor) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.squares().filter_map(move |sq| match sq.piece {
            Some(piece) if piece.color == color => Some((sq.position, piece)),
            _ => None,
        })
    }

    /// First king of `color` scanning rows 0..8, then columns 0..8.
    pub fn find_king(&self, color: PieceColor) -> Option<Position> {
        self.pieces_of(color)
            .find(|(_, piece)| piece.kind == PieceType::King)
            .map(|(pos, _)| pos)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(board: &Board, kind: PieceType, color: PieceColor) -> usize {
        board
            .pieces_of(color)
            .filter(|(_, piece)| piece.kind == kind)
            .count()
    }

    #[test]
    fn initial_layout() {
        let board = Board::new();

        for col in 0..8 {
            assert_eq!(
                board.get_piece(Position::new(6, col)),
                Some(Piece::new(PieceType::Pawn, PieceColor::White))
            );
            assert_eq!(
                board.get_piece(Position::new(1, col)),
                Some(Piece::new(PieceType::Pawn, PieceColor::Black))
            );
            assert_eq!(
                board.get_piece(Position::new(7, col)),
                Some(Piece::new(BACK_RANK[col as usize], PieceColor::White))
            );
            assert_eq!(
                board.get_piece(Position::new(0, col)),
                Some(Piece::new(BACK_RANK[col as usize], PieceColor::Black))
            );
        }

        for row in 2..6 {
            for col in 0..8 {
                assert!(board.is_empty(Position::new(row, col)));
            }
        }

        for color in [PieceColor::White, PieceColor::Black] {
            assert_eq!(count(&board, PieceType::Pawn, color), 8);
            assert_eq!(count(&board, PieceType::King, color), 1);
            assert_eq!(board.pieces_of(color).count(), 16);
        }
        assert_eq!(board.get_piece(Position::new(7, 3)).map(|p| p.kind), Some(PieceType::Queen));
        assert_eq!(board.get_piece(Position::new(7, 4)).map(|p| p.kind), Some(PieceType::King));
    }

    #[test]
    fn initialize_clears_previous_placement() {
        let mut board = Board::new();
        let stray = Position::new(4, 4);
        board.set_piece(stray, Some(Piece::new(PieceType::Queen, PieceColor::Black)));
        board.set_piece(Position::new(7, 4), None);

        board.initialize();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn clone_is_independent() {
        let board = Board::new();
        let mut copy = board.clone();
        copy.set_piece(Position::new(6, 4), None);

        assert!(copy.is_empty(Position::new(6, 4)));
        assert!(!board.is_empty(Position::new(6, 4)));
    }

    #[test]
    fn find_king_scans_row_major() {
        let mut board = Board::empty();
        assert_eq!(board.find_king(PieceColor::White), None);

        board.set_piece(Position::new(5, 2), Some(Piece::new(PieceType::King, PieceColor::White)));
        board.set_piece(Position::new(3, 6), Some(Piece::new(PieceType::King, PieceColor::White)));
        assert_eq!(board.find_king(PieceColor::White), Some(Position::new(3, 6)));
        assert_eq!(board.find_king(PieceColor::Black), None);
    }

    #[test]
    fn squares_are_row_major() {
        let board = Board::new();
        let squares: Vec<Square> = board.squares().collect();
        assert_eq!(squares.len(), 64);
        assert_eq!(squares[4].position, Position::new(0, 4));
        assert_eq!(squares[4].piece, Some(Piece::new(PieceType::King, PieceColor::Black)));
    }
}
