use crate::error::EngineError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const BOARD_SIZE: i8 = 8;

/// Zero-based board coordinate. Row 0 is black's back rank, col 0 is the a-file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPosition")]
pub struct Position {
    pub row: i8,
    pub col: i8,
}

#[derive(Deserialize)]
struct RawPosition {
    row: i8,
    col: i8,
}

impl TryFrom<RawPosition> for Position {
    type Error = EngineError;

    fn try_from(raw: RawPosition) -> Result<Self, Self::Error> {
        let pos = Position::new(raw.row, raw.col);
        if pos.is_on_board() {
            Ok(pos)
        } else {
            Err(EngineError::InvalidSquare(format!("({}, {})", raw.row, raw.col)))
        }
    }
}

impl Position {
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    pub fn is_on_board(&self) -> bool {
        (0..BOARD_SIZE).contains(&self.row) && (0..BOARD_SIZE).contains(&self.col)
    }

    /// Position shifted by (dr, dc), or None when it falls off the board.
    pub fn offset(&self, dr: i8, dc: i8) -> Option<Position> {
        let target = Position::new(self.row.checked_add(dr)?, self.col.checked_add(dc)?);
        target.is_on_board().then_some(target)
    }

    pub fn to_algebraic(&self) -> Option<String> {
        if !self.is_on_board() {
            return None;
        }
        let file = (b'a' + self.col as u8) as char;
        let rank = (b'8' - self.row as u8) as char;
        Some(format!("{}{}", file, rank))
    }

    pub fn from_algebraic(s: &str) -> Option<Position> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let col = bytes[0].wrapping_sub(b'a') as i8;
        let row = b'8'.wrapping_sub(bytes[1]) as i8;
        let pos = Position::new(row, col);
        pos.is_on_board().then_some(pos)
    }

    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Position::new(row, col)))
    }
}

impl FromStr for Position {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::from_algebraic(s.trim()).ok_or_else(|| EngineError::InvalidSquare(s.to_string()))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_algebraic() {
            Some(square) => write!(f, "{}", square),
            None => write!(f, "({}, {})", self.row, self.col),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceType {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceType {
    pub fn symbol(&self) -> char {
        match self {
            PieceType::Pawn => 'p',
            PieceType::Knight => 'n',
            PieceType::Bishop => 'b',
            PieceType::Rook => 'r',
            PieceType::Queen => 'q',
            PieceType::King => 'k',
        }
    }

    pub fn from_symbol(ch: char) -> Option<Self> {
        match ch.to_ascii_lowercase() {
            'p' => Some(PieceType::Pawn),
            'n' => Some(PieceType::Knight),
            'b' => Some(PieceType::Bishop),
            'r' => Some(PieceType::Rook),
            'q' => Some(PieceType::Queen),
            'k' => Some(PieceType::King),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceColor {
    White,
    Black,
}

impl PieceColor {
    pub fn opposite(&self) -> PieceColor {
        match self {
            PieceColor::White => PieceColor::Black,
            PieceColor::Black => PieceColor::White,
        }
    }

    /// Row step for a pawn of this color moving forward.
    pub fn forward(&self) -> i8 {
        match self {
            PieceColor::White => -1,
            PieceColor::Black => 1,
        }
    }

    pub fn pawn_start_row(&self) -> i8 {
        match self {
            PieceColor::White => 6,
            PieceColor::Black => 1,
        }
    }

    pub fn promotion_row(&self) -> i8 {
        match self {
            PieceColor::White => 0,
            PieceColor::Black => 7,
        }
    }

    pub fn back_row(&self) -> i8 {
        match self {
            PieceColor::White => 7,
            PieceColor::Black => 0,
        }
    }
}

impl fmt::Display for PieceColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceColor::White => write!(f, "White"),
            PieceColor::Black => write!(f, "Black"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceType,
    pub color: PieceColor,
}

impl Piece {
    pub const fn new(kind: PieceType, color: PieceColor) -> Self {
        Self { kind, color }
    }

    pub fn is(&self, kind: PieceType, color: PieceColor) -> bool {
        self.kind == kind && self.color == color
    }

    /// FEN letter: uppercase for white.
    pub fn symbol(&self) -> char {
        let ch = self.kind.symbol();
        match self.color {
            PieceColor::White => ch.to_ascii_uppercase(),
            PieceColor::Black => ch,
        }
    }

    pub fn from_symbol(ch: char) -> Option<Self> {
        let kind = PieceType::from_symbol(ch)?;
        let color = if ch.is_ascii_uppercase() { PieceColor::White } else { PieceColor::Black };
        Some(Piece::new(kind, color))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Square {
    pub position: Position,
    pub piece: Option<Piece>,
}

/// Record of an applied move. `moved_piece` is the piece before promotion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub from: Position,
    pub to: Position,
    pub moved_piece: Piece,
    pub captured_piece: Option<Piece>,
    pub is_promotion: bool,
}

impl Move {
    pub fn is_capture(&self) -> bool {
        self.captured_piece.is_some()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = if self.is_capture() { 'x' } else { '-' };
        write!(f, "{}{}{}", self.from, sep, self.to)?;
        if self.is_promotion {
            write!(f, "=Q")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameState {
    Ongoing,
    Check,
    Checkmate,
    Stalemate,
}

impl GameState {
    pub fn is_over(&self) -> bool {
        matches!(self, GameState::Checkmate | GameState::Stalemate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_rejects_off_board_targets() {
        let corner = Position::new(0, 0);
        assert_eq!(corner.offset(-1, 0), None);
        assert_eq!(corner.offset(0, -1), None);
        assert_eq!(corner.offset(1, 2), Some(Position::new(1, 2)));
        assert_eq!(Position::new(7, 7).offset(1, 1), None);
    }

    #[test]
    fn algebraic_maps_row_zero_to_rank_eight() {
        assert_eq!(Position::new(0, 0).to_algebraic().as_deref(), Some("a8"));
        assert_eq!(Position::new(7, 4).to_algebraic().as_deref(), Some("e1"));
        assert_eq!(Position::from_algebraic("h1"), Some(Position::new(7, 7)));
        assert_eq!(Position::from_algebraic("e4"), Some(Position::new(4, 4)));
        assert_eq!(Position::from_algebraic("i9"), None);
        assert_eq!(Position::from_algebraic("e"), None);
        assert!("z0".parse::<Position>().is_err());
        assert_eq!("d2".parse::<Position>().ok(), Some(Position::new(6, 3)));
    }

    #[test]
    fn off_board_positions_have_no_square_name() {
        assert_eq!(Position::new(-1, 0).to_algebraic(), None);
        assert_eq!(Position::new(0, 8).to_algebraic(), None);
        assert_eq!(Position::new(i8::MIN, i8::MAX).to_algebraic(), None);
        assert_eq!(Position::new(-1, 0).to_string(), "(-1, 0)");
    }

    #[test]
    fn all_positions_cover_the_board_once() {
        let all: Vec<Position> = Position::all().collect();
        assert_eq!(all.len(), 64);
        assert_eq!(all[0], Position::new(0, 0));
        assert_eq!(all[63], Position::new(7, 7));
        assert!(all.iter().all(Position::is_on_board));
    }

    #[test]
    fn piece_symbols() {
        let wq = Piece::new(PieceType::Queen, PieceColor::White);
        assert_eq!(wq.symbol(), 'Q');
        assert_eq!(Piece::from_symbol('n'), Some(Piece::new(PieceType::Knight, PieceColor::Black)));
        assert_eq!(Piece::from_symbol('x'), None);
    }

    #[test]
    fn move_notation_marks_captures_and_promotions() {
        let mv = Move {
            from: Position::new(1, 4),
            to: Position::new(0, 3),
            moved_piece: Piece::new(PieceType::Pawn, PieceColor::White),
            captured_piece: Some(Piece::new(PieceType::Rook, PieceColor::Black)),
            is_promotion: true,
        };
        assert_eq!(mv.to_string(), "e7xd8=Q");
    }

    #[test]
    fn terminal_states() {
        assert!(GameState::Checkmate.is_over());
        assert!(GameState::Stalemate.is_over());
        assert!(!GameState::Check.is_over());
        assert!(!GameState::Ongoing.is_over());
    }
}
