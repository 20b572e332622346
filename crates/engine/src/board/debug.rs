use super::Board;
use crate::types::*;
use std::fmt;

impl Board {
    /// One line per row, pieces as FEN letters and `.` for empty squares.
    pub fn debug_rows(&self) -> Vec<String> {
        (0..8)
            .map(|row| {
                let cells: Vec<String> = (0..8)
                    .map(|col| {
                        self.get_piece(Position::new(row, col))
                            .map_or('.', |piece| piece.symbol())
                            .to_string()
                    })
                    .collect();
                format!("{} {}", 8 - row, cells.join(" "))
            })
            .collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.debug_rows() {
            writeln!(f, "{}", line)?;
        }
        write!(f, "  a b c d e f g h")
    }
}
