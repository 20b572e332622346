use crate::error::EngineResult;
use crate::types::{GameState, Move, PieceColor};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Human-readable record of a game: one line per move, undo, reset and
/// terminal result, buffered in memory until saved.
#[derive(Debug)]
pub struct ChessLogger {
    pub log_buffer: String,
    move_count: u32,
}

impl ChessLogger {
    pub fn new() -> Self {
        let mut logger = Self {
            log_buffer: String::with_capacity(4 * 1024),
            move_count: 0,
        };

        logger.log("=== Game Log Started ===");
        logger.log(&format!("Date: {}", chrono::Local::now().format("%m/%d/%Y %H:%M:%S")));
        logger
    }

    pub fn log(&mut self, message: &str) {
        self.log_buffer.push_str(message);
        self.log_buffer.push('\n');
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn log_move(&mut self, mv: &Move, state: GameState) {
        self.move_count += 1;
        let suffix = match state {
            GameState::Check => "+",
            GameState::Checkmate => "#",
            GameState::Ongoing | GameState::Stalemate => "",
        };
        self.log(&format!(
            "{}. {} {}{}",
            self.move_count,
            mv.moved_piece.color,
            mv,
            suffix
        ));
    }

    pub fn log_undo(&mut self, mv: &Move) {
        self.move_count = self.move_count.saturating_sub(1);
        self.log(&format!("UNDO: {}", mv));
    }

    pub fn log_reset(&mut self) {
        self.move_count = 0;
        self.log("--- New game ---");
    }

    /// Records a finished game; `to_move` is the side left without a move.
    pub fn log_result(&mut self, state: GameState, to_move: PieceColor) {
        match state {
            GameState::Checkmate => self.log(&format!("Result: checkmate, {} wins", to_move.opposite())),
            GameState::Stalemate => self.log("Result: draw by stalemate"),
            GameState::Ongoing | GameState::Check => {}
        }
    }

    /// Writes the buffer to `<dir>/<timestamp>.txt` and returns the path.
    pub fn save_to_file(&mut self, dir: impl AsRef<Path>, reason: &str) -> EngineResult<PathBuf> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;

        let now = chrono::Local::now();
        let path = dir.join(format!("{}.txt", now.format("%m_%d_%Y_%H_%M_%S")));

        self.log(&format!("Game ended: {} - saving log", reason));

        let mut file = File::create(&path)?;
        file.write_all(self.log_buffer.as_bytes())?;
        Ok(path)
    }
}

impl Default for ChessLogger {
    fn default() -> Self {
        Self::new()
    }
}
