use crate::board::fen::parse_side_to_move;
use crate::board::Board;
use crate::config::SessionConfig;
use crate::error::{EngineError, EngineResult};
use crate::logger::ChessLogger;
use crate::types::*;
use crate::validator::MoveValidator;
use log::debug;
use std::fmt;

/// Receives the human-readable status line whenever it may have changed.
pub trait StatusListener {
    fn on_status(&mut self, status: &str);
}

impl<F: FnMut(&str)> StatusListener for F {
    fn on_status(&mut self, status: &str) {
        self(status)
    }
}

/// Listener for hosts that poll `GameSession::status` instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentListener;

impl StatusListener for SilentListener {
    fn on_status(&mut self, _status: &str) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapOutcome {
    /// Nothing changed: the game is over, the tap was off the board, or
    /// nothing was selected and the square held no piece of the side to move.
    Ignored,
    Selected(Position),
    /// Selection switched to another piece of the side to move.
    Reselected(Position),
    Moved(Move),
    /// Tap on a non-legal destination; the selection was cleared.
    Cancelled,
}

pub fn status_text(side_to_move: PieceColor, state: GameState) -> String {
    match state {
        GameState::Ongoing => format!("{} to move", side_to_move),
        GameState::Check => format!("CHECK! {} to move", side_to_move),
        GameState::Checkmate => format!("CHECKMATE! {} wins", side_to_move.opposite()),
        GameState::Stalemate => "Draw by stalemate".to_string(),
    }
}

pub struct GameSession {
    board: Board,
    validator: MoveValidator,
    config: SessionConfig,
    side_to_move: PieceColor,
    selected: Option<Position>,
    legal_destinations: Vec<Position>,
    history: Vec<Move>,
    state: GameState,
    listener: Box<dyn StatusListener>,
    logger: Option<ChessLogger>,
}

impl GameSession {
    pub fn new(listener: impl StatusListener + 'static) -> Self {
        Self::with_config(SessionConfig::default(), listener)
    }

    pub fn with_config(config: SessionConfig, listener: impl StatusListener + 'static) -> Self {
        let mut session = Self::build(config, Box::new(listener), Board::new(), PieceColor::White);
        session.publish_status();
        session
    }

    /// Start from a FEN position. Only the placement and side-to-move fields
    /// are read; the state is evaluated immediately.
    pub fn from_fen(
        fen: &str,
        config: SessionConfig,
        listener: impl StatusListener + 'static,
    ) -> EngineResult<Self> {
        let mut fields = fen.split_whitespace();
        let placement = fields
            .next()
            .ok_or_else(|| EngineError::InvalidFen("empty FEN".to_string()))?;
        let board = Board::from_placement(placement)?;
        let side_to_move = parse_side_to_move(fields.next())?;

        let mut session = Self::build(config, Box::new(listener), board, side_to_move);
        if let Some(logger) = session.logger.as_mut() {
            logger.log(&format!("Position: {}", fen.trim()));
        }
        session.publish_status();
        Ok(session)
    }

    fn build(
        config: SessionConfig,
        listener: Box<dyn StatusListener>,
        board: Board,
        side_to_move: PieceColor,
    ) -> Self {
        let validator = MoveValidator::new();
        let state = validator.evaluate(&board, side_to_move);
        Self {
            board,
            validator,
            config,
            side_to_move,
            selected: None,
            legal_destinations: Vec::new(),
            history: Vec::new(),
            state,
            listener,
            logger: config.game_log.then(ChessLogger::new),
        }
    }

    /// Handle a tap on (row, col).
    ///
    /// The only error is an internal-consistency failure while applying a
    /// move; every kind of unusable tap is reported as an outcome instead.
    pub fn on_square_tapped(&mut self, row: i8, col: i8) -> EngineResult<TapOutcome> {
        if self.state.is_over() {
            return Ok(TapOutcome::Ignored);
        }

        let pos = Position::new(row, col);
        if !pos.is_on_board() {
            return Ok(TapOutcome::Ignored);
        }
        let owns_piece = matches!(self.board.get_piece(pos), Some(p) if p.color == self.side_to_move);

        let Some(selected) = self.selected else {
            if !owns_piece {
                return Ok(TapOutcome::Ignored);
            }
            self.select(pos);
            return Ok(TapOutcome::Selected(pos));
        };

        if owns_piece && pos != selected {
            self.select(pos);
            return Ok(TapOutcome::Reselected(pos));
        }

        if !self.legal_destinations.contains(&pos) {
            debug!("cancel selection of {} (tapped {})", selected, pos);
            self.clear_selection();
            return Ok(TapOutcome::Cancelled);
        }

        let mv = self.board.move_piece(selected, pos)?;
        self.history.push(mv);
        self.clear_selection();
        self.side_to_move = self.side_to_move.opposite();
        self.state = self.validator.evaluate(&self.board, self.side_to_move);
        debug!("move {} -> {:?}, {} to move", mv, self.state, self.side_to_move);

        if let Some(logger) = self.logger.as_mut() {
            logger.log_move(&mv, self.state);
            logger.log_result(self.state, self.side_to_move);
        }
        self.publish_status();
        Ok(TapOutcome::Moved(mv))
    }

    /// Take back the most recent move. Returns the undone move, or None when
    /// there is nothing to undo or the game is frozen in checkmate.
    pub fn undo_last_move(&mut self) -> Option<Move> {
        if self.state == GameState::Checkmate && !self.config.undo_after_checkmate {
            return None;
        }
        let mv = self.history.pop()?;

        self.board.undo_move(&mv);
        self.side_to_move = self.side_to_move.opposite();
        self.clear_selection();
        self.state = if self.config.recompute_state_after_undo {
            self.validator.evaluate(&self.board, self.side_to_move)
        } else {
            GameState::Ongoing
        };
        debug!("undo {} -> {:?}, {} to move", mv, self.state, self.side_to_move);

        if let Some(logger) = self.logger.as_mut() {
            logger.log_undo(&mv);
        }
        self.publish_status();
        Some(mv)
    }

    pub fn reset_game(&mut self) {
        self.board.initialize();
        self.history.clear();
        self.clear_selection();
        self.side_to_move = PieceColor::White;
        self.state = GameState::Ongoing;
        debug!("reset");

        if let Some(logger) = self.logger.as_mut() {
            logger.log_reset();
        }
        self.publish_status();
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn grid(&self) -> &[[Option<Piece>; 8]; 8] {
        self.board.grid()
    }

    pub fn selected(&self) -> Option<Position> {
        self.selected
    }

    pub fn legal_destinations(&self) -> &[Position] {
        &self.legal_destinations
    }

    pub fn side_to_move(&self) -> PieceColor {
        self.side_to_move
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn status(&self) -> String {
        status_text(self.side_to_move, self.state)
    }

    pub fn game_log(&self) -> Option<&ChessLogger> {
        self.logger.as_ref()
    }

    pub fn game_log_mut(&mut self) -> Option<&mut ChessLogger> {
        self.logger.as_mut()
    }

    fn select(&mut self, pos: Position) {
        self.selected = Some(pos);
        self.legal_destinations = self.validator.legal_moves(&self.board, pos, self.side_to_move);
        debug!("select {} ({} legal destinations)", pos, self.legal_destinations.len());
    }

    fn clear_selection(&mut self) {
        self.selected = None;
        self.legal_destinations.clear();
    }

    fn publish_status(&mut self) {
        let status = self.status();
        self.listener.on_status(&status);
    }
}

impl fmt::Debug for GameSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameSession")
            .field("side_to_move", &self.side_to_move)
            .field("state", &self.state)
            .field("selected", &self.selected)
            .field("legal_destinations", &self.legal_destinations)
            .field("history_len", &self.history.len())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
