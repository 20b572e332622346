pub mod board;
pub mod config;
pub mod error;
pub mod logger;
pub mod perft;
pub mod session;
pub mod types;
pub mod validator;

pub use board::Board;
pub use config::SessionConfig;
pub use error::{EngineError, EngineResult};
pub use logger::ChessLogger;
pub use perft::*;
pub use session::{status_text, GameSession, SilentListener, StatusListener, TapOutcome};
pub use types::*;
pub use validator::MoveValidator;
