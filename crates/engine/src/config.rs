/// Behavior switches for a `GameSession`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Re-evaluate check/stalemate for the restored position after an undo.
    /// When off, undo forces the state back to `Ongoing`.
    pub recompute_state_after_undo: bool,
    /// Allow undoing out of a checkmate. Off keeps checkmate frozen until reset.
    pub undo_after_checkmate: bool,
    /// Keep a human-readable game log.
    pub game_log: bool,
}

impl SessionConfig {
    pub fn with_recompute_state_after_undo(mut self, enabled: bool) -> Self {
        self.recompute_state_after_undo = enabled;
        self
    }

    pub fn with_undo_after_checkmate(mut self, enabled: bool) -> Self {
        self.undo_after_checkmate = enabled;
        self
    }

    pub fn with_game_log(mut self, enabled: bool) -> Self {
        self.game_log = enabled;
        self
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            recompute_state_after_undo: true,
            undo_after_checkmate: false,
            game_log: true,
        }
    }
}
