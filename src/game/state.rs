use std::fmt;

/// Screen the game is currently on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    Start,
    Playing,
    Lost,
    /// Terminal; the process exits once this is reached
    Exiting,
}

impl GameState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameState::Exiting)
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GameState::Start => "start",
            GameState::Playing => "playing",
            GameState::Lost => "lost",
            GameState::Exiting => "exiting",
        };
        f.write_str(name)
    }
}

/// Why a play session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LossReason {
    /// Snake left the window
    Wall,
    /// Snake ran into itself
    SelfCollision,
}

/// Outcome of a finished play session, handed back to the driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionResult {
    /// Where the state machine goes next (`Lost` or `Exiting`)
    pub next_state: GameState,
    /// Score at the moment the session ended
    pub score: u32,
    /// Set when the session ended in a loss
    pub loss: Option<LossReason>,
}

impl SessionResult {
    pub fn lost(score: u32, reason: LossReason) -> Self {
        Self {
            next_state: GameState::Lost,
            score,
            loss: Some(reason),
        }
    }

    pub fn exited(score: u32) -> Self {
        Self {
            next_state: GameState::Exiting,
            score,
            loss: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_exiting_is_terminal() {
        assert!(GameState::Exiting.is_terminal());
        assert!(!GameState::Start.is_terminal());
        assert!(!GameState::Playing.is_terminal());
        assert!(!GameState::Lost.is_terminal());
    }

    #[test]
    fn test_session_results() {
        let lost = SessionResult::lost(4, LossReason::Wall);
        assert_eq!(lost.next_state, GameState::Lost);
        assert_eq!(lost.loss, Some(LossReason::Wall));

        let exited = SessionResult::exited(2);
        assert_eq!(exited.next_state, GameState::Exiting);
        assert_eq!(exited.score, 2);
        assert_eq!(exited.loss, None);
    }
}
