use super::{
    action::{Action, InputSnapshot},
    config::GameConfig,
    scene::{Fill, Placement, Scene},
    session::{PlaySession, TickOutcome},
    state::{GameState, SessionResult},
};
use crate::metrics::Scoreboard;
use rand::{rngs::StdRng, SeedableRng};
use std::time::Duration;

pub const START_TEXT: &str = "Press Enter to Play.";
pub const LOST_TEXT: &str = "You Lost. Press Enter to try again.";

/// The state machine driving the screens of the game
///
/// Each call to [`GameEngine::tick`] consumes one input snapshot and advances
/// whatever the current screen is. The engine owns the play session while one
/// is running, and the scoreboard across sessions.
pub struct GameEngine {
    config: GameConfig,
    rng: StdRng,
    state: GameState,
    session: Option<PlaySession>,
    scoreboard: Scoreboard,
}

impl GameEngine {
    /// Create a new game engine on the start screen
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Same as `new`, with reproducible treat placement
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, rng: StdRng) -> Self {
        Self {
            config,
            rng,
            state: GameState::Start,
            session: None,
            scoreboard: Scoreboard::new(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_terminal()
    }

    /// The running play session, if any
    pub fn session(&self) -> Option<&PlaySession> {
        self.session.as_ref()
    }

    pub fn session_mut(&mut self) -> Option<&mut PlaySession> {
        self.session.as_mut()
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// How long to wait between ticks in the current state
    pub fn tick_period(&self) -> Duration {
        match self.state {
            GameState::Playing => self.config.play_tick_period(),
            _ => self.config.menu_tick_period(),
        }
    }

    /// Execute one tick and return the state the game is in afterwards
    pub fn tick(&mut self, input: &InputSnapshot) -> GameState {
        let next = match self.state {
            GameState::Start | GameState::Lost => menu_transition(input),
            GameState::Playing => self.tick_playing(input),
            GameState::Exiting => None,
        };

        if let Some(next) = next {
            self.enter(next);
        }
        self.state
    }

    fn tick_playing(&mut self, input: &InputSnapshot) -> Option<GameState> {
        let session = match self.session.as_mut() {
            Some(session) => session,
            None => return Some(GameState::Start),
        };

        match session.tick(input, &self.config, &mut self.rng) {
            TickOutcome::Running { ate_treat } => {
                if ate_treat {
                    log::debug!("treat eaten, score {}", session.score);
                }
                None
            }
            TickOutcome::Finished(result) => Some(self.finish_session(result)),
        }
    }

    fn finish_session(&mut self, result: SessionResult) -> GameState {
        self.session = None;

        if let Some(reason) = result.loss {
            let new_high = self.scoreboard.on_game_over(result.score);
            log::info!(
                "round lost ({:?}) with score {} after {}",
                reason,
                result.score,
                self.scoreboard.format_last_round()
            );
            if new_high {
                log::info!("new high score {}", self.scoreboard.high_score);
            }
        }

        result.next_state
    }

    fn enter(&mut self, next: GameState) {
        if next == self.state {
            return;
        }
        log::debug!("state {} -> {}", self.state, next);

        if next == GameState::Playing {
            self.session = Some(PlaySession::new(&self.config, &mut self.rng));
            self.scoreboard.on_game_start();
        }
        self.state = next;
    }

    /// What the current screen looks like
    pub fn scene(&self) -> Scene {
        match (self.state, &self.session) {
            (GameState::Start, _) => {
                Scene::new().label(START_TEXT, Fill::Red, Placement::Center { row: 0 })
            }
            (GameState::Playing, Some(session)) => session.scene(),
            (GameState::Lost, _) => Scene::new()
                .label(LOST_TEXT, Fill::Red, Placement::Center { row: 0 })
                .label(
                    high_score_text(self.scoreboard.high_score),
                    Fill::Yellow,
                    Placement::Center { row: 2 },
                ),
            _ => Scene::new(),
        }
    }
}

/// Start and lost screens: Cancel wins over Confirm
fn menu_transition(input: &InputSnapshot) -> Option<GameState> {
    if input.is_active(Action::Cancel) {
        Some(GameState::Exiting)
    } else if input.is_active(Action::Confirm) {
        Some(GameState::Playing)
    } else {
        None
    }
}

pub fn high_score_text(high_score: u32) -> String {
    format!("Current High Score:{}", high_score)
}
