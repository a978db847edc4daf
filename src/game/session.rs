use rand::Rng;

use super::action::{Action, InputSnapshot};
use super::config::GameConfig;
use super::geometry::collided;
use super::scene::{Fill, Placement, Scene};
use super::snake::Snake;
use super::state::{LossReason, SessionResult};
use super::treat::Treat;

/// What happened during one tick of play
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Still playing; `ate_treat` is set if the head reached the treat this tick
    Running { ate_treat: bool },
    /// The session is over
    Finished(SessionResult),
}

/// A single round of play, from a fresh snake until loss or exit
#[derive(Debug, Clone)]
pub struct PlaySession {
    pub snake: Snake,
    pub treat: Treat,
    pub score: u32,
    pub ticks: u32,
}

impl PlaySession {
    /// New round: centered snake heading right, treat at a random spot
    pub fn new(config: &GameConfig, rng: &mut impl Rng) -> Self {
        Self::with_parts(Snake::new(config), Treat::random(config, rng))
    }

    pub fn with_parts(snake: Snake, treat: Treat) -> Self {
        Self {
            snake,
            treat,
            score: 0,
            ticks: 0,
        }
    }

    /// Execute one tick of play
    pub fn tick(
        &mut self,
        input: &InputSnapshot,
        config: &GameConfig,
        rng: &mut impl Rng,
    ) -> TickOutcome {
        if input.is_active(Action::Cancel) {
            return TickOutcome::Finished(SessionResult::exited(self.score));
        }

        // Bounds are checked on the head as it was drawn last tick
        let head = self.snake.head();
        if !head
            .rect()
            .contained_in(config.window_width, config.window_height)
        {
            return TickOutcome::Finished(SessionResult::lost(self.score, LossReason::Wall));
        }

        self.snake.advance(input);
        self.ticks += 1;

        let ate_treat = collided(self.treat.rect(), self.snake.head().rect());
        if ate_treat {
            self.treat.reposition(config, rng);
            self.snake.grow();
            self.score += 1;
        }

        if self.snake.self_collision() {
            return TickOutcome::Finished(SessionResult::lost(
                self.score,
                LossReason::SelfCollision,
            ));
        }

        TickOutcome::Running { ate_treat }
    }

    /// Snake, treat and score
    pub fn scene(&self) -> Scene {
        let scene = self
            .snake
            .segments()
            .iter()
            .fold(Scene::new(), |scene, segment| {
                scene.shape(*segment.rect(), Fill::Green)
            });

        scene
            .shape(*self.treat.rect(), Fill::Magenta)
            .label(score_text(self.score), Fill::Red, Placement::TopLeft)
    }
}

pub fn score_text(score: u32) -> String {
    format!("Score: {}", score)
}
