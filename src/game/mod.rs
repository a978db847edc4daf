//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! The terminal front end feeds it input snapshots and draws the scenes it returns,
//! which keeps every rule testable without a terminal.

pub mod action;
pub mod config;
pub mod engine;
pub mod geometry;
pub mod scene;
pub mod session;
pub mod snake;
pub mod state;
pub mod treat;

// Re-export commonly used types
pub use action::{Action, Direction, InputSnapshot};
pub use config::GameConfig;
pub use engine::GameEngine;
pub use geometry::{collided, Rect};
pub use scene::{Fill, Label, Placement, Scene, Shape};
pub use session::{PlaySession, TickOutcome};
pub use snake::{Snake, SnakeBody};
pub use state::{GameState, LossReason, SessionResult};
pub use treat::Treat;
