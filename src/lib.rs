//! Rect Snake - the classic snake game in a terminal
//!
//! This library provides:
//! - Core game logic and the screen state machine (game module)
//! - High score bookkeeping (metrics module)
//! - Key mapping (input module) and TUI rendering (render module)
//! - The interactive terminal loop (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
