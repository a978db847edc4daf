//! Render commands produced by the game each tick
//!
//! The game never talks to the terminal directly. It describes what should be
//! on screen as a [`Scene`] and the renderer turns that into a frame.

use super::geometry::Rect;

/// Fill colours used by the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fill {
    Green,
    Magenta,
    Red,
    Yellow,
}

/// Where a label goes on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Top-left corner of the board
    TopLeft,
    /// Horizontally centered, `row` lines below the vertical middle
    Center { row: i16 },
}

/// A filled rectangle in board coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shape {
    pub rect: Rect,
    pub fill: Fill,
}

/// A line of text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    pub text: String,
    pub fill: Fill,
    pub placement: Placement,
    /// Bold and underlined
    pub emphasized: bool,
}

/// Everything to draw for one tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    pub shapes: Vec<Shape>,
    pub labels: Vec<Label>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shape(mut self, rect: Rect, fill: Fill) -> Self {
        self.shapes.push(Shape { rect, fill });
        self
    }

    pub fn label(mut self, text: impl Into<String>, fill: Fill, placement: Placement) -> Self {
        self.labels.push(Label {
            text: text.into(),
            fill,
            placement,
            emphasized: true,
        });
        self
    }

    /// Returns true if some label reads exactly `text`
    pub fn has_label(&self, text: &str) -> bool {
        self.labels.iter().any(|label| label.text == text)
    }
}
