use super::action::{Direction, InputSnapshot};
use super::config::GameConfig;
use super::geometry::{collided, Rect};

/// Segments right behind the head that are skipped by the self-collision test
const SELF_COLLISION_SKIP: usize = 4;

/// A single segment of the snake
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnakeBody {
    rect: Rect,
}

impl SnakeBody {
    pub fn new(x: f32, y: f32, size: f32) -> Self {
        Self {
            rect: Rect::new(x, y, size, size),
        }
    }

    pub fn rect(&self) -> &Rect {
        &self.rect
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    body: Vec<SnakeBody>,
    /// Current direction of movement
    direction: Direction,
    /// Set when a treat was eaten; consumed by the next `advance`
    grow_next_update: bool,
    step: f32,
}

impl Snake {
    /// Create a one-segment snake at the center of the window, heading right
    pub fn new(config: &GameConfig) -> Self {
        let (x, y) = config.center();
        Self::at(x, y, Direction::Right, config.segment_size)
    }

    /// Create a one-segment snake at (x, y)
    pub fn at(x: f32, y: f32, direction: Direction, segment_size: f32) -> Self {
        Self {
            body: vec![SnakeBody::new(x, y, segment_size)],
            direction,
            grow_next_update: false,
            step: segment_size,
        }
    }

    /// Snapshot of the head segment
    pub fn head(&self) -> SnakeBody {
        self.body[0]
    }

    pub fn segments(&self) -> &[SnakeBody] {
        &self.body
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (never happens, the head always exists)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Returns true if a segment will be added on the next `advance`
    pub fn is_growing(&self) -> bool {
        self.grow_next_update
    }

    /// Request one more segment on the next `advance`
    pub fn grow(&mut self) {
        self.grow_next_update = true;
    }

    /// Returns true if the head overlaps its own body
    ///
    /// The segments right behind the head always touch it, so only segments
    /// from index 4 onwards are tested.
    pub fn self_collision(&self) -> bool {
        if self.body.len() <= SELF_COLLISION_SKIP {
            return false;
        }

        let head = self.head();
        self.body[SELF_COLLISION_SKIP..]
            .iter()
            .any(|segment| collided(head.rect(), segment.rect()))
    }

    /// Move the snake one step, turning first if the input asks for it
    pub fn advance(&mut self, input: &InputSnapshot) {
        self.turn(input);

        // Every segment follows the one ahead of it
        let mut prev = self.body[0].rect;
        for segment in self.body.iter_mut().skip(1) {
            let next_prev = segment.rect;
            segment.rect.set_position(prev.x(), prev.y());
            prev = next_prev;
        }

        // `prev` now holds where the tail was before this step
        if self.grow_next_update {
            self.body.push(SnakeBody::new(prev.x(), prev.y(), self.step));
            self.grow_next_update = false;
        }

        let (dx, dy) = self.direction.delta();
        let head = &mut self.body[0].rect;
        *head = head.moved_by(dx * self.step, dy * self.step);
    }

    /// Adopt the first pressed direction that is an actual turn
    fn turn(&mut self, input: &InputSnapshot) {
        let current = self.direction;
        if let Some(direction) = input
            .directions()
            .find(|&d| d != current && !current.is_opposite(d))
        {
            self.direction = direction;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::action::Action;

    fn positions(snake: &Snake) -> Vec<(f32, f32)> {
        snake
            .segments()
            .iter()
            .map(|s| (s.rect().x(), s.rect().y()))
            .collect()
    }

    /// Grow a snake heading right to `len` segments
    fn snake_of_len(len: usize) -> Snake {
        let mut snake = Snake::at(400.0, 400.0, Direction::Right, 20.0);
        let none = InputSnapshot::new();
        while snake.len() < len {
            snake.grow();
            snake.advance(&none);
        }
        snake
    }

    #[test]
    fn test_snake_creation() {
        let snake = Snake::new(&GameConfig::default());
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.direction(), Direction::Right);
        assert_eq!(positions(&snake), vec![(410.0, 410.0)]);
        assert!(!snake.is_growing());
    }

    #[test]
    fn test_snake_movement() {
        let mut snake = Snake::at(100.0, 100.0, Direction::Right, 20.0);
        snake.advance(&InputSnapshot::new());
        assert_eq!(positions(&snake), vec![(120.0, 100.0)]);

        snake.advance(&InputSnapshot::with(&[Action::Down]));
        assert_eq!(snake.direction(), Direction::Down);
        assert_eq!(positions(&snake), vec![(120.0, 120.0)]);
    }

    #[test]
    fn test_body_follows_head() {
        let mut snake = snake_of_len(3);
        assert_eq!(
            positions(&snake),
            vec![(440.0, 400.0), (420.0, 400.0), (400.0, 400.0)]
        );

        snake.advance(&InputSnapshot::with(&[Action::Up]));
        assert_eq!(
            positions(&snake),
            vec![(440.0, 380.0), (440.0, 400.0), (420.0, 400.0)]
        );
    }

    #[test]
    fn test_growth_is_deferred_one_tick() {
        let mut snake = Snake::at(100.0, 100.0, Direction::Right, 20.0);
        snake.grow();
        assert_eq!(snake.len(), 1);
        assert!(snake.is_growing());

        snake.advance(&InputSnapshot::new());
        assert_eq!(snake.len(), 2);
        assert!(!snake.is_growing());
        // New tail sits where the old tail was before the step
        assert_eq!(positions(&snake), vec![(120.0, 100.0), (100.0, 100.0)]);

        snake.advance(&InputSnapshot::new());
        assert_eq!(snake.len(), 2);
    }

    #[test]
    fn test_prevent_180_degree_turn() {
        let mut snake = Snake::at(100.0, 100.0, Direction::Right, 20.0);
        snake.advance(&InputSnapshot::with(&[Action::Left]));
        assert_eq!(snake.direction(), Direction::Right);
        assert_eq!(positions(&snake), vec![(120.0, 100.0)]);

        snake.advance(&InputSnapshot::with(&[Action::Up]));
        assert_eq!(snake.direction(), Direction::Up);

        snake.advance(&InputSnapshot::with(&[Action::Down]));
        assert_eq!(snake.direction(), Direction::Up);
    }

    #[test]
    fn test_turn_priority() {
        // Up wins over Down when both are pressed
        let mut snake = Snake::at(100.0, 100.0, Direction::Right, 20.0);
        snake.advance(&InputSnapshot::with(&[Action::Down, Action::Up]));
        assert_eq!(snake.direction(), Direction::Up);

        // Ineligible directions are skipped and the next eligible one wins
        let mut snake = Snake::at(100.0, 100.0, Direction::Up, 20.0);
        snake.advance(&InputSnapshot::with(&[Action::Down, Action::Right, Action::Up]));
        assert_eq!(snake.direction(), Direction::Right);
    }

    #[test]
    fn test_no_self_collision_when_short() {
        // Curl four segments into a tight square; heads touch tails but count <= 4
        let mut snake = snake_of_len(4);
        for action in [Action::Down, Action::Left, Action::Up] {
            snake.advance(&InputSnapshot::with(&[action]));
            assert!(!snake.self_collision());
        }
        assert_eq!(snake.len(), 4);
    }

    #[test]
    fn test_straight_snake_does_not_collide() {
        let snake = snake_of_len(10);
        assert!(!snake.self_collision());
    }

    #[test]
    fn test_self_collision() {
        // Five segments turning in a square run the head into the fifth one
        let mut snake = snake_of_len(5);
        snake.advance(&InputSnapshot::with(&[Action::Down]));
        snake.advance(&InputSnapshot::with(&[Action::Left]));
        assert!(!snake.self_collision());
        snake.advance(&InputSnapshot::with(&[Action::Up]));
        assert!(snake.self_collision());
    }
}
