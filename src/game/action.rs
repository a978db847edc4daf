/// Direction the snake can move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Order in which pressed directions are considered each tick
    pub const PRIORITY: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Returns true if turning from self to other would be a 180-degree turn
    pub fn is_opposite(&self, other: Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
                | (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
        )
    }

    /// Returns the unit delta (dx, dy) for moving in this direction, y pointing down
    pub fn delta(&self) -> (f32, f32) {
        match self {
            Direction::Up => (0.0, -1.0),
            Direction::Down => (0.0, 1.0),
            Direction::Left => (-1.0, 0.0),
            Direction::Right => (1.0, 0.0),
        }
    }

    /// The input action that requests this direction
    pub fn action(&self) -> Action {
        match self {
            Direction::Up => Action::Up,
            Direction::Down => Action::Down,
            Direction::Left => Action::Left,
            Direction::Right => Action::Right,
        }
    }
}

/// Logical input actions the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Up,
    Down,
    Left,
    Right,
    Confirm,
    Cancel,
}

impl Action {
    fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// The set of actions active during a single tick
///
/// Built by the input adapter and consumed by the game engine. Reading a
/// snapshot never changes it, so a tick can query the same action twice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    active: u8,
}

impl InputSnapshot {
    /// Snapshot with nothing pressed
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot with exactly the given actions pressed
    pub fn with(actions: &[Action]) -> Self {
        let mut snapshot = Self::new();
        for &action in actions {
            snapshot.press(action);
        }
        snapshot
    }

    pub fn press(&mut self, action: Action) {
        self.active |= action.bit();
    }

    pub fn is_active(&self, action: Action) -> bool {
        self.active & action.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.active == 0
    }

    pub fn clear(&mut self) {
        self.active = 0;
    }

    /// Pressed directions, in priority order
    pub fn directions(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::PRIORITY
            .into_iter()
            .filter(move |direction| self.is_active(direction.action()))
    }
}
