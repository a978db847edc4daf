/// An axis-aligned rectangle positioned by its center
///
/// The size is fixed when the rectangle is built; only the position moves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
}

impl Rect {
    /// Create a rectangle centered on (x, y)
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn left(&self) -> f32 {
        self.x - self.width / 2.0
    }

    pub fn right(&self) -> f32 {
        self.x + self.width / 2.0
    }

    pub fn top(&self) -> f32 {
        self.y - self.height / 2.0
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// Move the center to (x, y)
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    /// Same rectangle, centered elsewhere
    pub fn moved_to(&self, x: f32, y: f32) -> Self {
        Self { x, y, ..*self }
    }

    /// Same rectangle, shifted by (dx, dy)
    pub fn moved_by(&self, dx: f32, dy: f32) -> Self {
        self.moved_to(self.x + dx, self.y + dy)
    }

    /// Returns true if no edge lies outside `[0, width] x [0, height]`
    pub fn contained_in(&self, width: f32, height: f32) -> bool {
        self.left() >= 0.0 && self.right() <= width && self.top() >= 0.0 && self.bottom() <= height
    }
}

/// Returns true if the two rectangles overlap on both axes
///
/// Edges that merely touch do not count, so adjacent snake segments never
/// collide with each other.
pub fn collided(a: &Rect, b: &Rect) -> bool {
    let horizontal = a.left() < b.right() && a.right() > b.left();
    let vertical = a.top() < b.bottom() && a.bottom() > b.top();
    horizontal && vertical
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let rect = Rect::new(100.0, 50.0, 20.0, 10.0);
        assert_eq!(rect.left(), 90.0);
        assert_eq!(rect.right(), 110.0);
        assert_eq!(rect.top(), 45.0);
        assert_eq!(rect.bottom(), 55.0);
    }

    #[test]
    fn test_overlap_from_either_side() {
        let target = Rect::new(100.0, 100.0, 20.0, 20.0);

        // Approaching from the left and from the right must both register
        assert!(collided(&Rect::new(85.0, 100.0, 20.0, 20.0), &target));
        assert!(collided(&Rect::new(115.0, 100.0, 20.0, 20.0), &target));
        assert!(collided(&Rect::new(100.0, 85.0, 20.0, 20.0), &target));
        assert!(collided(&Rect::new(100.0, 115.0, 20.0, 20.0), &target));
    }

    #[test]
    fn test_collision_is_symmetric() {
        let a = Rect::new(10.0, 10.0, 20.0, 20.0);
        let b = Rect::new(25.0, 18.0, 40.0, 6.0);
        assert_eq!(collided(&a, &b), collided(&b, &a));
        assert!(collided(&a, &b));
    }

    #[test]
    fn test_touching_edges_do_not_collide() {
        let a = Rect::new(100.0, 100.0, 20.0, 20.0);
        assert!(!collided(&a, &a.moved_by(20.0, 0.0)));
        assert!(!collided(&a, &a.moved_by(0.0, -20.0)));
        assert!(!collided(&a, &a.moved_by(20.0, 20.0)));
    }

    #[test]
    fn test_different_sizes() {
        let big = Rect::new(0.0, 0.0, 100.0, 100.0);
        let small = Rect::new(10.0, -10.0, 2.0, 2.0);
        assert!(collided(&big, &small));
        assert!(!collided(&big, &small.moved_to(60.0, 0.0)));
    }

    #[test]
    fn test_contained_in() {
        let rect = Rect::new(800.0, 410.0, 20.0, 20.0);
        assert!(rect.contained_in(820.0, 820.0));
        assert!(!rect.moved_to(830.0, 410.0).contained_in(820.0, 820.0));
        assert!(!rect.moved_to(-10.0, 410.0).contained_in(820.0, 820.0));
        assert!(!rect.moved_to(410.0, 830.0).contained_in(820.0, 820.0));
        assert!(!rect.moved_to(410.0, -10.0).contained_in(820.0, 820.0));
        assert!(!rect.moved_to(410.0, 5.0).contained_in(820.0, 820.0));
        assert!(rect.moved_to(10.0, 10.0).contained_in(820.0, 820.0));
    }
}
