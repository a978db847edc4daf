use rand::Rng;

use super::config::GameConfig;
use super::geometry::Rect;

/// The treat the snake is chasing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Treat {
    rect: Rect,
}

impl Treat {
    /// Create a treat of the configured size centered on (x, y)
    pub fn new(x: f32, y: f32, config: &GameConfig) -> Self {
        Self {
            rect: Rect::new(x, y, config.treat_size, config.treat_size),
        }
    }

    /// Create a treat at a random spot in the window
    pub fn random(config: &GameConfig, rng: &mut impl Rng) -> Self {
        let (x, y) = random_position(config, rng);
        Self::new(x, y, config)
    }

    pub fn rect(&self) -> &Rect {
        &self.rect
    }

    /// Move to a new random spot in the window
    pub fn reposition(&mut self, config: &GameConfig, rng: &mut impl Rng) {
        let (x, y) = random_position(config, rng);
        self.rect.set_position(x, y);
    }
}

/// Uniform point with x in [0, width) and y in [0, height)
fn random_position(config: &GameConfig, rng: &mut impl Rng) -> (f32, f32) {
    let x = rng.gen_range(0.0..config.window_width);
    let y = rng.gen_range(0.0..config.window_height);
    (x, y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_treat_size() {
        let config = GameConfig::default();
        let treat = Treat::new(100.0, 100.0, &config);
        assert_eq!(treat.rect().width(), 20.0);
        assert_eq!(treat.rect().height(), 20.0);
        assert_eq!(treat.rect().left(), 90.0);
    }

    #[test]
    fn test_reposition_stays_in_window() {
        let config = GameConfig::new(400.0, 120.0);
        let mut rng = StdRng::seed_from_u64(7);
        let mut treat = Treat::new(0.0, 0.0, &config);

        for _ in 0..1000 {
            treat.reposition(&config, &mut rng);
            let rect = treat.rect();
            assert!((0.0..400.0).contains(&rect.x()));
            assert!((0.0..120.0).contains(&rect.y()));
            assert_eq!(rect.width(), 20.0);
        }
    }

    #[test]
    fn test_reposition_moves_the_treat() {
        let config = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(42);
        let mut treat = Treat::new(100.0, 100.0, &config);
        treat.reposition(&config, &mut rng);
        assert_ne!((treat.rect().x(), treat.rect().y()), (100.0, 100.0));
    }
}
