use std::time::{Duration, Instant};

/// Scores kept for the lifetime of the process
#[derive(Debug, Clone)]
pub struct Scoreboard {
    pub high_score: u32,
    pub games_played: u32,
    round_started: Instant,
    last_round: Duration,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self {
            high_score: 0,
            games_played: 0,
            round_started: Instant::now(),
            last_round: Duration::ZERO,
        }
    }

    pub fn on_game_start(&mut self) {
        self.round_started = Instant::now();
    }

    /// Record a lost round; returns true if it set a new high score
    pub fn on_game_over(&mut self, final_score: u32) -> bool {
        self.games_played += 1;
        self.last_round = self.round_started.elapsed();
        if final_score > self.high_score {
            self.high_score = final_score;
            return true;
        }
        false
    }

    /// How long the most recently lost round lasted
    pub fn last_round(&self) -> Duration {
        self.last_round
    }

    pub fn format_last_round(&self) -> String {
        let total_secs = self.last_round.as_secs();
        format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
    }
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_formatting() {
        let mut scoreboard = Scoreboard::new();
        scoreboard.last_round = Duration::from_secs(125);
        assert_eq!(scoreboard.format_last_round(), "02:05");

        scoreboard.last_round = Duration::from_secs(3661);
        assert_eq!(scoreboard.format_last_round(), "61:01");
    }

    #[test]
    fn test_high_score_tracking() {
        let mut scoreboard = Scoreboard::new();
        assert_eq!(scoreboard.high_score, 0);

        assert!(scoreboard.on_game_over(5));
        assert_eq!(scoreboard.high_score, 5);
        assert_eq!(scoreboard.games_played, 1);

        assert!(!scoreboard.on_game_over(3));
        assert_eq!(scoreboard.high_score, 5); // Should not decrease
        assert_eq!(scoreboard.games_played, 2);

        assert!(!scoreboard.on_game_over(5));
        assert!(scoreboard.on_game_over(8));
        assert_eq!(scoreboard.high_score, 8);
    }

    #[test]
    fn test_round_duration() {
        let mut scoreboard = Scoreboard::new();
        scoreboard.on_game_start();
        std::thread::sleep(Duration::from_millis(20));
        scoreboard.on_game_over(1);
        assert!(scoreboard.last_round() >= Duration::from_millis(20));
    }
}
