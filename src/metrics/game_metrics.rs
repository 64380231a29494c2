use std::time::{Duration, Instant};

use crate::game::TickOutcome;

/// Stats for the current process only; nothing here outlives it
pub struct GameMetrics {
    pub game_started: Instant,
    pub elapsed_time: Duration,
    pub best_score: u32,
    pub games_played: u32,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            game_started: Instant::now(),
            elapsed_time: Duration::ZERO,
            best_score: 0,
            games_played: 0,
        }
    }

    pub fn update(&mut self) {
        self.elapsed_time = self.game_started.elapsed();
    }

    /// Record the outcome of a tick; a finished game also starts the next one
    pub fn on_tick(&mut self, outcome: TickOutcome) {
        if let Some(score) = outcome.final_score() {
            self.on_game_over(score);
            self.on_game_start();
        }
    }

    pub fn on_game_start(&mut self) {
        self.game_started = Instant::now();
        self.elapsed_time = Duration::ZERO;
    }

    pub fn on_game_over(&mut self, final_score: u32) {
        self.games_played += 1;
        self.best_score = self.best_score.max(final_score);
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}
