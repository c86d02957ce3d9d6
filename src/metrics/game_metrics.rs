use std::time::Duration;

use crate::game::{SessionState, TickReport};

/// Statistics kept across games for the lifetime of the process
pub struct GameMetrics {
    /// Simulated time spent playing the current game
    pub play_time: Duration,
    pub high_score: u32,
    pub games_played: u32,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            play_time: Duration::ZERO,
            high_score: 0,
            games_played: 0,
        }
    }

    /// Fold one tick of the session into the statistics
    pub fn on_tick(&mut self, delta_ms: f64, report: &TickReport, state: SessionState, score: u32) {
        if report.restarted {
            self.on_game_start();
            return;
        }

        let ended_now = report.collision.is_some();
        if state == SessionState::Playing || ended_now {
            self.play_time += Duration::from_secs_f64(delta_ms.max(0.0) / 1000.0);
        }
        if ended_now {
            self.on_game_over(score);
        }
    }

    pub fn on_game_start(&mut self) {
        self.play_time = Duration::ZERO;
    }

    pub fn on_game_over(&mut self, final_score: u32) {
        self.games_played += 1;
        if final_score > self.high_score {
            self.high_score = final_score;
        }
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.play_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}
