use std::time::{Duration, Instant};

/// Per-session, in-memory round statistics
#[derive(Debug, Clone)]
pub struct SessionStats {
    pub round_started: Instant,
    pub elapsed_time: Duration,
    pub best_score: u32,
    pub rounds_played: u32,
    round_running: bool,
}

impl SessionStats {
    pub fn new() -> Self {
        Self {
            round_started: Instant::now(),
            elapsed_time: Duration::ZERO,
            best_score: 0,
            rounds_played: 0,
            round_running: false,
        }
    }

    /// Refresh the round clock; frozen once the round is over
    pub fn update(&mut self) {
        if self.round_running {
            self.elapsed_time = self.round_started.elapsed();
        }
    }

    pub fn on_round_start(&mut self) {
        self.round_started = Instant::now();
        self.elapsed_time = Duration::ZERO;
        self.round_running = true;
    }

    pub fn on_round_over(&mut self, final_score: u32) {
        self.update();
        self.round_running = false;
        self.rounds_played += 1;
        self.best_score = self.best_score.max(final_score);
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
    }
}

impl Default for SessionStats {
    fn default() -> Self {
        Self::new()
    }
}
