use std::time::{Duration, Instant};

/// Per-launch statistics shown alongside the board. Nothing here outlives
/// the process.
pub struct GameMetrics {
    pub run_start: Instant,
    pub elapsed_time: Duration,
    pub best_score: u32,
    pub runs_ended: u32,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            run_start: Instant::now(),
            elapsed_time: Duration::ZERO,
            best_score: 0,
            runs_ended: 0,
        }
    }

    pub fn update(&mut self) {
        self.elapsed_time = self.run_start.elapsed();
    }

    /// Track the live score so the best score includes the current run
    pub fn observe_score(&mut self, score: u32) {
        self.best_score = self.best_score.max(score);
    }

    /// Close the current run and start timing the next one
    pub fn on_run_over(&mut self, final_score: u32) {
        self.runs_ended += 1;
        self.observe_score(final_score);
        self.run_start = Instant::now();
        self.elapsed_time = Duration::ZERO;
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_formatting() {
        let mut metrics = GameMetrics::new();
        metrics.elapsed_time = Duration::from_secs(125);
        assert_eq!(metrics.format_time(), "02:05");

        metrics.elapsed_time = Duration::from_secs(0);
        assert_eq!(metrics.format_time(), "00:00");

        metrics.elapsed_time = Duration::from_secs(3661);
        assert_eq!(metrics.format_time(), "61:01");
    }

    #[test]
    fn test_best_score_tracking() {
        let mut metrics = GameMetrics::new();

        metrics.on_run_over(10);
        assert_eq!(metrics.best_score, 10);
        assert_eq!(metrics.runs_ended, 1);

        metrics.on_run_over(5);
        assert_eq!(metrics.best_score, 10); // Should not decrease
        assert_eq!(metrics.runs_ended, 2);

        metrics.observe_score(12);
        assert_eq!(metrics.best_score, 12);
        assert_eq!(metrics.runs_ended, 2);
    }

    #[test]
    fn test_run_over_resets_time() {
        let mut metrics = GameMetrics::new();
        std::thread::sleep(Duration::from_millis(50));
        metrics.update();

        assert!(metrics.elapsed_time.as_millis() >= 50);

        metrics.on_run_over(0);
        metrics.update();
        assert!(metrics.elapsed_time.as_millis() < 50);
    }
}
