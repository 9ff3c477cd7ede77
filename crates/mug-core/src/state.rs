use std::time::{Duration, Instant};

/// Shell-level state that outlives any single frame.
pub struct AppState {
    pub started_at: Instant,
    pub status_line: String,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            started_at: Instant::now(),
            status_line: "KEEP SMILING.".to_string(),
        }
    }

    pub fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }

    /// Uptime as `HH:MM:SS`.
    pub fn uptime_label(&self) -> String {
        format_uptime(self.uptime())
    }
}

fn format_uptime(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    format!("{:02}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uptime_formats_hours_minutes_seconds() {
        assert_eq!(format_uptime(Duration::from_secs(0)), "00:00:00");
        assert_eq!(format_uptime(Duration::from_secs(3_725)), "01:02:05");
    }

    #[test]
    fn new_state_has_status() {
        let state = AppState::new();
        assert!(!state.status_line.is_empty());
        assert!(state.uptime() < Duration::from_secs(5));
    }
}
