use std::collections::VecDeque;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{Duration, SystemTime};

use tracing_appender::rolling;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Log severity for display in the HUD.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<tracing::Level> for LogLevel {
    fn from(level: tracing::Level) -> Self {
        match level {
            tracing::Level::TRACE => LogLevel::Trace,
            tracing::Level::DEBUG => LogLevel::Debug,
            tracing::Level::INFO => LogLevel::Info,
            tracing::Level::WARN => LogLevel::Warn,
            tracing::Level::ERROR => LogLevel::Error,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        };
        f.pad(s)
    }
}

/// One recorded event, as shown in the HUD activity panel.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityEntry {
    pub level: LogLevel,
    pub message: String,
}

/// Bounded buffer shared between the tracing layer and the UI.
#[derive(Debug, Clone)]
pub struct ActivityLog {
    entries: Arc<Mutex<VecDeque<ActivityEntry>>>,
    capacity: usize,
}

impl ActivityLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            capacity: capacity.max(1),
        }
    }

    /// Append an entry, evicting the oldest once full.
    pub fn push(&self, entry: ActivityEntry) {
        if let Ok(mut entries) = self.entries.lock() {
            if entries.len() >= self.capacity {
                entries.pop_front();
            }
            entries.push_back(entry);
        }
    }

    /// The newest `n` entries, oldest first.
    pub fn recent(&self, n: usize) -> Vec<ActivityEntry> {
        match self.entries.lock() {
            Ok(entries) => {
                let skip = entries.len().saturating_sub(n);
                entries.iter().skip(skip).cloned().collect()
            }
            Err(_) => Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Return the log directory path.
///
/// Precedence: `MUG_LOG_DIR` env var > platform default.
/// macOS: `~/Library/Logs/mug/`
/// Linux: `$XDG_DATA_HOME/mug/logs/` or `~/.local/share/mug/logs/`
pub fn log_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("MUG_LOG_DIR") {
        return PathBuf::from(dir);
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = dirs::home_dir() {
            return home.join("Library").join("Logs").join("mug");
        }
    }

    #[cfg(not(target_os = "macos"))]
    {
        if let Some(data) = dirs::data_dir() {
            return data.join("mug").join("logs");
        }
    }

    PathBuf::from("logs")
}

const LOG_FILE_PREFIX: &str = "mug.log";
const ACTIVITY_CAPACITY: usize = 200;
const LOG_RETENTION_DAYS: u64 = 7;

/// Delete `mug.log*` files in `log_path` last modified more than
/// `max_age_days` ago. Other files are left alone.
fn cleanup_old_logs(log_path: &Path, max_age_days: u64) {
    let cutoff = SystemTime::now() - Duration::from_secs(max_age_days * 86_400);
    let Ok(entries) = std::fs::read_dir(log_path) else {
        return;
    };
    for entry in entries.flatten() {
        if !entry.file_name().to_string_lossy().starts_with(LOG_FILE_PREFIX) {
            continue;
        }
        let stale = entry
            .metadata()
            .and_then(|meta| meta.modified())
            .map(|modified| modified < cutoff)
            .unwrap_or(false);
        if stale {
            let _ = std::fs::remove_file(entry.path());
        }
    }
}

/// Tracing layer that copies every event into an [`ActivityLog`].
struct ActivityLayer {
    log: ActivityLog,
}

impl<S: tracing::Subscriber> Layer<S> for ActivityLayer {
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: tracing_subscriber::layer::Context<'_, S>) {
        let mut fields = FieldCollector::default();
        event.record(&mut fields);

        self.log.push(ActivityEntry {
            level: LogLevel::from(*event.metadata().level()),
            message: fields.finish(),
        });
    }
}

/// Flattens an event's fields into `message key=value ...`.
#[derive(Default)]
struct FieldCollector {
    message: Option<String>,
    fields: Vec<String>,
}

impl FieldCollector {
    fn finish(self) -> String {
        let mut parts: Vec<String> = self.message.into_iter().collect();
        parts.extend(self.fields);
        parts.join(" ")
    }
}

impl tracing::field::Visit for FieldCollector {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{:?}", value));
        } else {
            self.fields.push(format!("{}={:?}", field.name(), value));
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_string());
        } else {
            self.fields.push(format!("{}={}", field.name(), value));
        }
    }
}

/// Initialize logging and return the activity log shown in the HUD.
///
/// Filter comes from `MUG_LOG`, then `RUST_LOG`, else `info`.
/// Files roll daily under [`log_dir`] and are kept for seven days.
pub fn init() -> ActivityLog {
    let activity = ActivityLog::new(ACTIVITY_CAPACITY);

    let filter = EnvFilter::try_from_env("MUG_LOG")
        .or_else(|_| EnvFilter::try_from_env("RUST_LOG"))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let log_path = log_dir();
    if let Err(e) = std::fs::create_dir_all(&log_path) {
        eprintln!(
            "warning: failed to create log directory {:?}: {}",
            log_path, e
        );
    }

    cleanup_old_logs(&log_path, LOG_RETENTION_DAYS);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(rolling::daily(&log_path, LOG_FILE_PREFIX))
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(ActivityLayer {
            log: activity.clone(),
        })
        .init();

    activity
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex as StdMutex;

    // Serialize env-mutating tests.
    static ENV_LOCK: StdMutex<()> = StdMutex::new(());

    fn entry(msg: &str) -> ActivityEntry {
        ActivityEntry {
            level: LogLevel::Info,
            message: msg.into(),
        }
    }

    #[test]
    fn log_dir_respects_env_override() {
        let _guard = ENV_LOCK.lock().unwrap();
        let original = std::env::var("MUG_LOG_DIR").ok();

        unsafe { std::env::set_var("MUG_LOG_DIR", "/tmp/mug-test-logs") };
        assert_eq!(log_dir(), PathBuf::from("/tmp/mug-test-logs"));

        match original {
            Some(v) => unsafe { std::env::set_var("MUG_LOG_DIR", v) },
            None => unsafe { std::env::remove_var("MUG_LOG_DIR") },
        }
    }

    #[test]
    fn activity_log_caps_at_capacity() {
        let log = ActivityLog::new(3);
        for i in 0..5 {
            log.push(entry(&format!("msg {}", i)));
        }
        assert_eq!(log.len(), 3);
        let all = log.recent(10);
        assert_eq!(all[0].message, "msg 2");
        assert_eq!(all[2].message, "msg 4");
    }

    #[test]
    fn recent_returns_newest_oldest_first() {
        let log = ActivityLog::new(10);
        for i in 0..4 {
            log.push(entry(&format!("msg {}", i)));
        }
        let recent: Vec<String> = log.recent(2).into_iter().map(|e| e.message).collect();
        assert_eq!(recent, vec!["msg 2", "msg 3"]);
    }

    #[test]
    fn clones_share_entries() {
        let log = ActivityLog::new(4);
        let writer = log.clone();
        assert!(log.is_empty());
        writer.push(entry("shared"));
        assert_eq!(log.recent(1)[0].message, "shared");
    }

    #[test]
    fn log_level_display_and_from() {
        assert_eq!(LogLevel::from(tracing::Level::WARN), LogLevel::Warn);
        assert_eq!(LogLevel::Error.to_string(), "ERROR");
        assert_eq!(LogLevel::Trace.to_string(), "TRACE");
    }

    #[test]
    fn field_collector_joins_message_and_fields() {
        let c = FieldCollector {
            message: Some("mouth stepped".into()),
            fields: vec!["from=Frown".into(), "to=Smirk".into()],
        };
        assert_eq!(c.finish(), "mouth stepped from=Frown to=Smirk");
    }

    #[test]
    fn field_collector_without_message() {
        let c = FieldCollector {
            message: None,
            fields: vec!["a=1".into()],
        };
        assert_eq!(c.finish(), "a=1");
        assert_eq!(FieldCollector::default().finish(), "");
    }

    #[test]
    fn cleanup_old_logs_removes_only_mug_logs() {
        let tmp = std::env::temp_dir().join("mug-test-cleanup");
        let _ = std::fs::create_dir_all(&tmp);

        let stale = tmp.join("mug.log.2025-01-01");
        let other = tmp.join("notes.txt");
        std::fs::write(&stale, "a").unwrap();
        std::fs::write(&other, "b").unwrap();

        // max_age_days = 0 puts the cutoff at "now".
        cleanup_old_logs(&tmp, 0);
        assert!(!stale.exists());
        assert!(other.exists());

        let _ = std::fs::remove_dir_all(&tmp);
    }
}
