use once_cell::sync::Lazy;
use std::env;

/// Log file path
/// Read once at startup from TUBESIM_LOG_FILE or defaults to "tubesim.log"
pub static LOG_FILE_PATH: Lazy<String> = Lazy::new(|| env::var("TUBESIM_LOG_FILE").unwrap_or_else(|_| "tubesim.log".to_string()));

/// Mock resolver timing
pub mod resolver {
    use std::time::Duration;

    /// Artificial lookup latency, emulating a slow metadata backend
    pub const LOOKUP_DELAY_MS: u64 = 1_500;

    /// Lookup delay as a Duration
    pub fn lookup_delay() -> Duration {
        Duration::from_millis(LOOKUP_DELAY_MS)
    }
}

/// Download progress simulation timing
pub mod progress {
    use std::time::Duration;

    /// Interval between progress ticks in milliseconds
    pub const TICK_INTERVAL_MS: u64 = 500;

    /// Percentage points added per tick
    pub const STEP_PERCENT: u8 = 10;

    /// How long the completion notice stays on screen, in seconds
    pub const COMPLETE_DISMISS_SECS: u64 = 4;

    /// Tick interval as a Duration
    pub fn tick_interval() -> Duration {
        Duration::from_millis(TICK_INTERVAL_MS)
    }

    /// Completion dismiss delay as a Duration
    pub fn complete_dismiss() -> Duration {
        Duration::from_secs(COMPLETE_DISMISS_SECS)
    }
}

/// Notification slot keys
pub mod notifications {
    /// Stable key shared by all progress notices; each write replaces the
    /// previous notice under this key
    pub const PROGRESS_KEY: &str = "download-progress";
}
