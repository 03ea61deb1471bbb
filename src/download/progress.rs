//! Download progress simulation
//!
//! A progress run is pure theater: a timer advances a counter by a fixed
//! step and publishes a keyed loading notice per tick, then exactly one
//! completion notice one tick after hitting 100. Nothing is transferred
//! and no file is written.
//!
//! Each run lives in its own task and returns a [`ProgressHandle`].
//! Dropping the handle detaches the run (it completes on its own, which is
//! the historical fire-and-forget behavior); calling
//! [`ProgressHandle::cancel`] stops it between ticks. Overlapping runs are
//! allowed and fight over the shared notification slot; the visible
//! notice is whichever run wrote last.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio::time::interval;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use crate::core::config;
use crate::download::notify::{Notice, Notifier};
use crate::media::catalog::{FormatOption, MediaFormat};

/// Lifecycle stage of a simulated download
#[derive(Debug, Clone, PartialEq)]
pub enum DownloadStatus {
    /// Download is starting
    Starting {
        title: String,
        format: MediaFormat,
        quality: String,
    },
    /// Download in progress with percentage
    Downloading { percent: u8 },
    /// Download finished
    Completed,
}

impl DownloadStatus {
    /// Render this stage as the notice the user sees. Progress and
    /// completion share the stable slot key so they replace each other
    /// in place; the start message stands alone.
    pub fn to_notice(&self) -> Notice {
        match self {
            DownloadStatus::Starting { title, format, quality } => {
                Notice::success(format!("Starting download: {} ({} - {})", title, format, quality))
            }
            DownloadStatus::Downloading { percent } => {
                Notice::loading(format!("Downloading: {}%", percent)).with_key(config::notifications::PROGRESS_KEY)
            }
            DownloadStatus::Completed => {
                Notice::success("Download complete! (Demo only - no actual file was downloaded)")
                    .with_key(config::notifications::PROGRESS_KEY)
                    .with_dismiss(config::progress::complete_dismiss())
            }
        }
    }
}

/// Timing knobs for a progress run. Production values come from
/// [`config::progress`]; tests inject faster ones.
#[derive(Debug, Clone)]
pub struct ProgressConfig {
    /// Time between progress ticks
    pub tick_interval: std::time::Duration,
    /// Percentage points added per tick
    pub step_percent: u8,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            tick_interval: config::progress::tick_interval(),
            step_percent: config::progress::STEP_PERCENT,
        }
    }
}

impl ProgressConfig {
    /// Override the tick interval
    pub fn with_tick_interval(mut self, tick_interval: std::time::Duration) -> Self {
        self.tick_interval = tick_interval;
        self
    }
}

/// Handle to one in-flight progress run.
///
/// Dropping the handle does not stop the run; `cancel()` does.
pub struct ProgressHandle {
    run_id: Uuid,
    started_at: DateTime<Utc>,
    token: CancellationToken,
    join: JoinHandle<()>,
}

impl ProgressHandle {
    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Stop the run. No further notices are published; the completion
    /// notice is skipped entirely if it has not fired yet.
    pub fn cancel(&self) {
        log::info!("Cancelling progress run {}", self.run_id);
        self.token.cancel();
    }

    pub fn is_finished(&self) -> bool {
        self.join.is_finished()
    }

    /// Wait for the run to finish (completion or cancellation).
    pub async fn wait(self) {
        if let Err(e) = self.join.await {
            log::warn!("Progress run {} ended abnormally: {}", self.run_id, e);
        }
    }
}

/// Start a simulated download.
///
/// Publishes the start notice synchronously, then spawns a task that
/// advances the percentage by `config.step_percent` every
/// `config.tick_interval`, publishing a keyed loading notice while the
/// value is ≤ 100 and a single completion notice on the first tick past
/// it. An uncancelled run always reaches completion.
pub fn spawn_progress(
    notifier: Arc<dyn Notifier>,
    title: String,
    option: FormatOption,
    config: ProgressConfig,
) -> ProgressHandle {
    let run_id = Uuid::new_v4();
    let started_at = Utc::now();
    let token = CancellationToken::new();
    log::info!(
        "Starting progress run {} for \"{}\" ({} - {})",
        run_id,
        title,
        option.format,
        option.quality
    );

    notifier.publish(
        DownloadStatus::Starting {
            title,
            format: option.format,
            quality: option.quality.to_string(),
        }
        .to_notice(),
    );

    let task_token = token.clone();
    let join = tokio::spawn(async move {
        let mut ticker = interval(config.tick_interval);
        // The first tick of a tokio interval resolves immediately;
        // consume it so the first notice lands one interval after start.
        ticker.tick().await;

        let mut percent: u8 = 0;
        loop {
            tokio::select! {
                _ = task_token.cancelled() => {
                    log::info!("Progress run {} cancelled at {}%", run_id, percent);
                    break;
                }
                _ = ticker.tick() => {
                    percent = percent.saturating_add(config.step_percent);
                    if percent <= 100 {
                        notifier.publish(DownloadStatus::Downloading { percent }.to_notice());
                    } else {
                        notifier.publish(DownloadStatus::Completed.to_notice());
                        log::info!("Progress run {} completed", run_id);
                        break;
                    }
                }
            }
        }
    });

    ProgressHandle {
        run_id,
        started_at,
        token,
        join,
    }
}
