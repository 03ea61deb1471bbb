//! Engine state and orchestration
//!
//! [`Controller`] owns the whole interaction: it validates raw input,
//! asks the injected [`MediaResolver`] for details, keeps the format
//! selection consistent with the loaded catalog and hands out progress
//! runs. All state lives in [`AppState`] behind accessors; nothing here
//! is global.

use std::sync::Arc;

use crate::core::error::AppResult;
use crate::core::validation::parse_media_url;
use crate::download::notify::{Notice, Notifier};
use crate::download::progress::{spawn_progress, ProgressConfig, ProgressHandle};
use crate::media::catalog::{FormatOption, MediaFormat};
use crate::media::reference::MediaDetails;
use crate::media::resolver::MediaResolver;
use crate::selection::SelectionState;

/// Observable state of one engine session
#[derive(Debug, Default)]
pub struct AppState {
    media: Option<MediaDetails>,
    selection: SelectionState,
    loading: bool,
    error: Option<String>,
}

impl AppState {
    /// Details of the last successful lookup, if any
    pub fn media(&self) -> Option<&MediaDetails> {
        self.media.as_ref()
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// True while a lookup is in flight
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Inline error from the last failed lookup. Validation failures do
    /// not set this; they are reported through the notifier only.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

/// Drives lookups, selection and download runs against injected backends.
pub struct Controller {
    state: AppState,
    resolver: Arc<dyn MediaResolver>,
    notifier: Arc<dyn Notifier>,
    progress: ProgressConfig,
}

impl Controller {
    /// Creates a controller with default progress timing.
    ///
    /// # Arguments
    /// * `resolver` - Backend that turns a parsed request into details
    /// * `notifier` - Sink for user-facing notices
    pub fn new(resolver: Arc<dyn MediaResolver>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            state: AppState::default(),
            resolver,
            notifier,
            progress: ProgressConfig::default(),
        }
    }

    /// Overrides the timing used for download runs
    pub fn with_progress_config(mut self, progress: ProgressConfig) -> Self {
        self.progress = progress;
        self
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Validates `raw_url`, resolves it and stores the result.
    ///
    /// On success the previous selection is discarded and a fresh one is
    /// seeded from the new catalog. A validation failure publishes its
    /// user message and leaves all state untouched, including any inline
    /// error from an earlier lookup. A resolver failure sets the inline
    /// error and publishes a short notice, keeping whatever media was
    /// already loaded.
    ///
    /// # Arguments
    /// * `raw_url` - Untrusted user input
    ///
    /// # Returns
    /// The freshly stored details, or the error that stopped the lookup
    pub async fn fetch_details(&mut self, raw_url: &str) -> AppResult<&MediaDetails> {
        let request = match parse_media_url(raw_url) {
            Ok(request) => request,
            Err(e) => {
                log::warn!("Rejected input {:?}: {}", raw_url, e);
                self.notifier.publish(Notice::error(e.user_message()));
                return Err(e.into());
            }
        };

        log::info!("Resolving media details for video id {:?}", request.video_id);
        self.state.loading = true;
        self.state.error = None;

        let result = self.resolver.resolve(&request).await;
        self.state.loading = false;

        match result {
            Ok(details) => {
                log::info!(
                    "Resolved {:?} with {} format options",
                    details.reference.title,
                    details.formats.len()
                );
                let mut selection = SelectionState::new();
                selection.ensure_quality(&details.formats);
                self.state.selection = selection;
                let media = self.state.media.insert(details);
                self.notifier
                    .publish(Notice::success("Video information retrieved successfully"));
                Ok(media)
            }
            Err(e) => {
                log::error!("Lookup failed for {:?}: {}", request.url, e);
                self.state.error = Some("Failed to fetch video data. Please try again.".to_string());
                self.notifier.publish(Notice::error("Failed to fetch video data"));
                Err(e)
            }
        }
    }

    /// Switches the selected format family and reseeds the quality from
    /// the loaded catalog. Re-selecting the current family also resets
    /// the quality.
    pub fn select_format(&mut self, format: MediaFormat) {
        self.state.selection.select_format(format);
        if let Some(media) = &self.state.media {
            self.state.selection.ensure_quality(&media.formats);
        }
    }

    /// Picks a quality label within the current format family.
    ///
    /// Labels that are not offered for the current family are ignored
    /// with a warning, as are calls before any media is loaded.
    pub fn select_quality(&mut self, quality: &str) {
        let Some(media) = &self.state.media else {
            log::warn!("Quality selection ignored: no media loaded");
            return;
        };
        let family = self.state.selection.format();
        let offered = media
            .formats
            .iter()
            .any(|option| option.format == family && option.quality == quality);
        if !offered {
            log::warn!("Quality selection ignored: {:?} is not offered for {}", quality, family);
            return;
        }
        self.state.selection.select_quality(quality);
    }

    /// The catalog entry matching the current selection, if complete
    pub fn current_selection(&self) -> Option<FormatOption> {
        let media = self.state.media.as_ref()?;
        self.state.selection.current_selection(&media.formats)
    }

    /// Starts a simulated download for the current selection.
    ///
    /// Returns `None` when no media is loaded or the selection has no
    /// quality yet. The returned handle can cancel the run; dropping it
    /// lets the run finish on its own.
    pub fn start_download(&self) -> Option<ProgressHandle> {
        let media = self.state.media.as_ref()?;
        let option = self.state.selection.current_selection(&media.formats)?;
        Some(spawn_progress(
            Arc::clone(&self.notifier),
            media.reference.title.clone(),
            option,
            self.progress.clone(),
        ))
    }
}
