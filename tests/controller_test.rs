//! Integration tests for the engine controller
//!
//! Run with: cargo test --test controller_test

mod common;

use common::{failing_controller, instant_controller};
use std::sync::Arc;
use std::time::Duration;

use tubesim::app::Controller;
use tubesim::download::notify::NoticeKind;
use tubesim::media::catalog::MediaFormat;
use tubesim::media::resolver::MockResolver;

const WATCH_URL: &str = "https://www.youtube.com/watch?v=dQw4w9WgXcQ";

// ============================================================================
// Lookup Tests
// ============================================================================

mod lookup_tests {
    use super::common::RecordingNotifier;
    use super::*;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use std::sync::atomic::{AtomicU32, Ordering};
    use tubesim::core::error::AppResult;
    use tubesim::core::validation::MediaRequest;
    use tubesim::media::reference::MediaDetails;
    use tubesim::media::resolver::MediaResolver;

    #[tokio::test]
    async fn test_fetch_stores_details_and_seeds_selection() {
        let (mut controller, notifier) = instant_controller();

        let title = controller
            .fetch_details(WATCH_URL)
            .await
            .expect("lookup should succeed")
            .reference
            .title
            .clone();
        assert_eq!(title, "Sample YouTube Video");

        let state = controller.state();
        let media = state.media().expect("details should be stored");
        assert_eq!(media.reference.author, "YouTube Creator");
        assert_eq!(media.reference.duration, "10:30");
        assert_eq!(media.reference.thumbnail, "https://i.ytimg.com/vi/dQw4w9WgXcQ/maxresdefault.jpg");
        assert_eq!(media.formats.len(), 6);

        assert!(!state.is_loading());
        assert_eq!(state.error(), None);
        assert_eq!(state.selection().format(), MediaFormat::Mp4);
        assert_eq!(state.selection().quality(), Some("360p"));

        let last = notifier.last().expect("a notice should have been published");
        assert_eq!(last.kind, NoticeKind::Success);
        assert_eq!(last.text, "Video information retrieved successfully");
    }

    #[tokio::test]
    async fn test_empty_input_is_rejected_with_notice_only() {
        let (mut controller, notifier) = instant_controller();

        let result = controller.fetch_details("   ").await;
        assert!(result.is_err());

        let last = notifier.last().expect("rejection should publish a notice");
        assert_eq!(last.kind, NoticeKind::Error);
        assert_eq!(last.text, "Please enter a YouTube URL");

        // Validation failures never touch the stored state.
        assert!(controller.state().media().is_none());
        assert_eq!(controller.state().error(), None);
    }

    #[tokio::test]
    async fn test_unrecognized_url_is_rejected() {
        let (mut controller, notifier) = instant_controller();

        let result = controller.fetch_details("https://vimeo.com/12345").await;
        assert!(result.is_err());
        assert_eq!(notifier.last().map(|n| n.text), Some("Please enter a valid YouTube URL".to_string()));
        assert!(controller.state().media().is_none());
    }

    #[tokio::test]
    async fn test_validation_failure_preserves_previous_lookup() {
        let (mut controller, _notifier) = instant_controller();

        controller.fetch_details(WATCH_URL).await.expect("first lookup succeeds");
        let result = controller.fetch_details("ftp://youtube.com/watch?v=abc").await;
        assert!(result.is_err());

        // The stored details and selection survive a rejected input.
        assert!(controller.state().media().is_some());
        assert_eq!(controller.state().selection().quality(), Some("360p"));
    }

    #[tokio::test]
    async fn test_failed_lookup_sets_inline_error_and_notice() {
        let (mut controller, notifier) = failing_controller();

        let result = controller.fetch_details(WATCH_URL).await;
        assert!(result.is_err());

        let state = controller.state();
        assert!(state.media().is_none());
        assert!(!state.is_loading());
        assert_eq!(state.error(), Some("Failed to fetch video data. Please try again."));

        let texts = notifier.texts();
        assert_eq!(texts, vec!["Failed to fetch video data".to_string()]);
    }

    #[tokio::test]
    async fn test_empty_video_id_still_resolves() {
        let (mut controller, _notifier) = instant_controller();

        controller
            .fetch_details("https://youtube.com/playlist?list=xyz")
            .await
            .expect("playlist URLs pass the shape check with an empty id");

        let media = controller.state().media().expect("details should be stored");
        assert_eq!(media.reference.id, "");
        assert_eq!(media.reference.thumbnail, "https://i.ytimg.com/vi//maxresdefault.jpg");
    }

    /// Fails on the first call, then behaves like the instant mock.
    struct RecoveringResolver {
        attempts: AtomicU32,
        inner: MockResolver,
    }

    impl RecoveringResolver {
        fn new() -> Self {
            Self {
                attempts: AtomicU32::new(0),
                inner: MockResolver::with_delay(Duration::ZERO),
            }
        }
    }

    #[async_trait]
    impl MediaResolver for RecoveringResolver {
        async fn resolve(&self, request: &MediaRequest) -> AppResult<MediaDetails> {
            if self.attempts.fetch_add(1, Ordering::SeqCst) == 0 {
                return Err("backend unavailable".into());
            }
            self.inner.resolve(request).await
        }
    }

    #[tokio::test]
    async fn test_inline_error_clears_on_next_successful_lookup() {
        let notifier = Arc::new(RecordingNotifier::default());
        let mut controller = Controller::new(Arc::new(RecoveringResolver::new()), notifier);

        let result = controller.fetch_details(WATCH_URL).await;
        assert!(result.is_err());
        assert_eq!(controller.state().error(), Some("Failed to fetch video data. Please try again."));

        controller.fetch_details(WATCH_URL).await.expect("second lookup succeeds");
        assert_eq!(controller.state().error(), None);
        assert!(controller.state().media().is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_lookup_takes_the_configured_delay() {
        let notifier = Arc::new(RecordingNotifier::default());
        let mut controller = Controller::new(Arc::new(MockResolver::new()), notifier);

        let start = tokio::time::Instant::now();
        controller.fetch_details("https://youtu.be/abc123").await.expect("lookup succeeds");
        assert_eq!(start.elapsed(), Duration::from_millis(1_500));

        let media = controller.state().media().expect("details should be stored");
        assert_eq!(media.reference.thumbnail, "https://i.ytimg.com/vi/abc123/maxresdefault.jpg");
    }
}

// ============================================================================
// Selection Tests
// ============================================================================

mod selection_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_format_switch_reseeds_quality() {
        let (mut controller, _notifier) = instant_controller();
        controller.fetch_details(WATCH_URL).await.expect("lookup succeeds");

        controller.select_format(MediaFormat::Mp3);
        assert_eq!(controller.state().selection().quality(), Some("128kbps"));

        controller.select_quality("320kbps");
        let option = controller.current_selection().expect("selection is complete");
        assert_eq!(option.size, "25 MB");

        controller.select_format(MediaFormat::Mp4);
        assert_eq!(controller.state().selection().quality(), Some("360p"));
    }

    #[tokio::test]
    async fn test_reselecting_current_format_resets_quality() {
        let (mut controller, _notifier) = instant_controller();
        controller.fetch_details(WATCH_URL).await.expect("lookup succeeds");

        controller.select_quality("1080p");
        assert_eq!(controller.state().selection().quality(), Some("1080p"));

        controller.select_format(MediaFormat::Mp4);
        assert_eq!(controller.state().selection().quality(), Some("360p"));
    }

    #[tokio::test]
    async fn test_quality_from_other_family_is_ignored() {
        let (mut controller, _notifier) = instant_controller();
        controller.fetch_details(WATCH_URL).await.expect("lookup succeeds");

        controller.select_format(MediaFormat::Mp3);
        controller.select_quality("720p");
        assert_eq!(controller.state().selection().quality(), Some("128kbps"));
    }

    #[tokio::test]
    async fn test_unknown_quality_is_ignored() {
        let (mut controller, _notifier) = instant_controller();
        controller.fetch_details(WATCH_URL).await.expect("lookup succeeds");

        controller.select_quality("4K");
        assert_eq!(controller.state().selection().quality(), Some("360p"));
    }

    #[tokio::test]
    async fn test_selection_resets_after_refetch() {
        let (mut controller, _notifier) = instant_controller();
        controller.fetch_details(WATCH_URL).await.expect("first lookup succeeds");

        controller.select_format(MediaFormat::Mp3);
        controller.select_quality("320kbps");
        assert_eq!(controller.state().selection().quality(), Some("320kbps"));

        controller.fetch_details(WATCH_URL).await.expect("second lookup succeeds");
        assert_eq!(controller.state().selection().format(), MediaFormat::Mp4);
        assert_eq!(controller.state().selection().quality(), Some("360p"));
    }
}

// ============================================================================
// Download Flow Tests
// ============================================================================

mod download_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test(start_paused = true)]
    async fn test_download_publishes_full_sequence() {
        let (mut controller, notifier) = instant_controller();
        controller.fetch_details(WATCH_URL).await.expect("lookup succeeds");
        controller.select_quality("720p");

        let handle = controller.start_download().expect("selection is complete");
        handle.wait().await;

        let notices = notifier.snapshot();
        assert_eq!(notices.len(), 13);
        assert_eq!(notices[0].text, "Video information retrieved successfully");
        assert_eq!(notices[1].text, "Starting download: Sample YouTube Video (mp4 - 720p)");
        assert_eq!(notices[1].kind, NoticeKind::Success);

        for (i, expected) in (10..=100).step_by(10).enumerate() {
            assert_eq!(notices[i + 2].text, format!("Downloading: {}%", expected));
            assert_eq!(notices[i + 2].kind, NoticeKind::Loading);
            assert_eq!(notices[i + 2].key, Some("download-progress"));
        }

        let done = &notices[12];
        assert_eq!(done.text, "Download complete! (Demo only - no actual file was downloaded)");
        assert_eq!(done.kind, NoticeKind::Success);
        assert_eq!(done.key, Some("download-progress"));
        assert_eq!(done.dismiss_after, Some(Duration::from_secs(4)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_download_announces_selected_variant() {
        let (mut controller, notifier) = instant_controller();
        controller.fetch_details(WATCH_URL).await.expect("lookup succeeds");
        controller.select_format(MediaFormat::Mp3);
        controller.select_quality("256kbps");

        let handle = controller.start_download().expect("selection is complete");
        handle.wait().await;

        assert_eq!(notifier.snapshot()[1].text, "Starting download: Sample YouTube Video (mp3 - 256kbps)");
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_download_never_completes() {
        let (mut controller, notifier) = instant_controller();
        controller.fetch_details(WATCH_URL).await.expect("lookup succeeds");

        let handle = controller.start_download().expect("selection is complete");
        handle.cancel();
        handle.wait().await;

        let texts = notifier.texts();
        assert!(texts.iter().any(|t| t.starts_with("Starting download:")));
        assert!(!texts.iter().any(|t| t.starts_with("Downloading:")));
        assert!(!texts.iter().any(|t| t.starts_with("Download complete!")));
    }

    #[tokio::test(start_paused = true)]
    async fn test_overlapping_downloads_both_run_to_completion() {
        let (mut controller, notifier) = instant_controller();
        controller.fetch_details(WATCH_URL).await.expect("lookup succeeds");

        let first = controller.start_download().expect("selection is complete");
        let second = controller.start_download().expect("selection is complete");
        assert_ne!(first.run_id(), second.run_id());

        first.wait().await;
        second.wait().await;

        let texts = notifier.texts();
        let started = texts.iter().filter(|t| t.starts_with("Starting download:")).count();
        let progress = texts.iter().filter(|t| t.starts_with("Downloading:")).count();
        let completed = texts.iter().filter(|t| t.starts_with("Download complete!")).count();
        assert_eq!(started, 2);
        assert_eq!(progress, 20);
        assert_eq!(completed, 2);
    }

    #[tokio::test]
    async fn test_download_without_media_is_refused() {
        let (controller, notifier) = instant_controller();
        assert!(controller.start_download().is_none());
        assert!(notifier.snapshot().is_empty());
    }
}
