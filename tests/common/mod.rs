//! Common test utilities
//!
//! This module is shared across all integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tubesim::app::Controller;
use tubesim::core::error::AppResult;
use tubesim::core::validation::MediaRequest;
use tubesim::download::notify::{Notice, Notifier};
use tubesim::media::reference::MediaDetails;
use tubesim::media::resolver::{MediaResolver, MockResolver};

/// Notifier that keeps every notice in publication order
#[derive(Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    /// All notices published so far, oldest first
    pub fn snapshot(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }

    /// Just the notice texts, for compact assertions
    pub fn texts(&self) -> Vec<String> {
        self.snapshot().into_iter().map(|n| n.text).collect()
    }

    pub fn last(&self) -> Option<Notice> {
        self.notices.lock().unwrap().last().cloned()
    }
}

impl Notifier for RecordingNotifier {
    fn publish(&self, notice: Notice) {
        self.notices.lock().unwrap().push(notice);
    }
}

/// Resolver that always fails, for exercising the lookup error path
pub struct FailingResolver;

#[async_trait]
impl MediaResolver for FailingResolver {
    async fn resolve(&self, _request: &MediaRequest) -> AppResult<MediaDetails> {
        Err("backend unavailable".into())
    }
}

/// Controller backed by an instant mock resolver, with its notifier
pub fn instant_controller() -> (Controller, Arc<RecordingNotifier>) {
    let notifier = Arc::new(RecordingNotifier::default());
    let controller = Controller::new(Arc::new(MockResolver::with_delay(Duration::ZERO)), notifier.clone());
    (controller, notifier)
}

/// Controller whose lookups always fail, with its notifier
pub fn failing_controller() -> (Controller, Arc<RecordingNotifier>) {
    let notifier = Arc::new(RecordingNotifier::default());
    let controller = Controller::new(Arc::new(FailingResolver), notifier.clone());
    (controller, notifier)
}
