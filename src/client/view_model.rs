//! # Bible View Model
//!
//! Holds the loading/text/error state for a single Bible view. The state
//! machine is one transition per view lifetime: loading starts true, the
//! fetch settles into exactly one of text or error, and loading ends false.

use crate::client::api::{BibleService, FetchOutcome};
use tokio::sync::mpsc;

/// Fixed user-facing message for any fetch failure; the underlying detail is
/// logged, not surfaced
pub const FETCH_ERROR_MESSAGE: &str = "Failed to fetch Bible text";

/// View model for the Bible viewer
#[derive(Debug)]
pub struct BibleViewModel {
    text: Option<String>,
    error: Option<String>,
    loading: bool,
    /// Pending channel from a `mount` fetch, if one is in flight
    pending: Option<mpsc::Receiver<FetchOutcome>>,
}

impl BibleViewModel {
    /// Create a view model in its initial (loading) state
    pub fn new() -> Self {
        Self {
            text: None,
            error: None,
            loading: true,
            pending: None,
        }
    }

    /// The fetched Bible text, once available
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// The user-facing error message, if the fetch failed
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether the fetch is still outstanding
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Run the fetch to completion and apply the outcome
    pub async fn load(&mut self, service: &BibleService, version: &str) {
        self.loading = true;
        match service.fetch_bible_text(version).await {
            Ok(text) => {
                self.text = Some(text);
                self.error = None;
            }
            Err(e) => {
                tracing::error!("Bible fetch failed: {e}");
                self.error = Some(FETCH_ERROR_MESSAGE.to_string());
            }
        }
        self.loading = false;
    }

    /// Start a non-blocking fetch, to be settled by [`poll`](Self::poll)
    ///
    /// Dropping the view model drops the pending receiver, so a response
    /// arriving after disposal is discarded rather than applied.
    pub fn mount(&mut self, service: &BibleService, version: &str) {
        self.loading = true;
        self.pending = Some(service.fetch_async(version));
    }

    /// Apply a settled fetch outcome, if one is ready
    ///
    /// Returns true when state changed. Non-blocking; callers poll from
    /// their render loop.
    pub fn poll(&mut self) -> bool {
        let Some(receiver) = self.pending.as_mut() else {
            return false;
        };

        match receiver.try_recv() {
            Ok(FetchOutcome::Success(text)) => {
                self.text = Some(text);
                self.error = None;
                self.loading = false;
                self.pending = None;
                true
            }
            Ok(FetchOutcome::Error(message)) => {
                tracing::error!("Bible fetch failed: {message}");
                self.error = Some(FETCH_ERROR_MESSAGE.to_string());
                self.loading = false;
                self.pending = None;
                true
            }
            Err(_) => false,
        }
    }
}

impl Default for BibleViewModel {
    fn default() -> Self {
        Self::new()
    }
}
