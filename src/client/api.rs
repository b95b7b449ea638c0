//! # Bible Data Access
//!
//! Issues HTTP requests against the upstream Bible provider and hands the
//! body back to the caller. Failures are logged and re-raised; retry and
//! backoff are deliberately absent.

use crate::config::Config;
use crate::models::{BibleResponse, FetchBibleParams, Language};
use anyhow::{Context, Result};
use tokio::sync::mpsc;

/// Default translation version for the raw-text fetch
pub const DEFAULT_VERSION: &str = "NVI";

/// Message type for async fetch handling
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// The upstream body, verbatim
    Success(String),
    /// The failure's message string
    Error(String),
}

/// Service for fetching Bible content from the upstream provider
///
/// Wraps a shared `reqwest` client configured with the bounded timeout from
/// [`Config`]; no other outbound policy (retry, backoff) is applied.
#[derive(Debug, Clone)]
pub struct BibleService {
    client: reqwest::Client,
    config: Config,
}

impl BibleService {
    /// Create a new BibleService from configuration
    pub fn new(config: Config) -> Result<Self> {
        tracing::debug!(
            "Creating BibleService (base={}, timeout={}s)",
            config.base_url,
            config.timeout.as_secs()
        );
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self { client, config })
    }

    /// Fetch the Portuguese Bible text for a translation version
    ///
    /// GETs `{base}/content/{version}.txt` with the configured API key and
    /// `language=pt`, returning the raw body. Errors are logged and
    /// propagated to the caller.
    pub async fn fetch_bible_text(&self, version: &str) -> Result<String> {
        let url = format!("{}/content/{}.txt", self.config.base_url, version);
        let query = [
            ("key", self.config.api_key.as_str()),
            ("language", Language::Pt.code()),
        ];

        self.get_text(&url, &query).await.map_err(|e| {
            tracing::error!("Error fetching Bible text: {e}");
            e
        })
    }

    /// Fetch a single passage as raw text/JSON from the provider's passage
    /// endpoint
    pub async fn fetch_passage(&self, passage: &str, version: &str) -> Result<String> {
        let url = format!("{}/content/BIBLIA", self.config.base_url);
        let query = [
            ("passage", passage),
            ("version", version),
            ("key", self.config.api_key.as_str()),
        ];

        self.get_text(&url, &query).await.map_err(|e| {
            tracing::error!("Error fetching passage '{passage}': {e}");
            e
        })
    }

    /// Fetch a passage and decode it into the typed response shape
    ///
    /// Unlike the raw paths, this validates the upstream payload and fails
    /// on anything that does not match [`BibleResponse`].
    pub async fn fetch_bible_response(&self, params: &FetchBibleParams) -> Result<BibleResponse> {
        let body = self.fetch_passage(&params.passage(), &params.version).await?;
        serde_json::from_str(&body).context("malformed Bible response from upstream")
    }

    /// Fetch Bible text asynchronously
    ///
    /// Spawns a tokio task for the request and delivers the outcome over the
    /// returned channel. A receiver dropped before the request settles makes
    /// the late send a no-op, so no state outlives its view.
    pub fn fetch_async(&self, version: &str) -> mpsc::Receiver<FetchOutcome> {
        let (outcome_sender, outcome_receiver) = mpsc::channel(1);
        let service = self.clone();
        let version = version.to_string();

        tokio::spawn(async move {
            let outcome = match service.fetch_bible_text(&version).await {
                Ok(text) => FetchOutcome::Success(text),
                Err(e) => FetchOutcome::Error(e.to_string()),
            };

            // Ignore send errors (receiver might have been dropped)
            let _ = outcome_sender.send(outcome).await;
        });

        outcome_receiver
    }

    /// Issue a GET and return the body, treating non-2xx statuses as errors
    async fn get_text(&self, url: &str, query: &[(&str, &str)]) -> Result<String> {
        let response = self.client.get(url).query(query).send().await?;
        let response = response.error_for_status()?;
        Ok(response.text().await?)
    }
}
