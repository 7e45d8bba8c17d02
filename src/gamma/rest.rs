use std::time::Duration;

use anyhow::{Context, Result};
use url::Url;

use crate::config::GammaConfig;
use crate::error::AppError;

use super::types::GammaEvent;

/// Read-only client for the Polymarket Gamma events endpoint.
///
/// The endpoint is public and unauthenticated; one GET per run, bounded
/// by the configured timeout. Retry policy is deliberately absent.
pub struct GammaClient {
    http: reqwest::Client,
    base_url: String,
    tag_id: u32,
    limit: u32,
}

impl GammaClient {
    pub fn new(cfg: &GammaConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .build()
            .context("building gamma HTTP client")?;
        Ok(Self {
            http,
            base_url: cfg.base_url.trim_end_matches('/').to_string(),
            tag_id: cfg.tag_id,
            limit: cfg.limit,
        })
    }

    fn events_url(&self) -> Result<Url> {
        let mut url = Url::parse(&format!("{}/events", self.base_url))
            .with_context(|| format!("invalid gamma base URL '{}'", self.base_url))?;
        url.query_pairs_mut()
            .append_pair("tag_id", &self.tag_id.to_string())
            .append_pair("active", "true")
            .append_pair("closed", "false")
            .append_pair("limit", &self.limit.to_string());
        Ok(url)
    }

    /// Fetch the current active events for the configured tag.
    pub async fn fetch_events(&self) -> Result<Vec<GammaEvent>> {
        let url = self.events_url()?;
        tracing::debug!(url = %url, "fetching gamma events");

        let resp = self
            .http
            .get(url)
            .send()
            .await
            .context("gamma events request failed")?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(AppError::GammaApi { status, body }.into());
        }

        let events: Vec<GammaEvent> = resp
            .json()
            .await
            .context("decoding gamma events payload")?;
        tracing::info!(count = events.len(), "fetched gamma events");
        Ok(events)
    }
}
